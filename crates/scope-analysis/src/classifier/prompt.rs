//! Prompt text sent to the classifier model.

use scope_core::models::ClassificationRequest;

/// System instruction naming the six keys the model must return.
pub const SYSTEM_PROMPT: &str = "You are an AI project management assistant analyzing for scope creep. \
Your task is to analyze the EMAIL content against the PROJECT SCOPE SECTIONS. \
Provide a JSON response with the following keys:\n\
1. `scope_creep`: (yes/no) - Whether scope creep is detected.\n\
2. `justification`: (string) - Specific differences between email and scope.\n\
3. `suggestion`: (string) - Suggested response strategy for the project manager.\n\
4. `risk_level`: (Low/Moderate/High/Extreme) - Assessment of the risk.\n\
5. `reference_scope_line`: (string) - Exact lines or sections from the scope that are relevant.\n\
6. `impact_analysis`: (string) - Estimated cost/timeline impacts if the new request is accepted.";

/// User message: retrieved scope sections followed by the email.
pub fn user_message(request: &ClassificationRequest) -> String {
    format!(
        "PROJECT SCOPE SECTIONS:\n\
         ----------------------\n\
         {}\n\n\
         EMAIL CONTENT:\n\
         -------------\n\
         {}",
        request.context, request.email
    )
}
