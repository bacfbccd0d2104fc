//! Stakeholder SMS alerting.

mod phone;
mod policy;
mod twilio;

pub use phone::{clean_phone_number, is_e164};
pub use policy::{split_recipients, AlertPolicy};
pub use twilio::{TwilioSmsSender, MAX_SMS_CHARS};
