//! scopeguard: flag project emails that ask for work outside the agreed scope.
//!
//! # Usage
//!
//! ```bash
//! # Full analysis (needs OPENAI_API_KEY; SMS needs the TWILIO_* variables)
//! scopeguard --scope scope.txt --emails emails.json --output results.json
//!
//! # Alert stakeholders on high-risk scope creep
//! scopeguard --scope scope.txt --emails emails.jsonl --alert-to "+15550001111, +15550002222"
//!
//! # Spreadsheet round trip: CSV in, verdict columns out
//! scopeguard --scope scope.txt --emails emails.csv --format csv -o results.csv
//!
//! # Offline preview of what each email retrieves
//! scopeguard --scope scope.txt --emails emails.json --dry-run
//! ```

mod dry_run;
mod input;
mod output;
mod tracing_setup;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use output::OutputFormat;
use scope_analysis::{split_recipients, ScopeAnalyzer};
use scope_core::ScopeConfig;
use tracing::info;

/// Batch scope-creep detection over project emails.
#[derive(Parser, Debug)]
#[command(name = "scopeguard", version, about)]
struct Cli {
    /// Scope document (UTF-8 text)
    #[arg(long)]
    scope: PathBuf,

    /// Emails as CSV with an email_body column, or a JSON array / JSON Lines
    /// of {"email_body": ...} records
    #[arg(long)]
    emails: PathBuf,

    /// TOML configuration file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write results here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Result format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Retrieve only, with local hashing embeddings; no model calls, no SMS
    #[arg(long)]
    dry_run: bool,

    /// Scope sections retrieved per email
    #[arg(long)]
    top_k: Option<usize>,

    /// Comma-separated stakeholder numbers; enables SMS alerts
    #[arg(long)]
    alert_to: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn load_config(&self) -> Result<ScopeConfig> {
        let mut config = match &self.config {
            Some(path) => ScopeConfig::load(path)?,
            None => ScopeConfig::default(),
        };
        if let Some(top_k) = self.top_k {
            config.retrieval.top_k = top_k;
        }
        if let Some(raw) = &self.alert_to {
            config.alerts.recipients = split_recipients(&[raw]);
            config.alerts.enabled = true;
        }
        if self.json_logs {
            config.observability.json_logs = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("invalid configuration")?;
    tracing_setup::init_tracing(&config.observability);

    let scope_text = input::read_scope(&cli.scope)?;
    let emails = input::read_emails(&cli.emails)?;
    info!(emails = emails.len(), dry_run = cli.dry_run, "input loaded");

    if cli.dry_run {
        let report = dry_run::preview(&config, &scope_text, &emails)?;
        return output::write_preview(&report, cli.format, cli.output.as_deref());
    }

    let analyzer = ScopeAnalyzer::from_config(&config)?;
    let report = analyzer.analyze_batch(&scope_text, &emails);
    info!(
        run_id = %report.run_id,
        rows = report.rows.len(),
        errors = report.error_count(),
        alerts = report.alerts_sent(),
        "analysis finished"
    );
    output::write_report(&report, cli.format, cli.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(
            ["scopeguard", "--scope", "s.txt", "--emails", "e.json"]
                .iter()
                .chain(args),
        )
        .unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let config = parse(&["--top-k", "5", "--alert-to", "+15550001111,+15550002222"])
            .load_config()
            .unwrap();
        assert_eq!(config.retrieval.top_k, 5);
        assert!(config.alerts.enabled);
        assert_eq!(config.alerts.recipients, vec!["+15550001111", "+15550002222"]);
    }

    #[test]
    fn format_defaults_to_json_and_accepts_csv() {
        assert_eq!(parse(&[]).format, OutputFormat::Json);
        assert_eq!(parse(&["--format", "csv"]).format, OutputFormat::Csv);
        assert!(Cli::try_parse_from([
            "scopeguard", "--scope", "s.txt", "--emails", "e.json", "--format", "xlsx"
        ])
        .is_err());
    }

    #[test]
    fn zero_top_k_is_rejected() {
        assert!(parse(&["--top-k", "0"]).load_config().is_err());
    }

    #[test]
    fn config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scopeguard.toml");
        std::fs::write(&path, "[chunking]\nchunk_size = 300\noverlap = 30\n").unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let config = parse(&["--config", &path_arg]).load_config().unwrap();
        assert_eq!(config.chunking.chunk_size, 300);
        assert_eq!(config.retrieval.top_k, 3);
    }
}
