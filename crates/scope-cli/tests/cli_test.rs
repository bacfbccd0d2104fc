//! End-to-end runs of the scopeguard binary in dry-run mode (no network).

use std::process::Command;

fn scopeguard() -> Command {
    Command::new(env!("CARGO_BIN_EXE_scopeguard"))
}

#[test]
fn dry_run_prints_retrieved_sections() {
    let dir = tempfile::tempdir().unwrap();
    let scope = dir.path().join("scope.txt");
    let emails = dir.path().join("emails.json");
    std::fs::write(
        &scope,
        "The vendor will deliver a marketing website by June. \
         Hosting is included for one year on shared servers.",
    )
    .unwrap();
    std::fs::write(
        &emails,
        r#"[{"email_body": "Please extend hosting on the shared servers."},
            {"email_body": "Can we also get a mobile app?"}]"#,
    )
    .unwrap();

    let output = scopeguard()
        .args(["--scope", scope.to_str().unwrap()])
        .args(["--emails", emails.to_str().unwrap()])
        .args(["--dry-run", "--top-k", "1"])
        .env("SCOPEGUARD_LOG", "warn")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["provider"], "hashing");
    assert_eq!(report["rows"].as_array().unwrap().len(), 2);
    let top = &report["rows"][0]["relevant_sections"];
    assert_eq!(top.as_array().unwrap().len(), 1);
    assert!(top[0]["text"].as_str().unwrap().contains("Hosting"));
}

#[test]
fn dry_run_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let scope = dir.path().join("scope.txt");
    let emails = dir.path().join("emails.jsonl");
    let out = dir.path().join("out.json");
    std::fs::write(&scope, "Only a website is in scope.").unwrap();
    std::fs::write(&emails, "{\"email_body\": \"website?\"}\n").unwrap();

    let status = scopeguard()
        .args(["--scope", scope.to_str().unwrap()])
        .args(["--emails", emails.to_str().unwrap()])
        .args(["--dry-run", "--output", out.to_str().unwrap()])
        .env("SCOPEGUARD_LOG", "warn")
        .status()
        .unwrap();
    assert!(status.success());

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["chunks"], 1);
}

#[test]
fn missing_email_field_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let scope = dir.path().join("scope.txt");
    let emails = dir.path().join("emails.json");
    std::fs::write(&scope, "Website.").unwrap();
    std::fs::write(&emails, r#"[{"subject": "hi"}]"#).unwrap();

    let output = scopeguard()
        .args(["--scope", scope.to_str().unwrap()])
        .args(["--emails", emails.to_str().unwrap()])
        .arg("--dry-run")
        .env("SCOPEGUARD_LOG", "warn")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("email_body"), "stderr: {stderr}");
}

/// Spreadsheet exports: Latin-1 CSV in, CSV out.
#[test]
fn dry_run_reads_latin1_csv_and_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let scope = dir.path().join("scope.txt");
    let emails = dir.path().join("emails.csv");
    let out = dir.path().join("preview.csv");
    std::fs::write(
        &scope,
        "The vendor will deliver a marketing website by June. \
         Hosting is included for one year on shared servers.",
    )
    .unwrap();
    std::fs::write(
        &emails,
        b"sender,email_body\nclient,\"Extend hosting, please. Merci, Ren\xe9\"\npm,\"Website status?\"\n",
    )
    .unwrap();

    let output = scopeguard()
        .args(["--scope", scope.to_str().unwrap()])
        .args(["--emails", emails.to_str().unwrap()])
        .args(["--dry-run", "--format", "csv", "-o", out.to_str().unwrap()])
        .env("SCOPEGUARD_LOG", "warn")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = std::fs::read_to_string(&out).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("email_body,top_score,relevant_scope"));
    assert!(written.contains("\"Extend hosting, please. Merci, René\""), "{written}");
    assert!(written.contains("Website status?"));
}
