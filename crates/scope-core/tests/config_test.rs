use scope_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ScopeConfig::from_toml("").unwrap();

    // Chunking defaults
    assert_eq!(config.chunking.chunk_size, 500);
    assert_eq!(config.chunking.overlap, 55);

    // Embedding defaults
    assert_eq!(config.embedding.provider, "openai");
    assert_eq!(config.embedding.model, "text-embedding-3-small");
    assert_eq!(config.embedding.dimensions, 1536);
    assert_eq!(config.embedding.cache_capacity, 10_000);
    assert_eq!(config.embedding.api_key_env, "OPENAI_API_KEY");

    // Retrieval defaults
    assert_eq!(config.retrieval.top_k, 3);

    // Classifier defaults
    assert_eq!(config.classifier.model, "gpt-4o");
    assert!((config.classifier.temperature - 0.2).abs() < f32::EPSILON);

    // Alert defaults
    assert!(!config.alerts.enabled);
    assert!(config.alerts.recipients.is_empty());
    assert_eq!(config.alerts.alert_levels, vec!["high".to_string()]);
    assert_eq!(config.alerts.excerpt_chars, 200);
    assert_eq!(config.alerts.max_message_chars, 1600);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[chunking]
chunk_size = 800

[embedding]
provider = "hashing"
dimensions = 256
cache_capacity = 0

[alerts]
enabled = true
recipients = ["+1 (555) 010-9999"]
"#;
    let config = ScopeConfig::from_toml(toml).unwrap();
    assert_eq!(config.chunking.chunk_size, 800);
    // Non-overridden fields keep defaults
    assert_eq!(config.chunking.overlap, 55);
    assert_eq!(config.embedding.provider, "hashing");
    assert_eq!(config.embedding.dimensions, 256);
    assert_eq!(config.embedding.cache_capacity, 0);
    assert_eq!(config.embedding.model, "text-embedding-3-small");
    assert!(config.alerts.enabled);
    assert_eq!(config.alerts.recipients.len(), 1);
    assert_eq!(config.retrieval.top_k, 3);
}

#[test]
fn config_serde_roundtrip() {
    let config = ScopeConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = ScopeConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.chunking, config.chunking);
    assert_eq!(roundtripped.embedding.endpoint, config.embedding.endpoint);
    assert_eq!(roundtripped.alerts.alert_levels, config.alerts.alert_levels);
}

#[test]
fn overlap_not_smaller_than_chunk_size_is_rejected() {
    let err = ScopeConfig::from_toml("[chunking]\nchunk_size = 50\noverlap = 50\n").unwrap_err();
    assert!(err.to_string().contains("overlap"), "{err}");
}

#[test]
fn zero_top_k_is_rejected() {
    let err = ScopeConfig::from_toml("[retrieval]\ntop_k = 0\n").unwrap_err();
    assert!(err.to_string().contains("top_k"), "{err}");
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = ScopeConfig::from_toml("[chunking\nchunk_size = ").unwrap_err();
    assert!(matches!(err, scope_core::ScopeError::Config { .. }));
}

#[test]
fn load_reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scopeguard.toml");
    std::fs::write(&path, "[retrieval]\ntop_k = 5\n").unwrap();

    let config = ScopeConfig::load(&path).unwrap();
    assert_eq!(config.retrieval.top_k, 5);
}

#[test]
fn load_missing_file_names_the_path() {
    let err = ScopeConfig::load("/definitely/not/here.toml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}
