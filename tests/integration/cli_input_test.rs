use std::io::Write;

use dossier::utils::parse_tokens;
use dossier::{DossierConfig, ReductionLevel};

#[test]
fn test_token_file_parsing() {
    let text = "# cluster users\njdh4\n\nhalverson\n  rcar  \njdh4\n";
    assert_eq!(parse_tokens(text), vec!["jdh4", "halverson", "rcar"]);
}

#[test]
fn test_config_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"directory": {{"email_domain": "example.org", "timeout_secs": 3}}, "reduction_level": 2, "accounts": {{"lookup_sponsor": false}}}}"#
    )
    .unwrap();

    let config = DossierConfig::from_file(file.path()).unwrap();
    assert_eq!(config.directory.email_domain, "example.org");
    assert_eq!(config.directory.program, "ldapsearch");
    assert_eq!(config.directory.timeout_secs, 3);
    assert!(!config.accounts.lookup_sponsor);
    assert!(config.accounts.lookup_office);
    assert_eq!(config.level().unwrap(), ReductionLevel::Grouped);
}

#[test]
fn test_config_file_rejects_bad_level() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"reduction_level": 7}}"#).unwrap();
    assert!(DossierConfig::from_file(file.path()).is_err());
}
