//! Reference parser with validation
//!
//! Parses YAML and validates schema version, names and values

#![allow(clippy::result_large_err)]

use crate::errors::{reference_validation, Result};
use crate::reference::format_v0::ReferenceV0;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a reference file from a path
pub fn parse_reference_file(path: &Path) -> Result<ReferenceV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| reference_validation(&format!("Failed to read reference file: {}", e)))?;

    parse_reference_str(&content)
}

/// Parse reference data from a string
pub fn parse_reference_str(content: &str) -> Result<ReferenceV0> {
    let reference: ReferenceV0 = serde_yaml::from_str(content)
        .map_err(|e| reference_validation(&format!("YAML parse error: {}", e)))?;

    validate_reference(&reference)?;

    Ok(reference)
}

fn validate_reference(reference: &ReferenceV0) -> Result<()> {
    if reference.schema_version != 0 {
        return Err(reference_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            reference.schema_version
        )));
    }

    let mut realms = HashSet::new();
    for realm in &reference.realms {
        if realm.trim().is_empty() {
            return Err(reference_validation("Realm name cannot be empty"));
        }
        if !realms.insert(realm.as_str()) {
            return Err(reference_validation(&format!("Duplicate realm {}", realm)));
        }
    }

    let mut treasures = HashSet::new();
    for treasure in &reference.treasures {
        if treasure.name.trim().is_empty() {
            return Err(reference_validation("Treasure name cannot be empty"));
        }
        if treasure.value < 0 {
            return Err(reference_validation(&format!(
                "Treasure {} has negative value {}",
                treasure.name, treasure.value
            )));
        }
        if !treasures.insert(treasure.name.as_str()) {
            return Err(reference_validation(&format!(
                "Duplicate treasure {}",
                treasure.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use questgen_core::QgErrorKind;

    #[test]
    fn test_parse_minimal() {
        let reference = parse_reference_str("schema_version: 0\n").unwrap();
        assert!(reference.realms.is_empty());
        assert!(reference.treasures.is_empty());
    }

    #[test]
    fn test_rejects_unknown_version() {
        let err = parse_reference_str("schema_version: 3\n").unwrap_err();
        assert_eq!(err.kind(), QgErrorKind::InvalidReferenceData);
        assert!(err.message().contains("schema_version"));
    }

    #[test]
    fn test_rejects_negative_value() {
        let yaml = r#"
schema_version: 0
treasures:
  - name: Curse
    value: -1
"#;
        assert!(parse_reference_str(yaml).is_err());
    }

    #[test]
    fn test_rejects_duplicate_realm() {
        let yaml = r#"
schema_version: 0
realms: [Arendale, Arendale]
"#;
        let err = parse_reference_str(yaml).unwrap_err();
        assert!(err.message().contains("Duplicate realm"));
    }
}
