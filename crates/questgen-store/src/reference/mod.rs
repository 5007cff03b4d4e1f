//! Reference data import
//!
//! Provides:
//! - Reference Format v0 schema (realms and treasure kinds)
//! - YAML parser with validation
//! - Transactional importer

pub mod format_v0;
pub mod importer;
pub mod parser;

pub use format_v0::{ReferenceTreasure, ReferenceV0};
pub use importer::{import_reference, import_reference_file, ImportSummary};
pub use parser::{parse_reference_file, parse_reference_str};
