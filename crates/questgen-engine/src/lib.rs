//! Questgen Engine - run orchestration
//!
//! Sequences validation, seed fixing, quest writing and loot generation
//! inside one store transaction, and owns the commit/rollback decision.

pub mod commands;
