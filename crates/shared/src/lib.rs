//! Shared types for Ledgerguard.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - ISO 4217 currency codes

pub mod types;
