// Simulacrum - Deterministic PII Pseudonymization
// Copyright (c) 2025 Simulacrum Contributors
// Licensed under the MIT License

//! # Simulacrum - Deterministic PII Pseudonymization
//!
//! Simulacrum replaces personally identifiable values in records with
//! realistic-looking substitutes. Every substitute is a pure function of the
//! subject identifier, the field kind and the real value, so the same input
//! always masks to the same output and masked datasets stay joinable.
//!
//! ## Overview
//!
//! This library provides:
//! - **Generators** for names, contacts, addresses, identity documents,
//!   dates, bank details and plain numbers
//! - **Typed masking** of a fixed [`masking::PersonalData`] record schema
//! - **Generic masking** of arbitrary JSON by recognized key names
//! - **Batch masking** of many documents on a bounded worker pool
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`masking`] - Fingerprinting, generators, typed and generic maskers
//! - [`core`] - Batch orchestration
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use simulacrum::masking::{MaskingConfig, MaskingEngine};
//!
//! let engine = MaskingEngine::new(MaskingConfig::default()).unwrap();
//! let document = json!({"id": "user123", "name": "John Doe", "note": "kept"});
//!
//! let first = engine.mask_json(&document);
//! let second = engine.mask_json(&document);
//!
//! assert_eq!(first.masked, second.masked);
//! assert_eq!(first.masked["id"], "user123");
//! assert_eq!(first.masked["note"], "kept");
//! assert_ne!(first.masked["name"], "John Doe");
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`], an alias over
//! [`domain::SimulacrumError`]:
//!
//! ```rust
//! use simulacrum::domain::SimulacrumError;
//! use simulacrum::masking::{obscure_data, PersonalData};
//!
//! let record = PersonalData::default();
//! let err = obscure_data(&record).unwrap_err();
//! assert!(matches!(err, SimulacrumError::MissingSubjectId(_)));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod masking;
