//! Core layer for Pollwatch.
//!
//! Holds the typed polling data model, the descriptive-statistics queries,
//! percentage formatting, CLI settings, and the shared error type. This crate
//! performs no file I/O; ingestion lives in `poll-data`.

pub mod error;
pub mod formatting;
pub mod metrics;
pub mod models;
pub mod settings;
