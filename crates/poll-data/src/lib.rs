//! Data ingestion layer for Pollwatch.
//!
//! Responsible for reading and parsing the polling CSV, building the
//! column-oriented dataset, and running the top-level analysis pipeline.

pub mod analysis;
pub mod reader;

pub use poll_core as core;
