//! Core types and shared functionality for folio.
//!
//! This crate provides:
//! - The article data model (page snapshots in, extraction results out)
//! - Unified error types
//! - Configuration structures

pub mod article;
pub mod config;
pub mod error;

pub use article::{ExtractionResult, PageElement, PageSnapshot, Reference, Section};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
