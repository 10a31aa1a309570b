//! scriptmark: dialogue highlighting for .docx scripts
//!
//! This library finds dialogue lines (`speaker：utterance`) in Word
//! documents and marks the spoken text bold red, leaving full-width
//! parenthesized stage directions unstyled.

pub mod config;
pub mod document;
pub mod error;

/// Report formats for `inspect`
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

// Re-export commonly used types
pub use config::Settings;
pub use document::{Classification, MarkReport, Span};
pub use error::ScriptError;
