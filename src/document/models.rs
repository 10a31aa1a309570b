//! Core data structures for script processing
//!
//! This module defines the value types used while classifying and
//! restyling dialogue paragraphs, independent of the docx object model.

use serde::{Deserialize, Serialize};

/// Color applied to spoken text
pub const SPEECH_COLOR: &str = "FF0000";

/// Font size in half-points, as stored in `w:sz`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSize(pub usize);

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TextFormatting {
    pub bold: bool,
    pub color: Option<String>,
    pub font_size: Option<FontSize>,
}

impl TextFormatting {
    /// Unstyled text that keeps the paragraph's font size
    pub fn plain(font_size: Option<FontSize>) -> Self {
        TextFormatting {
            bold: false,
            color: None,
            font_size,
        }
    }

    /// Bold red emphasis for spoken text
    pub fn speech(font_size: Option<FontSize>) -> Self {
        TextFormatting {
            bold: true,
            color: Some(SPEECH_COLOR.to_string()),
            font_size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedRun {
    pub text: String,
    pub formatting: TextFormatting,
}

/// A piece of an utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    /// Spoken text outside parentheses
    Speech(String),
    /// A full-width parenthesized direction, brackets included
    Parenthetical(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Speech(text) | Span::Parenthetical(text) => text,
        }
    }

    pub fn is_speech(&self) -> bool {
        matches!(self, Span::Speech(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "prefix", rename_all = "snake_case")]
pub enum SkipReason {
    NoRuns,
    /// Starts with the contained marker prefix
    Marker(String),
    NoColon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    Skipped(SkipReason),
    Dialogue {
        /// Speaker label including the trailing colon
        label: String,
        utterance: String,
    },
}

impl Classification {
    pub fn is_dialogue(&self) -> bool {
        matches!(self, Classification::Dialogue { .. })
    }
}

/// Classification of a single body paragraph, as reported by `inspect`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphReport {
    pub index: usize,
    pub text: String,
    pub classification: Classification,
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkReport {
    pub paragraphs: usize,
    pub dialogue: usize,
    pub skipped_no_runs: usize,
    pub skipped_marker: usize,
    pub skipped_no_colon: usize,
}

impl MarkReport {
    pub(crate) fn record(&mut self, classification: &Classification) {
        self.paragraphs += 1;
        match classification {
            Classification::Dialogue { .. } => self.dialogue += 1,
            Classification::Skipped(SkipReason::NoRuns) => self.skipped_no_runs += 1,
            Classification::Skipped(SkipReason::Marker(_)) => self.skipped_marker += 1,
            Classification::Skipped(SkipReason::NoColon) => self.skipped_no_colon += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.skipped_no_runs + self.skipped_marker + self.skipped_no_colon
    }
}
