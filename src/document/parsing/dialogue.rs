//! Dialogue detection
//!
//! Decides whether a paragraph is a line of dialogue (`speaker：utterance`)
//! and splits it into speaker label and utterance.

use super::super::models::*;
use super::formatting::{extract_paragraph_text, paragraph_runs};

pub const FULL_WIDTH_COLON: char = '：';
pub const ASCII_COLON: char = ':';

/// Classify a paragraph's text.
///
/// The full-width colon takes precedence: a line containing both splits on
/// the first `：` even when an ASCII `:` appears earlier.
pub fn classify_text(text: &str, markers: &[&str]) -> Classification {
    if let Some(marker) = markers.iter().find(|marker| text.starts_with(**marker)) {
        return Classification::Skipped(SkipReason::Marker(marker.to_string()));
    }

    match split_on_colon(text) {
        Some((label, utterance)) => Classification::Dialogue {
            label: label.to_string(),
            utterance: utterance.to_string(),
        },
        None => Classification::Skipped(SkipReason::NoColon),
    }
}

/// Classify a docx paragraph; paragraphs without runs are skipped
pub fn classify_paragraph(para: &docx_rs::Paragraph, markers: &[&str]) -> Classification {
    if paragraph_runs(para).is_empty() {
        return Classification::Skipped(SkipReason::NoRuns);
    }
    classify_text(&extract_paragraph_text(para), markers)
}

/// Split after the first dialogue colon; the label keeps the colon
fn split_on_colon(text: &str) -> Option<(&str, &str)> {
    let (pos, colon) = text
        .find(FULL_WIDTH_COLON)
        .map(|pos| (pos, FULL_WIDTH_COLON))
        .or_else(|| text.find(ASCII_COLON).map(|pos| (pos, ASCII_COLON)))?;
    Some(text.split_at(pos + colon.len_utf8()))
}
