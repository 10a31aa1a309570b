//! Read-only classification reports
//!
//! This module lets a script be checked before it is marked: every body
//! paragraph is classified and, for dialogue, segmented.

use anyhow::Result;
use std::fmt::Write;

use super::models::*;
use super::parsing::dialogue::classify_paragraph;
use super::parsing::formatting::extract_paragraph_text;
use super::parsing::parenthetical::segment_utterance;

pub fn inspect_docx(docx: &docx_rs::Docx, markers: &[&str]) -> Vec<ParagraphReport> {
    let mut reports = Vec::new();

    for child in &docx.document.children {
        let docx_rs::DocumentChild::Paragraph(para) = child else {
            continue;
        };

        let classification = classify_paragraph(para, markers);
        let spans = match &classification {
            Classification::Dialogue { utterance, .. } => segment_utterance(utterance),
            Classification::Skipped(_) => Vec::new(),
        };

        reports.push(ParagraphReport {
            index: reports.len(),
            text: extract_paragraph_text(para),
            classification,
            spans,
        });
    }

    reports
}

/// Render reports as one line per paragraph, with spans indented below dialogue
pub fn render_text(reports: &[ParagraphReport]) -> Result<String> {
    let mut output = String::new();

    for report in reports {
        match &report.classification {
            Classification::Dialogue { label, .. } => {
                writeln!(output, "{:>4}  dialogue   {}", report.index, label)?;
                for span in &report.spans {
                    let kind = if span.is_speech() { "speech" } else { "paren" };
                    writeln!(output, "      {kind:<8} {}", span.text())?;
                }
            }
            Classification::Skipped(reason) => {
                let reason = match reason {
                    SkipReason::NoRuns => "empty".to_string(),
                    SkipReason::Marker(prefix) => format!("marker {prefix}"),
                    SkipReason::NoColon => "no colon".to_string(),
                };
                writeln!(
                    output,
                    "{:>4}  skipped    ({reason}) {}",
                    report.index, report.text
                )?;
            }
        }
    }

    Ok(output)
}

pub fn render_json(reports: &[ParagraphReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
