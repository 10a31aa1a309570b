//! Dialogue marking pipeline
//!
//! This module contains `mark_file()`, which loads a script, restyles every
//! dialogue paragraph of the body and saves the result next to the input.

use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

use super::io::{load_docx, output_path_for, save_docx};
use super::models::*;
use super::parsing::dialogue::classify_paragraph;
use super::parsing::formatting::first_run_font_size;
use super::parsing::parenthetical::segment_utterance;
use super::rewrite::{plan_runs, rewrite_paragraph};
use crate::config::Settings;

/// Result of marking one file
#[derive(Debug, Clone)]
pub struct MarkOutcome {
    pub output_path: PathBuf,
    pub report: MarkReport,
}

/// Classify a paragraph and, if it is dialogue, rewrite its runs in place.
///
/// Skipped paragraphs are left untouched.
pub fn mark_paragraph(para: &mut docx_rs::Paragraph, markers: &[&str]) -> Classification {
    let classification = classify_paragraph(para, markers);

    if let Classification::Dialogue { label, utterance } = &classification {
        let font_size = first_run_font_size(para);
        let spans = segment_utterance(utterance);
        rewrite_paragraph(para, &plan_runs(label, &spans, font_size));
    }

    classification
}

/// Mark every body paragraph of a document, top to bottom
pub fn mark_docx(docx: &mut docx_rs::Docx, settings: &Settings) -> MarkReport {
    let markers = settings.markers();
    let mut report = MarkReport::default();

    for (index, child) in docx.document.children.iter_mut().enumerate() {
        // Tables and other block content are left as they are
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let classification = mark_paragraph(para, &markers);
            debug!("paragraph {index}: {classification:?}");
            report.record(&classification);
        }
    }

    report
}

/// Mark dialogue in `input` and save it as `<prefix>_<name>` beside it
pub fn mark_file(input: &Path, settings: &Settings) -> Result<MarkOutcome> {
    info!("Marking dialogue in {}", input.display());

    let output_path = output_path_for(input, &settings.output_prefix)?;
    let mut docx = load_docx(input)?;
    let report = mark_docx(&mut docx, settings);
    save_docx(docx, &output_path)?;

    info!(
        "Marked {} of {} paragraphs, saved to {}",
        report.dialogue,
        report.paragraphs,
        output_path.display()
    );

    Ok(MarkOutcome {
        output_path,
        report,
    })
}
