//! Script layout formatting
//!
//! Rebuilds a script into a fresh document with a uniform base font:
//! every line becomes its own paragraph, episode and character-list lines
//! become Heading 3, `【】` scene lines are bold and dialogue is marked the
//! same way as `mark` does.

use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use docx_rs::{LineSpacing, LineSpacingType, RunFonts, Style, StyleType};

use super::io::{formatted_output_path, load_docx, save_docx};
use super::models::*;
use super::parsing::dialogue::{classify_text, ASCII_COLON, FULL_WIDTH_COLON};
use super::parsing::formatting::{build_run, extract_paragraph_text};
use super::parsing::parenthetical::segment_utterance;
use super::rewrite::plan_runs;
use crate::config::Settings;

pub const HEADING3_STYLE_ID: &str = "Heading3";

/// Base font size in half-points (小四, 12pt)
const BASE_FONT_SIZE: usize = 24;
/// Heading font size in half-points (三号, 16pt)
const HEADING_FONT_SIZE: usize = 32;

// Episode titles, character lists and numbered scene lines
static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(第.*集|人物.*|[0-9].*)$").unwrap());

/// How a single script line is laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Heading(String),
    Bold(String),
    Plain(String),
    Dialogue { label: String, spans: Vec<Span> },
}

/// Decide the layout of one non-empty line
pub fn classify_line(line: &str, markers: &[&str]) -> LineKind {
    let text = line.replace('@', "△");

    if HEADING_PATTERN.is_match(&text) {
        return LineKind::Heading(text);
    }

    if text.starts_with('【') {
        return LineKind::Bold(text);
    }

    let text = text.replace(ASCII_COLON, &FULL_WIDTH_COLON.to_string());
    match classify_text(&text, markers) {
        Classification::Dialogue { label, utterance } => LineKind::Dialogue {
            label,
            spans: segment_utterance(&utterance),
        },
        Classification::Skipped(_) => LineKind::Plain(text),
    }
}

pub(crate) fn build_paragraph(kind: &LineKind) -> docx_rs::Paragraph {
    let para = docx_rs::Paragraph::new();
    match kind {
        LineKind::Heading(text) => para
            .add_run(docx_rs::Run::new().add_text(text.as_str()))
            .style(HEADING3_STYLE_ID),
        LineKind::Bold(text) => para.add_run(docx_rs::Run::new().add_text(text.as_str()).bold()),
        LineKind::Plain(text) => para.add_run(docx_rs::Run::new().add_text(text.as_str())),
        LineKind::Dialogue { label, spans } => plan_runs(label, spans, None)
            .iter()
            .fold(para, |para, run| para.add_run(build_run(run))),
    }
}

fn base_fonts() -> RunFonts {
    RunFonts::new().east_asia("宋体").ascii("Times New Roman")
}

fn heading3_style() -> Style {
    Style::new(HEADING3_STYLE_ID, StyleType::Paragraph)
        .name("heading 3")
        .size(HEADING_FONT_SIZE)
        .bold()
        .line_spacing(
            LineSpacing::new()
                .before(260)
                .after(260)
                .line(413)
                .line_rule(LineSpacingType::Auto),
        )
        .fonts(base_fonts())
}

/// Lay out the body paragraphs of `source` into a new document.
///
/// Line breaks inside a paragraph start a new paragraph, since pasted text
/// often arrives with soft breaks where paragraph breaks were meant.
pub fn format_docx(source: &docx_rs::Docx, settings: &Settings) -> docx_rs::Docx {
    let markers = settings.markers();
    let mut docx = docx_rs::Docx::new()
        .default_fonts(base_fonts())
        .default_size(BASE_FONT_SIZE)
        .add_style(heading3_style());

    for child in &source.document.children {
        let docx_rs::DocumentChild::Paragraph(para) = child else {
            continue;
        };

        let raw = extract_paragraph_text(para);
        for line in raw.split('\n').filter(|line| !line.is_empty()) {
            let kind = classify_line(line, &markers);
            debug!("{kind:?}");
            docx = docx.add_paragraph(build_paragraph(&kind));
        }
    }

    docx
}

/// Format `input` into `<dir>/<formatted_dir_name>/<name>`
pub fn format_file(input: &Path, settings: &Settings) -> Result<PathBuf> {
    info!("Formatting {}", input.display());

    let output_path = formatted_output_path(input, &settings.formatted_dir_name)?;
    let source = load_docx(input)?;

    if let Some(out_dir) = output_path.parent() {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    }
    let formatted = format_docx(&source, settings);
    save_docx(formatted, &output_path)?;

    info!("Formatted file saved to {}", output_path.display());
    Ok(output_path)
}
