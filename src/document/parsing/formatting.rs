//! Text extraction and run construction
//!
//! This module handles extraction of text and font size from docx-rs
//! paragraph and run elements, and builds styled docx-rs runs back from
//! our `FormattedRun` values.

use super::super::models::*;

/// Collect the text-bearing runs of a paragraph, in document order.
///
/// Runs nested in hyperlinks and tracked insertions count; tracked
/// deletions do not.
pub(crate) fn paragraph_runs(para: &docx_rs::Paragraph) -> Vec<&docx_rs::Run> {
    let mut runs = Vec::new();
    collect_runs(&para.children, &mut runs);
    runs
}

fn collect_runs<'a>(children: &'a [docx_rs::ParagraphChild], runs: &mut Vec<&'a docx_rs::Run>) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                runs.push(run);
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        runs.push(run);
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                collect_runs(&link.children, runs);
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Deleted text is not part of the paragraph
            }
            _ => {}
        }
    }
}

/// Extract the full text of a paragraph from its runs.
///
/// Unlike a display extraction this does not trim, since a rewritten
/// paragraph must reproduce the text exactly.
pub(crate) fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    paragraph_runs(para).into_iter().map(extract_run_text).collect()
}

/// Extract text from a run; tabs become `\t` and breaks become `\n`
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                // Break types are private, so every break is a line break
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

/// Extract the explicit font size of a run, if it has one
pub(crate) fn extract_font_size(run: &docx_rs::Run) -> Option<FontSize> {
    // `Sz` keeps its value private; its serde form exposes it
    let sz = run.run_property.sz.as_ref()?;
    let value = serde_json::to_value(sz).ok()?;
    value
        .as_u64()
        .or_else(|| value.get("val").and_then(|v| v.as_u64()))
        .map(|half_points| FontSize(half_points as usize))
}

/// Font size of the paragraph's first run
pub(crate) fn first_run_font_size(para: &docx_rs::Paragraph) -> Option<FontSize> {
    paragraph_runs(para).first().and_then(|run| extract_font_size(run))
}

/// Build a docx-rs run from a planned run
pub(crate) fn build_run(planned: &FormattedRun) -> docx_rs::Run {
    let mut run = docx_rs::Run::new();

    for (line_index, line) in planned.text.split('\n').enumerate() {
        if line_index > 0 {
            run = run.add_break(docx_rs::BreakType::TextWrapping);
        }
        for (piece_index, piece) in line.split('\t').enumerate() {
            if piece_index > 0 {
                run = run.add_tab();
            }
            if !piece.is_empty() {
                run = run.add_text(piece);
            }
        }
    }

    let formatting = &planned.formatting;
    if let Some(size) = formatting.font_size {
        run = run.size(size.0);
    }
    if let Some(color) = &formatting.color {
        run = run.color(color.as_str());
    }
    if formatting.bold {
        run = run.bold();
    }

    run
}
