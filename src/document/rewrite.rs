//! Run rewriting for dialogue paragraphs

use super::models::*;
use super::parsing::formatting::build_run;

/// Plan the runs that replace a dialogue paragraph.
///
/// The label run is unstyled; speech spans are bold red and parenthetical
/// spans are unstyled. Every run carries `font_size`.
pub fn plan_runs(label: &str, spans: &[Span], font_size: Option<FontSize>) -> Vec<FormattedRun> {
    let mut runs = Vec::with_capacity(spans.len() + 1);

    runs.push(FormattedRun {
        text: label.to_string(),
        formatting: TextFormatting::plain(font_size),
    });

    for span in spans {
        let formatting = match span {
            Span::Speech(_) => TextFormatting::speech(font_size),
            Span::Parenthetical(_) => TextFormatting::plain(font_size),
        };
        runs.push(FormattedRun {
            text: span.text().to_string(),
            formatting,
        });
    }

    runs
}

/// Replace all content of `para` with the planned runs
pub fn rewrite_paragraph(para: &mut docx_rs::Paragraph, runs: &[FormattedRun]) {
    para.children.clear();
    para.children.extend(
        runs.iter()
            .map(|run| docx_rs::ParagraphChild::Run(Box::new(build_run(run)))),
    );
}
