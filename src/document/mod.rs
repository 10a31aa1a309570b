//! Script document processing
//!
//! This module classifies the paragraphs of a Word (.docx) script,
//! restyles dialogue and lays scripts out into a clean document.

pub(crate) mod io;
pub mod layout;
pub mod models;
pub mod parsing;
pub mod pipeline;
pub mod query;
pub mod rewrite;

// Re-export models and the file-level operations
pub use io::{formatted_output_path, load_docx, output_dir_of, output_path_for, save_docx};
pub use layout::{classify_line, format_docx, format_file, LineKind};
pub use models::*;
pub use parsing::dialogue::{classify_paragraph, classify_text};
pub use parsing::parenthetical::segment_utterance;
pub use pipeline::{mark_docx, mark_file, mark_paragraph, MarkOutcome};
pub use query::{inspect_docx, render_json, render_text};
pub use rewrite::{plan_runs, rewrite_paragraph};
