//! Error types for script document handling

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(
        "Invalid file format. Expected .docx or .doc file, got .{extension}\n\
        Note: scriptmark only supports Word documents"
    )]
    UnsupportedExtension { extension: String },

    #[error(
        "{} is not a Word Open XML package.\n\
        Legacy binary .doc files must be re-saved as .docx first.",
        .path.display()
    )]
    NotOpenXml { path: PathBuf },

    #[error(
        "Invalid .docx file: missing word/document.xml\n\
        This file may be corrupted or is not a valid Word document."
    )]
    MissingDocumentPart,

    #[error("This appears to be an Excel file (.xlsx), not a Word document")]
    SpreadsheetPackage,

    #[error("Cannot determine file name of {}", .path.display())]
    MissingFileName { path: PathBuf },

    #[error("Cannot determine parent directory of {}", .path.display())]
    MissingParentDir { path: PathBuf },
}
