//! File I/O operations and validation
//!
//! This module handles file validation, loading and saving documents,
//! and deriving output paths.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::error::ScriptError;

const ACCEPTED_EXTENSIONS: &[&str] = &["docx", "doc"];

/// Validates that the file is a Word Open XML package
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    // Check file extension
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ScriptError::UnsupportedExtension { extension }.into());
    }

    // Check ZIP structure contains word/document.xml
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open {}", file_path.display()))?;
    let mut archive = ZipArchive::new(file).map_err(|_| ScriptError::NotOpenXml {
        path: file_path.to_path_buf(),
    })?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(ScriptError::SpreadsheetPackage.into());
        }
        return Err(ScriptError::MissingDocumentPart.into());
    }

    Ok(())
}

/// Validate and read a document
pub fn load_docx(file_path: &Path) -> Result<docx_rs::Docx> {
    validate_docx_file(file_path)?;

    let file_data = std::fs::read(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let docx = docx_rs::read_docx(&file_data)
        .with_context(|| format!("Failed to parse {}", file_path.display()))?;
    Ok(docx)
}

/// Write a document, silently replacing any existing file
pub fn save_docx(docx: docx_rs::Docx, file_path: &Path) -> Result<()> {
    let file = File::create(file_path)
        .with_context(|| format!("Failed to create {}", file_path.display()))?;
    docx.build()
        .pack(file)
        .with_context(|| format!("Failed to write {}", file_path.display()))?;
    Ok(())
}

/// `<dir>/<prefix>_<file name>` for an input at `<dir>/<file name>`
pub fn output_path_for(input: &Path, prefix: &str) -> Result<PathBuf> {
    let file_name = file_name_of(input)?;
    Ok(input.with_file_name(format!("{prefix}_{file_name}")))
}

/// `<dir>/<subdir>/<file name>` for an input at `<dir>/<file name>`
pub fn formatted_output_path(input: &Path, subdir: &str) -> Result<PathBuf> {
    let file_name = file_name_of(input)?;
    let parent = input.parent().ok_or_else(|| ScriptError::MissingParentDir {
        path: input.to_path_buf(),
    })?;
    Ok(parent.join(subdir).join(file_name))
}

/// Directory a file lives in, `.` for a bare file name
pub fn output_dir_of(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn file_name_of(path: &Path) -> Result<&str, ScriptError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ScriptError::MissingFileName {
            path: path.to_path_buf(),
        })
}
