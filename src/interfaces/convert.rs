//! End-to-end conversion: proxy list in, options document out.

use std::path::PathBuf;

use log::info;

use crate::error::ConvertError;
use crate::generator::{build_document, serialize};
use crate::models::Document;
use crate::parser::{parse_lines, SkippedLine};
use crate::settings::Settings;
use crate::utils::{read_all_lines, write_all};

/// In-memory result of converting a set of lines.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: Document,
    /// Serialized document, ready to be written.
    pub output: String,
    pub skipped: Vec<SkippedLine>,
}

/// Summary of a file conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of proxy profiles written.
    pub converted: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Convert proxy list lines into a serialized document.
///
/// Malformed lines are skipped and reported, unless `settings.strict` is
/// set, in which case the first one aborts the conversion.
pub fn convert_lines<I, S>(lines: I, settings: &Settings) -> Result<Conversion, ConvertError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let report = parse_lines(lines);

    if settings.strict {
        if let Some(first) = report.skipped.first() {
            return Err(ConvertError::Parse {
                line_number: first.line_number,
                content: first.content.clone(),
                source: first.reason.clone(),
            });
        }
    }

    let document = build_document(&report.records, settings);
    let output = serialize(&document)?;
    Ok(Conversion {
        document,
        output,
        skipped: report.skipped,
    })
}

/// Read `settings.input`, convert it, and write `settings.output`.
///
/// Nothing is written when the input cannot be read or, in strict mode, when
/// a line is malformed.
pub fn convert_file(settings: &Settings) -> Result<ConversionReport, ConvertError> {
    let lines = read_all_lines(&settings.input)?;
    info!(
        "Loaded {} line(s) from {}",
        lines.len(),
        settings.input.display()
    );

    let conversion = convert_lines(&lines, settings)?;
    write_all(&settings.output, &conversion.output)?;
    info!("Configuration written to {}", settings.output.display());

    Ok(ConversionReport {
        input: settings.input.clone(),
        output: settings.output.clone(),
        converted: conversion.document.profile_count(),
        skipped: conversion.skipped,
    })
}
