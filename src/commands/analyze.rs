use crate::analysis;
use crate::types::FileKind;
use crate::utils::bam_reader::BamReaderFactory;
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

pub fn run(file: &Path, format: Option<FileKind>, pretty: bool, quiet: bool) -> Result<()> {
    let kind = match format {
        Some(kind) => kind,
        None => file
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(FileKind::from_filename)
            .ok_or_else(|| {
                anyhow!(
                    "Cannot tell the format of {} from its extension; use --format",
                    file.display()
                )
            })?,
    };
    log::info!("Analyzing {} as {}", file.display(), kind.name());

    let output = match kind {
        FileKind::Fasta => {
            let content = std::fs::read(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let report = analysis::fasta::analyze(&content)
                .with_context(|| format!("Failed to analyze {}", file.display()))?;
            to_json(&report, pretty)?
        }
        FileKind::Bam => {
            BamReaderFactory::validate(file)
                .with_context(|| format!("{} is not a valid BAM file", file.display()))?;

            let progress = ProgressBarBuilder::new("Reading alignments...")
                .with_tick(Duration::from_millis(200))
                .hidden(quiet)
                .build()?;
            let report = analysis::bam::analyze_with_progress(file, Some(&progress))
                .with_context(|| format!("Failed to analyze {}", file.display()))?;
            to_json(&report, pretty)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
