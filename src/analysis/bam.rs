use super::{AlignmentReport, AnalysisError, BaseComposition, Result};
use crate::utils::bam_reader::BamReaderFactory;
use bio::alphabets::dna;
use indicatif::ProgressBar;
use rust_htslib::bam::Read;
use std::collections::BTreeMap;
use std::path::Path;

const PROGRESS_INTERVAL: usize = 10_000;

/// Running totals over the reads of one BAM file.
#[derive(Debug, Default)]
pub struct BamStats {
    reads_count: usize,
    total_sequence_length: usize,
    composition: BaseComposition,
    reverse_complement: Vec<u8>,
    length_distribution: BTreeMap<usize, usize>,
}

impl BamStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one read's query sequence into the totals.
    pub fn add_read(&mut self, seq: &[u8]) {
        self.reads_count += 1;
        self.total_sequence_length += seq.len();
        self.composition.add(seq);
        self.reverse_complement.extend(dna::revcomp(seq));
        *self.length_distribution.entry(seq.len()).or_insert(0) += 1;
    }

    /// Iterates every record of the file once, in file order.
    pub fn collect_stats(&mut self, bam_path: &Path, progress: Option<&ProgressBar>) -> Result<()> {
        let mut bam = BamReaderFactory::open(bam_path)?;

        for (i, record_result) in bam.records().enumerate() {
            let record = record_result?;
            self.add_read(&record.seq().as_bytes());

            if let Some(progress) = progress {
                if i % PROGRESS_INTERVAL == 0 {
                    progress.set_message(format!("Processed {} reads...", i));
                }
            }
        }

        if let Some(progress) = progress {
            progress.finish_with_message(format!("Processed {} reads", self.reads_count));
        }

        Ok(())
    }

    pub fn reads_count(&self) -> usize {
        self.reads_count
    }

    pub fn composition(&self) -> BaseComposition {
        self.composition
    }

    pub fn into_report(self) -> Result<AlignmentReport> {
        let gc_content = self.composition.gc_content().ok_or(AnalysisError::NoBases)?;

        Ok(AlignmentReport {
            sequence_length: self.total_sequence_length,
            gc_content,
            reverse_complement: String::from_utf8_lossy(&self.reverse_complement).into_owned(),
            reads_count: self.reads_count,
            histogram_data: self.length_distribution,
        })
    }
}

/// Analyzes an already validated BAM file.
pub fn analyze(bam_path: &Path) -> Result<AlignmentReport> {
    analyze_with_progress(bam_path, None)
}

pub fn analyze_with_progress(bam_path: &Path, progress: Option<&ProgressBar>) -> Result<AlignmentReport> {
    let mut stats = BamStats::new();
    stats.collect_stats(bam_path, progress)?;
    log::debug!(
        "Collected {} reads from {}",
        stats.reads_count(),
        bam_path.display()
    );
    stats.into_report()
}
