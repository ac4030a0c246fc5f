//! Sequence statistics shared by the HTTP API and the `analyze` command.
//!
//! FASTA and BAM parsing are delegated to `bio` and `rust-htslib`; this module
//! only counts bases, builds reverse complements and tallies read lengths.

pub mod bam;
pub mod fasta;

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid FASTA content: {0}")]
    InvalidFasta(String),

    #[error("Sequence contains characters outside A/C/G/T")]
    InvalidDna,

    #[error("Invalid BAM file: {0}")]
    InvalidBam(String),

    #[error("no A/C/G/T bases found in alignment reads")]
    NoBases,

    #[error("BAM error: {0}")]
    Htslib(#[from] rust_htslib::errors::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts of strong (G/C), weak (A/T) and any other bases.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BaseComposition {
    pub gc: usize,
    pub at: usize,
    pub other: usize,
}

impl BaseComposition {
    pub fn from_sequence(seq: &[u8]) -> Self {
        let mut composition = Self::default();
        composition.add(seq);
        composition
    }

    pub fn add(&mut self, seq: &[u8]) {
        for &base in seq {
            match base {
                b'G' | b'C' | b'g' | b'c' => self.gc += 1,
                b'A' | b'T' | b'a' | b't' => self.at += 1,
                _ => self.other += 1,
            }
        }
    }

    pub fn total(&self) -> usize {
        self.gc + self.at + self.other
    }

    /// GC percentage over the A/C/G/T bases only; ambiguous bases such as `N`
    /// do not count towards the denominator. `None` when there are no
    /// A/C/G/T bases at all.
    pub fn gc_content(&self) -> Option<f64> {
        let called = self.gc + self.at;
        if called == 0 {
            return None;
        }
        Some(self.gc as f64 / called as f64 * 100.0)
    }
}

/// Statistics for a single FASTA record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceReport {
    pub sequence_length: usize,
    pub gc_content: f64,
    pub reverse_complement: String,
}

/// Statistics accumulated over every read of a BAM file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentReport {
    pub sequence_length: usize,
    pub gc_content: f64,
    pub reverse_complement: String,
    pub reads_count: usize,
    /// Read length -> number of reads with that length.
    pub histogram_data: BTreeMap<usize, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_composition_counts() {
        let composition = BaseComposition::from_sequence(b"ACGTNNgcat");
        assert_eq!(composition.gc, 4);
        assert_eq!(composition.at, 4);
        assert_eq!(composition.other, 2);
        assert_eq!(composition.total(), 10);
    }

    #[test]
    fn test_gc_content_ignores_ambiguous_bases() {
        let composition = BaseComposition::from_sequence(b"GGCANNNN");
        assert_eq!(composition.gc_content(), Some(75.0));

        // A naive gc / length would give 37.5 here
        let naive = composition.gc as f64 / composition.total() as f64 * 100.0;
        assert_eq!(naive, 37.5);
    }

    #[test]
    fn test_gc_content_without_called_bases() {
        assert_eq!(BaseComposition::from_sequence(b"NNN").gc_content(), None);
        assert_eq!(BaseComposition::default().gc_content(), None);
    }

    #[test]
    fn test_alignment_report_histogram_keys_serialize_as_strings() {
        let report = AlignmentReport {
            sequence_length: 40,
            gc_content: 50.0,
            reverse_complement: String::new(),
            reads_count: 3,
            histogram_data: BTreeMap::from([(20, 1), (10, 2)]),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["histogram_data"], serde_json::json!({"10": 2, "20": 1}));
        assert_eq!(json["reads_count"], 3);
    }
}
