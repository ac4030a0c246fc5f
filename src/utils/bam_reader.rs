// src/utils/bam_reader.rs
use crate::analysis::{AnalysisError, Result};
use rust_htslib::bam::Read as _;
use rust_htslib::{bam, bgzf};
use std::io::Read;
use std::path::Path;

/// First four bytes of every decompressed BAM stream.
pub const BAM_MAGIC: &[u8; 4] = b"BAM\x01";

pub struct BamReaderFactory;

impl BamReaderFactory {
    pub fn open(bam_path: &Path) -> Result<bam::Reader> {
        Ok(bam::Reader::from_path(bam_path)?)
    }

    /// Checks that the file is a BAM container and not some other format
    /// htslib would also open (SAM text, CRAM).
    pub fn validate(bam_path: &Path) -> Result<()> {
        let mut magic = [0u8; 4];
        let mut bgzf = bgzf::Reader::from_path(bam_path)
            .map_err(|e| AnalysisError::InvalidBam(e.to_string()))?;
        bgzf.read_exact(&mut magic)
            .map_err(|e| AnalysisError::InvalidBam(format!("unable to read magic: {}", e)))?;

        if &magic != BAM_MAGIC {
            return Err(AnalysisError::InvalidBam(
                "missing BAM magic number".to_string(),
            ));
        }

        let reader = bam::Reader::from_path(bam_path)
            .map_err(|e| AnalysisError::InvalidBam(e.to_string()))?;
        log::debug!(
            "Validated BAM {} with {} reference sequences",
            bam_path.display(),
            reader.header().target_count()
        );
        Ok(())
    }

    pub fn is_valid_bam(bam_path: &Path) -> bool {
        match Self::validate(bam_path) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error reading BAM file: {}", e);
                false
            }
        }
    }
}
