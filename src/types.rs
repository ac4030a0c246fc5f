/// Filename suffixes accepted as single-record sequence files.
pub const FASTA_SUFFIXES: [&str; 3] = [".fasta", ".fas", ".fa"];

/// Filename suffix accepted as an alignment container.
pub const BAM_SUFFIX: &str = ".bam";

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    #[value(name = "fasta")]
    Fasta,
    #[value(name = "bam")]
    Bam,
}

impl FileKind {
    /// Classifies an upload by its filename suffix, ignoring case.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_ascii_lowercase();
        if FASTA_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
            Some(FileKind::Fasta)
        } else if lower.ends_with(BAM_SUFFIX) {
            Some(FileKind::Bam)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FileKind::Fasta => "FASTA",
            FileKind::Bam => "BAM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_filename() {
        let cases = vec![
            ("plasmid.fasta", Some(FileKind::Fasta)),
            ("plasmid.FAS", Some(FileKind::Fasta)),
            ("pUC19.fa", Some(FileKind::Fasta)),
            ("reads.bam", Some(FileKind::Bam)),
            ("READS.Bam", Some(FileKind::Bam)),
            ("reads.sam", None),
            ("notes.txt", None),
            ("fasta", None),
            ("", None),
        ];

        for (filename, expected) in cases {
            assert_eq!(FileKind::from_filename(filename), expected, "{}", filename);
        }
    }
}
