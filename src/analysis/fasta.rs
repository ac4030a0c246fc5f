use super::{AnalysisError, BaseComposition, Result, SequenceReport};
use bio::alphabets::dna;
use bio::io::fasta;

/// Parses `content` as a FASTA file holding exactly one record.
pub fn parse_single_record(content: &[u8]) -> Result<fasta::Record> {
    let text = std::str::from_utf8(content)
        .map_err(|e| AnalysisError::InvalidFasta(format!("content is not UTF-8: {}", e)))?;

    let mut records = fasta::Reader::new(text.as_bytes()).records();
    let record = match records.next() {
        Some(result) => result.map_err(|e| AnalysisError::InvalidFasta(e.to_string()))?,
        None => {
            return Err(AnalysisError::InvalidFasta(
                "no records found in input".to_string(),
            ))
        }
    };

    if records.next().is_some() {
        return Err(AnalysisError::InvalidFasta(
            "more than one record found in input".to_string(),
        ));
    }

    Ok(record)
}

/// True when the sequence is non-empty and made only of A/C/G/T in either case.
pub fn is_valid_dna_sequence(seq: &[u8]) -> bool {
    !seq.is_empty() && dna::alphabet().is_word(seq)
}

pub fn analyze_record(record: &fasta::Record) -> Result<SequenceReport> {
    let seq = record.seq();
    let composition = BaseComposition::from_sequence(seq);

    // Input is validated as pure A/C/G/T, so gc + at is the full length here.
    let gc_content = composition.gc_content().ok_or(AnalysisError::InvalidDna)?;
    let reverse_complement = String::from_utf8_lossy(&dna::revcomp(seq)).into_owned();

    Ok(SequenceReport {
        sequence_length: seq.len(),
        gc_content,
        reverse_complement,
    })
}

/// Full FASTA path: parse, check the alphabet, compute the report.
pub fn analyze(content: &[u8]) -> Result<SequenceReport> {
    let record = parse_single_record(content)?;
    if !is_valid_dna_sequence(record.seq()) {
        return Err(AnalysisError::InvalidDna);
    }

    log::debug!(
        "Analyzing FASTA record '{}' ({} bp)",
        record.id(),
        record.seq().len()
    );
    analyze_record(&record)
}
