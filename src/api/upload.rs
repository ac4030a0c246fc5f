use super::{ApiError, ApiResult, AppState};
use crate::analysis::{self, AlignmentReport, SequenceReport};
use crate::types::FileKind;
use crate::utils::bam_reader::BamReaderFactory;
use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::Json;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Name of the multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub content: Bytes,
}

/// Pulls the `file` field out of the multipart body. `accept` runs on the
/// filename before any of the file's bytes are read.
async fn read_upload<F>(
    multipart: Result<Multipart, MultipartRejection>,
    accept: F,
) -> ApiResult<Upload>
where
    F: Fn(&str) -> ApiResult<()>,
{
    let mut multipart = multipart.map_err(|rejection| {
        log::warn!("Request is not a multipart upload: {}", rejection);
        ApiError::NoFile
    })?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(ApiError::NoFile),
        };
        accept(&filename)?;

        let content = field.bytes().await?;
        log::info!("Received upload '{}' ({} bytes)", filename, content.len());
        return Ok(Upload { filename, content });
    }

    Err(ApiError::NoFile)
}

fn accept_fasta(filename: &str) -> ApiResult<()> {
    match FileKind::from_filename(filename) {
        Some(FileKind::Fasta) => Ok(()),
        Some(FileKind::Bam) => Err(ApiError::UnsupportedFormat),
        None => Err(ApiError::InvalidFormat),
    }
}

fn accept_bam(filename: &str) -> ApiResult<()> {
    match FileKind::from_filename(filename) {
        Some(FileKind::Bam) => Ok(()),
        _ => Err(ApiError::NotBam),
    }
}

/// `POST /upload/fasta/`
pub async fn upload_fasta(
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<SequenceReport>> {
    let upload = read_upload(multipart, accept_fasta).await?;

    let report =
        tokio::task::spawn_blocking(move || analysis::fasta::analyze(&upload.content)).await??;
    Ok(Json(report))
}

/// `POST /upload/bam/`
pub async fn upload_bam(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<AlignmentReport>> {
    let upload = read_upload(multipart, accept_bam).await?;

    let temp_file = state.create_temp_file()?;
    log::info!(
        "Temporary file path for '{}': {}",
        upload.filename,
        temp_file.path().display()
    );

    let report =
        tokio::task::spawn_blocking(move || analyze_uploaded_bam(temp_file, &upload.content))
            .await??;
    Ok(Json(report))
}

/// Writes the upload to `temp_file`, validates and analyzes it. The file is
/// owned here and removed when it goes out of scope, on every return path
/// and during unwinding.
fn analyze_uploaded_bam(
    mut temp_file: NamedTempFile,
    content: &[u8],
) -> analysis::Result<AlignmentReport> {
    temp_file.write_all(content)?;
    temp_file.flush()?;

    BamReaderFactory::validate(temp_file.path())?;
    analysis::bam::analyze(temp_file.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_fasta() {
        assert!(accept_fasta("pUC19.fasta").is_ok());
        assert!(accept_fasta("pUC19.FA").is_ok());
        assert!(matches!(accept_fasta("reads.bam"), Err(ApiError::UnsupportedFormat)));
        assert!(matches!(accept_fasta("notes.txt"), Err(ApiError::InvalidFormat)));
    }

    #[test]
    fn test_accept_bam() {
        assert!(accept_bam("reads.BAM").is_ok());
        assert!(matches!(accept_bam("pUC19.fasta"), Err(ApiError::NotBam)));
        assert!(matches!(accept_bam("reads.sam"), Err(ApiError::NotBam)));
    }

    #[test]
    fn test_analyze_uploaded_bam_removes_file_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let temp_file = tempfile::Builder::new()
            .suffix(".bam")
            .tempfile_in(dir.path())
            .unwrap();
        let path = temp_file.path().to_path_buf();

        let result = analyze_uploaded_bam(temp_file, b"definitely not BAM");
        assert!(matches!(result, Err(analysis::AnalysisError::InvalidBam(_))));
        assert!(!path.exists());
    }
}
