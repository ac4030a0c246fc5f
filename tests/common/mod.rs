#![allow(dead_code)]

use plasmid_analyzer::api::router;
use plasmid_analyzer::config::Config;
use reqwest::multipart::{Form, Part};
use rust_htslib::bam::{self, header::HeaderRecord};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub struct TestServer {
    pub base_url: String,
    pub upload_dir: TempDir,
    client: reqwest::Client,
}

impl TestServer {
    /// Starts the API on an ephemeral port with a private upload directory.
    pub async fn spawn() -> Self {
        let upload_dir = tempfile::tempdir().unwrap();
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            upload_dir: Some(upload_dir.path().to_path_buf()),
            ..Config::default()
        };

        let listener = TcpListener::bind(config.bind_address()).await.unwrap();
        let address = listener.local_addr().unwrap();
        let app = router(&config);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", address),
            upload_dir,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub async fn post_form(&self, endpoint: &str, form: Form) -> (u16, Value) {
        let response = self
            .client
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    pub async fn upload(&self, endpoint: &str, filename: &str, content: &[u8]) -> (u16, Value) {
        let part = Part::bytes(content.to_vec()).file_name(filename.to_string());
        self.post_form(endpoint, Form::new().part("file", part)).await
    }

    pub fn upload_dir_entries(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path()).unwrap().count()
    }
}

pub fn write_bam(path: &Path, reads: &[&[u8]]) {
    let mut header = bam::Header::new();
    header.push_record(
        HeaderRecord::new(b"SQ")
            .push_tag(b"SN", &"pUC19")
            .push_tag(b"LN", &2_686),
    );

    let mut writer = bam::Writer::from_path(path, &header, bam::Format::Bam).unwrap();
    for (i, seq) in reads.iter().enumerate() {
        let mut record = bam::Record::new();
        let qual = vec![30u8; seq.len()];
        record.set(format!("read{}", i).as_bytes(), None, seq, &qual);
        record.set_tid(-1);
        record.set_pos(-1);
        record.set_mtid(-1);
        record.set_mpos(-1);
        record.set_unmapped();
        writer.write(&record).unwrap();
    }
}

/// Serialized BAM file holding `reads` as unmapped records.
pub fn bam_bytes(reads: &[&[u8]]) -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.bam");
    write_bam(&path, reads);
    std::fs::read(&path).unwrap()
}
