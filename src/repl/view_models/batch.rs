//! # Batch Panel
//!
//! Uploads a CSV file to `/api/upload_csv`. The file is read locally first;
//! a read failure is reported through the same controller as the upload.

use crate::repl::controllers::RemoteCallController;
use crate::repl::models::{BatchResponse, BatchUpload};
use crate::repl::services::{HttpService, UploadCsv};
use std::path::{Path, PathBuf};

pub struct BatchPanel {
    file: Option<PathBuf>,
    call: RemoteCallController<UploadCsv>,
}

impl BatchPanel {
    pub const TITLE: &'static str = "Batch Uploader";

    pub fn new(service: HttpService) -> Self {
        Self {
            file: None,
            call: RemoteCallController::new(service),
        }
    }

    pub fn call(&self) -> &RemoteCallController<UploadCsv> {
        &self.call
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn select_file(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::debug!("Batch file selected: {}", path.display());
        self.file = Some(path);
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some()
    }

    pub async fn submit(&self) -> Option<BatchResponse> {
        let path = self.file.as_deref()?;

        let contents = match tokio::fs::read(path).await {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                self.call.clear_data();
                self.call
                    .set_error(Some(format!("Cannot read {}: {e}", path.display())));
                return None;
            }
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());

        self.call
            .perform_call(BatchUpload {
                file_name,
                contents,
            })
            .await
    }

    pub fn reset(&mut self) {
        self.file = None;
        self.call.clear_data();
    }
}
