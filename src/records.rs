//! Search, download and store strong motion records in one call.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::io::ServiceClient;
use crate::search::{SearchOptions, build_query};
use crate::unpack::{ExtractionResult, unpack_archive};

/// Everything needed for one records download.
#[derive(Debug, Clone)]
pub struct RecordsRequest {
    /// Zip file to write, or directory to unpack into.
    pub output: PathBuf,
    /// Address of the requesting user, sent to the service.
    pub email: String,
    /// Unpack the archive instead of saving it as a zip file.
    pub unpack: bool,
    pub options: SearchOptions,
}

impl RecordsRequest {
    pub fn new(output: impl Into<PathBuf>, email: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            email: email.into(),
            unpack: false,
            options: SearchOptions::default(),
        }
    }

    pub fn unpack(mut self, unpack: bool) -> Self {
        self.unpack = unpack;
        self
    }

    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

/// `path` with a `.zip` suffix, unless it already ends in one.
pub fn zip_output_path(path: &Path) -> PathBuf {
    if path.to_string_lossy().ends_with(".zip") {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".zip");
    PathBuf::from(name)
}

/// Retrieve strong motion records matching the request's options.
///
/// Options are validated before anything is sent. Without unpacking, the
/// response is saved verbatim as a zip file and no file names are
/// returned.
pub async fn get_records(client: &ServiceClient, request: &RecordsRequest) -> Result<ExtractionResult> {
    let params = build_query(&request.email, &request.options)?;
    let body = client.fetch(&params).await?;

    if request.unpack {
        return unpack_archive(body, &request.output).await;
    }

    let path = zip_output_path(&request.output);
    tokio::fs::write(&path, &body).await?;
    tracing::info!(path = %path.display(), bytes = body.len(), "Saved records archive");
    Ok(ExtractionResult {
        path,
        files: Vec::new(),
    })
}
