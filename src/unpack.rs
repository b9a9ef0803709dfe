//! Flattening a downloaded archive of archives onto disk.
//!
//! The records service returns a zip whose members are either plain files
//! or zips themselves. Plain members land directly in the destination
//! with their path separators turned into underscores. Each nested zip
//! gets its own subdirectory, named after the member, holding its
//! flattened contents. Nesting stops there: a zip found inside a nested
//! zip is written out as an ordinary file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::anyhow;

use crate::error::{Error, Result};
use crate::io::MemoryReader;
use crate::zip::ZipExtractor;

const ARCHIVE_SUFFIX: &str = ".zip";
const METADATA_SUFFIX: &str = ".json";

/// A file pulled out of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
}

/// Where a request's results ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// The zip file written, or the absolute directory unpacked into.
    pub path: PathBuf,
    /// Names of unpacked data files; metadata (`.json`) files are left out.
    pub files: Vec<String>,
}

pub fn is_archive(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(ARCHIVE_SUFFIX)
}

pub fn flatten_name(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// Directory name for the contents of a nested archive.
///
/// Every trailing `.zip` is dropped, which also covers members the
/// service names `*.zip.zip`.
pub fn nested_dir_name(name: &str) -> String {
    let mut stem = name;
    while is_archive(stem) {
        stem = &stem[..stem.len() - ARCHIVE_SUFFIX.len()];
    }
    flatten_name(stem)
}

fn usable(component: String, original: &str) -> Result<String> {
    match component.as_str() {
        "" | "." | ".." => Err(Error::Archive(anyhow!(
            "Entry '{original}' has no usable file name"
        ))),
        _ => Ok(component),
    }
}

/// Output location, relative to the destination, for an entry.
///
/// `parent` is the name of the nested archive the entry came from, if
/// any.
pub fn place_entry(parent: Option<&str>, entry: ArchiveEntry) -> Result<(PathBuf, Vec<u8>)> {
    let file_name = usable(flatten_name(&entry.name), &entry.name)?;
    let path = match parent {
        Some(outer) => PathBuf::from(usable(nested_dir_name(outer), outer)?).join(file_name),
        None => PathBuf::from(file_name),
    };
    Ok((path, entry.data))
}

/// Read every file entry of a zip held in memory.
async fn read_entries(bytes: Vec<u8>) -> Result<Vec<ArchiveEntry>> {
    let extractor = ZipExtractor::new(Arc::new(MemoryReader::new(bytes)));
    let listing = extractor.list_files().await.map_err(Error::Archive)?;

    let mut entries = Vec::with_capacity(listing.len());
    for file in listing.iter().filter(|f| !f.is_directory) {
        let data = extractor
            .extract_to_memory(file)
            .await
            .map_err(Error::Archive)?;
        entries.push(ArchiveEntry {
            name: file.file_name.clone(),
            data,
        });
    }
    Ok(entries)
}

struct Unpacker<'a> {
    destination: &'a Path,
    written: HashSet<PathBuf>,
    files: Vec<String>,
}

impl Unpacker<'_> {
    async fn write(&mut self, parent: Option<&str>, entry: ArchiveEntry) -> Result<()> {
        let (relative, data) = place_entry(parent, entry)?;
        let output = self.destination.join(&relative);
        if let Some(dir) = output.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        tracing::debug!(path = %relative.display(), bytes = data.len(), "Writing file");
        tokio::fs::write(&output, &data).await?;

        if let Some(name) = relative.file_name().and_then(|n| n.to_str())
            && !name.ends_with(METADATA_SUFFIX)
            && !self.written.contains(&relative)
        {
            self.files.push(name.to_string());
        }
        self.written.insert(relative);
        Ok(())
    }
}

/// Unpack a two-level archive into `destination`, creating it if needed.
///
/// Files written before a failure are left in place.
pub async fn unpack_archive(bytes: Vec<u8>, destination: &Path) -> Result<ExtractionResult> {
    tokio::fs::create_dir_all(destination).await?;
    let mut unpacker = Unpacker {
        destination,
        written: HashSet::new(),
        files: Vec::new(),
    };

    for entry in read_entries(bytes).await? {
        if !is_archive(&entry.name) {
            unpacker.write(None, entry).await?;
            continue;
        }

        tracing::debug!(archive = %entry.name, "Unpacking nested archive");
        for inner in read_entries(entry.data).await? {
            unpacker.write(Some(&entry.name), inner).await?;
        }
    }

    let path = std::path::absolute(destination)?;
    tracing::info!(
        path = %path.display(),
        files = unpacker.files.len(),
        "Unpacked records"
    );
    Ok(ExtractionResult {
        path,
        files: unpacker.files,
    })
}
