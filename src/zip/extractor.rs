use flate2::Crc;
use flate2::read::DeflateDecoder;
use std::io::Read;
use std::sync::Arc;

use crate::io::ReadAt;
use anyhow::{Context, Result, bail};

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// ZIP file extractor
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all files in the archive
    pub async fn list_files(&self) -> Result<Vec<ZipFileEntry>> {
        self.parser.list_files().await
    }

    /// Extract file data to memory, checking its CRC-32
    pub async fn extract_to_memory(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        let data_offset = self.parser.get_data_offset(entry).await?;
        let archive_size = self.parser.reader().size();
        if data_offset
            .checked_add(entry.compressed_size)
            .is_none_or(|end| end > archive_size)
        {
            bail!("Data for {} runs past the end of the archive", entry.file_name);
        }

        let mut raw = vec![0u8; entry.compressed_size as usize];
        self.parser
            .reader()
            .read_exact_at(data_offset, &mut raw)
            .await?;

        let data = match entry.compression_method {
            CompressionMethod::Stored => raw,
            CompressionMethod::Deflate => {
                let mut out = Vec::with_capacity(entry.uncompressed_size.min(archive_size * 4) as usize);
                // One byte past the declared size is enough to detect overflow
                DeflateDecoder::new(raw.as_slice())
                    .take(entry.uncompressed_size.saturating_add(1))
                    .read_to_end(&mut out)
                    .with_context(|| format!("Failed to inflate {}", entry.file_name))?;
                if out.len() as u64 > entry.uncompressed_size {
                    bail!(
                        "{} inflates past its declared size of {} bytes",
                        entry.file_name,
                        entry.uncompressed_size
                    );
                }
                out
            }
            CompressionMethod::Unknown(method) => bail!(
                "Unsupported compression method {} for {} (only STORED and DEFLATE are supported)",
                method,
                entry.file_name
            ),
        };

        if data.len() as u64 != entry.uncompressed_size {
            bail!(
                "Size mismatch for {}: expected {} bytes, got {}",
                entry.file_name,
                entry.uncompressed_size,
                data.len()
            );
        }

        let mut crc = Crc::new();
        crc.update(&data);
        if crc.sum() != entry.crc32 {
            bail!("CRC-32 mismatch for {}", entry.file_name);
        }

        Ok(data)
    }
}
