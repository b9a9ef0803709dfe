#![allow(dead_code)]

use std::io::{Cursor, Write};

use cesmd::ServiceClient;
use wiremock::MockServer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const QUERY_PATH: &str = "/testuser/wserv2/records/query";
pub const EMAIL: &str = "tester@example.org";

/// Build a zip archive. Names ending in `/` become directory entries.
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    build_zip_with(entries, CompressionMethod::Deflated, None)
}

pub fn build_zip_with(
    entries: &[(&str, &[u8])],
    method: CompressionMethod,
    comment: Option<&str>,
) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(method);
    for (name, data) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
    }
    if let Some(comment) = comment {
        writer.set_comment(comment);
    }
    writer.finish().unwrap().into_inner()
}

/// The layout the service uses for event downloads: metadata at the top
/// level, waveforms inside per-station archives.
pub fn event_archive() -> Vec<u8> {
    let nested = build_zip(&[
        ("c/", b""),
        ("c/d.txt", b"acceleration data"),
        ("c/e.v2", b"processed data"),
    ]);
    build_zip(&[
        ("a/", b""),
        ("a/b.json", b"{\"event\": \"nc73201181\"}"),
        ("a/nested.zip", &nested),
        ("readme.txt", b"strong motion records"),
    ])
}

pub async fn client_for(server: &MockServer) -> ServiceClient {
    ServiceClient::with_endpoint(format!("{}{}", server.uri(), QUERY_PATH)).unwrap()
}
