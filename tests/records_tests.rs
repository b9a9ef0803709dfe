//! End-to-end downloads against a mock records service.

mod common;

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use cesmd::search::ProcessLevel;
use cesmd::{Error, RecordsRequest, SearchOptions, ServiceClient, get_records};
use common::{EMAIL, QUERY_PATH, client_for, event_archive};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_saved_archive_matches_response() {
    let server = MockServer::start().await;
    let body = event_archive();
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("email", EMAIL))
        .and(query_param("rettype", "dataset"))
        .and(query_param("download", "R"))
        .and(query_param("groupby", "event"))
        .and(query_param("abandoned", "false"))
        .and(query_param("eventid", "nc73201181"))
        .and(query_param("orderby", "epidist-asc"))
        .and(query_param("nodata", "404"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let options = SearchOptions {
        eventid: Some("nc73201181".to_string()),
        ..Default::default()
    };
    let request = RecordsRequest::new(dir.path().join("nc73201181"), EMAIL).options(options);

    let result = get_records(&client_for(&server).await, &request)
        .await
        .unwrap();

    assert_eq!(result.path, dir.path().join("nc73201181.zip"));
    assert!(result.files.is_empty());
    assert_eq!(fs::read(&result.path).unwrap(), body);
}

#[tokio::test]
async fn test_existing_zip_suffix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"raw".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let request = RecordsRequest::new(dir.path().join("records.zip"), EMAIL);

    let result = get_records(&client_for(&server).await, &request)
        .await
        .unwrap();

    assert_eq!(result.path, dir.path().join("records.zip"));
    assert_eq!(fs::read(&result.path).unwrap(), b"raw");
}

#[tokio::test]
async fn test_unpacked_download() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("sttype", "G"))
        .and(query_param("download", "P,R,T"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(event_archive()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("nc73201181");
    let options = SearchOptions {
        station_type: Some("G".to_string()),
        process_level: ProcessLevel::All,
        ..Default::default()
    };
    let request = RecordsRequest::new(&destination, EMAIL)
        .unpack(true)
        .options(options);

    let result = get_records(&client_for(&server).await, &request)
        .await
        .unwrap();

    assert_eq!(result.path, destination);
    assert_eq!(result.files, vec!["c_d.txt", "c_e.v2", "readme.txt"]);
    assert!(destination.join("a_b.json").is_file());
    assert!(destination.join("a_nested").join("c_d.txt").is_file());
}

#[tokio::test]
async fn test_not_found_falls_back_to_canonical_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("PK\x03\x04 looks like a zip"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let request = RecordsRequest::new(dir.path().join("out"), EMAIL).unpack(true);

    match get_records(&client_for(&server).await, &request).await {
        Err(Error::Service { status, reason }) => {
            assert_eq!(status, 404);
            assert_eq!(reason, "Not Found");
        }
        other => panic!("expected service error, got {other:?}"),
    }
    assert!(!dir.path().join("out").exists());
    assert!(!dir.path().join("out.zip").exists());
}

/// Answer one request with a raw status line and an empty body.
fn serve_status_line(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response =
            format!("{status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}{QUERY_PATH}")
}

#[tokio::test]
async fn test_service_error_keeps_server_reason() {
    let endpoint = serve_status_line("HTTP/1.1 404 No Records Match Query");
    let client = ServiceClient::with_endpoint(endpoint).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let request = RecordsRequest::new(dir.path().join("out"), EMAIL);

    match get_records(&client, &request).await {
        Err(Error::Service { status, reason }) => {
            assert_eq!(status, 404);
            assert_eq!(reason, "No Records Match Query");
        }
        other => panic!("expected service error, got {other:?}"),
    }
    assert!(!dir.path().join("out.zip").exists());
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let request = RecordsRequest::new(dir.path().join("out"), EMAIL);

    let result = get_records(&client_for(&server).await, &request).await;
    assert!(matches!(result, Err(Error::Service { status: 503, .. })));
}

#[tokio::test]
async fn test_unknown_network_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let options = SearchOptions {
        network: Some("ZZ".to_string()),
        ..Default::default()
    };
    let request = RecordsRequest::new(dir.path().join("out"), EMAIL).options(options);

    let result = get_records(&client_for(&server).await, &request).await;
    assert!(matches!(
        result,
        Err(Error::Validation {
            field: "network",
            ..
        })
    ));
    server.verify().await;
}

#[tokio::test]
async fn test_geographic_conflict_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let options = SearchOptions {
        min_event_latitude: Some(35.0),
        event_latitude: Some(35.5),
        ..Default::default()
    };
    let request = RecordsRequest::new(dir.path().join("out"), EMAIL).options(options);

    let result = get_records(&client_for(&server).await, &request).await;
    assert!(matches!(result, Err(Error::Conflict { target: "event" })));
    server.verify().await;
}

#[tokio::test]
async fn test_non_zip_body_fails_to_unpack() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let request = RecordsRequest::new(dir.path().join("out"), EMAIL).unpack(true);

    let result = get_records(&client_for(&server).await, &request).await;
    assert!(matches!(result, Err(Error::Archive(_))));
}
