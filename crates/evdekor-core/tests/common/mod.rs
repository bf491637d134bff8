#![allow(dead_code)]

use std::{net::SocketAddr, path::Path};

use evdekor_core::{ReservationDraft, Wizard, WizardBuilder};
use tempfile::TempDir;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    sync::oneshot,
};

/// A draft that passes every rule.
pub fn valid_draft() -> ReservationDraft {
    ReservationDraft {
        service: "anahtar-teslim".to_string(),
        district: "muratpasa".to_string(),
        area_size: "120".to_string(),
        room_count: "4".to_string(),
        description: "Salon, mutfak ve iki yatak odası yenilenecek.".to_string(),
        schedule_date: "2024-06-01".to_string(),
        schedule_slot: "haftaici-sabah".to_string(),
        full_name: "Ayşe Yılmaz".to_string(),
        phone: "0532 123 45 67".to_string(),
        email: "ayse@example.com".to_string(),
        consent: true,
        ..Default::default()
    }
}

/// Helper function to create a wizard backed by a draft file in `dir`
pub fn create_test_wizard(dir: &Path, endpoint: &str) -> Wizard {
    WizardBuilder::new()
        .with_draft_path(Some(dir.join("draft.json")))
        .with_endpoint(Some(endpoint))
        .build()
        .expect("Failed to create wizard")
}

/// Helper function to create a temporary directory for draft files
pub fn create_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// One-shot HTTP endpoint answering with `status` and handing back the
/// request body.
pub async fn spawn_endpoint(status: u16) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock endpoint");
    let addr = listener.local_addr().expect("Failed to read local address");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept");
        let body = read_request_body(&mut socket).await;
        let response =
            format!("HTTP/1.1 {status} Mock\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Failed to respond");
        let _ = tx.send(body);
    });

    (endpoint_url(addr), rx)
}

/// An address nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    endpoint_url(addr)
}

fn endpoint_url(addr: SocketAddr) -> String {
    format!("http://{addr}/api/rezervasyon")
}

async fn read_request_body(socket: &mut tokio::net::TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let read = socket.read(&mut chunk).await.expect("Failed to read request");
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);

        let Some(header_end) = find(&buffer, b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buffer[..header_end]).to_ascii_lowercase();
        let length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buffer.len() >= header_end + 4 + length {
            return String::from_utf8_lossy(&buffer[header_end + 4..header_end + 4 + length])
                .into_owned();
        }
    }
    String::new()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
