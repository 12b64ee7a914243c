//! Shared test helpers: in-memory collaborators and a one-shot HTTP server.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use kyuko::error::{AppError, Result};
use kyuko::models::Snapshot;
use kyuko::services::{AnnouncementSource, DeliveryStatus, Notifier};
use kyuko::storage::SnapshotStorage;

/// Source returning a fixed text, or a fetch error when `None`.
pub struct StaticSource(pub Option<String>);

impl StaticSource {
    pub fn text(text: &str) -> Self {
        Self(Some(text.to_string()))
    }

    pub fn failing() -> Self {
        Self(None)
    }
}

#[async_trait]
impl AnnouncementSource for StaticSource {
    async fn fetch_text(&self) -> Result<String> {
        self.0
            .clone()
            .ok_or_else(|| AppError::fetch("http://portal.test/", "connection refused"))
    }
}

/// Storage keeping every saved snapshot in memory.
#[derive(Default)]
pub struct MemoryStorage {
    pub saved: Mutex<Vec<Snapshot>>,
}

impl MemoryStorage {
    pub fn saved(&self) -> Vec<Snapshot> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnapshotStorage for MemoryStorage {
    async fn save(&self, snapshot: &Snapshot) -> Result<PathBuf> {
        self.saved.lock().unwrap().push(snapshot.clone());
        Ok(PathBuf::from("memory"))
    }

    async fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.saved.lock().unwrap().last().cloned())
    }
}

/// Notifier recording messages and answering with a fixed status.
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
    reply: Option<DeliveryStatus>,
}

impl RecordingNotifier {
    pub fn replying(status: DeliveryStatus) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            reply: Some(status),
        }
    }

    /// Notifier whose every send errors out.
    pub fn broken() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            reply: None,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &str) -> Result<DeliveryStatus> {
        self.messages.lock().unwrap().push(message.to_string());
        self.reply
            .clone()
            .ok_or_else(|| AppError::Io(std::io::ErrorKind::ConnectionReset.into()))
    }
}

/// A server that answers exactly one request.
pub struct OneShotServer {
    pub url: String,
    request: JoinHandle<String>,
}

impl OneShotServer {
    /// Start a server replying with the given status line, content type and body.
    pub async fn start(status_line: &str, content_type: &str, body: &[u8]) -> Self {
        let mut response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);

        Self::raw(response).await
    }

    /// Start a server writing the given bytes verbatim, then closing the connection.
    pub async fn raw(response: Vec<u8>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let request = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            stream.write_all(&response).await.unwrap();
            let _ = stream.shutdown().await;
            request
        });

        Self {
            url: format!("http://{addr}/"),
            request,
        }
    }

    /// The raw request the server received.
    pub async fn request(self) -> String {
        self.request.await.unwrap()
    }
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
