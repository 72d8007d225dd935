// ABOUTME: Minimal canned-response HTTP server used by the API client and app tests
// Each route answers with a fixed status and JSON body; every request is recorded

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string.
    pub path: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Debug, Clone)]
struct Reply {
    status: u16,
    body: String,
}

type Routes = Arc<Mutex<HashMap<(String, String), Reply>>>;

pub struct MockServer {
    addr: std::net::SocketAddr,
    routes: Routes,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: JoinHandle<()>,
}

impl MockServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Routes = Arc::default();
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();

        let task = {
            let routes = routes.clone();
            let requests = requests.clone();
            tokio::spawn(async move {
                while let Ok((stream, _)) = listener.accept().await {
                    let routes = routes.clone();
                    let requests = requests.clone();
                    tokio::spawn(async move {
                        let _ = handle(stream, routes, requests).await;
                    });
                }
            })
        };

        Self {
            addr,
            routes,
            requests,
            task,
        }
    }

    /// Base URL ending in `/api`, the prefix both services use.
    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Answers `method path` (path without query string, after `/api`) with `status` and `body`.
    pub fn route(&self, method: &str, path: &str, status: u16, body: impl Into<String>) {
        self.routes.lock().unwrap().insert(
            (method.to_string(), format!("/api{path}")),
            Reply {
                status,
                body: body.into(),
            },
        );
    }

    pub fn route_json(&self, method: &str, path: &str, status: u16, body: &serde_json::Value) {
        self.route(method, path, status, body.to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, method: &str, path_prefix: &str) -> usize {
        let prefix = format!("/api{path_prefix}");
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path.starts_with(&prefix))
            .count()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn handle(
    stream: TcpStream,
    routes: Routes,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).await?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).await? == 0 {
            break;
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).await?;

    requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let route_path = path.split('?').next().unwrap_or_default().to_string();
    let reply = routes
        .lock()
        .unwrap()
        .get(&(method, route_path))
        .cloned()
        .unwrap_or(Reply {
            status: 404,
            body: r#"{"status":404,"error":"Not Found","message":"No route"}"#.to_string(),
        });

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reason(reply.status),
        reply.body.len(),
        reply.body
    );

    let mut stream = reader.into_inner();
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        409 => "Conflict",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
