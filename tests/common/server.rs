//! A local HTTP/1.1 server answering fixed routes, so the real Plex client
//! can be exercised without a media server.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Status and body returned for one request target.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn json(value: serde_json::Value) -> Self {
        Self::ok(value.to_string())
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }
}

/// What the server saw of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Path and query of the request line.
    pub target: String,
    /// Value of the `X-Plex-Token` header, if sent.
    pub token: Option<String>,
}

/// Routes keyed by request target. Unknown targets answer 404.
#[derive(Debug, Default)]
pub struct TestServer {
    routes: HashMap<String, Reply>,
}

/// A started [`TestServer`].
#[derive(Debug)]
pub struct RunningServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl TestServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, target: &str, reply: Reply) -> Self {
        self.routes.insert(target.to_string(), reply);
        self
    }

    /// Bind an ephemeral local port and serve until the test runtime stops.
    pub async fn start(self) -> RunningServer {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read local address");

        let routes = Arc::new(self.routes);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let routes = routes.clone();
                let seen = seen.clone();
                tokio::spawn(async move {
                    let _ = respond(socket, &routes, &seen).await;
                });
            }
        });

        RunningServer {
            base_url: format!("http://{addr}"),
            requests,
        }
    }
}

impl RunningServer {
    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn targets(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.target).collect()
    }
}

async fn respond(
    mut socket: TcpStream,
    routes: &HashMap<String, Reply>,
    seen: &Mutex<Vec<Request>>,
) -> io::Result<()> {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        head.extend_from_slice(&buf[..n]);
    }

    let head = String::from_utf8_lossy(&head);
    let mut lines = head.lines();
    let target = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let token = lines.find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.eq_ignore_ascii_case("x-plex-token")
            .then(|| value.trim().to_string())
    });

    let reply = routes
        .get(&target)
        .cloned()
        .unwrap_or_else(|| Reply::status(404));
    seen.lock().unwrap().push(Request { target, token });

    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status,
        reason(reply.status),
        reply.body.len()
    );
    socket.write_all(header.as_bytes()).await?;
    socket.write_all(&reply.body).await?;
    socket.shutdown().await
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        _ => "Error",
    }
}
