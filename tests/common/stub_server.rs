//! Minimal HTTP/1.1 server for exercising the fetch pipeline in tests.
//!
//! Serves a single static body. Failure modes are scriptable (error
//! status for the first N requests, truncated body, connection closed
//! without a response), and every request is counted so tests can assert
//! how many attempts a client made.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct StubServerOptions {
    /// Status served after the first `fail_first` requests.
    pub status: u16,
    /// Fail this many requests before serving normally.
    pub fail_first: usize,
    /// Status returned while failing.
    pub failure_status: u16,
    /// Advertise the full Content-Length but send only half the body
    /// before closing the connection.
    pub truncate_body: bool,
    /// Read the request, then close the connection without responding.
    pub drop_connections: bool,
}

impl Default for StubServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            fail_first: 0,
            failure_status: 503,
            truncate_body: false,
            drop_connections: false,
        }
    }
}

/// Handle to a running stub server.
pub struct StubServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl StubServer {
    /// Number of requests the server has accepted so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body` on every GET.
/// The server runs until the process exits.
pub fn start(body: Vec<u8>) -> StubServer {
    start_with_options(body, StubServerOptions::default())
}

/// Server that fails every request with the given status.
pub fn start_failing(status: u16) -> StubServer {
    start_with_options(
        Vec::new(),
        StubServerOptions {
            fail_first: usize::MAX,
            failure_status: status,
            ..Default::default()
        },
    )
}

/// Like `start` but allows customizing failure behavior.
pub fn start_with_options(body: Vec<u8>, opts: StubServerOptions) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let body = Arc::new(body);

    {
        let hits = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let request_index = hits.fetch_add(1, Ordering::SeqCst);
                let body = Arc::clone(&body);
                thread::spawn(move || handle(stream, &body, opts, request_index));
            }
        });
    }

    StubServer {
        url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: StubServerOptions,
    request_index: usize,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    if opts.drop_connections {
        return;
    }

    let (status, payload): (u16, &[u8]) = if request_index < opts.fail_first {
        (opts.failure_status, &[])
    } else {
        (opts.status, body)
    };

    // Connection: close keeps the client from pooling, so each request
    // shows up as its own accepted connection in the hit counter.
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        payload.len()
    );
    let _ = stream.write_all(response.as_bytes());
    if opts.truncate_body {
        let _ = stream.write_all(&payload[..payload.len() / 2]);
    } else {
        let _ = stream.write_all(payload);
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Error",
    }
}
