//! Minimal HTTP/1.1 server for integration tests.
//!
//! Every connection carries one GET; the handler maps the request target
//! (path plus query string) to a status code and body. Each request's target
//! and `User-Agent` header are recorded for later assertions.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub type Reply = (u16, Vec<u8>);

#[derive(Clone, Debug)]
pub struct Seen {
    pub target: String,
    pub user_agent: Option<String>,
}

pub struct Server {
    /// Base URL without trailing slash.
    pub base: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl Server {
    pub fn requests(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

/// Starts the server in a background thread.
pub fn serve<F>(handler: F) -> Server
where
    F: Fn(&str) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let handler = Arc::new(handler);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let handler = Arc::clone(&handler);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &*handler, &log));
        }
    });
    Server {
        base: format!("http://127.0.0.1:{}", port),
        seen,
    }
}

pub fn json(body: &str) -> Reply {
    (200, body.as_bytes().to_vec())
}

pub fn not_found() -> Reply {
    (404, b"not found".to_vec())
}

fn handle<F: Fn(&str) -> Reply>(mut stream: TcpStream, handler: &F, log: &Mutex<Vec<Seen>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&request);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_owned();
    let user_agent = request.lines().skip(1).find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.trim().eq_ignore_ascii_case("user-agent") {
            Some(value.trim().to_owned())
        } else {
            None
        }
    });
    log.lock().unwrap().push(Seen {
        target: target.clone(),
        user_agent,
    });
    let (status, body) = handler(&target);
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
    let _ = stream.flush();
}
