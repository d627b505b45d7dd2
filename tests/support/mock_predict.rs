use std::{
    io::{Read, Write},
    net::{SocketAddr, TcpListener, TcpStream},
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    thread::JoinHandle,
    time::Duration,
};

/// Canned-response HTTP server standing in for the prediction backend.
///
/// Serves the configured responses in order (the last one repeats) and
/// counts how many requests actually arrived, so tests can assert that
/// validation failures never touch the network.
pub struct MockPredictServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl MockPredictServer {
    /// Serve the same status/body for every request.
    pub fn start(status: u16, body: &str) -> Self {
        Self::start_with_responses(vec![(status, body.to_string())])
    }

    /// Serve the given responses in order; the final entry repeats.
    pub fn start_with_responses(responses: Vec<(u16, String)>) -> Self {
        assert!(!responses.is_empty(), "need at least one canned response");
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("mock server addr");
        let hits = Arc::new(AtomicUsize::new(0));
        let shutdown = Arc::new(AtomicBool::new(false));

        let thread_hits = hits.clone();
        let thread_shutdown = shutdown.clone();
        let handle = std::thread::spawn(move || {
            let mut served = 0usize;
            for stream in listener.incoming() {
                if thread_shutdown.load(Ordering::SeqCst) {
                    break;
                }
                let Ok(stream) = stream else { continue };
                let index = served.min(responses.len() - 1);
                let (status, body) = &responses[index];
                if serve_one(stream, *status, body) {
                    served += 1;
                    thread_hits.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        Self {
            addr,
            hits,
            shutdown,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of HTTP requests that reached the server.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockPredictServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        // Wake the accept loop; this connection sends no request and is not counted.
        let _ = TcpStream::connect(self.addr);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Read one HTTP request and answer with the canned response. Returns false
/// for connections that never send a request line (e.g. the shutdown wake).
fn serve_one(mut stream: TcpStream, status: u16, body: &str) -> bool {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(read) => {
                raw.extend_from_slice(&buf[..read]);
                if request_complete(&raw) {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    if !raw.starts_with(b"POST") {
        return false;
    }

    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
    true
}

fn request_complete(raw: &[u8]) -> bool {
    let Some(header_end) = raw
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos + 4)
    else {
        return false;
    };
    let headers = String::from_utf8_lossy(&raw[..header_end]);
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    raw.len() >= header_end + content_length
}
