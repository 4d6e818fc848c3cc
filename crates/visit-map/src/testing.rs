//! Local HTTP server with canned replies for exercising the API clients

use reqwest::blocking::Client;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Client that ignores any proxy settings from the environment
pub fn local_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

/// What the server saw for one connection
#[derive(Debug, Clone)]
pub struct SeenRequest {
    /// e.g. `GET /geocode?address=Paris HTTP/1.1`
    pub line: String,
    /// Header lines, lowercased
    pub headers: Vec<String>,
    pub body: String,
}

impl SeenRequest {
    pub fn has_header(&self, header: &str) -> bool {
        let header = header.to_ascii_lowercase();
        self.headers.iter().any(|h| *h == header)
    }
}

/// Bind to an ephemeral port and answer one connection per reply, in order.
///
/// Returns the `http://127.0.0.1:<port>` base and a handle that yields the
/// requests once every reply has been sent.
pub fn serve(replies: Vec<(&'static str, &'static str)>) -> (String, JoinHandle<Vec<SeenRequest>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        replies
            .into_iter()
            .map(|(status, body)| {
                let (stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream);

                let mut line = String::new();
                reader.read_line(&mut line).unwrap();

                let mut headers = Vec::new();
                let mut content_length = 0;
                loop {
                    let mut header = String::new();
                    reader.read_line(&mut header).unwrap();
                    let header = header.trim_end().to_ascii_lowercase();
                    if header.is_empty() {
                        break;
                    }
                    if let Some(len) = header.strip_prefix("content-length:") {
                        content_length = len.trim().parse().unwrap();
                    }
                    headers.push(header);
                }

                let mut body_bytes = vec![0; content_length];
                reader.read_exact(&mut body_bytes).unwrap();

                let reply = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                reader.get_mut().write_all(reply.as_bytes()).unwrap();

                SeenRequest {
                    line: line.trim_end().to_string(),
                    headers,
                    body: String::from_utf8(body_bytes).unwrap(),
                }
            })
            .collect()
    });

    (base, handle)
}
