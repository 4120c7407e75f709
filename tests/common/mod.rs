//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc::UnboundedSender;

/// What a mock backend saw in one request.
#[derive(Debug)]
pub struct CapturedRequest {
    /// First line of the request, e.g. "POST /upload HTTP/1.1".
    pub request_line: String,
    /// Value of the Content-Type header, if present.
    pub content_type: Option<String>,
    /// Full request body bytes.
    pub body: Vec<u8>,
}

/// Start a mock backend that answers every request with a fixed response.
pub async fn start_mock_backend(addr: SocketAddr, status: u16, response_body: &'static [u8]) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        // Read the request fully before answering so the
                        // client never sees a reset mid-send.
                        let _ = read_request(&mut socket).await;
                        let _ = write_response(&mut socket, status, response_body).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Start a mock backend that records each request it receives.
pub async fn start_capturing_backend(
    addr: SocketAddr,
    status: u16,
    response_body: &'static [u8],
    tx: UnboundedSender<CapturedRequest>,
) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        if let Ok(captured) = read_request(&mut socket).await {
                            let _ = tx.send(captured);
                        }
                        let _ = write_response(&mut socket, status, response_body).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Read one HTTP/1.1 request (head + Content-Length-delimited body).
async fn read_request(socket: &mut TcpStream) -> std::io::Result<CapturedRequest> {
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let request_line = head.lines().next().unwrap_or_default().to_string();
    let content_type = header_value(&head, "content-type");
    let content_length: usize = header_value(&head, "content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);

    Ok(CapturedRequest {
        request_line,
        content_type,
        body,
    })
}

async fn write_response(
    socket: &mut TcpStream,
    status: u16,
    body: &[u8],
) -> std::io::Result<()> {
    let status_text = match status {
        200 => "200 OK",
        400 => "400 Bad Request",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    };

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_text,
        body.len()
    );
    socket.write_all(head.as_bytes()).await?;
    socket.write_all(body).await?;
    socket.shutdown().await
}

fn header_value(head: &str, name: &str) -> Option<String> {
    head.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if key.trim().eq_ignore_ascii_case(name) {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
