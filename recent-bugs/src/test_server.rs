//! One-request-per-connection HTTP/1.1 server for exercising the clients.

use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A received request.
pub(crate) struct Request {
    /// Request target, e.g. `/1.0/nova?ws.op=searchTasks`.
    pub target: String,
    /// Header block, lowercased.
    pub headers: String,
}

/// Serves every connection with `respond` until the runtime shuts down.
pub(crate) async fn spawn<F>(respond: F) -> SocketAddr
where
    F: Fn(&Request) -> String + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
            }

            let raw = String::from_utf8_lossy(&raw);
            let (request_line, headers) = raw.split_once("\r\n").unwrap_or((&raw, ""));
            let request = Request {
                target: request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string(),
                headers: headers.to_ascii_lowercase(),
            };

            socket.write_all(respond(&request).as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
    });

    addr
}

/// Formats a complete response that closes the connection.
pub(crate) fn response(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut out = format!("HTTP/1.1 {status}\r\n");
    for (name, value) in headers {
        out.push_str(&format!("{name}: {value}\r\n"));
    }
    out.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ));
    out
}
