//! Canned HTTP/1.1 responses on a local port, for exercising the adapters.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::DictionaryConfig;

/// `(path prefix, status, body)`; the first matching prefix answers.
pub(crate) type Route = (&'static str, u16, &'static str);

pub(crate) struct TestServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub(crate) async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let head = read_head(&mut stream).await;
                let target = head
                    .lines()
                    .next()
                    .and_then(|line| line.split(' ').nth(1))
                    .unwrap_or_default()
                    .to_owned();
                recorded.lock().unwrap().push(head);
                let (status, body) = routes
                    .iter()
                    .find(|(prefix, _, _)| target.starts_with(*prefix))
                    .map(|(_, status, body)| (*status, *body))
                    .unwrap_or((404, ""));
                let response = format!(
                    "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        Self { addr, requests }
    }

    pub(crate) fn base(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request heads in arrival order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Request targets (path and query) in arrival order.
    pub(crate) fn targets(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|head| head.lines().next()?.split(' ').nth(1).map(str::to_owned))
            .collect()
    }
}

async fn read_head(stream: &mut tokio::net::TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

/// Every provider pointed at `base`.
pub(crate) fn config(base: &str) -> DictionaryConfig {
    DictionaryConfig {
        learners_key: "l".to_owned(),
        collegiate_key: "c".to_owned(),
        thesaurus_key: "t".to_owned(),
        rapidapi_key: "r".to_owned(),
        rapidapi_host: "words.test".to_owned(),
        unsplash_access_key: "u".to_owned(),
        dictionary_base: base.to_owned(),
        words_api_base: base.to_owned(),
        unsplash_base: base.to_owned(),
        timeout: Duration::from_secs(5),
    }
}

/// A base URL nothing listens on.
pub(crate) async fn closed_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
