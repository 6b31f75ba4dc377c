//! Minimal static file server for previewing the site locally.
//!
//! One state, stateless per request: the URL path is resolved against the
//! root directory (`/` maps to `index.html`), the file is read as raw
//! bytes, and the response carries a Content-Type looked up from the
//! extension by [`mime`]. Any read failure, including the path being a
//! directory, collapses to the same fixed 404 page.
//!
//! This is a preview tool, not a hardened server: requests resolve
//! directly against the root with no canonicalization, the request method
//! is not consulted, and nothing is cached. The default bind address is
//! loopback.

pub mod mime;

use std::convert::Infallible;
use std::error::Error;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::fs;
use tokio::net::TcpListener;
use tracing::{debug, error, info, instrument, warn};

/// Served when the request path is `/`.
const DEFAULT_DOCUMENT: &str = "index.html";

/// Fixed body for every failed lookup, whatever the underlying cause.
const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>404 Not Found</title>
</head>
<body>
  <h1>404</h1>
  <p>That page does not exist. <a href="/">Back to the front page.</a></p>
</body>
</html>
"#;

/// Runs the server until the process is killed.
///
/// Each accepted connection is served on its own task; accept errors are
/// logged and the loop keeps going.
///
/// # Arguments
///
/// * `addr` - Address to listen on.
/// * `root` - Directory the URL paths resolve against.
#[instrument(level = "info", skip_all, fields(%addr, root = %root.display()))]
pub async fn run(addr: SocketAddr, root: PathBuf) -> Result<(), Box<dyn Error>> {
    let listener = TcpListener::bind(addr).await?;
    info!("listening");

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(err) => {
                error!(error = %err, "failed to accept connection");
                continue;
            }
        };

        let root = root.clone();
        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |req| {
                let root = root.clone();
                async move { Ok::<_, Infallible>(handle(req, &root).await) }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                debug!(%peer, error = %err, "connection closed with error");
            }
        });
    }
}

/// Answers one request: resolve, read, respond.
///
/// The request method is ignored; only the URL path matters.
async fn handle<B>(req: Request<B>, root: &Path) -> Response<Full<Bytes>> {
    let path = resolve_path(root, req.uri().path());

    match load_file(&path).await {
        Some((content, content_type)) => {
            info!(
                method = %req.method(),
                path = req.uri().path(),
                bytes = content.len(),
                "200"
            );
            build_file_response(content, content_type)
        }
        None => {
            warn!(method = %req.method(), path = req.uri().path(), "404");
            build_not_found()
        }
    }
}

/// Maps a URL path onto the filesystem.
///
/// The bare root path serves [`DEFAULT_DOCUMENT`]. Dot segments are not
/// sanitized; the path resolves through the filesystem exactly as given.
fn resolve_path(root: &Path, uri_path: &str) -> PathBuf {
    let relative = uri_path.trim_start_matches('/');
    if relative.is_empty() {
        root.join(DEFAULT_DOCUMENT)
    } else {
        root.join(relative)
    }
}

/// Reads a file and pairs it with its Content-Type.
///
/// Returns `None` on any read failure so the caller serves the 404 page.
async fn load_file(path: &Path) -> Option<(Vec<u8>, &'static str)> {
    let content = fs::read(path).await.ok()?;
    let content_type = mime::content_type(path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

fn build_file_response(content: Vec<u8>, content_type: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content.len())
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|err| {
            error!(error = %err, "failed to build file response");
            Response::new(Full::new(Bytes::new()))
        })
}

fn build_not_found() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(NOT_FOUND_PAGE)))
        .unwrap_or_else(|err| {
            error!(error = %err, "failed to build 404 response");
            Response::new(Full::new(Bytes::new()))
        })
}
