//! Portfolio server.
//!
//! A blocking `tiny_http` server that renders pages per request, so the
//! Projects filter (`?skill=`) and the contact form work live. Each request
//! is handled on its own thread; a contact submission waiting on the sender
//! does not hold up other requests.
//!
//! # Request resolution
//!
//! ```text
//! POST /contact          ──► contact::submit ──► 303 /contact?sent=ok|failed
//! GET  /, /about, ...    ──► view::render     ──► 200 text/html
//! GET  /_data/*.json     ──► generator::data  ──► 200 application/json
//! GET  <file in assets>  ──► file contents    ──► 200 <guessed type>
//! GET  anything else     ──► Page Not Found   ──► 404 text/html
//! ```

use crate::{
    catalog::Catalog,
    config::{SiteConfig, cfg},
    contact::{self, SimulatedSender},
    generator::data,
    log,
    route::Route,
    view::{self, PageContext},
};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    io::Read,
    net::{IpAddr, SocketAddr},
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

/// Largest accepted form body
const MAX_BODY_BYTES: u64 = 64 * 1024;

const HTML: &str = "text/html; charset=utf-8";

/// Start the server and block until Ctrl+C.
pub fn serve_site(catalog: Arc<Catalog>) -> Result<()> {
    let c = cfg();
    let interface: IpAddr = c.serve.interface.parse()?;

    let (server, addr) = try_bind_port(interface, c.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    // Blocks until Ctrl+C
    accept_requests(&server, &c, &catalog);
    Ok(())
}

/// Hand every incoming request to a thread of its own until the server is unblocked.
fn accept_requests(server: &Server, config: &Arc<SiteConfig>, catalog: &Arc<Catalog>) {
    for request in server.incoming_requests() {
        let config = Arc::clone(config);
        let catalog = Arc::clone(catalog);
        std::thread::spawn(move || {
            if let Err(e) = handle_request(request, &config, &catalog) {
                log!("error"; "request error: {e:#}");
            }
        });
    }
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

// ============================================================================
// Request Handling
// ============================================================================

/// What to send back for a request, independent of the transport.
#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Html { status: u16, body: String },
    Data { content_type: &'static str, body: Vec<u8> },
    Redirect { location: String },
    MethodNotAllowed,
}

fn handle_request(mut request: Request, config: &SiteConfig, catalog: &Catalog) -> Result<()> {
    let body = if *request.method() == Method::Post {
        let mut body = String::new();
        request
            .as_reader()
            .take(MAX_BODY_BYTES)
            .read_to_string(&mut body)
            .context("Failed to read request body")?;
        body
    } else {
        String::new()
    };

    let reply = resolve(request.method(), request.url(), &body, config, catalog)?;
    respond(request, reply)
}

/// Resolve a request to a [`Reply`].
fn resolve(method: &Method, url: &str, body: &str, config: &SiteConfig, catalog: &Catalog) -> Result<Reply> {
    let route = Route::parse(url);

    match method {
        Method::Post if matches!(route, Route::Contact(_)) => {
            let notice = contact::submit(body, &SimulatedSender::new(config.contact.delay()));
            Ok(Reply::Redirect { location: notice.location() })
        }
        Method::Get | Method::Head => resolve_get(route, config, catalog),
        _ => Ok(Reply::MethodNotAllowed),
    }
}

fn resolve_get(route: Route, config: &SiteConfig, catalog: &Catalog) -> Result<Reply> {
    let ctx = PageContext::new(config, catalog);

    let Route::NotFound(path) = &route else {
        let body = view::render(&route, ctx).into_string();
        return Ok(Reply::Html { status: 200, body });
    };

    if let Some(name) = path.strip_prefix(&format!("/{}/", data::DATA_DIR))
        && let Some(json) = data::read_data(catalog, name)
    {
        return Ok(Reply::Data {
            content_type: guess_content_type(Path::new(name)),
            body: json?.into_bytes(),
        });
    }

    if let Some(file) = asset_file(&config.build.assets, path) {
        let body = fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;
        return Ok(Reply::Data { content_type: guess_content_type(&file), body });
    }

    log!("route"; "not found: {path}");
    let body = view::render(&route, ctx).into_string();
    Ok(Reply::Html { status: 404, body })
}

/// Map a request path to a file in the assets directory.
///
/// Paths that would leave the directory are rejected.
fn asset_file(assets: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    let path = assets.join(relative);
    path.is_file().then_some(path)
}

// ============================================================================
// Response Helpers
// ============================================================================

fn respond(request: Request, reply: Reply) -> Result<()> {
    match reply {
        Reply::Html { status, body } => {
            let response = Response::from_string(body)
                .with_status_code(StatusCode(status))
                .with_header(header("Content-Type", HTML)?);
            request.respond(response)?;
        }
        Reply::Data { content_type, body } => {
            let response = Response::from_data(body).with_header(header("Content-Type", content_type)?);
            request.respond(response)?;
        }
        Reply::Redirect { location } => {
            let response = Response::empty(StatusCode(303)).with_header(header("Location", &location)?);
            request.respond(response)?;
        }
        Reply::MethodNotAllowed => {
            let response = Response::from_string("405 Method Not Allowed")
                .with_status_code(StatusCode(405))
                .with_header(header("Allow", "GET, HEAD, POST")?);
            request.respond(response)?;
        }
    }
    Ok(())
}

fn header(name: &str, value: &str) -> Result<Header> {
    Header::from_bytes(name, value).map_err(|()| anyhow!("Invalid header {name}: {value}"))
}

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        // Web content
        Some("html" | "htm") => HTML,
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",

        // Images
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",

        _ => "application/octet-stream",
    }
}
