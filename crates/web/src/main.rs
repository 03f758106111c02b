use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::{Component, Path, PathBuf};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

const PORT: u16 = 3000;
const INDEX_FILE: &str = "index.html";

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let root = std::env::current_dir()?;
    let server = Server::http(("0.0.0.0", PORT))?;
    log::info!("Poker Slots game running at http://localhost:{PORT}");
    log::info!("serving {}", root.display());

    for request in server.incoming_requests() {
        if let Err(err) = handle_request(request, &root) {
            log::warn!("request error: {err}");
        }
    }
    Ok(())
}

fn handle_request(request: Request, root: &Path) -> Result<(), Box<dyn Error>> {
    if request.method() != &Method::Get {
        log::debug!("{} {} -> 405", request.method(), request.url());
        request.respond(Response::empty(StatusCode(405)))?;
        return Ok(());
    }

    let url = request.url().to_string();
    match resolve_path(root, &url) {
        Some(path) if path.is_file() => {
            log::debug!("GET {url} -> {}", path.display());
            respond_with_file(request, &path)?;
        }
        _ => {
            log::debug!("GET {url} -> 404");
            request.respond(Response::empty(StatusCode(404)))?;
        }
    }
    Ok(())
}

/// Maps a request path onto a file under `root`. `/` is the index page;
/// anything that would climb out of `root` is refused.
fn resolve_path(root: &Path, url: &str) -> Option<PathBuf> {
    let path = url
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let relative = path.trim_start_matches('/');
    if relative.is_empty() {
        return Some(root.join(INDEX_FILE));
    }
    let relative = Path::new(relative);
    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("wasm") => "application/wasm",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn respond_with_file(request: Request, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut file = File::open(path)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    let header = Header::from_bytes(&b"Content-Type"[..], content_type(path))
        .map_err(|_| "invalid content-type header")?;
    request.respond(Response::from_data(content).with_header(header))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_serves_index() {
        let root = Path::new("/srv/game");
        assert_eq!(
            resolve_path(root, "/"),
            Some(PathBuf::from("/srv/game/index.html"))
        );
        assert_eq!(
            resolve_path(root, "/?v=2"),
            Some(PathBuf::from("/srv/game/index.html"))
        );
    }

    #[test]
    fn nested_assets_resolve_under_root() {
        let root = Path::new("/srv/game");
        assert_eq!(
            resolve_path(root, "/sprites/cards/ClassicCards.png?cache=1"),
            Some(PathBuf::from("/srv/game/sprites/cards/ClassicCards.png"))
        );
    }

    #[test]
    fn traversal_is_refused() {
        let root = Path::new("/srv/game");
        assert_eq!(resolve_path(root, "/../secret.txt"), None);
        assert_eq!(resolve_path(root, "/sprites/../../etc/passwd"), None);
        assert_eq!(resolve_path(root, "/./game.js"), None);
    }

    #[test]
    fn content_types_follow_extension() {
        assert_eq!(
            content_type(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(content_type(Path::new("game.JS")), "application/javascript");
        assert_eq!(content_type(Path::new("LightBricks.png")), "image/png");
        assert_eq!(
            content_type(Path::new("LICENSE")),
            "application/octet-stream"
        );
    }
}
