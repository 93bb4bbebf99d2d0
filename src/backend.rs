use crate::{
    logging::{self, log_event, LogLevel},
    site::{config::SiteConfig, content::SERVICE_DETAILS},
};
use axum::{
    extract::{Path, Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};
use url::Url;

const DEFAULT_PORT: u64 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const PORT_BOUNDS: (u64, u64) = (1, 65_535);
const REQUEST_ID_HEADER: &str = "x-request-id";
const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
struct ServerConfig {
    port: u16,
    dist_dir: PathBuf,
    log_level: LogLevel,
    site: SiteConfig,
}

impl ServerConfig {
    fn from_env() -> Self {
        let port = parse_env_u64_with_bounds("PORT", DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_env_non_empty_string("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        let defaults = SiteConfig::default();
        let backend_endpoint = parse_env_http_url("BACKEND_ENDPOINT")
            .map(|url| url.as_str().trim_end_matches('/').to_string())
            .unwrap_or(defaults.backend_endpoint);
        let backend_project_id =
            parse_env_non_empty_string("BACKEND_PROJECT_ID").unwrap_or(defaults.backend_project_id);

        Self {
            port: u16::try_from(port).unwrap_or(8080),
            dist_dir,
            log_level,
            site: SiteConfig {
                backend_endpoint,
                backend_project_id,
            },
        }
    }

    fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[derive(Clone)]
pub struct AppState {
    config: ServerConfig,
}

pub async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env();
    logging::set_threshold(config.log_level);

    let bind_address = format!("0.0.0.0:{}", config.port);
    let port = config.port;
    let app = router(AppState { config });

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    log_event(
        LogLevel::Info,
        "server_listening",
        serde_json::json!({ "address": format!("http://127.0.0.1:{port}") }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    let index = state.config.index_path();
    let static_service = ServeDir::new(&state.config.dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/site-config", get(get_site_config))
        .route("/sitemap.xml", get(get_sitemap))
        .route("/services/{slug}", get(get_service_page))
        .fallback_service(static_service)
        .layer(middleware::from_fn(request_context))
        .with_state(state)
}

async fn request_context(request: Request, next: Next) -> Response {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    log_event(
        LogLevel::Debug,
        "request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
        }),
    );

    let mut response = next.run(request).await;
    stamp_request_id(response.headers_mut(), &request_id);

    log_event(
        LogLevel::Info,
        "request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
            "status": response.status().as_u16(),
            "duration_ms": request_started_at.elapsed().as_millis(),
        }),
    );
    response
}

async fn get_site_config(State(state): State<AppState>) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, cache_control("no-store"));
    (StatusCode::OK, headers, Json(state.config.site.clone()))
}

async fn get_sitemap(headers: HeaderMap) -> impl IntoResponse {
    let base = public_base_url(&headers);
    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/xml; charset=utf-8"),
    );
    response_headers.insert(header::CACHE_CONTROL, cache_control("public, max-age=3600"));
    (StatusCode::OK, response_headers, sitemap_xml(&base))
}

/// Detail routes render the single-page shell either way; only the status
/// tells crawlers whether the slug exists.
async fn get_service_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let status = if SERVICE_DETAILS.iter().any(|detail| detail.slug == slug) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    match tokio::fs::read_to_string(state.config.index_path()).await {
        Ok(shell) => (status, Html(shell)).into_response(),
        Err(error) => {
            log_event(
                LogLevel::Info,
                "index_unavailable",
                serde_json::json!({
                    "path": state.config.index_path().display().to_string(),
                    "error": error.to_string(),
                }),
            );
            (StatusCode::SERVICE_UNAVAILABLE, "site bundle missing").into_response()
        }
    }
}

fn sitemap_xml(base: &str) -> String {
    let mut paths = vec!["/".to_string()];
    paths.extend(
        SERVICE_DETAILS
            .iter()
            .map(|detail| format!("/services/{}", detail.slug)),
    );

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in paths {
        xml.push_str(&format!("  <url><loc>{base}{path}</loc></url>\n"));
    }
    xml.push_str("</urlset>\n");
    xml
}

fn public_base_url(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or("localhost");
    let scheme = match headers
        .get(FORWARDED_PROTO_HEADER)
        .and_then(|raw| raw.to_str().ok())
    {
        Some("https") => "https",
        _ => "http",
    };

    Url::parse(&format!("{scheme}://{host}"))
        .map(|url| url.as_str().trim_end_matches('/').to_string())
        .unwrap_or_else(|_| "http://localhost".to_string())
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env_http_url(name: &str) -> Option<Url> {
    let value = parse_env_non_empty_string(name)?;
    let parsed = Url::parse(&value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    parse_env_non_empty_string(name)
        .and_then(|value| LogLevel::parse(&value))
        .unwrap_or(default)
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn stamp_request_id(headers: &mut HeaderMap, request_id: &str) {
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn test_state(dist_dir: PathBuf) -> AppState {
        AppState {
            config: ServerConfig {
                port: 8080,
                dist_dir,
                log_level: DEFAULT_LOG_LEVEL,
                site: SiteConfig::default(),
            },
        }
    }

    fn dist_with_index(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("amazeballs-site-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        std::fs::write(dir.join("index.html"), "<div id=\"app\"></div>").expect("index written");
        dir
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn site_config_is_served_uncached() {
        let response = get_site_config(State(test_state(PathBuf::from("dist"))))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("no-store"))
        );
        let payload: serde_json::Value =
            serde_json::from_str(&body_text(response).await).expect("json body");
        assert_eq!(payload["backendEndpoint"], "https://nyc.cloud.appwrite.io/v1");
    }

    #[tokio::test]
    async fn known_service_slug_renders_shell() {
        let dist = dist_with_index("known");
        let response = get_service_page(State(test_state(dist)), Path("web-development".to_string())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn unknown_service_slug_is_not_found_with_shell() {
        let dist = dist_with_index("unknown");
        let response = get_service_page(State(test_state(dist)), Path("nope".to_string())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn missing_bundle_is_reported() {
        let missing = std::env::temp_dir().join("amazeballs-site-missing-bundle");
        let response = get_service_page(State(test_state(missing)), Path("web-development".to_string())).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn sitemap_lists_every_detail_page() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("amazeballs.test"));
        headers.insert(FORWARDED_PROTO_HEADER, HeaderValue::from_static("https"));

        let body = body_text(get_sitemap(headers).await.into_response()).await;
        assert!(body.contains("<loc>https://amazeballs.test/</loc>"));
        for detail in SERVICE_DETAILS {
            assert!(body.contains(&format!("https://amazeballs.test/services/{}", detail.slug)));
        }
    }

    #[test]
    fn request_id_is_echoed_or_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
        assert_ne!(generated, resolve_request_id(&HeaderMap::new()));

        let mut response_headers = HeaderMap::new();
        stamp_request_id(&mut response_headers, "abc-123");
        assert_eq!(
            response_headers.get(REQUEST_ID_HEADER),
            Some(&HeaderValue::from_static("abc-123"))
        );
    }

    #[test]
    fn env_values_outside_bounds_fall_back() {
        std::env::set_var("AMAZEBALLS_TEST_PORT_OUT_OF_RANGE", "70000");
        std::env::set_var("AMAZEBALLS_TEST_PORT_IN_RANGE", " 3000 ");
        std::env::set_var("AMAZEBALLS_TEST_ENDPOINT", "ftp://example.test");
        std::env::set_var("AMAZEBALLS_TEST_LEVEL", "DEBUG");

        assert_eq!(
            parse_env_u64_with_bounds("AMAZEBALLS_TEST_PORT_OUT_OF_RANGE", DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );
        assert_eq!(
            parse_env_u64_with_bounds("AMAZEBALLS_TEST_PORT_IN_RANGE", DEFAULT_PORT, PORT_BOUNDS),
            3000
        );
        assert!(parse_env_http_url("AMAZEBALLS_TEST_ENDPOINT").is_none());
        assert_eq!(parse_log_level("AMAZEBALLS_TEST_LEVEL", LogLevel::Info), LogLevel::Debug);
        assert_eq!(parse_log_level("AMAZEBALLS_TEST_UNSET_LEVEL", LogLevel::Info), LogLevel::Info);
    }

    #[test]
    fn base_url_defaults_to_plain_http() {
        assert_eq!(public_base_url(&HeaderMap::new()), "http://localhost");
    }
}
