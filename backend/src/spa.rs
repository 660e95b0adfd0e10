//! Single-page-app routing over a static bundle

use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Router serving the bundle directory with `index.html` as the fallback
/// document for unmatched routes
pub fn router(dist_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");
    let bundle = ServeDir::new(dist_dir).fallback(ServeFile::new(index));
    Router::new().fallback_service(bundle)
}
