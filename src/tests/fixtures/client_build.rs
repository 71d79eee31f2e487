use std::fs;
use tempfile::TempDir;

pub const INDEX_HTML: &str = "<!doctype html><div id=\"root\"></div>";
pub const APP_JS: &str = "console.log('client');";

/// A throwaway client build: `index.html` plus one static asset under `static/`.
pub fn client_build() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    fs::create_dir(dir.path().join("static")).unwrap();
    fs::write(dir.path().join("static").join("app.js"), APP_JS).unwrap();
    dir
}
