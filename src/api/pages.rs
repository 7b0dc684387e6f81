use actix_files::NamedFile;
use actix_web::web;
use std::path::Path;

use crate::config::Config;

pub const INDEX_FILE: &str = "index.html";
pub const SOLAR_FILE: &str = "solar.html";

// A missing file becomes 404 through actix's io::Error mapping.
async fn open_page(dir: &Path, file: &str) -> actix_web::Result<NamedFile> {
    let path = dir.join(file);

    NamedFile::open_async(&path).await.map_err(|e| {
        log::warn!("⚠️  Cannot serve {}: {}", path.display(), e);
        e.into()
    })
}

pub async fn index(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    open_page(&config.pages_dir, INDEX_FILE).await
}

pub async fn solar(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    open_page(&config.pages_dir, SOLAR_FILE).await
}
