use crate::types::date_window::DateWindow;
use log::info;
use std::io;
use std::path::{Path, PathBuf};

/// Creates `path` as a directory unless it already is one.
pub async fn ensure_dir_exists(path: &Path) -> io::Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("Path exists but is not a directory: {}", path.display()),
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating directory: {}", path.display());
            tokio::fs::create_dir_all(path).await
        }
        Err(e) => Err(e),
    }
}

/// Where the raw response for `station` over `window` is archived.
pub fn raw_archive_path(dir: &Path, station: &str, window: &DateWindow) -> PathBuf {
    dir.join(format!("{}_{}.txt", station, window.start.format("%Y%m%d")))
}

/// Stores a raw response below `dir`, returning the file written.
pub async fn archive_raw(
    dir: &Path,
    station: &str,
    window: &DateWindow,
    raw: &str,
) -> io::Result<PathBuf> {
    ensure_dir_exists(dir).await?;
    let path = raw_archive_path(dir, station, window);
    tokio::fs::write(&path, raw).await?;
    Ok(path)
}
