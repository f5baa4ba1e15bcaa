//! Atomic JSON document I/O.
//!
//! Every published document goes through write-to-temp-then-rename so a
//! reader polling the tree never observes truncated JSON.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use tec_common::{TecError, TecResult};

/// Write `value` as pretty-printed JSON at `path`, atomically.
///
/// Parent directories are created as needed. The temp file lives next to
/// the target so the final rename stays within one filesystem.
pub async fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> TecResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    let body = serde_json::to_vec_pretty(value)?;
    fs::write(tmp, body).await?;
    fs::rename(tmp, path).await?;

    Ok(())
}

/// Read a JSON document, returning `None` if the file does not exist.
///
/// A file that exists but fails to parse is reported as state corruption;
/// callers for whom the document is a convenience ledger (the manifest)
/// recover by reinitializing.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> TecResult<Option<T>> {
    let body = match fs::read(path).await {
        Ok(body) => body,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_slice(&body)
        .map(Some)
        .map_err(|e| TecError::StateCorruption {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}
