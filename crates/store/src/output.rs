//! Output file writing

use std::io;
use std::path::Path;
use tracing::debug;

/// Write a finished package to `path`, replacing any existing file.
///
/// Parent directories are not created; writing under a missing directory
/// fails with `io::ErrorKind::NotFound` and leaves nothing behind.
pub async fn write_output(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, bytes).await?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote output file");
    Ok(())
}
