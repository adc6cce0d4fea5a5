//! Bounded header reads from the local filesystem

use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Reads at most `limit` bytes from the start of the file at `path`
///
/// Returns fewer bytes when the file is shorter. The file handle is dropped
/// before this returns, on success and on error.
pub async fn read_header(path: &Path, limit: usize) -> io::Result<Vec<u8>> {
    let file = File::open(path).await?;
    let mut header = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut header).await?;
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn reads_no_more_than_limit() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[7u8; 100]).unwrap();

        let header = read_header(file.path(), 32).await.unwrap();
        assert_eq!(header, vec![7u8; 32]);
    }

    #[tokio::test]
    async fn short_file_returns_what_is_there() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"BM").unwrap();

        let header = read_header(file.path(), 32).await.unwrap();
        assert_eq!(header, b"BM");
    }
}
