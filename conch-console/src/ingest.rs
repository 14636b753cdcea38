//! 商品图片摄取
//!
//! Reads the selected image files concurrently and encodes each as a
//! `data:` URL. The product stores all of its images in one string,
//! joined by a single space in selection order.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Separator between data URLs in the stored image string
pub const IMAGE_SEPARATOR: &str = " ";

/// Image ingestion failure
#[derive(Debug, Error)]
pub enum IngestError {
    /// A selected file could not be read
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read one file and encode it as a `data:` URL.
///
/// The MIME type comes from the file extension; unknown extensions fall
/// back to application/octet-stream.
pub async fn encode_data_url(path: &Path) -> Result<String, IngestError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let encoded = STANDARD.encode(&bytes);

    Ok(format!("data:{};base64,{}", mime.essence_str(), encoded))
}

/// Encode every selected image and join the results in selection order.
///
/// The reads run concurrently but the output order follows the input
/// order, not completion order. One failed read fails the whole batch;
/// no partial string is ever produced. An empty selection yields an
/// empty string.
pub async fn ingest_images(paths: &[PathBuf]) -> Result<String, IngestError> {
    let encoded = try_join_all(paths.iter().map(|path| encode_data_url(path))).await?;
    Ok(encoded.join(IMAGE_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[tokio::test]
    async fn test_encode_takes_mime_from_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "photo.png", b"not really a png");

        let url = encode_data_url(&path).await.unwrap();
        assert!(url.starts_with("data:image/png;base64,"));

        let encoded = url.rsplit(',').next().unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), b"not really a png");
    }

    #[tokio::test]
    async fn test_unknown_extension_is_octet_stream() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "blob.weird", b"???");

        let url = encode_data_url(&path).await.unwrap();
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }

    #[tokio::test]
    async fn test_join_preserves_selection_order() {
        let dir = TempDir::new().unwrap();
        // sizes differ so completion order would differ from selection order
        let big = write_file(&dir, "big.png", &vec![0u8; 256 * 1024]);
        let small = write_file(&dir, "small.txt", b"tiny");
        let mid = write_file(&dir, "mid.jpg", &vec![1u8; 32 * 1024]);

        let joined = ingest_images(&[big, small, mid]).await.unwrap();
        let segments: Vec<&str> = joined.split(IMAGE_SEPARATOR).collect();

        assert_eq!(segments.len(), 3);
        assert!(segments[0].starts_with("data:image/png;"));
        assert!(segments[1].starts_with("data:text/plain;"));
        assert!(segments[2].starts_with("data:image/jpeg;"));
    }

    #[tokio::test]
    async fn test_one_missing_file_fails_whole_batch() {
        let dir = TempDir::new().unwrap();
        let real = write_file(&dir, "real.png", b"ok");
        let missing = dir.path().join("missing.png");

        let err = ingest_images(&[real, missing.clone()]).await.unwrap_err();
        let IngestError::Read { path, .. } = err;
        assert_eq!(path, missing);
    }

    #[tokio::test]
    async fn test_empty_selection_yields_empty_string() {
        assert_eq!(ingest_images(&[]).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_segments_contain_no_separator() {
        // base64 output never contains a space, so the joined string
        // splits back into exactly the original segments
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.png", &[0u8, 255u8, 7u8, 42u8]);
        let b = write_file(&dir, "b.png", b"payload with spaces");

        let joined = ingest_images(&[a, b]).await.unwrap();
        assert_eq!(joined.split(IMAGE_SEPARATOR).count(), 2);
        assert_eq!(joined.matches("data:").count(), 2);
    }
}
