use std::io::SeekFrom;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::plan::ChunkRange;
use crate::TransferError;

/// Reads planned byte ranges from a local file.
///
/// Each read seeks to the range start and returns exactly `range.len()`
/// bytes, so the transport precondition (payload length == range length)
/// holds by construction.
#[derive(Debug)]
pub struct RangeReader {
    file: File,
    size: u64,
}

impl RangeReader {
    /// Opens `path` for range reads.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, TransferError> {
        let file = File::open(path).await?;
        let size = file.metadata().await?.len();
        Ok(Self { file, size })
    }

    /// File size in bytes at open time.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Reads the exact bytes covered by `range`.
    ///
    /// Fails with [`TransferError::ShortRead`] if the file no longer
    /// holds `range.len()` bytes at `range.start` (truncated after the
    /// plan was computed).
    pub async fn read_range(&mut self, range: &ChunkRange) -> Result<Vec<u8>, TransferError> {
        self.file.seek(SeekFrom::Start(range.start)).await?;

        let mut buf = vec![0u8; range.len() as usize];
        self.file.read_exact(&mut buf).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                TransferError::ShortRead {
                    index: range.index,
                    expected: range.len(),
                }
            } else {
                TransferError::Io(e)
            }
        })?;

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::plan_ranges;
    use std::io::Write;

    fn create_test_file(dir: &Path, name: &str, data: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(data).unwrap();
        path
    }

    #[tokio::test]
    async fn reads_planned_ranges_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_file(dir.path(), "test.bin", b"AABBCCDDEE");

        let mut reader = RangeReader::open(&path).await.unwrap();
        assert_eq!(reader.size(), 10);

        let ranges = plan_ranges(reader.size(), 4);
        assert_eq!(ranges.len(), 3);

        assert_eq!(reader.read_range(&ranges[0]).await.unwrap(), b"AABB");
        assert_eq!(reader.read_range(&ranges[1]).await.unwrap(), b"CCDD");
        assert_eq!(reader.read_range(&ranges[2]).await.unwrap(), b"EE");
    }

    #[tokio::test]
    async fn rereading_a_range_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_file(dir.path(), "test.bin", b"0123456789");

        let mut reader = RangeReader::open(&path).await.unwrap();
        let ranges = plan_ranges(10, 4);

        // Out of order and repeated: the reader seeks every time.
        assert_eq!(reader.read_range(&ranges[1]).await.unwrap(), b"4567");
        assert_eq!(reader.read_range(&ranges[0]).await.unwrap(), b"0123");
        assert_eq!(reader.read_range(&ranges[1]).await.unwrap(), b"4567");
    }

    #[tokio::test]
    async fn truncated_file_is_a_short_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_file(dir.path(), "test.bin", b"0123456789");

        let mut reader = RangeReader::open(&path).await.unwrap();
        let ranges = plan_ranges(10, 4);

        // Shrink the file under the open reader.
        std::fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_len(5)
            .unwrap();

        let err = reader.read_range(&ranges[2]).await.unwrap_err();
        assert!(matches!(
            err,
            TransferError::ShortRead {
                index: 2,
                expected: 2
            }
        ));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RangeReader::open(dir.path().join("nope.bin"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::Io(_)));
    }
}
