use serde::{Deserialize, Serialize};

/// Progress snapshot for an active upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadProgress {
    pub bytes_sent: u64,
    pub total_bytes: u64,
    /// Index of the most recently confirmed chunk.
    pub chunk_index: usize,
    pub chunk_count: usize,
}

impl UploadProgress {
    /// Returns the upload progress as a percentage, clamped to `[0, 100]`.
    ///
    /// A zero-byte upload is 100% by definition: the plan is empty and
    /// there is nothing left to send.
    pub fn percentage(&self) -> f64 {
        if self.total_bytes == 0 {
            return 100.0;
        }
        let pct = self.bytes_sent as f64 / self.total_bytes as f64 * 100.0;
        pct.clamp(0.0, 100.0)
    }
}

/// Builds an [`UploadProgress`] snapshot. Pure; no side effects.
pub fn report(
    bytes_sent: u64,
    total_bytes: u64,
    chunk_index: usize,
    chunk_count: usize,
) -> UploadProgress {
    UploadProgress {
        bytes_sent,
        total_bytes,
        chunk_index,
        chunk_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_basic() {
        let p = report(512, 1024, 0, 2);
        assert_eq!(p.percentage(), 50.0);
    }

    #[test]
    fn percentage_complete() {
        let p = report(1024, 1024, 1, 2);
        assert_eq!(p.percentage(), 100.0);
    }

    #[test]
    fn zero_total_is_one_hundred_percent() {
        let p = report(0, 0, 0, 0);
        assert_eq!(p.percentage(), 100.0);
    }

    #[test]
    fn percentage_clamped_to_one_hundred() {
        let p = report(2048, 1024, 0, 1);
        assert_eq!(p.percentage(), 100.0);
    }

    #[test]
    fn report_is_pure() {
        assert_eq!(report(10, 100, 0, 10), report(10, 100, 0, 10));
    }

    #[test]
    fn snapshot_serializes() {
        let p = report(5_000_000, 12_000_000, 0, 3);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"bytes_sent\":5000000"));
        assert!(json.contains("\"chunk_count\":3"));
    }
}
