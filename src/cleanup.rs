use std::path::Path;

use crate::error::{SweepError, SweepResult};
use crate::pattern::FilePattern;

/// Delete the frame files written during capture, after a video has been
/// assembled from them.
///
/// Deletes indices `0..frame_count` in order and stops at the first failure;
/// files past a missing or locked one are left on disk.
pub fn delete_frame_files(
    output_dir: &Path,
    pattern: &FilePattern,
    frame_count: usize,
) -> SweepResult<()> {
    for index in 0..frame_count {
        let path = pattern.frame_path(output_dir, index);
        tracing::debug!("delete temporary file {}", path.display());
        std::fs::remove_file(&path).map_err(|e| {
            SweepError::io(format!("failed to delete '{}': {e}", path.display()))
        })?;
    }
    Ok(())
}
