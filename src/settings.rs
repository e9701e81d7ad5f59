use std::path::{Path, PathBuf};

use crate::error::{SweepError, SweepResult};

/// Persisted settings. Only the encoder path for now; loaded by the caller and
/// handed to the components that need it, never looked up ambiently.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ffmpeg_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> SweepResult<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(SweepError::io(format!(
                    "failed to read settings '{}': {e}",
                    path.display()
                )));
            }
        };
        serde_json::from_str(&text).map_err(|e| {
            SweepError::io(format!(
                "failed to parse settings '{}': {e}",
                path.display()
            ))
        })
    }

    /// Write settings to `path` via a temporary file and rename, creating the
    /// parent directory if needed.
    pub fn save(&self, path: &Path) -> SweepResult<()> {
        let io_err =
            |e: std::io::Error| SweepError::io(format!("failed to write settings '{}': {e}", path.display()));

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| SweepError::io(format!("failed to serialize settings: {e}")))?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, text).map_err(io_err)?;
        std::fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }

    /// Record a new encoder path. Returns whether the value actually changed,
    /// so callers can skip the save when it did not.
    pub fn set_ffmpeg_path(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.ffmpeg_path.as_ref() == Some(&path) {
            return false;
        }
        self.ffmpeg_path = Some(path);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let settings = Settings::load(Path::new("target/settings_missing/none.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = PathBuf::from("target").join("settings_roundtrip");
        let path = dir.join("settings.json");

        let mut settings = Settings::default();
        assert!(settings.set_ffmpeg_path("/opt/ffmpeg/bin/ffmpeg"));
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn unchanged_path_reports_no_change() {
        let mut settings = Settings::default();
        assert!(settings.set_ffmpeg_path("/usr/bin/ffmpeg"));
        assert!(!settings.set_ffmpeg_path("/usr/bin/ffmpeg"));
        assert!(settings.set_ffmpeg_path("/usr/local/bin/ffmpeg"));
    }
}
