use crate::shared::error::BomshipError;
use crate::shared::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// How a missing or unreadable properties file is treated.
///
/// Project builds want to fail fast on a broken version file; the
/// settings phase runs before the build is fully configured and must
/// tolerate the file not being there yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Missing or unreadable file is a fatal error.
    Strict,
    /// Missing or unreadable file degrades to an empty property set
    /// with a warning on stderr.
    Lenient,
}

/// A flat key→value property source read from a line-oriented
/// `key=value` file.
///
/// Supports the Java-properties subset the version file actually uses:
/// blank lines and lines starting with `#` or `!` are ignored, each
/// remaining line splits on the first `=`, keys and values are trimmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySource {
    entries: HashMap<String, String>,
}

impl PropertySource {
    /// Parses property file content. Lines without a `=` are skipped.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Self { entries }
    }

    /// Loads a properties file from disk.
    ///
    /// # Errors
    /// In `LoadMode::Strict`, returns an error if the file does not
    /// exist or cannot be read. In `LoadMode::Lenient` those cases
    /// yield an empty property set instead.
    pub fn load(path: &Path, mode: LoadMode) -> Result<Self> {
        if !path.exists() {
            match mode {
                LoadMode::Strict => {
                    return Err(BomshipError::PropertiesNotFound {
                        path: path.to_path_buf(),
                    }
                    .into());
                }
                LoadMode::Lenient => {
                    eprintln!(
                        "⚠️  Warning: version file '{}' does not exist, continuing with empty properties",
                        path.display()
                    );
                    return Ok(Self::default());
                }
            }
        }

        match fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) => match mode {
                LoadMode::Strict => Err(BomshipError::PropertiesRead {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()),
                LoadMode::Lenient => {
                    eprintln!(
                        "⚠️  Warning: error reading version file '{}': {}",
                        path.display(),
                        e
                    );
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or the empty string if absent.
    pub fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
