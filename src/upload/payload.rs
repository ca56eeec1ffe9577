use crate::shared::error::BomshipError;
use crate::shared::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Wire format of the Dependency-Track BOM PUT body.
#[derive(Debug, Serialize)]
struct BomSubmission<'a> {
    project: &'a str,
    bom: String,
}

/// Reads the BOM file and builds the JSON request body.
///
/// The file is read fully into memory and base64-encoded into the
/// `bom` field; both fields go through serde_json so the project id
/// is properly escaped.
///
/// # Errors
/// Returns [`BomshipError::BomRead`] if the file is missing or
/// unreadable. This is always fatal; the ignore-failures flag governs
/// only the remote response, not local I/O.
pub fn build_payload(bom_file: &Path, project_id: &str) -> Result<String> {
    let bytes = fs::read(bom_file).map_err(|e| BomshipError::BomRead {
        path: bom_file.to_path_buf(),
        details: e.to_string(),
    })?;

    let submission = BomSubmission {
        project: project_id,
        bom: STANDARD.encode(bytes),
    };
    Ok(serde_json::to_string(&submission)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_payload_round_trips_bom_bytes() {
        let dir = TempDir::new().unwrap();
        let bom_path = dir.path().join("bom.json");
        let original: &[u8] = b"{\"bomFormat\":\"CycloneDX\",\"specVersion\":\"1.5\"}";
        fs::write(&bom_path, original).unwrap();

        let payload = build_payload(&bom_path, "9f2c5a1e").unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["project"], "9f2c5a1e");

        let decoded = STANDARD.decode(value["bom"].as_str().unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_payload_escapes_project_id() {
        let dir = TempDir::new().unwrap();
        let bom_path = dir.path().join("bom.json");
        fs::write(&bom_path, b"{}").unwrap();

        let payload = build_payload(&bom_path, "weird\"id\\with specials").unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["project"], "weird\"id\\with specials");
    }

    #[test]
    fn test_missing_bom_file_fails_with_read_error() {
        let dir = TempDir::new().unwrap();
        let result = build_payload(&dir.path().join("missing.json"), "id");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read BOM file"));
    }

    #[test]
    fn test_payload_of_empty_bom_file() {
        let dir = TempDir::new().unwrap();
        let bom_path = dir.path().join("bom.json");
        fs::write(&bom_path, b"").unwrap();

        let payload = build_payload(&bom_path, "id").unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["bom"], "");
    }
}
