//! Stored-file records returned by the drive backend.

use serde::Deserialize;
use serde_json::Value;

/// One previously uploaded file, as listed by `GET /my_uploads`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredFile {
    /// Database record identifier, used for deletes.
    pub id: u64,
    /// Content identifier of the stored bytes.
    pub cid: String,
    /// Original filename.
    pub filename: String,
    /// Content type recorded at upload time.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Upload timestamp (ISO 8601, server-formatted).
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// Extract the file list from a `GET /my_uploads` response body.
///
/// The endpoint wraps its rows as `{"files": [...]}`. Missing or
/// malformed listings degrade to an empty vector -- the listing is
/// auxiliary and must never take the page down.
#[must_use]
pub fn parse_listing(body: Option<&Value>) -> Vec<StoredFile> {
    body.and_then(|body| body.get("files"))
        .and_then(|files| serde_json::from_value(files.clone()).ok())
        .unwrap_or_default()
}

/// Validate a manually entered CID.
///
/// Returns the trimmed value, or `None` when nothing usable remains --
/// in which case the caller shows a validation notice and looks
/// nothing up.
#[must_use]
pub fn validate_cid_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn parses_a_well_formed_listing() {
        let body = json!({"files": [
            {"id": 1, "cid": "bafyA", "filename": "a.png",
             "content_type": "image/png", "uploaded_at": "2026-01-02T03:04:05"},
            {"id": 2, "cid": "bafyB", "filename": "b.pdf"},
        ]});
        let files = parse_listing(Some(&body));
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].cid, "bafyA");
        assert_eq!(files[1].content_type, None);
    }

    #[test]
    fn whitespace_only_cid_input_is_rejected() {
        assert_eq!(validate_cid_input(""), None);
        assert_eq!(validate_cid_input("   "), None);
        assert_eq!(validate_cid_input("\t\n"), None);
    }

    #[test]
    fn cid_input_is_trimmed_before_use() {
        assert_eq!(validate_cid_input(" bafy123 "), Some("bafy123".into()));
        assert_eq!(validate_cid_input("bafy123"), Some("bafy123".into()));
    }

    #[test]
    fn missing_or_malformed_listings_degrade_to_empty() {
        assert_eq!(parse_listing(None), vec![]);
        assert_eq!(parse_listing(Some(&Value::Null)), vec![]);
        let wrong_shape = json!({"files": {"id": 1}});
        assert_eq!(parse_listing(Some(&wrong_shape)), vec![]);
    }
}
