//! Server-response interpretation for the upload request.
//!
//! The HTTP layer hands back a [`JsonResponse`]; this module turns it
//! into an [`UploadOutcome`] according to the contract of the drive
//! backend: 2xx with `{cid}` on success, non-2xx with an optional
//! `{error}` body on failure. Bodies that are not valid JSON are
//! tolerated -- the status code stays authoritative.

use serde_json::Value;

/// Fallback message for HTTP failures without a usable `error` field.
pub const UPLOAD_FAILED_FALLBACK: &str = "Upload failed";

/// A parsed HTTP response.
///
/// `ok` mirrors the transport-level success flag (2xx status); `body`
/// is `None` when the payload was empty or not valid JSON, which is
/// never an error in itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonResponse {
    /// Whether the status code is in the 2xx range.
    pub ok: bool,
    /// Numeric HTTP status.
    pub status: u16,
    /// Parsed JSON body, or `None` for empty/malformed payloads.
    pub body: Option<Value>,
}

impl JsonResponse {
    /// Build a response from a status code and raw body text.
    #[must_use]
    pub fn from_parts(status: u16, text: &str) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status,
            body: serde_json::from_str(text).ok(),
        }
    }

    /// The server-supplied `error` field, if present and non-empty.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|body| body.get("error"))
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
    }
}

/// Terminal outcome of an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The server stored the file and returned its content identifier.
    Accepted {
        /// CID naming the uploaded content.
        cid: String,
    },
    /// The upload did not complete; `message` is user-facing.
    Rejected {
        /// Failure description, already resolved by precedence.
        message: String,
    },
}

impl UploadOutcome {
    /// Interpret an HTTP response from `POST /upload`.
    ///
    /// A 2xx response with a non-empty string `cid` field is accepted.
    /// Everything else is rejected with, in precedence order: the
    /// server's `error` field, then [`UPLOAD_FAILED_FALLBACK`]. A 2xx
    /// response without a `cid` is treated as a failure too -- the
    /// caller cannot act on a success that names no content.
    #[must_use]
    pub fn from_response(response: &JsonResponse) -> Self {
        if response.ok {
            let cid = response
                .body
                .as_ref()
                .and_then(|body| body.get("cid"))
                .and_then(Value::as_str)
                .filter(|cid| !cid.is_empty());
            if let Some(cid) = cid {
                return Self::Accepted { cid: cid.into() };
            }
        }
        Self::Rejected {
            message: response
                .error_message()
                .unwrap_or(UPLOAD_FAILED_FALLBACK)
                .into(),
        }
    }

    /// Outcome for a transport-level fault (no response received).
    ///
    /// The fault's own message is surfaced to the user verbatim.
    #[must_use]
    pub fn from_transport_fault(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_determines_ok() {
        assert!(JsonResponse::from_parts(200, "{}").ok);
        assert!(JsonResponse::from_parts(204, "").ok);
        assert!(!JsonResponse::from_parts(199, "{}").ok);
        assert!(!JsonResponse::from_parts(302, "{}").ok);
        assert!(!JsonResponse::from_parts(500, "{}").ok);
    }

    #[test]
    fn malformed_body_is_tolerated() {
        let response = JsonResponse::from_parts(200, "<html>oops</html>");
        assert!(response.ok, "status stays authoritative");
        assert_eq!(response.body, None);
    }

    #[test]
    fn successful_upload_yields_the_cid() {
        let response = JsonResponse::from_parts(200, r#"{"cid":"bafy123"}"#);
        assert_eq!(
            UploadOutcome::from_response(&response),
            UploadOutcome::Accepted {
                cid: "bafy123".into()
            }
        );
    }

    #[test]
    fn server_error_message_takes_precedence() {
        let response = JsonResponse::from_parts(500, r#"{"error":"disk full"}"#);
        assert_eq!(
            UploadOutcome::from_response(&response),
            UploadOutcome::Rejected {
                message: "disk full".into()
            }
        );
    }

    #[test]
    fn unparsable_failure_body_falls_back_to_literal() {
        let response = JsonResponse::from_parts(500, "Internal Server Error");
        assert_eq!(
            UploadOutcome::from_response(&response),
            UploadOutcome::Rejected {
                message: UPLOAD_FAILED_FALLBACK.into()
            }
        );
    }

    #[test]
    fn empty_error_field_falls_back_to_literal() {
        let response = JsonResponse::from_parts(400, r#"{"error":""}"#);
        assert_eq!(
            UploadOutcome::from_response(&response),
            UploadOutcome::Rejected {
                message: UPLOAD_FAILED_FALLBACK.into()
            }
        );
    }

    #[test]
    fn ok_without_a_cid_is_rejected() {
        for body in ["{}", r#"{"cid":""}"#, r#"{"cid":42}"#, "not json"] {
            let response = JsonResponse::from_parts(200, body);
            assert!(
                matches!(
                    UploadOutcome::from_response(&response),
                    UploadOutcome::Rejected { .. }
                ),
                "body {body:?} must not be accepted without a cid"
            );
        }
    }

    #[test]
    fn transport_fault_message_is_surfaced_verbatim() {
        assert_eq!(
            UploadOutcome::from_transport_fault("connection refused"),
            UploadOutcome::Rejected {
                message: "connection refused".into()
            }
        );
    }
}
