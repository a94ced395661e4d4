//! Local preview classification and markup generation.
//!
//! A selected file is classified purely by its filename extension --
//! never by sniffing byte content -- into one of four preview classes.
//! The classified payload serializes to an HTML fragment for the
//! preview pane, with every interpolated value escaped.

use crate::escape::escape_html;

/// Extensions rendered as an inline `<img>` preview.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Extensions rendered as a preformatted text preview.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "csv", "json", "log", "py", "html", "js", "css"];

/// How a file's bytes must be decoded to build its preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// Decode to a browser-displayable URL (`<img>` / `<iframe>` source).
    Binary,
    /// Decode as UTF-8 text.
    Text,
    /// No decode -- the preview is built from the filename alone.
    None,
}

/// Preview class of a selected file, derived from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewClass {
    /// Raster image, shown inline.
    Image,
    /// PDF document, shown in an embedded viewer.
    Document,
    /// Plain text or code, shown preformatted.
    Text,
    /// Anything else -- a generic placeholder is shown instead.
    Unsupported,
}

impl PreviewClass {
    /// Classify a filename by its extension, case-insensitively.
    ///
    /// Checked in precedence order: image extensions, then `pdf`, then
    /// text extensions, then [`PreviewClass::Unsupported`]. Filenames
    /// without an extension are always unsupported.
    #[must_use]
    pub fn of(filename: &str) -> Self {
        let Some((_, ext)) = filename.rsplit_once('.') else {
            return Self::Unsupported;
        };
        if IMAGE_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)) {
            Self::Image
        } else if ext.eq_ignore_ascii_case("pdf") {
            Self::Document
        } else if TEXT_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)) {
            Self::Text
        } else {
            Self::Unsupported
        }
    }

    /// The decode step required before this class can be rendered.
    #[must_use]
    pub const fn decode_mode(self) -> DecodeMode {
        match self {
            Self::Image | Self::Document => DecodeMode::Binary,
            Self::Text => DecodeMode::Text,
            Self::Unsupported => DecodeMode::None,
        }
    }
}

/// The rendered representation of a selected file for local display.
///
/// `src` values are Blob object URLs produced by `kumo-io`; `content`
/// is the decoded UTF-8 text. The payload is display-only -- it never
/// touches the network and the upload path never reads it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewPayload {
    /// Inline image preview.
    Image {
        /// Object URL for the image bytes.
        src: String,
    },
    /// Embedded document viewer.
    Document {
        /// Object URL for the document bytes.
        src: String,
    },
    /// Preformatted text preview.
    Text {
        /// Decoded file content.
        content: String,
    },
    /// Generic placeholder carrying the literal filename.
    Unsupported {
        /// Name of the file that has no preview.
        filename: String,
    },
}

impl PreviewPayload {
    /// Serialize the payload to an HTML fragment for the preview pane.
    ///
    /// Every interpolated value is passed through [`escape_html`], so
    /// hostile filenames or file content cannot inject markup.
    #[must_use]
    pub fn markup(&self) -> String {
        match self {
            Self::Image { src } => {
                format!(
                    "<img src=\"{}\" style=\"max-width:100%; border-radius:8px;\">",
                    escape_html(src)
                )
            }
            Self::Document { src } => {
                format!(
                    "<iframe src=\"{}\" style=\"width:100%;height:250px;border:none;\"></iframe>",
                    escape_html(src)
                )
            }
            Self::Text { content } => {
                format!(
                    "<pre style=\"white-space:pre-wrap; margin:0;\">{}</pre>",
                    escape_html(content)
                )
            }
            Self::Unsupported { filename } => {
                format!(
                    "<div class=\"preview-placeholder\">\
                     <p>Preview not available for this file type</p>\
                     <p class=\"preview-placeholder-name\">File: {}</p>\
                     </div>",
                    escape_html(filename)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_classify_as_image() {
        for ext in IMAGE_EXTENSIONS {
            let lower = format!("photo.{ext}");
            let upper = format!("PHOTO.{}", ext.to_ascii_uppercase());
            assert_eq!(PreviewClass::of(&lower), PreviewClass::Image, "{lower}");
            assert_eq!(PreviewClass::of(&upper), PreviewClass::Image, "{upper}");
        }
    }

    #[test]
    fn pdf_classifies_as_document() {
        assert_eq!(PreviewClass::of("report.pdf"), PreviewClass::Document);
        assert_eq!(PreviewClass::of("REPORT.PDF"), PreviewClass::Document);
    }

    #[test]
    fn text_extensions_classify_as_text() {
        for ext in TEXT_EXTENSIONS {
            let name = format!("notes.{ext}");
            assert_eq!(PreviewClass::of(&name), PreviewClass::Text, "{name}");
        }
    }

    #[test]
    fn unknown_and_missing_extensions_are_unsupported() {
        assert_eq!(PreviewClass::of("archive.zip"), PreviewClass::Unsupported);
        assert_eq!(PreviewClass::of("Makefile"), PreviewClass::Unsupported);
        assert_eq!(PreviewClass::of(""), PreviewClass::Unsupported);
        // Only the final extension counts.
        assert_eq!(PreviewClass::of("photo.png.zip"), PreviewClass::Unsupported);
    }

    #[test]
    fn unsupported_files_require_no_decode() {
        assert_eq!(
            PreviewClass::of("archive.zip").decode_mode(),
            DecodeMode::None
        );
        assert_eq!(PreviewClass::of("a.png").decode_mode(), DecodeMode::Binary);
        assert_eq!(PreviewClass::of("a.pdf").decode_mode(), DecodeMode::Binary);
        assert_eq!(PreviewClass::of("a.csv").decode_mode(), DecodeMode::Text);
    }

    #[test]
    fn image_is_never_misclassified_as_text() {
        // The image group takes precedence; none of its members may
        // leak into Text or Unsupported.
        for ext in IMAGE_EXTENSIONS {
            let class = PreviewClass::of(&format!("x.{ext}"));
            assert_ne!(class, PreviewClass::Text);
            assert_ne!(class, PreviewClass::Unsupported);
        }
    }

    #[test]
    fn text_markup_escapes_content() {
        let payload = PreviewPayload::Text {
            content: "a&b".into(),
        };
        assert!(payload.markup().contains("a&amp;b"));
    }

    #[test]
    fn unsupported_markup_escapes_hostile_filenames() {
        let payload = PreviewPayload::Unsupported {
            filename: "<script>alert(1)</script>.bin".into(),
        };
        let markup = payload.markup();
        assert!(
            !markup.contains("<script>"),
            "filename must not inject elements: {markup}"
        );
        assert!(markup.contains("&lt;script&gt;"));
    }

    #[test]
    fn image_markup_uses_the_source_url() {
        let payload = PreviewPayload::Image {
            src: "blob:null/abc123".into(),
        };
        let markup = payload.markup();
        assert!(markup.starts_with("<img "));
        assert!(markup.contains("blob:null/abc123"));
    }

    #[test]
    fn document_markup_embeds_a_viewer() {
        let payload = PreviewPayload::Document {
            src: "blob:null/doc".into(),
        };
        assert!(payload.markup().starts_with("<iframe "));
    }
}
