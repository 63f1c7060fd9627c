// src/shared/data_uri.rs
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// A decoded `data:` URI as produced by a browser file reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime_type: String,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataUriError {
    #[error("not a data URI")]
    MissingScheme,

    #[error("data URI has no ',' separator")]
    MissingSeparator,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}

impl DataUri {
    /// Parses `data:[<mime>][;base64],<payload>`.
    pub fn parse(input: &str) -> Result<Self, DataUriError> {
        let rest = input
            .trim()
            .strip_prefix("data:")
            .ok_or(DataUriError::MissingScheme)?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or(DataUriError::MissingSeparator)?;

        let (mime_type, is_base64) = match header.strip_suffix(";base64") {
            Some(mime) => (mime, true),
            None => (header, false),
        };
        let mime_type = if mime_type.is_empty() {
            "text/plain".to_string()
        } else {
            mime_type.to_string()
        };

        let bytes = if is_base64 {
            STANDARD
                .decode(payload)
                .map_err(|e| DataUriError::InvalidBase64(e.to_string()))?
        } else {
            payload.as_bytes().to_vec()
        };

        Ok(Self { mime_type, bytes })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// File extension suggested by the MIME type.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "application/pdf" => "pdf",
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/svg+xml" => "svg",
            "text/plain" => "txt",
            _ => "bin",
        }
    }
}

/// What a profile's photo or resume field points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Embedded(DataUri),
    Link(String),
}

impl Document {
    /// `None` for an empty field; data URIs are decoded, anything else is a link.
    pub fn from_field(value: &str) -> Result<Option<Self>, DataUriError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        if value.starts_with("data:") {
            return DataUri::parse(value).map(|uri| Some(Document::Embedded(uri)));
        }
        Ok(Some(Document::Link(value.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base64_pdf() {
        let uri = DataUri::parse("data:application/pdf;base64,JVBERi0xLjQK").unwrap();

        assert_eq!(uri.mime_type(), "application/pdf");
        assert_eq!(uri.bytes(), b"%PDF-1.4\n");
        assert_eq!(uri.extension(), "pdf");
    }

    #[test]
    fn test_parse_plain_payload_defaults_mime() {
        let uri = DataUri::parse("data:,hello").unwrap();

        assert_eq!(uri.mime_type(), "text/plain");
        assert_eq!(uri.into_bytes(), b"hello".to_vec());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            DataUri::parse("https://example.com/cv.pdf"),
            Err(DataUriError::MissingScheme)
        );
        assert_eq!(
            DataUri::parse("data:application/pdf;base64"),
            Err(DataUriError::MissingSeparator)
        );
        assert!(matches!(
            DataUri::parse("data:application/pdf;base64,@@@"),
            Err(DataUriError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_document_from_field() {
        assert_eq!(Document::from_field("  ").unwrap(), None);
        assert_eq!(
            Document::from_field("https://example.com/cv.pdf").unwrap(),
            Some(Document::Link("https://example.com/cv.pdf".to_string()))
        );
        assert!(matches!(
            Document::from_field("data:image/png;base64,iVBORw0KGgo=").unwrap(),
            Some(Document::Embedded(uri)) if uri.extension() == "png"
        ));
    }
}
