//! # Result Export
//!
//! The downloadable form of a refined result: a plain-text file whose bytes
//! are exactly the text shown to the user.

use crate::constants::{EXPORT_FILE_NAME, EXPORT_MEDIA_TYPE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn from_text(text: &str) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            media_type: EXPORT_MEDIA_TYPE,
            bytes: text.as_bytes().to_vec(),
        }
    }

    /// The `Content-Disposition` header value for serving this artifact.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}
