use serde::{Deserialize, Serialize};

/// Credential/policy pair the storage backend needs to accept a direct upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresignField {
    pub name: String,
    pub value: String,
}

impl PresignField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A file picked in a slot's file input.
///
/// `size` is read once when the file is selected and is what the preview
/// reports, even if the payload is consumed later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub raw_name: String,
    pub bytes: Vec<u8>,
    pub size: u64,
    pub content_type: Option<String>,
}

impl SelectedFile {
    pub fn new(raw_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self {
            raw_name: raw_name.into(),
            bytes,
            size,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Name submitted to storage, without any directory prefix.
    pub fn file_name(&self) -> &str {
        basename(&self.raw_name)
    }
}

/// Strips everything up to the last `/` or `\`.
///
/// Some browsers report input values like `C:\fakepath\photo.jpg`.
pub fn basename(raw: &str) -> &str {
    raw.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(raw)
}

/// What the storage backend said about an accepted upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Empty when the response had no `Location` element.
    pub location: String,
    pub bucket: Option<String>,
    pub key: Option<String>,
    pub etag: Option<String>,
}

/// One preview block appended to a slot after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub slot: String,
    pub image_url: String,
    pub file_name: String,
    pub size: u64,
}

impl Preview {
    pub fn heading(&self) -> String {
        format!("Newly uploaded {}", self.slot)
    }

    pub fn name_caption(&self) -> String {
        format!("Name: {}", self.file_name)
    }

    pub fn size_caption(&self) -> String {
        format!("Size: {} bytes", self.size)
    }
}
