use reqwest::multipart::{Form, Part};

use crate::error::UploadError;
use crate::types::{PresignField, SelectedFile};

/// The binary part of an upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// One direct-upload submission: presign fields in their given order,
/// followed by exactly one file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    fields: Vec<PresignField>,
    file: FilePart,
}

impl UploadForm {
    pub fn build(presign: &[PresignField], file_field: &str, file: &SelectedFile) -> Self {
        Self {
            fields: presign.to_vec(),
            file: FilePart {
                field: file_field.to_string(),
                file_name: file.file_name().to_string(),
                content_type: file.content_type.clone(),
                bytes: file.bytes.clone(),
            },
        }
    }

    pub fn presign_fields(&self) -> &[PresignField] {
        &self.fields
    }

    pub fn file(&self) -> &FilePart {
        &self.file
    }

    /// Field names in the order they go on the wire.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(|f| f.name.as_str())
            .chain(std::iter::once(self.file.field.as_str()))
            .collect()
    }

    pub fn into_multipart(self) -> Result<Form, UploadError> {
        let mut form = Form::new();
        for field in self.fields {
            form = form.text(field.name, field.value);
        }

        let mut part = Part::bytes(self.file.bytes).file_name(self.file.file_name);
        if let Some(content_type) = self.file.content_type.filter(|ct| !ct.is_empty()) {
            part = part
                .mime_str(&content_type)
                .map_err(|_| UploadError::Form(format!("invalid content type `{content_type}`")))?;
        }

        Ok(form.part(self.file.field, part))
    }
}
