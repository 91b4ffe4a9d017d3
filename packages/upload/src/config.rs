use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::UploadError;
use crate::types::PresignField;

/// Slots a profile page offers when nothing else is configured.
pub const DEFAULT_SLOTS: &[&str] = &["avatar", "banner"];

/// How one named upload slot is wired, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub name: String,
    /// Multipart field name for the file. Defaults to the slot name.
    #[serde(default)]
    pub file_field: Option<String>,
    /// Overrides the form-level action URL for this slot.
    #[serde(default)]
    pub action: Option<String>,
}

impl SlotConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_field: None,
            action: None,
        }
    }
}

/// A validated slot: every piece the upload cycle needs is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub name: String,
    pub file_field: String,
    pub action: String,
}

/// Everything a page needs to run its direct uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFormConfig {
    pub action: String,
    #[serde(default)]
    pub presign_fields: Vec<PresignField>,
    pub slots: Vec<SlotConfig>,
}

impl UploadFormConfig {
    /// Validates the whole configuration up front.
    ///
    /// Fails on the first problem with a message naming the slot and the
    /// missing or invalid piece.
    pub fn targets(&self) -> Result<Vec<UploadTarget>, UploadError> {
        if let Some(field) = self.presign_fields.iter().find(|f| f.name.trim().is_empty()) {
            return Err(UploadError::config(format!(
                "presign field with value `{}` has no name",
                field.value
            )));
        }
        if self.slots.is_empty() {
            return Err(UploadError::config("no upload slots configured"));
        }

        let mut seen = HashSet::new();
        let mut targets = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            let name = slot.name.trim();
            if name.is_empty() {
                return Err(UploadError::config("upload slot has an empty name"));
            }
            if !seen.insert(name.to_string()) {
                return Err(UploadError::config(format!("duplicate upload slot `{name}`")));
            }

            let file_field = slot.file_field.as_deref().unwrap_or(name).trim();
            if file_field.is_empty() {
                return Err(UploadError::config(format!(
                    "upload slot `{name}` is missing its file field name"
                )));
            }

            let action = slot.action.as_deref().unwrap_or(&self.action).trim();
            if action.is_empty() {
                return Err(UploadError::config(format!(
                    "upload slot `{name}` is missing its action URL"
                )));
            }

            targets.push(UploadTarget {
                name: name.to_string(),
                file_field: file_field.to_string(),
                action: action.to_string(),
            });
        }

        if self.presign_fields.is_empty() {
            tracing::warn!("direct upload form has no presign fields; storage will likely reject it");
        }

        Ok(targets)
    }

    /// Reads the form configuration from the process environment.
    ///
    /// - `DIRECT_UPLOAD_ACTION` (required)
    /// - `DIRECT_UPLOAD_PRESIGN_FIELDS`: JSON array of `{"name", "value"}`
    /// - `DIRECT_UPLOAD_SLOTS`: comma-separated slot names
    #[cfg(feature = "server")]
    pub fn from_env() -> Result<Self, UploadError> {
        let _ = dotenvy::dotenv();

        let action = std::env::var("DIRECT_UPLOAD_ACTION")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| UploadError::config("DIRECT_UPLOAD_ACTION not set"))?;

        let presign_fields = match std::env::var("DIRECT_UPLOAD_PRESIGN_FIELDS") {
            Ok(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw).map_err(|e| {
                UploadError::config(format!("DIRECT_UPLOAD_PRESIGN_FIELDS is not valid JSON: {e}"))
            })?,
            _ => Vec::new(),
        };

        let slots = match std::env::var("DIRECT_UPLOAD_SLOTS") {
            Ok(raw) if !raw.trim().is_empty() => parse_slot_list(&raw),
            _ => DEFAULT_SLOTS.iter().map(|s| SlotConfig::new(*s)).collect(),
        };

        let config = Self {
            action,
            presign_fields,
            slots,
        };
        config.targets()?;
        Ok(config)
    }
}

/// `"avatar, banner"` -> two slots; blank entries are dropped.
pub fn parse_slot_list(raw: &str) -> Vec<SlotConfig> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(SlotConfig::new)
        .collect()
}
