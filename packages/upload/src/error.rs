use thiserror::Error;

/// Everything that can go wrong while wiring or running an upload slot.
///
/// None of these are fatal to the page: the widget reports them through
/// [`crate::UploadEffects::report_error`] and keeps the other slots working.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The slot configuration is incomplete or inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("no file selected for slot `{0}`")]
    NoFileSelected(String),

    /// The browser could not hand over the selected file's contents.
    #[error("could not read `{file_name}`: {reason}")]
    Unreadable { file_name: String, reason: String },

    #[error("invalid upload form: {0}")]
    Form(String),

    #[error("upload request failed: {0}")]
    Transport(String),

    #[error("storage rejected the upload with status {0}")]
    Status(u16),

    /// The storage response did not carry a `Location` element.
    #[error("storage response has no Location")]
    MissingLocation,
}

impl UploadError {
    pub fn config(message: impl Into<String>) -> Self {
        UploadError::Config(message.into())
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => UploadError::Status(status.as_u16()),
            None => UploadError::Transport(err.to_string()),
        }
    }
}
