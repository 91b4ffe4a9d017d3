//! Direct-to-storage uploads: a page hands a file plus the storage presign
//! fields straight to an object-storage endpoint, without routing the bytes
//! through the application server.
use dioxus::prelude::*;

pub mod config;
pub mod effects;
pub mod error;
pub mod form;
pub mod registry;
pub mod response;
pub mod transport;
pub mod types;
pub mod widget;



pub use config::{SlotConfig, UploadFormConfig, UploadTarget, DEFAULT_SLOTS};
pub use effects::UploadEffects;
pub use error::UploadError;
pub use form::{FilePart, UploadForm};
pub use registry::WidgetRegistry;
pub use transport::{HttpTransport, UploadTransport};
pub use types::{basename, PresignField, Preview, SelectedFile, SubmissionResult};
pub use widget::UploadWidget;

/// Storage action URL, presign fields and slots for the upload page.
#[get("/api/uploads/form")]
pub async fn upload_form_config() -> Result<UploadFormConfig, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("upload_form_config is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!("upload_form_config");
        UploadFormConfig::from_env().map_err(|e| {
            tracing::error!("direct upload misconfigured: {e}");
            ServerFnError::new(e.to_string())
        })
    }
}
