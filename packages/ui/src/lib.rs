//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::Hero;

mod upload;
pub use upload::{DirectUploadField, DirectUploadForm, SlotState, Uploads};
