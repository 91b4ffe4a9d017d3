use crate::error::UploadError;
use crate::types::Preview;

/// Page-side reactions to an upload cycle.
///
/// Implementations own the visible state of one slot (progress indicator,
/// hidden result field, file input, preview container, error line). Methods
/// take `&self` so a widget can drive them while a request is outstanding.
pub trait UploadEffects {
    /// Show the progress indicator. Called right before the request is sent.
    fn begin_upload(&self);

    /// Hide the progress indicator. Called once the request has settled,
    /// whatever the outcome.
    fn end_upload(&self);

    fn set_result_url(&self, url: &str);

    /// Keep the file input out of any later conventional form submission.
    fn disable_input(&self);

    /// Previews accumulate; an implementation must never replace earlier ones.
    fn append_preview(&self, preview: Preview);

    fn report_error(&self, error: &UploadError);
}
