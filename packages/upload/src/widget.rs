use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::UploadTarget;
use crate::effects::UploadEffects;
use crate::error::UploadError;
use crate::form::UploadForm;
use crate::transport::UploadTransport;
use crate::types::{PresignField, Preview, SelectedFile, SubmissionResult};

/// Drives the direct-to-storage upload of one slot.
///
/// Each file selection runs one cycle: build the form, show progress, POST,
/// then on success write the location, disable the input and append a
/// preview. Progress is hidden again once the request settles.
///
/// Cycles are not serialized. Selecting a second file while a request is
/// outstanding starts a second request; both settle independently and in no
/// particular order. The overlap is logged, not prevented.
pub struct UploadWidget<T, E> {
    target: UploadTarget,
    transport: T,
    effects: E,
    in_flight: AtomicUsize,
}

impl<T, E> UploadWidget<T, E> {
    pub fn new(target: UploadTarget, transport: T, effects: E) -> Self {
        Self {
            target,
            transport,
            effects,
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn target(&self) -> &UploadTarget {
        &self.target
    }

    pub fn slot(&self) -> &str {
        &self.target.name
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    /// Requests currently outstanding for this slot.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

impl<T, E> UploadWidget<T, E>
where
    T: UploadTransport,
    E: UploadEffects,
{
    /// Reports a selected file that could not be read. No request is sent.
    pub fn on_read_error(&self, file_name: &str, reason: impl std::fmt::Display) -> UploadError {
        let err = UploadError::Unreadable {
            file_name: file_name.to_string(),
            reason: reason.to_string(),
        };
        tracing::warn!("slot `{}`: {err}", self.target.name);
        self.effects.report_error(&err);
        err
    }

    /// Handles a `change` on the slot's file input.
    pub async fn on_file_change(
        &self,
        file: Option<SelectedFile>,
        presign: &[PresignField],
    ) -> Result<SubmissionResult, UploadError> {
        let Some(file) = file else {
            let err = UploadError::NoFileSelected(self.target.name.clone());
            self.effects.report_error(&err);
            return Err(err);
        };

        let form = UploadForm::build(presign, &self.target.file_field, &file);
        let file_name = form.file().file_name.clone();

        self.effects.begin_upload();
        let guard = InFlight::enter(&self.in_flight, &self.effects);
        let outstanding = guard.outstanding;
        if outstanding > 0 {
            tracing::warn!(
                "slot `{}`: starting upload while {outstanding} other request(s) are outstanding",
                self.target.name
            );
        }
        tracing::debug!(
            "slot `{}`: uploading {file_name} ({} bytes) to {}",
            self.target.name,
            file.size,
            self.target.action
        );

        let outcome = self.transport.submit(&self.target.action, form).await;
        guard.settle();

        match outcome {
            Ok(body) => {
                let result = SubmissionResult::from_xml(&body);
                self.effects.set_result_url(&result.location);
                self.effects.disable_input();
                self.effects.append_preview(Preview {
                    slot: self.target.name.clone(),
                    image_url: result.location.clone(),
                    file_name,
                    size: file.size,
                });
                self.effects.end_upload();

                if result.location.is_empty() {
                    tracing::warn!(
                        "slot `{}`: storage accepted the upload but returned no Location",
                        self.target.name
                    );
                    self.effects.report_error(&UploadError::MissingLocation);
                } else {
                    tracing::info!("slot `{}`: uploaded to {}", self.target.name, result.location);
                }
                Ok(result)
            }
            Err(err) => {
                self.effects.end_upload();
                tracing::warn!("slot `{}`: upload failed: {err}", self.target.name);
                self.effects.report_error(&err);
                Err(err)
            }
        }
    }
}

/// One outstanding request. Dropping it before [`InFlight::settle`] means the
/// cycle was cancelled mid-request, so progress is hidden here.
struct InFlight<'a, E: UploadEffects> {
    counter: &'a AtomicUsize,
    effects: &'a E,
    outstanding: usize,
    settled: bool,
}

impl<'a, E: UploadEffects> InFlight<'a, E> {
    fn enter(counter: &'a AtomicUsize, effects: &'a E) -> Self {
        let outstanding = counter.fetch_add(1, Ordering::SeqCst);
        Self {
            counter,
            effects,
            outstanding,
            settled: false,
        }
    }

    fn settle(mut self) {
        self.settled = true;
    }
}

impl<E: UploadEffects> Drop for InFlight<'_, E> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
        if !self.settled {
            tracing::debug!("upload cancelled before storage answered");
            self.effects.end_upload();
        }
    }
}

impl<T, E> std::fmt::Debug for UploadWidget<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadWidget")
            .field("target", &self.target)
            .field("in_flight", &self.in_flight.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
