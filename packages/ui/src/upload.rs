use std::ops::Deref;
use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use direct_upload::{
    HttpTransport, PresignField, Preview, SelectedFile, UploadEffects, UploadError,
    UploadFormConfig, WidgetRegistry,
};

const UPLOAD_CSS: Asset = asset!("/assets/styling/upload.css");

/// Visible state of one upload slot, driven by its widget.
#[derive(Clone, Copy, PartialEq)]
pub struct SlotState {
    pub busy: Signal<bool>,
    pub disabled: Signal<bool>,
    pub result_url: Signal<String>,
    pub previews: Signal<Vec<Preview>>,
    pub error: Signal<Option<String>>,
}

impl SlotState {
    /// Must be called inside a component scope; the signals are owned by it.
    pub fn new() -> Self {
        Self {
            busy: Signal::new(false),
            disabled: Signal::new(false),
            result_url: Signal::new(String::new()),
            previews: Signal::new(Vec::new()),
            error: Signal::new(None),
        }
    }
}

impl UploadEffects for SlotState {
    fn begin_upload(&self) {
        let mut busy = self.busy;
        let mut error = self.error;
        busy.set(true);
        error.set(None);
    }

    fn end_upload(&self) {
        let mut busy = self.busy;
        busy.set(false);
    }

    fn set_result_url(&self, url: &str) {
        let mut result_url = self.result_url;
        result_url.set(url.to_string());
    }

    fn disable_input(&self) {
        let mut disabled = self.disabled;
        disabled.set(true);
    }

    fn append_preview(&self, preview: Preview) {
        let mut previews = self.previews;
        previews.with_mut(|items| items.push(preview));
    }

    fn report_error(&self, err: &UploadError) {
        let mut error = self.error;
        let message = match err {
            UploadError::MissingLocation => {
                "Uploaded, but storage did not return a file URL.".to_string()
            }
            UploadError::Unreadable { .. } => format!("Could not read the selected file: {err}"),
            other => format!("Upload failed: {other}"),
        };
        error.set(Some(message));
    }
}

type Registry = WidgetRegistry<HttpTransport, SlotState>;

/// Shared handle on the page's upload widgets.
#[derive(Clone)]
pub struct Uploads(Rc<Registry>);

impl PartialEq for Uploads {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Uploads {
    type Target = Registry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Renders every configured slot of a direct-upload form.
///
/// The configuration is validated once, when the form mounts; a broken
/// configuration renders an error panel instead of half-wired inputs.
#[component]
pub fn DirectUploadForm(config: UploadFormConfig) -> Element {
    let config_for_init = config.clone();
    let uploads = use_hook(move || {
        WidgetRegistry::init(&config_for_init, HttpTransport::new(), |_| SlotState::new())
            .map(|registry| Uploads(Rc::new(registry)))
    });

    let uploads = match uploads {
        Ok(uploads) => uploads,
        Err(err) => {
            tracing::error!("direct upload form not rendered: {err}");
            return rsx! {
                div { class: "panel upload_config_error", role: "alert", "Uploads unavailable: {err}" }
            };
        }
    };
    let slots: Vec<String> = uploads.slots().map(str::to_string).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: UPLOAD_CSS }
        form { class: "direct_upload_form", method: "post", enctype: "multipart/form-data",
            input { r#type: "hidden", name: "action", value: "{config.action}" }
            for field in config.presign_fields.iter() {
                input {
                    key: "{field.name}",
                    r#type: "hidden",
                    name: "{field.name}",
                    value: "{field.value}",
                    "data-s3-direct-upload-field": "presign",
                }
            }
            for slot in slots {
                DirectUploadField {
                    key: "{slot}",
                    uploads: uploads.clone(),
                    slot: slot.clone(),
                    presign: config.presign_fields.clone(),
                }
            }
        }
    }
}

#[component]
pub fn DirectUploadField(uploads: Uploads, slot: String, presign: Vec<PresignField>) -> Element {
    let Some(widget) = uploads.get(&slot) else {
        return rsx! {};
    };
    let state = *widget.effects();
    let file_field = widget.target().file_field.clone();

    let busy = (state.busy)();
    let disabled = (state.disabled)();
    let result_url = (state.result_url)();
    let previews = (state.previews)();
    let error = (state.error)();

    let progress_class = if busy { "progress" } else { "progress invisible" };
    let input_id = format!("direct_upload_{slot}");
    let slot_for_change = slot.clone();

    rsx! {
        div { class: "upload_slot",
            label { r#for: "{input_id}", "Upload {slot}" }
            input {
                id: "{input_id}",
                r#type: "file",
                name: "{file_field}",
                accept: "image/*",
                disabled,
                "data-s3-direct-upload-field-input": "{slot}",
                onchange: move |evt: FormEvent| {
                    let uploads = uploads.clone();
                    let slot = slot_for_change.clone();
                    let presign = presign.clone();
                    spawn(async move {
                        let Some(widget) = uploads.get(&slot) else {
                            return;
                        };
                        match read_selected(evt).await {
                            Ok(file) => {
                                let _ = widget.on_file_change(file, &presign).await;
                            }
                            Err((name, reason)) => {
                                widget.on_read_error(&name, reason);
                            }
                        }
                    });
                },
            }
            input {
                r#type: "hidden",
                name: "{slot}_url",
                value: "{result_url}",
                "data-s3-direct-upload-field-file-url": "{slot}",
            }
            div {
                class: progress_class,
                "data-s3-direct-upload-progress": "{slot}",
                div { class: "progress-bar", role: "progressbar", style: "width: 100%" }
            }
            if let Some(message) = error {
                p { class: "upload_error", role: "alert", "data-s3-direct-upload-error": "{slot}", "{message}" }
            }
            div { class: "upload_previews", "data-s3-direct-upload-field-preview": "{slot}",
                for (i, preview) in previews.iter().enumerate() {
                    figure { key: "{i}", class: "figure mr-3",
                        p { class: "text-muted", {preview.heading()} }
                        a { href: "{preview.image_url}", target: "_blank",
                            img {
                                src: "{preview.image_url}",
                                class: "figure-img img-fluid rounded",
                                width: "200",
                            }
                        }
                        figcaption { class: "figure-caption",
                            {preview.name_caption()}
                            br {}
                            {preview.size_caption()}
                        }
                    }
                }
            }
        }
    }
}

/// First file of a change event, read once. Size comes from the file
/// metadata, not from the bytes read. A read failure carries the file name
/// and the browser's reason.
async fn read_selected(evt: FormEvent) -> Result<Option<SelectedFile>, (String, String)> {
    let Some(file) = evt.files().into_iter().next() else {
        return Ok(None);
    };
    let size = file.size();
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| (file.name(), e.to_string()))?;

    let mut selected = SelectedFile::new(file.name(), bytes.to_vec()).with_size(size);
    if let Some(content_type) = file.content_type() {
        selected = selected.with_content_type(content_type);
    }
    Ok(Some(selected))
}
