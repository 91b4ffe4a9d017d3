use dioxus::prelude::*;

#[component]
pub fn ProfileUploads() -> Element {
    let config = use_resource(|| async move { direct_upload::upload_form_config().await });

    rsx! {
        div { class: "page",
            div { class: "page_header",
                h1 { "Profile images" }
                a { class: "btn", href: "/", "Back" }
            }
            match config() {
                None => rsx! { p { "Loading…" } },
                Some(Err(e)) => rsx! {
                    div { class: "panel upload_config_error", role: "alert",
                        p { class: "hint", "Uploads are not configured on this server." }
                        p { class: "hint", "{e}" }
                    }
                },
                Some(Ok(config)) => rsx! {
                    div { class: "panel",
                        ui::DirectUploadForm { config }
                    }
                },
            }
        }
    }
}
