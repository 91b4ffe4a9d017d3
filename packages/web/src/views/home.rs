use dioxus::prelude::*;
use ui::Hero;

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        div { class: "panel",
            h2 { "Start here" }
            p { class: "hint", "Pick an image for each slot. It is sent directly to storage and previewed below the input." }
            div { class: "cta_row",
                a { class: "btn primary", href: "/profile/uploads", "Profile uploads" }
            }
        }
    }
}
