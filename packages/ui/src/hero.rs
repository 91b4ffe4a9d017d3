use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div {
            id: "hero",
            div { id: "links",
                h1 { "Profile media" }
                p { "Images go straight from your browser to storage; the app only keeps the resulting URL." }

                div { class: "cta_row",
                    a { class: "btn primary", href: "/profile/uploads", "Upload avatar and banner" }
                }
            }
        }
    }
}
