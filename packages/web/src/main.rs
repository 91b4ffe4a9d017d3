use dioxus::prelude::*;
use std::env;

use views::{Home, ProfileUploads};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/profile/uploads")]
    ProfileUploads {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    // Initialize tracing for server logs
    #[cfg(feature = "server")]
    init_tracing();

    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,direct_upload=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let action = env::var("DIRECT_UPLOAD_ACTION").unwrap_or_else(|_| "<missing>".to_string());

    eprintln!("startup: IP={ip} PORT={port}");
    eprintln!("startup: DIRECT_UPLOAD_ACTION={}", redact_url(&action));

    log_missing_envs(
        "direct upload",
        &[
            "DIRECT_UPLOAD_ACTION",
            "DIRECT_UPLOAD_PRESIGN_FIELDS",
        ],
    );
}

/// Hides credentials and query strings; presigned URLs carry signatures there.
fn redact_url(value: &str) -> String {
    if value == "<missing>" {
        return value.to_string();
    }

    let Some((scheme, rest)) = value.split_once("://") else {
        return "<invalid DIRECT_UPLOAD_ACTION>".to_string();
    };
    let rest = rest.split_once('@').map_or(rest, |(_, host)| host);
    match rest.split_once('?') {
        Some((path, _)) => format!("{scheme}://{path}?***"),
        None => format!("{scheme}://{rest}"),
    }
}

fn log_missing_envs(group: &str, keys: &[&str]) {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| env::var(key).ok().is_none())
        .collect();
    if missing.is_empty() {
        return;
    }

    eprintln!(
        "startup: WARNING missing {group} envs: {}",
        missing.join(", ")
    );
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// A web-specific Router layout which allows us to use the web-specific
/// `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        div { class: "site_nav",
            div { class: "site_nav_inner",
                a { class: "brand", href: "/", "Profile media" }
                div { class: "nav_links",
                    Link { class: "nav_link", to: Route::ProfileUploads {}, "Uploads" }
                }
            }
        }
        div { class: "site_container route_view", Outlet::<Route> {} }
    }
}
