use dioxus::prelude::*;
use tracing::Level;
use views::{Clinicians, GetStarted, Home};

/// Presentational building blocks shared by the landing page variants.
mod components;
/// Page copy bundled as JSON.
mod content;
/// Browser bindings for scroll observation and smooth scrolling.
mod dom;
/// Hooks that tie the section tracker to a mounted view.
mod hooks;
/// Demo request form data and its server function.
mod request;
/// Scroll position to active section mapping.
mod tracker;
/// The routed pages of the app.
mod views;

/// The Route enum defines the internal routes of the landing site. It derives
/// [`Routable`], which gives the router everything it needs to match URLs.
///
/// Every landing page variant gets its own route and, with it, its own section
/// tracker. Navigating between variants unmounts the previous page, which
/// detaches its scroll listener.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // The main landing page: overview, features and partners.
    #[route("/")]
    Home {},
    // The same page shell with copy aimed at bedside staff.
    #[route("/clinicians")]
    Clinicians {},
    // Demo request form, where every "Get started" button lands by default.
    #[route("/get-started")]
    GetStarted {},
}

// Stylesheets are pulled in with the `asset!` macro so the bundler can hash and
// minify them. `main.css` also fixes the navbar height the tracker offsets by.
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

/// Verbose in debug builds, `INFO` in release.
fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() {
    start();
}

#[cfg(not(feature = "server"))]
fn main() {
    start();
}

/// Install the logger, then hand control to Dioxus.
fn start() {
    if let Err(err) = dioxus::logger::init(log_level()) {
        // a subscriber is already in place, so this still gets logged
        tracing::debug!("logger already initialized: {err}");
    }
    tracing::info!("starting CarePulse landing page");
    dioxus::launch(App);
}

/// App is the root component. It links the stylesheets into the document head
/// and renders the router, which mounts the page for the current [`Route`].
#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        Router::<Route> {}
    }
}
