use dioxus::prelude::*;

use crate::views::LandingPage;

/// The main landing page, rendered when the current route is `[Route::Home]`.
#[component]
pub fn Home() -> Element {
    rsx! {
        LandingPage { slug: "home" }
    }
}
