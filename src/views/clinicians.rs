use dioxus::prelude::*;

use crate::views::LandingPage;

/// Landing page variant aimed at bedside staff.
#[component]
pub fn Clinicians() -> Element {
    rsx! {
        LandingPage { slug: "clinicians" }
    }
}
