use dioxus::prelude::*;

use crate::components::{Hero, SectionBlock};
use crate::content::{load_variant, PageVariant};
use crate::hooks::use_section_tracker;
use crate::tracker::ScrollSectionTracker;
use crate::views::Navbar;
use crate::Route;

/// A complete landing page for one bundled content variant.
///
/// `on_get_started` and `on_login` come from the surrounding application shell.
/// Without an `on_get_started` handler the call-to-action opens the built-in
/// demo request page; without `on_login` the login button is hidden.
#[component]
pub fn LandingPage(
    slug: String,
    on_get_started: Option<EventHandler<()>>,
    on_login: Option<EventHandler<()>>,
) -> Element {
    let loaded = use_memo(use_reactive((&slug,), |(slug,)| load_landing(&slug)));

    match loaded() {
        // keyed by slug so a new variant remounts with a fresh tracker
        Ok((tracker, variant)) => rsx! {
            LoadedLanding {
                key: "{slug}",
                variant,
                tracker,
                on_get_started,
                on_login,
            }
        },
        Err(err) => {
            tracing::error!(slug = %slug, "failed to load landing content: {err}");
            rsx! {
                div { class: "status-message", "This page is unavailable: {err}" }
            }
        }
    }
}

fn load_landing(slug: &str) -> Result<(ScrollSectionTracker, PageVariant), String> {
    load_variant(slug)
        .and_then(|variant| Ok((variant.tracker()?, variant)))
        .map_err(|err| err.to_string())
}

#[component]
fn LoadedLanding(
    variant: PageVariant,
    tracker: ScrollSectionTracker,
    on_get_started: Option<EventHandler<()>>,
    on_login: Option<EventHandler<()>>,
) -> Element {
    let navigator = use_navigator();
    let nav = use_section_tracker(move || tracker);

    let get_started = move || match on_get_started {
        Some(handler) => handler.call(()),
        None => {
            navigator.push(Route::GetStarted {});
        }
    };

    let first_section = variant
        .sections
        .first()
        .map(|section| section.id.clone())
        .unwrap_or_default();

    rsx! {
        Navbar { tracker: nav, sections: variant.sections.clone(), on_login }

        main {
            class: "landing",
            "data-variant": "{variant.slug}",
            "data-active-section": "{nav.active()}",
            Hero {
                headline: variant.headline.clone(),
                tagline: variant.tagline.clone(),
                first_section,
                on_get_started: move |_| get_started(),
                on_explore: move |id: String| nav.scroll_to(&id),
            }

            for section in variant.sections.iter() {
                SectionBlock {
                    key: "{section.id}",
                    revealed: nav.is_revealed(&section.id),
                    section: section.clone(),
                }
            }

            div { class: "closing-cta",
                h2 { "Ready to retire the reporting spreadsheet?" }
                button {
                    class: "cta-primary",
                    onclick: move |_| get_started(),
                    "Request a demo"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_slug_loads_its_own_sections() {
        let (home_tracker, home) = load_landing("home").unwrap();
        let (clinicians_tracker, clinicians) = load_landing("clinicians").unwrap();

        assert_eq!(home_tracker.active(), "overview");
        assert_eq!(clinicians_tracker.active(), "workflow");
        assert_ne!(home, clinicians);
        assert!(clinicians_tracker.is_revealed("workflow"));
        assert!(!clinicians_tracker.is_revealed("overview"));
    }

    #[test]
    fn unknown_slug_becomes_a_message() {
        let err = load_landing("investors").unwrap_err();
        assert_eq!(err, "no page variant named `investors`");
    }
}
