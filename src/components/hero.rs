use dioxus::prelude::*;

/// Top-of-page banner with the variant headline and its call-to-action buttons.
#[component]
pub fn Hero(
    headline: String,
    tagline: String,
    first_section: String,
    on_get_started: EventHandler<()>,
    on_explore: EventHandler<String>,
) -> Element {
    rsx! {
        header { class: "hero",
            h1 { class: "hero-headline", "{headline}" }
            p { class: "hero-tagline", "{tagline}" }
            div { class: "hero-actions",
                button {
                    class: "cta-primary",
                    onclick: move |_| on_get_started.call(()),
                    "Get started"
                }
                button {
                    class: "cta-secondary",
                    onclick: move |_| on_explore.call(first_section.clone()),
                    "See how it works"
                }
            }
        }
    }
}
