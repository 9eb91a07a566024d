use dioxus::prelude::*;

use crate::content::Section;
use crate::hooks::SectionNav;
use crate::Route;

/// Fixed navigation bar of a landing page variant. The link of the active
/// section carries the `active` class.
#[component]
pub fn Navbar(tracker: SectionNav, sections: Vec<Section>, on_login: Option<EventHandler<()>>) -> Element {
    rsx! {
        nav { id: "navbar", class: "navbar",
            Link { to: Route::Home {}, class: "brand", "CarePulse" }

            div { class: "nav-sections",
                for section in sections.iter() {
                    NavLink {
                        key: "{section.id}",
                        tracker,
                        id: section.id.clone(),
                        label: section.nav_label.clone(),
                    }
                }
            }

            div { class: "nav-variants",
                Link { to: Route::Home {}, class: "nav-variant", "Overview" }
                Link { to: Route::Clinicians {}, class: "nav-variant", "For clinicians" }
            }

            if let Some(on_login) = on_login {
                button {
                    class: "nav-login",
                    onclick: move |_| on_login.call(()),
                    "Log in"
                }
            }
        }
    }
}

#[component]
fn NavLink(tracker: SectionNav, id: String, label: String) -> Element {
    let class = if tracker.is_active(&id) { "nav-link active" } else { "nav-link" };
    let href = format!("#{id}");

    rsx! {
        a {
            class: "{class}",
            href,
            onclick: move |event: MouseEvent| {
                event.prevent_default();
                tracker.scroll_to(&id);
            },
            "{label}"
        }
    }
}
