use dioxus::prelude::*;

use crate::content::Section;

/// One scroll anchor of the page. The element id is the section identifier the
/// tracker looks up.
#[component]
pub fn SectionBlock(section: Section, revealed: bool) -> Element {
    let class = if revealed {
        "landing-section reveal visible"
    } else {
        "landing-section reveal"
    };

    rsx! {
        section { id: "{section.id}", class: "{class}",
            h2 { "{section.title}" }
            p { class: "section-body", "{section.body}" }

            if !section.highlights.is_empty() {
                ul { class: "highlights",
                    for highlight in section.highlights.iter() {
                        li { class: "highlight", key: "{highlight.label}",
                            span { class: "highlight-value", "{highlight.value}" }
                            span { class: "highlight-label", "{highlight.label}" }
                        }
                    }
                }
            }
        }
    }
}
