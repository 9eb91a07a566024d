//! Browser bindings for the section tracker.
//!
//! Geometry comes straight from `offsetTop`/`offsetHeight` of the element whose
//! id matches the section identifier. Smooth scrolling is delegated to
//! `scrollIntoView`.

use crate::tracker::{ScrollEvents, SectionBounds, SectionLayout};

#[cfg(feature = "web")]
pub use web::{DomLayout, ScrollListener, WindowScrollEvents};

#[cfg(not(feature = "web"))]
pub use headless::{DomLayout, WindowScrollEvents};

#[cfg(feature = "web")]
mod web {
    use super::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{
        HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
    };

    fn element_by_id(id: &str) -> Option<HtmlElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct DomLayout;

    impl SectionLayout for DomLayout {
        fn scroll_y(&self) -> Option<f64> {
            web_sys::window()?.scroll_y().ok()
        }

        fn viewport_height(&self) -> Option<f64> {
            web_sys::window()?.inner_height().ok()?.as_f64()
        }

        fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
            let element = element_by_id(id)?;
            Some(SectionBounds::new(
                f64::from(element.offset_top()),
                f64::from(element.offset_height()),
            ))
        }

        fn smooth_scroll_to(&self, id: &str) -> bool {
            let Some(element) = element_by_id(id) else {
                return false;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
    }

    /// `scroll` events on the window.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct WindowScrollEvents;

    /// Registered `scroll` listener; removed from the window on drop.
    pub struct ScrollListener {
        window: Window,
        callback: Closure<dyn FnMut()>,
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "failed to remove scroll listener");
            } else {
                tracing::debug!("scroll listener removed");
            }
        }
    }

    impl ScrollEvents for WindowScrollEvents {
        type Subscription = Option<ScrollListener>;

        fn subscribe(&self, handler: Box<dyn FnMut()>) -> Option<ScrollListener> {
            let window = web_sys::window()?;
            let callback = Closure::wrap(handler);
            if let Err(err) = window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "failed to attach scroll listener");
                return None;
            }
            tracing::debug!("scroll listener attached");
            Some(ScrollListener { window, callback })
        }
    }
}

// Server-side renders have no DOM to observe; the client takes over on hydration.
#[cfg(not(feature = "web"))]
mod headless {
    use super::*;

    #[derive(Debug, Clone, Copy, Default)]
    pub struct DomLayout;

    impl SectionLayout for DomLayout {
        fn scroll_y(&self) -> Option<f64> {
            None
        }

        fn viewport_height(&self) -> Option<f64> {
            None
        }

        fn section_bounds(&self, _id: &str) -> Option<SectionBounds> {
            None
        }

        fn smooth_scroll_to(&self, _id: &str) -> bool {
            false
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct WindowScrollEvents;

    impl ScrollEvents for WindowScrollEvents {
        type Subscription = ();

        fn subscribe(&self, _handler: Box<dyn FnMut()>) {}
    }
}
