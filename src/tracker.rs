//! Scroll-driven active section tracking.
//!
//! The tracker maps the continuous vertical scroll position onto one of a fixed,
//! ordered set of named page sections. Layout is never cached: every call reads
//! the live geometry through [`SectionLayout`], so responsive reflow and late
//! content loads are picked up on the next scroll event.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

/// Height of the fixed navigation bar the scroll position is compensated by.
pub const DEFAULT_FIXED_OFFSET: f64 = 100.0;

#[derive(Debug, Error, PartialEq)]
pub enum TrackerError {
    #[error("section registry is empty")]
    EmptyRegistry,
    #[error("section identifier at position {0} is blank")]
    BlankIdentifier(usize),
    #[error("section `{0}` is registered more than once")]
    DuplicateIdentifier(String),
    #[error("fixed offset must be finite, got {0}")]
    InvalidOffset(f64),
}

/// Vertical geometry of one section, read from the layout at query time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(offset_top: f64, height: f64) -> Self {
        Self { offset_top, height }
    }

    /// Half-open containment: the bottom edge belongs to the next section.
    pub fn contains(&self, position: f64) -> bool {
        self.offset_top <= position && position < self.offset_top + self.height
    }

    /// Whether any part of the section lies inside `[top, top + height)`.
    pub fn intersects(&self, top: f64, height: f64) -> bool {
        self.offset_top < top + height && top < self.offset_top + self.height
    }
}

/// Read access to the page layout plus the platform smooth-scroll primitive.
pub trait SectionLayout {
    /// Current vertical scroll offset of the viewport.
    fn scroll_y(&self) -> Option<f64>;

    /// Visible height of the viewport.
    fn viewport_height(&self) -> Option<f64>;

    /// `None` when the element is not in the document (yet).
    fn section_bounds(&self, id: &str) -> Option<SectionBounds>;

    /// Ask the platform to animate the viewport to the section's top edge.
    /// Returns `false` if the element could not be found.
    fn smooth_scroll_to(&self, id: &str) -> bool;
}

/// Source of scroll notifications. Dropping the returned subscription detaches
/// the handler.
pub trait ScrollEvents {
    type Subscription;

    fn subscribe(&self, handler: Box<dyn FnMut()>) -> Self::Subscription;
}

/// Ordered, duplicate-free list of section identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRegistry {
    ids: Vec<String>,
}

impl SectionRegistry {
    pub fn new<I, S>(ids: I) -> Result<Self, TrackerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return Err(TrackerError::EmptyRegistry);
        }
        for (index, id) in ids.iter().enumerate() {
            if id.trim().is_empty() {
                return Err(TrackerError::BlankIdentifier(index));
            }
            if ids[..index].contains(id) {
                return Err(TrackerError::DuplicateIdentifier(id.clone()));
            }
        }
        Ok(Self { ids })
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

/// Builder for [`ScrollSectionTracker`].
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    sections: Vec<String>,
    fixed_offset: f64,
}

impl TrackerConfig {
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            fixed_offset: DEFAULT_FIXED_OFFSET,
        }
    }

    pub fn fixed_offset(mut self, px: f64) -> Self {
        self.fixed_offset = px;
        self
    }

    pub fn build(self) -> Result<ScrollSectionTracker, TrackerError> {
        if !self.fixed_offset.is_finite() {
            return Err(TrackerError::InvalidOffset(self.fixed_offset));
        }
        let registry = SectionRegistry::new(self.sections)?;
        let mut revealed = vec![false; registry.ids.len()];
        revealed[0] = true;
        Ok(ScrollSectionTracker {
            registry,
            fixed_offset: self.fixed_offset,
            active: 0,
            revealed,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSectionTracker {
    registry: SectionRegistry,
    fixed_offset: f64,
    // index into `registry`
    active: usize,
    // latched per section, parallel to `registry`
    revealed: Vec<bool>,
}

impl ScrollSectionTracker {
    pub fn active(&self) -> &str {
        &self.registry.ids[self.active]
    }

    /// Recompute the active section from the current scroll offset.
    ///
    /// Sections are scanned in registry order and the first one containing the
    /// compensated scroll position wins. When nothing matches the previous
    /// value is kept. Returns the new identifier only if it changed, so callers
    /// can skip redundant state writes while scrolling fast.
    pub fn on_scroll(&mut self, layout: &(impl SectionLayout + ?Sized)) -> Option<&str> {
        let Some(scroll_y) = layout.scroll_y() else {
            tracing::trace!("no scroll offset available, keeping `{}`", self.active());
            return None;
        };
        let position = scroll_y + self.fixed_offset;

        let hit = self.registry.iter().position(|id| {
            layout
                .section_bounds(id)
                .is_some_and(|bounds| bounds.contains(position))
        })?;

        if hit == self.active {
            return None;
        }
        self.active = hit;
        tracing::debug!(position, section = self.active(), "active section changed");
        Some(self.active())
    }

    /// Smooth-scroll the viewport to a registered section.
    ///
    /// Unknown identifiers are ignored. The active section is left alone: it
    /// only ever follows the scroll position.
    pub fn scroll_to_section(&self, id: &str, layout: &(impl SectionLayout + ?Sized)) {
        if !self.registry.contains(id) {
            tracing::debug!("ignoring scroll request for unknown section `{id}`");
            return;
        }
        if !layout.smooth_scroll_to(id) {
            tracing::debug!("section `{id}` is not in the document");
        }
    }

    /// Mark every section overlapping the viewport, and the active one, as
    /// revealed. Reveal never resets. Returns the sections revealed by this call.
    pub fn reveal_in_view(&mut self, layout: &(impl SectionLayout + ?Sized)) -> Vec<String> {
        let viewport = layout.scroll_y().zip(layout.viewport_height());
        let mut newly = Vec::new();
        for (index, id) in self.registry.ids.iter().enumerate() {
            if self.revealed[index] {
                continue;
            }
            let in_view = index == self.active
                || viewport.is_some_and(|(top, height)| {
                    layout
                        .section_bounds(id)
                        .is_some_and(|bounds| bounds.intersects(top, height))
                });
            if in_view {
                self.revealed[index] = true;
                newly.push(id.clone());
            }
        }
        if !newly.is_empty() {
            tracing::debug!(sections = ?newly, "sections revealed");
        }
        newly
    }

    /// Whether the section has been in view at least once.
    pub fn is_revealed(&self, id: &str) -> bool {
        self.registry
            .position(id)
            .is_some_and(|index| self.revealed[index])
    }

    pub fn revealed(&self) -> impl Iterator<Item = &str> {
        self.registry
            .iter()
            .zip(&self.revealed)
            .filter_map(|(id, revealed)| revealed.then_some(id))
    }
}

/// What a single scroll event changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollUpdate {
    pub active: Option<String>,
    pub revealed: Vec<String>,
}

/// Wire a shared tracker to a scroll event source.
///
/// `on_change` runs whenever a scroll event moves the active section or reveals
/// new sections. The listener lives exactly as long as the returned
/// subscription.
pub fn attach<L, E, F>(
    tracker: Rc<RefCell<ScrollSectionTracker>>,
    layout: Rc<L>,
    events: &E,
    mut on_change: F,
) -> E::Subscription
where
    L: SectionLayout + ?Sized + 'static,
    E: ScrollEvents,
    F: FnMut(ScrollUpdate) + 'static,
{
    events.subscribe(Box::new(move || {
        // release the borrow before handing control to the caller
        let update = {
            let mut tracker = tracker.borrow_mut();
            let active = tracker.on_scroll(layout.as_ref()).map(str::to_owned);
            let revealed = tracker.reveal_in_view(layout.as_ref());
            ScrollUpdate { active, revealed }
        };
        if update != ScrollUpdate::default() {
            on_change(update);
        }
    }))
}

/// In-memory layout and event source for exercising the tracker without a
/// browser.
#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct FakeLayout {
        pub scroll_y: Cell<Option<f64>>,
        pub viewport_height: Cell<Option<f64>>,
        pub bounds: HashMap<String, SectionBounds>,
        pub scroll_requests: RefCell<Vec<String>>,
        pub reads: Cell<usize>,
    }

    impl FakeLayout {
        /// overview/features/partners at 0/800/1400, 800/600/500 tall, seen
        /// through a 400px viewport.
        pub fn landing() -> Self {
            let mut layout = Self::default();
            layout.put("overview", 0.0, 800.0);
            layout.put("features", 800.0, 600.0);
            layout.put("partners", 1400.0, 500.0);
            layout.scroll_y.set(Some(0.0));
            layout.viewport_height.set(Some(400.0));
            layout
        }

        pub fn put(&mut self, id: &str, offset_top: f64, height: f64) {
            self.bounds
                .insert(id.to_string(), SectionBounds::new(offset_top, height));
        }

        pub fn scroll(&self, y: f64) {
            self.scroll_y.set(Some(y));
        }
    }

    impl SectionLayout for FakeLayout {
        fn scroll_y(&self) -> Option<f64> {
            self.scroll_y.get()
        }

        fn viewport_height(&self) -> Option<f64> {
            self.viewport_height.get()
        }

        fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
            self.reads.set(self.reads.get() + 1);
            self.bounds.get(id).copied()
        }

        fn smooth_scroll_to(&self, id: &str) -> bool {
            if !self.bounds.contains_key(id) {
                return false;
            }
            self.scroll_requests.borrow_mut().push(id.to_string());
            true
        }
    }

    type Handlers = Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>;

    #[derive(Default, Clone)]
    pub struct FakeEvents {
        handlers: Handlers,
    }

    pub struct FakeSubscription {
        handlers: Handlers,
        slot: usize,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.handlers.borrow_mut()[self.slot] = None;
        }
    }

    impl FakeEvents {
        pub fn fire(&self) {
            for handler in self.handlers.borrow_mut().iter_mut().flatten() {
                handler();
            }
        }

        pub fn live(&self) -> usize {
            self.handlers.borrow().iter().flatten().count()
        }
    }

    impl ScrollEvents for FakeEvents {
        type Subscription = FakeSubscription;

        fn subscribe(&self, handler: Box<dyn FnMut()>) -> FakeSubscription {
            let mut handlers = self.handlers.borrow_mut();
            handlers.push(Some(handler));
            FakeSubscription {
                handlers: self.handlers.clone(),
                slot: handlers.len() - 1,
            }
        }
    }
}
