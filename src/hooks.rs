use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::dom::{DomLayout, WindowScrollEvents};
use crate::tracker::{attach, ScrollEvents, ScrollSectionTracker, ScrollUpdate, SectionLayout};

/// Handle to the section tracker owned by one mounted page view.
///
/// Each view gets its own tracker, so several page variants can be mounted
/// without sharing active-section state.
#[derive(Clone, Copy, PartialEq)]
pub struct SectionNav {
    tracker: CopyValue<Rc<RefCell<ScrollSectionTracker>>>,
    layout: CopyValue<Rc<dyn SectionLayout>>,
    active: Signal<String>,
    revealed: Signal<Vec<String>>,
}

impl SectionNav {
    pub fn active(&self) -> ReadOnlySignal<String> {
        self.active.into()
    }

    pub fn is_active(&self, id: &str) -> bool {
        *self.active.read() == id
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.read().iter().any(|revealed| revealed == id)
    }

    /// Smooth-scroll to `id`. The active section updates once the viewport
    /// actually moves.
    pub fn scroll_to(&self, id: &str) {
        self.tracker
            .read()
            .borrow()
            .scroll_to_section(id, &**self.layout.read());
    }
}

/// Track the active section of the current page while the calling component is
/// mounted, observing the browser window.
pub fn use_section_tracker(init: impl FnOnce() -> ScrollSectionTracker) -> SectionNav {
    use_section_tracker_with(init, Rc::new(DomLayout), WindowScrollEvents)
}

/// Same as [`use_section_tracker`] with an explicit layout and event source.
///
/// The listener is attached on first render and removed when the component is
/// dropped. Signals are only written when a scroll event actually changes the
/// active or revealed sections.
pub fn use_section_tracker_with<L, E>(
    init: impl FnOnce() -> ScrollSectionTracker,
    layout: Rc<L>,
    events: E,
) -> SectionNav
where
    L: SectionLayout + 'static,
    E: ScrollEvents,
    E::Subscription: 'static,
{
    let tracker = use_hook(|| CopyValue::new(Rc::new(RefCell::new(init()))));
    let layout = use_hook(|| CopyValue::new(layout as Rc<dyn SectionLayout>));
    let mut active = use_signal(|| tracker.read().borrow().active().to_string());
    let mut revealed = use_signal(|| {
        tracker
            .read()
            .borrow()
            .revealed()
            .map(str::to_owned)
            .collect::<Vec<_>>()
    });

    let listener = use_hook(|| {
        let subscription = attach(
            tracker.cloned(),
            layout.cloned(),
            &events,
            move |update: ScrollUpdate| {
                if let Some(id) = update.active {
                    active.set(id);
                }
                if !update.revealed.is_empty() {
                    revealed.write().extend(update.revealed);
                }
            },
        );
        Rc::new(RefCell::new(Some(subscription)))
    });

    // sections already on screen when the page first paints
    use_effect(move || {
        let newly = tracker
            .read()
            .borrow_mut()
            .reveal_in_view(&**layout.read());
        if !newly.is_empty() {
            revealed.write().extend(newly);
        }
    });

    use_drop(move || {
        // detach regardless of any smooth scroll still in flight
        listener.borrow_mut().take();
    });

    SectionNav {
        tracker,
        layout,
        active,
        revealed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use dioxus::dioxus_core::{NoOpMutations, ScopeId};

    use crate::tracker::fakes::{FakeEvents, FakeLayout};
    use crate::tracker::TrackerConfig;

    /// Everything a mounted test page talks to, shared with the test body.
    #[derive(Clone)]
    struct Page {
        layout: Rc<FakeLayout>,
        events: FakeEvents,
        mounted: Rc<Cell<bool>>,
        // (active, partners revealed) as seen by each render
        renders: Rc<RefCell<Vec<(String, bool)>>>,
    }

    impl PartialEq for Page {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.renders, &other.renders)
        }
    }

    impl Page {
        fn new() -> Self {
            Self {
                layout: Rc::new(FakeLayout::landing()),
                events: FakeEvents::default(),
                mounted: Rc::new(Cell::new(true)),
                renders: Rc::default(),
            }
        }

        fn renders(&self) -> Vec<(String, bool)> {
            self.renders.borrow().clone()
        }

        fn scroll(&self, dom: &mut VirtualDom, y: f64) {
            self.layout.scroll(y);
            dom.in_runtime(|| self.events.fire());
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[component]
    fn TrackedPage(page: Page) -> Element {
        let nav = use_section_tracker_with(
            || {
                TrackerConfig::new(["overview", "features", "partners"])
                    .build()
                    .unwrap()
            },
            page.layout.clone(),
            page.events.clone(),
        );
        page.renders
            .borrow_mut()
            .push((nav.active().cloned(), nav.is_revealed("partners")));

        rsx! {
            div { "{nav.active()}" }
        }
    }

    #[component]
    fn MaybeMounted(page: Page) -> Element {
        rsx! {
            if page.mounted.get() {
                TrackedPage { page: page.clone() }
            }
        }
    }

    #[component]
    fn TwoPages(first: Page, second: Page) -> Element {
        rsx! {
            TrackedPage { page: first.clone() }
            TrackedPage { page: second.clone() }
        }
    }

    fn owned(active: &str, partners: bool) -> (String, bool) {
        (active.to_string(), partners)
    }

    #[test]
    fn rerenders_only_when_the_section_changes() {
        let page = Page::new();
        let mut dom = VirtualDom::new_with_props(TrackedPage, TrackedPageProps { page: page.clone() });
        dom.rebuild_in_place();
        assert_eq!(page.renders(), [owned("overview", false)]);
        assert_eq!(page.events.live(), 1);

        for _ in 0..10 {
            page.scroll(&mut dom, 50.0);
        }
        assert_eq!(page.renders().len(), 1);

        page.scroll(&mut dom, 900.0);
        page.scroll(&mut dom, 905.0);
        page.scroll(&mut dom, 910.0);
        assert_eq!(page.renders(), [owned("overview", false), owned("features", false)]);

        page.scroll(&mut dom, 1350.0);
        page.scroll(&mut dom, 50.0);
        assert_eq!(
            page.renders(),
            [
                owned("overview", false),
                owned("features", false),
                owned("partners", true),
                owned("overview", true),
            ]
        );
    }

    #[test]
    fn unmount_detaches_the_scroll_listener() {
        let page = Page::new();
        let mut dom = VirtualDom::new_with_props(MaybeMounted, MaybeMountedProps { page: page.clone() });
        dom.rebuild_in_place();
        assert_eq!(page.events.live(), 1);

        page.scroll(&mut dom, 900.0);
        assert_eq!(page.renders().len(), 2);

        page.mounted.set(false);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(page.events.live(), 0);

        page.scroll(&mut dom, 1500.0);
        assert_eq!(page.renders().len(), 2);
    }

    #[test]
    fn mounted_pages_track_independently() {
        let first = Page::new();
        let second = Page::new();
        let mut dom = VirtualDom::new_with_props(
            TwoPages,
            TwoPagesProps {
                first: first.clone(),
                second: second.clone(),
            },
        );
        dom.rebuild_in_place();

        first.scroll(&mut dom, 1350.0);
        assert_eq!(first.renders().last(), Some(&owned("partners", true)));
        assert_eq!(second.renders(), [owned("overview", false)]);

        second.scroll(&mut dom, 900.0);
        assert_eq!(second.renders().last(), Some(&owned("features", false)));
        assert_eq!(first.renders().len(), 2);
    }
}
