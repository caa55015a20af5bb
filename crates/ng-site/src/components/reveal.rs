//! Reveal-on-scroll wrapper
//!
//! The server renders every block as `data-reveal="pending"` with its
//! motion in CSS variables. In the browser a [`RevealLatch`] per element is
//! fed by an `IntersectionObserver` (or by mount, for hero content) and
//! flips the attribute to `revealed` exactly once.

use leptos::*;
use ng_core::reveal::{Motion, RevealState};

#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let (state, set_state) = create_signal(RevealState::Pending);
    let node = create_node_ref::<html::Div>();

    #[cfg(feature = "hydrate")]
    browser::attach(node, motion.trigger, set_state);
    #[cfg(not(feature = "hydrate"))]
    let _ = (node, set_state);

    view! {
        <div
            node_ref=node
            class=class
            data-reveal=move || state.get().as_attr()
            style=motion.style()
        >
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
pub(crate) mod browser {
    use leptos::*;
    use super::watch::{owned_slot, Disconnect};
    use ng_core::reveal::{RevealLatch, RevealState, Trigger};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    /// Whether this browser exposes `IntersectionObserver`
    pub fn observer_available() -> bool {
        js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    }

    struct Watcher {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    }

    impl Disconnect for Watcher {
        fn disconnect(&self) {
            self.observer.disconnect();
        }
    }

    pub fn attach(node: NodeRef<html::Div>, trigger: Trigger, set_state: WriteSignal<RevealState>) {
        let slot = owned_slot::<Watcher>();

        node.on_load(move |el| {
            let latch = Rc::new(RefCell::new(RevealLatch::new(trigger)));

            let threshold = match trigger {
                Trigger::OnMount => {
                    request_animation_frame(move || {
                        if latch.borrow_mut().mounted() {
                            set_state.set(RevealState::Revealed);
                        }
                    });
                    return;
                }
                Trigger::InView { threshold, .. } => threshold,
            };

            if !observer_available() {
                latch.borrow_mut().unobservable();
                set_state.set(RevealState::Revealed);
                return;
            }

            let watched = Rc::clone(&latch);
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let mut latch = watched.borrow_mut();
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if latch.observe(entry.intersection_ratio()) {
                            set_state.set(RevealState::Revealed);
                        }
                    }
                    if latch.should_disconnect() {
                        observer.disconnect();
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => {
                    observer.observe(&el);
                    slot.install(Watcher {
                        observer,
                        _callback: callback,
                    });
                }
                Err(err) => {
                    tracing::warn!(?err, "IntersectionObserver unavailable, revealing immediately");
                    latch.borrow_mut().unobservable();
                    set_state.set(RevealState::Revealed);
                }
            }
        });
    }
}

#[cfg(any(feature = "hydrate", test))]
pub(crate) mod watch {
    use leptos::on_cleanup;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A visibility watcher that can be told to stop
    pub(crate) trait Disconnect {
        fn disconnect(&self);
    }

    /// The active watcher of one block. Installing a new watcher or releasing
    /// the slot disconnects the previous one.
    pub(crate) struct WatchSlot<W: Disconnect>(RefCell<Option<W>>);

    impl<W: Disconnect> WatchSlot<W> {
        pub fn new() -> Self {
            Self(RefCell::new(None))
        }

        pub fn install(&self, watcher: W) {
            self.release();
            *self.0.borrow_mut() = Some(watcher);
        }

        pub fn release(&self) {
            if let Some(watcher) = self.0.borrow_mut().take() {
                watcher.disconnect();
            }
        }

        #[cfg(test)]
        pub fn is_active(&self) -> bool {
            self.0.borrow().is_some()
        }
    }

    /// Create a slot released when the current reactive owner is disposed, so
    /// blocks that never scroll into view stop being watched once their page
    /// unmounts.
    pub(crate) fn owned_slot<W: Disconnect + 'static>() -> Rc<WatchSlot<W>> {
        let slot = Rc::new(WatchSlot::new());
        on_cleanup({
            let slot = Rc::clone(&slot);
            move || slot.release()
        });
        slot
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use leptos::{as_child_of_current_owner, create_runtime};
        use std::cell::Cell;

        struct Counting(Rc<Cell<u32>>);

        impl Disconnect for Counting {
            fn disconnect(&self) {
                self.0.set(self.0.get() + 1);
            }
        }

        #[test]
        fn test_install_replaces_previous_watcher() {
            let first = Rc::new(Cell::new(0));
            let slot = WatchSlot::new();
            slot.install(Counting(Rc::clone(&first)));
            slot.install(Counting(Rc::new(Cell::new(0))));
            assert_eq!(first.get(), 1);
            assert!(slot.is_active());

            slot.release();
            slot.release();
            assert!(!slot.is_active());
        }

        #[test]
        fn test_unmount_disconnects_pending_watcher() {
            let runtime = create_runtime();
            let disconnects = Rc::new(Cell::new(0));

            let mount = as_child_of_current_owner(|count: Rc<Cell<u32>>| {
                let slot = owned_slot::<Counting>();
                slot.install(Counting(count));
                slot
            });
            let (slot, disposer) = mount(Rc::clone(&disconnects));
            assert_eq!(disconnects.get(), 0);

            drop(disposer);
            assert_eq!(disconnects.get(), 1);
            assert!(!slot.is_active());

            runtime.dispose();
        }
    }
}
