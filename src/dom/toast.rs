//! Toast rendering into `#toast-root`.
//!
//! The toaster's registry owns every toast on screen. Callbacks (dismiss
//! click, entry frame, expiry, transition end) hold only `Weak` references,
//! so dropping a registry entry frees the toast, its dismiss listener, and
//! its detached element.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use uuid::Uuid;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, Window};

use crate::action::TOAST_MARKER_ATTR;
use crate::state::toast::{
    CloseStrategy, DISMISS_LABEL, EXIT_FALLBACK_MS, TOAST_BASE_CLASSES, TOAST_HIDDEN_CLASSES, TOAST_SHOWN_CLASSES,
    Toast, ToastLifecycle, ToastRegistry, ToastTimeout,
};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

type Registry = RefCell<ToastRegistry<Rc<LiveToast>>>;

/// Renders toasts. Cheap to clone; a page without `#toast-root` gets a
/// toaster whose `show` does nothing.
#[derive(Clone)]
pub struct Toaster {
    window: Window,
    document: Document,
    root: Option<Element>,
    default_timeout_ms: i64,
    live: Rc<Registry>,
}

/// Returned by `Toaster::show`; closing more than once, or after the toast
/// is gone, is harmless.
#[derive(Clone, Default)]
pub struct ToastHandle {
    live: Weak<LiveToast>,
}

impl ToastHandle {
    pub fn close(&self) {
        if let Some(live) = self.live.upgrade() {
            live.close();
        }
    }
}

struct LiveToast {
    id: Uuid,
    window: Window,
    element: Element,
    lifecycle: Cell<ToastLifecycle>,
    registry: Weak<Registry>,
    on_dismiss: RefCell<Option<Closure<dyn FnMut(Event)>>>,
}

impl LiveToast {
    fn enter(&self) {
        let mut life = self.lifecycle.get();
        if life.shown() {
            self.lifecycle.set(life);
            swap_classes(&self.element, &TOAST_SHOWN_CLASSES, &TOAST_HIDDEN_CLASSES);
        }
    }

    fn close(self: &Rc<Self>) {
        let mut life = self.lifecycle.get();
        let Some(strategy) = life.begin_close(prefers_reduced_motion(&self.window)) else {
            return;
        };
        self.lifecycle.set(life);

        match strategy {
            CloseStrategy::Immediate => self.detach(),
            CloseStrategy::AfterTransition => {
                swap_classes(&self.element, &TOAST_HIDDEN_CLASSES, &TOAST_SHOWN_CLASSES);

                let weak = Rc::downgrade(self);
                let on_end = Closure::once_into_js(move || finish(&weak));
                let opts = AddEventListenerOptions::new();
                opts.set_once(true);
                if let Err(e) = self.element.add_event_listener_with_callback_and_add_event_listener_options(
                    "transitionend",
                    on_end.unchecked_ref(),
                    &opts,
                ) {
                    log::warn!("toast transition listener failed: {e:?}");
                }

                // Removal must not depend on the transition actually running.
                let weak = Rc::downgrade(self);
                if let Err(e) = defer(&self.window, EXIT_FALLBACK_MS, move || finish(&weak)) {
                    log::warn!("toast exit fallback not scheduled: {e:?}");
                    self.detach();
                }
            }
        }
    }

    /// Take the element out of the page and drop the registry entry.
    ///
    /// The entry is released on a later task: this can run inside the
    /// dismiss listener, which must not be freed while it executes.
    fn detach(&self) {
        let mut life = self.lifecycle.get();
        life.removed();
        self.lifecycle.set(life);
        self.element.remove();

        let registry = self.registry.clone();
        let id = self.id;
        let release = move || {
            let released = registry.upgrade().and_then(|registry| registry.borrow_mut().release(&id));
            if let Some(live) = released {
                live.on_dismiss.borrow_mut().take();
            }
        };
        if let Err(e) = defer(&self.window, 0, release) {
            log::warn!("toast release not scheduled: {e:?}");
        }
    }
}

/// Transition end or fallback timer for a closing toast; first one wins.
fn finish(weak: &Weak<LiveToast>) {
    let Some(live) = weak.upgrade() else {
        return;
    };
    let mut life = live.lifecycle.get();
    if life.removed() {
        live.detach();
    }
}

impl Toaster {
    pub fn new(window: Window, document: Document, root: Option<Element>, default_timeout_ms: i64) -> Self {
        if root.is_none() {
            log::warn!("no #toast-root on page; notifications will not be shown");
        }
        Self { window, document, root, default_timeout_ms, live: Rc::default() }
    }

    /// Append `toast` to the root and schedule its removal.
    pub fn show(&self, toast: &Toast) -> ToastHandle {
        let Some(root) = &self.root else {
            return ToastHandle::default();
        };
        match self.mount(root, toast) {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!("toast render failed: {e:?}");
                ToastHandle::default()
            }
        }
    }

    fn mount(&self, root: &Element, toast: &Toast) -> Result<ToastHandle, JsValue> {
        let (element, dismiss) = self.build(toast)?;
        let live = Rc::new(LiveToast {
            id: toast.id,
            window: self.window.clone(),
            element: element.clone(),
            lifecycle: Cell::new(ToastLifecycle::default()),
            registry: Rc::downgrade(&self.live),
            on_dismiss: RefCell::new(None),
        });

        // Dismiss clicks must not reach the page-level delegators.
        let weak = Rc::downgrade(&live);
        let on_dismiss = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            ev.stop_propagation();
            if let Some(live) = weak.upgrade() {
                live.close();
            }
        });
        dismiss.add_event_listener_with_callback("click", on_dismiss.as_ref().unchecked_ref())?;
        *live.on_dismiss.borrow_mut() = Some(on_dismiss);

        root.append_child(&element)?;
        self.live.borrow_mut().insert(live.id, Rc::clone(&live));

        let weak = Rc::downgrade(&live);
        let on_frame = Closure::once_into_js(move || {
            if let Some(live) = weak.upgrade() {
                live.enter();
            }
        });
        self.window.request_animation_frame(on_frame.unchecked_ref())?;

        if let ToastTimeout::AfterMs(ms) = toast.resolved_timeout(self.default_timeout_ms) {
            let weak = Rc::downgrade(&live);
            defer(&self.window, ms, move || {
                if let Some(live) = weak.upgrade() {
                    live.close();
                }
            })?;
        }

        Ok(ToastHandle { live: Rc::downgrade(&live) })
    }

    /// Build the toast element and return it with its dismiss button.
    fn build(&self, toast: &Toast) -> Result<(Element, Element), JsValue> {
        let doc = &self.document;

        let wrap = doc.create_element("div")?;
        wrap.set_attribute("role", "status")?;
        wrap.set_attribute(TOAST_MARKER_ATTR, &toast.id.to_string())?;
        wrap.set_class_name(&format!(
            "{TOAST_BASE_CLASSES} {} {}",
            TOAST_HIDDEN_CLASSES.join(" "),
            toast.kind.classes()
        ));

        let icon = doc.create_element("div")?;
        icon.set_class_name("text-base leading-none mt-0.5");
        icon.set_text_content(Some(toast.kind.icon()));

        let text = doc.create_element("div")?;
        if let Some(title) = toast.title_text() {
            let p = doc.create_element("p")?;
            p.set_class_name("font-bold text-sm sm:text-base");
            p.set_text_content(Some(title));
            text.append_child(&p)?;
        }
        if let Some(message) = toast.message_text() {
            let p = doc.create_element("p")?;
            p.set_class_name("text-xs sm:text-sm/5 opacity-90 mt-0.5");
            p.set_text_content(Some(message));
            text.append_child(&p)?;
        }

        let dismiss = doc.create_element("button")?;
        dismiss.set_attribute("type", "button")?;
        dismiss.set_attribute("aria-label", DISMISS_LABEL)?;
        dismiss.set_class_name("text-white/80 hover:text-white text-lg leading-none px-1 select-none");
        dismiss.set_text_content(Some("×"));

        wrap.append_child(&icon)?;
        wrap.append_child(&text)?;
        wrap.append_child(&dismiss)?;
        Ok((wrap, dismiss))
    }
}

/// Run `f` once after `ms`. The callback frees itself when it runs.
fn defer(window: &Window, ms: u32, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let cb = Closure::once_into_js(f);
    let delay = i32::try_from(ms).unwrap_or(i32::MAX);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay)?;
    Ok(())
}

fn swap_classes(el: &Element, add: &[&str], remove: &[&str]) {
    for class in add {
        crate::dom::set_class(el, class, true);
    }
    for class in remove {
        crate::dom::set_class(el, class, false);
    }
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}
