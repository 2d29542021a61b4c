use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, ScrollBehavior, ScrollIntoViewOptions};

/// A DOM event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target,
            event,
            callback,
        })
    }

    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        Self::new(window.into(), event, handler)
    }

    pub fn on_document<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let document = web_sys::window()?.document()?;
        Self::new(document.into(), event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn scroll_top() -> i32 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_top())
        .unwrap_or(0)
}

pub fn scroll_to_section(id: &str) {
    match web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) {
        Some(section) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("No section with id {}", id),
    }
}
