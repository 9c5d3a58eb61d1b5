//! Thin browser helpers. Every function degrades to a no-op off the web target.

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Which global object a listener attaches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenTarget {
    Window,
    Document,
}

/// A registered DOM listener. Dropping it removes the listener.
pub struct EventSubscription {
    #[cfg(target_arch = "wasm32")]
    target: web_sys::EventTarget,
    #[cfg(target_arch = "wasm32")]
    event: &'static str,
    #[cfg(target_arch = "wasm32")]
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

impl EventSubscription {
    #[cfg(target_arch = "wasm32")]
    pub fn listen(
        on: ListenTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let target: web_sys::EventTarget = match on {
            ListenTarget::Window => window.into(),
            ListenTarget::Document => window.document()?.into(),
        };
        let closure = Rc::new(Closure::wrap(
            Box::new(handler) as Box<dyn FnMut(web_sys::Event)>
        ));
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        tracing::trace!(event, "dom.listen");
        Some(Self {
            target,
            event,
            closure,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn listen(
        _on: ListenTarget,
        _event: &'static str,
        _handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        None
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().as_ref().unchecked_ref(),
        );
        tracing::trace!(event = self.event, "dom.unlisten");
    }
}

#[cfg(target_arch = "wasm32")]
fn element(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

pub fn focus_element(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = element(id).and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
            let _ = element.focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Smoothly brings the element with `id` to the top of the viewport.
/// Returns `false` when the element is not in the document.
pub fn scroll_into_view(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(target) = element(id) else {
            tracing::debug!(anchor = id, "dom.anchor_missing");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// Runs `callback` before the next repaint.
pub fn request_frame(callback: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once_into_js(callback);
        let _ = window.request_animation_frame(closure.unchecked_ref());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        callback();
    }
}

/// Whether the DOM node behind `event` sits inside the element with `id`.
pub fn event_within(event: &web_sys::Event, id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(container) = element(id) else {
            return false;
        };
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        container.contains(target.as_ref())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (event, id);
        false
    }
}

pub fn window_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Horizontal scroll geometry of a scrollable element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub client_width: f64,
    pub scroll_width: f64,
}

pub fn scroll_metrics(id: &str) -> Option<ScrollMetrics> {
    #[cfg(target_arch = "wasm32")]
    {
        let el = element(id)?;
        Some(ScrollMetrics {
            scroll_left: f64::from(el.scroll_left()),
            client_width: f64::from(el.client_width()),
            scroll_width: f64::from(el.scroll_width()),
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

pub fn scroll_by(id: &str, left: f64) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = element(id) {
            let options = web_sys::ScrollToOptions::new();
            options.set_left(left);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_by_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (id, left);
    }
}
