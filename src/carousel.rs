use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::dom::{self, EventSubscription, ListenTarget, ScrollMetrics};

pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const NARROW_BREAKPOINT: f64 = 375.0;
pub const SWIPE_THRESHOLD: f64 = 50.0;
const RIGHT_EDGE_TOLERANCE: f64 = 5.0;

pub fn is_mobile(window_width: f64) -> bool {
    window_width <= MOBILE_BREAKPOINT
}

/// Pixels moved per arrow press or swipe.
pub fn scroll_step(window_width: f64) -> f64 {
    if !is_mobile(window_width) {
        320.0
    } else if window_width <= NARROW_BREAKPOINT {
        200.0
    } else {
        250.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Arrows {
    pub left: bool,
    pub right: bool,
}

impl From<ScrollMetrics> for Arrows {
    fn from(metrics: ScrollMetrics) -> Self {
        Self {
            left: metrics.scroll_left > 0.0,
            right: metrics.scroll_left + metrics.client_width
                < metrics.scroll_width - RIGHT_EDGE_TOLERANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn offset(self, step: f64) -> f64 {
        match self {
            Direction::Left => -step,
            Direction::Right => step,
        }
    }
}

/// Horizontal swipe detection for touch screens.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Once the finger travelled past the threshold the gesture is consumed,
    /// whether or not it produced a scroll.
    pub fn moved(&mut self, x: f64, arrows: Arrows) -> Option<Direction> {
        let start = self.start_x?;
        let travelled = start - x;
        if travelled.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        self.start_x = None;
        if travelled > 0.0 && arrows.right {
            Some(Direction::Right)
        } else if travelled < 0.0 && arrows.left {
            Some(Direction::Left)
        } else {
            None
        }
    }

    pub fn end(&mut self) {
        self.start_x = None;
    }
}

fn measure(slider_id: &str) -> Arrows {
    dom::scroll_metrics(slider_id)
        .map(Arrows::from)
        .unwrap_or_default()
}

fn first_touch_x(event: &Event<TouchData>) -> Option<f64> {
    event
        .data()
        .touches()
        .first()
        .map(|touch| touch.client_coordinates().x)
}

/// Horizontally scrolling card strip with arrow buttons and swipe support.
#[component]
pub fn Carousel(slider_id: &'static str, children: Element) -> Element {
    let mut width = use_signal(dom::window_width);
    let mut arrows = use_signal(Arrows::default);
    let mut swipe = use_signal(SwipeTracker::default);
    let resize = use_hook(|| Rc::new(RefCell::new(None::<EventSubscription>)));

    {
        let resize = Rc::clone(&resize);
        use_effect(move || {
            if resize.borrow().is_some() {
                return;
            }
            let subscription = EventSubscription::listen(ListenTarget::Window, "resize", move |_| {
                width.set(dom::window_width());
                arrows.set(measure(slider_id));
            });
            *resize.borrow_mut() = subscription;
        });
    }
    use_drop(move || {
        resize.borrow_mut().take();
    });

    let mobile = is_mobile(width());
    let current = arrows();
    let mut step = move |direction: Direction| {
        dom::scroll_by(slider_id, direction.offset(scroll_step(width())));
        arrows.set(measure(slider_id));
    };
    let slider_class = if mobile { "blog-slider mobile-slider" } else { "blog-slider" };

    rsx! {
        div { class: "carousel-wrapper",
            if current.left {
                button {
                    class: "scroll-arrow left-arrow",
                    aria_label: "Scroll Left",
                    onclick: move |_| step(Direction::Left),
                    "‹"
                }
            }
            div {
                id: slider_id,
                class: slider_class,
                onmounted: move |_| arrows.set(measure(slider_id)),
                onscroll: move |_| arrows.set(measure(slider_id)),
                ontouchstart: move |event| {
                    if let Some(x) = first_touch_x(&event) {
                        swipe.write().begin(x);
                    }
                },
                ontouchmove: move |event| {
                    let Some(x) = first_touch_x(&event) else {
                        return;
                    };
                    let direction = swipe.write().moved(x, arrows());
                    if let Some(direction) = direction {
                        step(direction);
                    }
                },
                ontouchend: move |_| swipe.write().end(),
                {children}
            }
            if current.right {
                button {
                    class: "scroll-arrow right-arrow",
                    aria_label: "Scroll Right",
                    onclick: move |_| step(Direction::Right),
                    "›"
                }
            }
        }
    }
}
