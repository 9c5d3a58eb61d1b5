use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::{use_navigator, use_route, Navigator};

use crate::config::RuntimeConfig;
use crate::deferred::PlatformTimers;
use crate::dom::{self, EventSubscription, ListenTarget};
use crate::navigation::{NavigationDriver, NavigationHost, SettleDelays};
use crate::route_listener::RouteListener;
use crate::routes::Route;
use crate::scroll_observer::{FrameThrottle, ObserverBand, ScrollObserver};
use crate::sections::TabId;

const NAVBAR_ID: &str = "site-navbar";
const DROPDOWN_ID: &str = "projects-dropdown";

const LEADING_TABS: [TabId; 4] = [TabId::Home, TabId::About, TabId::Members, TabId::Events];
const TRAILING_TABS: [TabId; 3] = [TabId::Blogs, TabId::Mentors, TabId::Contact];
const MOBILE_TABS: [TabId; 9] = [
    TabId::Home,
    TabId::About,
    TabId::Members,
    TabId::Events,
    TabId::ProjectsActive,
    TabId::Projects,
    TabId::Blogs,
    TabId::Mentors,
    TabId::Contact,
];

/// Router navigation plus window scrolling.
#[derive(Clone, Copy)]
struct RouterHost {
    navigator: Navigator,
}

impl NavigationHost for RouterHost {
    fn navigate_home(&self) {
        self.navigator.push(Route::Home {});
    }

    fn scroll_to_top(&self) {
        dom::scroll_to_top();
    }

    fn scroll_into_view(&self, anchor: &str) {
        dom::scroll_into_view(anchor);
    }
}

fn mobile_button_class(tab: TabId, active: TabId) -> &'static str {
    if tab == active {
        "mobile-nav-button active"
    } else {
        "mobile-nav-button"
    }
}

#[derive(Default)]
struct Listeners {
    scroll: Option<EventSubscription>,
    click: Option<EventSubscription>,
}

#[component]
pub fn Navbar() -> Element {
    let config = use_context::<RuntimeConfig>();
    let route = use_route::<Route>();
    let host = RouterHost {
        navigator: use_navigator(),
    };

    let mut driver = use_signal(|| {
        NavigationDriver::new(
            SettleDelays::from(&config.navigation),
            PlatformTimers::default(),
        )
    });
    let observer = use_hook(|| Rc::new(RefCell::new(ScrollObserver::new(ObserverBand::from(&config.navigation)))));
    let routes = use_hook(|| {
        let mut listener = RouteListener::new();
        listener.start();
        Rc::new(RefCell::new(listener))
    });
    let throttle = use_hook(FrameThrottle::default);
    let listeners = use_hook(|| Rc::new(RefCell::new(Listeners::default())));

    let path = route.to_string();

    {
        let observer = Rc::clone(&observer);
        let routes = Rc::clone(&routes);
        use_effect(use_reactive!(|path| {
            driver.write().controller_mut().on_route_change();
            if let Some(tab) = routes.borrow_mut().on_path_change(&path) {
                driver.write().propose(tab);
            }
            let (active, settling) = {
                let current = driver.peek();
                (current.active(), current.has_pending_scroll())
            };
            let mut observer = observer.borrow_mut();
            // A pending scroll decides the tab once the page has settled.
            if observer.start(&path) && !settling {
                if let Some(tab) = observer.poll_page(active) {
                    driver.write().propose(tab);
                }
            }
        }));
    }

    {
        let observer = Rc::clone(&observer);
        let listeners = Rc::clone(&listeners);
        use_effect(move || {
            let mut slots = listeners.borrow_mut();
            if slots.scroll.is_none() {
                let observer = Rc::clone(&observer);
                let throttle = throttle.clone();
                slots.scroll = EventSubscription::listen(ListenTarget::Window, "scroll", move |_| {
                    if driver.peek().controller().mobile_menu_open() {
                        driver.write().controller_mut().on_window_scroll();
                    }
                    if !throttle.try_begin() {
                        return;
                    }
                    let observer = Rc::clone(&observer);
                    let throttle = throttle.clone();
                    dom::request_frame(move || {
                        throttle.finish();
                        let active = driver.peek().active();
                        let proposal = observer.borrow_mut().poll_page(active);
                        if let Some(tab) = proposal {
                            tracing::trace!(tab = tab.as_str(), "nav.observed");
                            driver.write().propose(tab);
                        }
                    });
                });
            }
            if slots.click.is_none() {
                slots.click = EventSubscription::listen(ListenTarget::Document, "click", move |event| {
                    let open = {
                        let current = driver.peek();
                        current.controller().mobile_menu_open() || current.controller().projects_open()
                    };
                    if open {
                        let inside_navbar = dom::event_within(&event, NAVBAR_ID);
                        let inside_dropdown = dom::event_within(&event, DROPDOWN_ID);
                        driver
                            .write()
                            .controller_mut()
                            .on_document_click(inside_navbar, inside_dropdown);
                    }
                });
            }
        });
    }

    use_drop(move || {
        observer.borrow_mut().stop();
        routes.borrow_mut().stop();
        let mut slots = listeners.borrow_mut();
        slots.scroll.take();
        slots.click.take();
        if let Ok(mut driver) = driver.try_write() {
            driver.cancel_pending();
        }
    });

    let activate = use_callback(move |tab: TabId| {
        let path = route.to_string();
        driver.write().activate(tab, &path, &host);
    });

    let (active, mobile_open, projects_open) = {
        let current = driver.read();
        let controller = current.controller();
        (
            controller.active(),
            controller.mobile_menu_open(),
            controller.projects_open(),
        )
    };
    let button_class = |tab: TabId, base: &str| {
        if tab.highlights(active) {
            format!("{base} active")
        } else {
            base.to_string()
        }
    };
    let projects_class = button_class(TabId::Projects, "nav-button");
    let dropdown_class = if projects_open {
        "projects-dropdown-wrapper open"
    } else {
        "projects-dropdown-wrapper"
    };
    let mobile_class = if mobile_open { "mobile-menu open" } else { "mobile-menu" };

    rsx! {
        nav { id: NAVBAR_ID, class: "navbar",
            div { class: "nav-container",
                div {
                    class: "navbar-logo",
                    onclick: move |_| activate.call(TabId::Home),
                    img { src: "/assets/logo_white.png", alt: "Chips & Bytes Logo", class: "logo-icon" }
                    div { class: "logo-text",
                        h1 { class: "logo-title", "Chips & Bytes" }
                        p { class: "logo-subtitle", "Computer Architecture Club" }
                    }
                }
                div { class: "navbar-links desktop-links",
                    for tab in LEADING_TABS {
                        button {
                            key: "{tab.as_str()}",
                            class: button_class(tab, "nav-button"),
                            onclick: move |_| activate.call(tab),
                            "{tab.label()}"
                        }
                    }
                    div { id: DROPDOWN_ID, class: dropdown_class,
                        button {
                            class: projects_class,
                            aria_haspopup: "true",
                            aria_expanded: projects_open,
                            onclick: move |_| driver.write().controller_mut().toggle_projects(),
                            "Projects \u{25be}"
                        }
                        if projects_open {
                            div { class: "projects-dropdown", role: "menu",
                                button {
                                    class: "dropdown-item",
                                    onclick: move |_| activate.call(TabId::ProjectsActive),
                                    {TabId::ProjectsActive.label()}
                                }
                                button {
                                    class: "dropdown-item",
                                    onclick: move |_| activate.call(TabId::Projects),
                                    {TabId::Projects.label()}
                                }
                            }
                        }
                    }
                    for tab in TRAILING_TABS {
                        button {
                            key: "{tab.as_str()}",
                            class: button_class(tab, "nav-button"),
                            onclick: move |_| activate.call(tab),
                            "{tab.label()}"
                        }
                    }
                }
                div { class: "mobile-menu-toggle",
                    button {
                        class: "menu-toggle-btn",
                        aria_label: "Toggle mobile menu",
                        aria_expanded: mobile_open,
                        onclick: move |_| driver.write().controller_mut().toggle_mobile_menu(),
                        if mobile_open { "\u{2715}" } else { "\u{2630}" }
                    }
                }
            }
            div { class: mobile_class,
                div { class: "mobile-menu-links",
                    for tab in MOBILE_TABS {
                        button {
                            key: "{tab.as_str()}",
                            class: mobile_button_class(tab, active),
                            onclick: move |_| activate.call(tab),
                            "{tab.label()}"
                        }
                    }
                }
            }
        }
    }
}
