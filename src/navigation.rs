use std::time::Duration;

use crate::config::NavigationConfig;
use crate::deferred::{Deferred, TimerHost};
use crate::sections::{TabId, ROOT_PATH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleDelays {
    /// Wait before scrolling to a page-backed section after leaving its page.
    pub page: Duration,
    /// Wait before scrolling to a section after leaving any other route.
    pub route: Duration,
}

impl Default for SettleDelays {
    fn default() -> Self {
        Self::from(&NavigationConfig::default())
    }
}

impl From<&NavigationConfig> for SettleDelays {
    fn from(config: &NavigationConfig) -> Self {
        Self {
            page: config.page_settle(),
            route: config.route_settle(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavStep {
    NavigateHome,
    ScrollToTop,
    ScrollToAnchor {
        anchor: &'static str,
        delay: Option<Duration>,
    },
}

/// Side effects decided for one activation, in execution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavPlan {
    pub steps: Vec<NavStep>,
}

impl NavPlan {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn navigates(&self) -> bool {
        self.steps.contains(&NavStep::NavigateHome)
    }
}

/// Owner of the active tab and of the navbar's open/closed menus.
#[derive(Clone, Debug)]
pub struct NavigationController {
    active: TabId,
    mobile_menu_open: bool,
    projects_open: bool,
    settle: SettleDelays,
}

impl NavigationController {
    pub fn new(settle: SettleDelays) -> Self {
        Self {
            active: TabId::Home,
            mobile_menu_open: false,
            projects_open: false,
            settle,
        }
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn projects_open(&self) -> bool {
        self.projects_open
    }

    /// Handles a click on a navbar entry while the router is at `current_path`.
    pub fn activate(&mut self, tab: TabId, current_path: &str) -> NavPlan {
        self.active = tab;
        self.close_menus();

        let on_root = current_path == ROOT_PATH;
        let mut steps = Vec::new();

        if tab == TabId::Home {
            steps.push(if on_root {
                NavStep::ScrollToTop
            } else {
                NavStep::NavigateHome
            });
            return NavPlan { steps };
        }

        let Some(anchor) = tab.anchor() else {
            return NavPlan { steps };
        };

        if let Some(prefix) = tab.page_prefix() {
            if !current_path.starts_with(prefix) {
                if !on_root {
                    steps.push(NavStep::NavigateHome);
                }
                steps.push(NavStep::ScrollToAnchor {
                    anchor,
                    delay: Some(self.settle.page),
                });
                return NavPlan { steps };
            }
        }

        if on_root {
            steps.push(NavStep::ScrollToAnchor {
                anchor,
                delay: None,
            });
        } else {
            steps.push(NavStep::NavigateHome);
            steps.push(NavStep::ScrollToAnchor {
                anchor,
                delay: Some(self.settle.route),
            });
        }
        NavPlan { steps }
    }

    /// Like [`activate`](Self::activate) for a raw id; unknown ids change nothing.
    pub fn activate_id(&mut self, id: &str, current_path: &str) -> NavPlan {
        match TabId::parse(id) {
            Some(tab) => self.activate(tab, current_path),
            None => {
                tracing::warn!(id, "nav.unknown_tab");
                NavPlan::default()
            }
        }
    }

    /// Accepts a tab proposed by the scroll observer or route listener.
    /// Returns `true` when the active tab changed.
    pub fn propose(&mut self, tab: TabId) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn toggle_projects(&mut self) {
        self.projects_open = !self.projects_open;
    }

    pub fn close_menus(&mut self) {
        self.mobile_menu_open = false;
        self.projects_open = false;
    }

    /// Document click: closes whichever menu the click landed outside of.
    pub fn on_document_click(&mut self, inside_navbar: bool, inside_dropdown: bool) {
        if self.mobile_menu_open && !inside_navbar {
            self.mobile_menu_open = false;
        }
        if self.projects_open && !inside_dropdown {
            self.projects_open = false;
        }
    }

    pub fn on_window_scroll(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn on_route_change(&mut self) {
        self.projects_open = false;
    }
}

/// Performs navigation side effects for the controller.
pub trait NavigationHost {
    fn navigate_home(&self);
    fn scroll_to_top(&self);
    fn scroll_into_view(&self, anchor: &str);
}

/// Controller plus the single pending "scroll after settle" action.
pub struct NavigationDriver<T: TimerHost> {
    controller: NavigationController,
    pending_scroll: Deferred<T>,
}

impl<T: TimerHost> NavigationDriver<T> {
    pub fn new(settle: SettleDelays, timers: T) -> Self {
        Self {
            controller: NavigationController::new(settle),
            pending_scroll: Deferred::new(timers),
        }
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut NavigationController {
        &mut self.controller
    }

    pub fn active(&self) -> TabId {
        self.controller.active()
    }

    pub fn propose(&mut self, tab: TabId) -> bool {
        self.controller.propose(tab)
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_pending()
    }

    pub fn cancel_pending(&mut self) {
        self.pending_scroll.cancel();
    }

    pub fn activate<H>(&mut self, tab: TabId, current_path: &str, host: &H) -> NavPlan
    where
        H: NavigationHost + Clone + 'static,
    {
        let plan = self.controller.activate(tab, current_path);
        tracing::debug!(tab = tab.as_str(), path = current_path, steps = plan.steps.len(), "nav.activate");
        self.run(&plan, host);
        plan
    }

    fn run<H>(&mut self, plan: &NavPlan, host: &H)
    where
        H: NavigationHost + Clone + 'static,
    {
        self.pending_scroll.cancel();
        for step in &plan.steps {
            match step {
                NavStep::NavigateHome => host.navigate_home(),
                NavStep::ScrollToTop => host.scroll_to_top(),
                NavStep::ScrollToAnchor {
                    anchor,
                    delay: None,
                } => host.scroll_into_view(anchor),
                NavStep::ScrollToAnchor {
                    anchor,
                    delay: Some(delay),
                } => {
                    let host = host.clone();
                    let anchor = *anchor;
                    self.pending_scroll
                        .schedule(*delay, move || host.scroll_into_view(anchor));
                }
            }
        }
    }
}
