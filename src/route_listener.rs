use crate::sections::{TabId, BLOGS_PREFIX, PROJECTS_PREFIX, ROOT_PATH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    Root,
    Blogs,
    Projects,
    Other,
}

pub fn classify(path: &str) -> RouteKind {
    if path == ROOT_PATH {
        RouteKind::Root
    } else if path.starts_with(BLOGS_PREFIX) {
        RouteKind::Blogs
    } else if path.starts_with(PROJECTS_PREFIX) {
        RouteKind::Projects
    } else {
        RouteKind::Other
    }
}

/// Tab forced by a route, if any. The root route is left to the scroll observer.
pub fn forced_tab(path: &str) -> Option<TabId> {
    match classify(path) {
        RouteKind::Blogs => Some(TabId::Blogs),
        RouteKind::Projects => Some(TabId::Projects),
        RouteKind::Root | RouteKind::Other => None,
    }
}

/// Turns route-path changes into forced tab proposals.
#[derive(Clone, Debug, Default)]
pub struct RouteListener {
    last_path: Option<String>,
    running: bool,
}

impl RouteListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
        self.last_path = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the tab to force when `path` is a new page-backed route.
    pub fn on_path_change(&mut self, path: &str) -> Option<TabId> {
        if !self.running || self.last_path.as_deref() == Some(path) {
            return None;
        }
        self.last_path = Some(path.to_string());
        let forced = forced_tab(path);
        if let Some(tab) = forced {
            tracing::debug!(path, tab = tab.as_str(), "route.forced_tab");
        }
        forced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_by_prefix() {
        assert_eq!(classify("/"), RouteKind::Root);
        assert_eq!(classify("/blogs"), RouteKind::Blogs);
        assert_eq!(classify("/blogs/details"), RouteKind::Blogs);
        assert_eq!(classify("/projects/active"), RouteKind::Projects);
        assert_eq!(classify("/events"), RouteKind::Other);
        assert_eq!(classify("/admin/dashboard"), RouteKind::Other);
    }

    #[test]
    fn forces_page_tabs_regardless_of_history() {
        let mut listener = RouteListener::new();
        listener.start();
        assert_eq!(listener.on_path_change("/"), None);
        assert_eq!(listener.on_path_change("/blogs/details"), Some(TabId::Blogs));
        assert_eq!(listener.on_path_change("/projects"), Some(TabId::Projects));
        assert_eq!(listener.on_path_change("/events/details"), None);
        assert_eq!(listener.on_path_change("/projects/details"), Some(TabId::Projects));
    }

    #[test]
    fn ignores_repeats_and_stopped_state() {
        let mut listener = RouteListener::new();
        assert_eq!(listener.on_path_change("/blogs"), None);

        listener.start();
        assert_eq!(listener.on_path_change("/blogs"), Some(TabId::Blogs));
        assert_eq!(listener.on_path_change("/blogs"), None);

        listener.stop();
        assert!(!listener.is_running());
        assert_eq!(listener.on_path_change("/projects"), None);
    }
}
