use std::cell::Cell;
use std::rc::Rc;

use crate::config::NavigationConfig;
use crate::sections::{TabId, OBSERVED_SECTIONS, ROOT_PATH};

/// Viewport band a section has to reach into before it can be selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverBand {
    /// Section top must be above this fraction of the viewport height.
    pub top_ratio: f64,
    /// Section bottom must be below this fraction of the viewport height.
    pub bottom_ratio: f64,
    /// Scroll offsets under this many pixels always select `home`.
    pub home_threshold_px: f64,
}

impl Default for ObserverBand {
    fn default() -> Self {
        Self {
            top_ratio: 0.5,
            bottom_ratio: 0.2,
            home_threshold_px: 100.0,
        }
    }
}

impl From<&NavigationConfig> for ObserverBand {
    fn from(config: &NavigationConfig) -> Self {
        Self {
            top_ratio: config.band_top,
            bottom_ratio: config.band_bottom,
            home_threshold_px: config.home_threshold_px,
        }
    }
}

/// Bounding box of a section relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}

/// Read-only view of the page geometry.
pub trait ViewportQuery {
    fn scroll_offset(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn section_rect(&self, anchor: &str) -> Option<SectionRect>;
}

/// Share of the viewport height covered by `rect`.
pub fn visible_fraction(rect: SectionRect, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    let visible_top = (-rect.top).max(0.0);
    let visible_bottom = rect.height().min(viewport_height - rect.top);
    (visible_bottom - visible_top).max(0.0) / viewport_height
}

/// Most visible section inside the central band, or `None` when nothing qualifies.
pub fn select_section(band: &ObserverBand, viewport: &impl ViewportQuery) -> Option<TabId> {
    if viewport.scroll_offset() < band.home_threshold_px {
        return Some(TabId::Home);
    }
    let height = viewport.viewport_height();
    if height <= 0.0 {
        return None;
    }

    let mut best: Option<(TabId, f64)> = None;
    for tab in OBSERVED_SECTIONS {
        let Some(anchor) = tab.anchor() else {
            continue;
        };
        let Some(rect) = viewport.section_rect(anchor) else {
            continue;
        };
        if rect.top >= height * band.top_ratio || rect.bottom <= height * band.bottom_ratio {
            continue;
        }
        let fraction = visible_fraction(rect, height);
        let beats_best = match best {
            Some((_, best_fraction)) => fraction > best_fraction,
            None => fraction > 0.0,
        };
        if beats_best {
            best = Some((tab, fraction));
        }
    }
    best.map(|(tab, _)| tab)
}

/// Tracks which home-page section is in view. Only active on the root route.
#[derive(Clone, Debug)]
pub struct ScrollObserver {
    band: ObserverBand,
    selection: TabId,
    running: bool,
}

impl ScrollObserver {
    pub fn new(band: ObserverBand) -> Self {
        Self {
            band,
            selection: TabId::Home,
            running: false,
        }
    }

    /// Starts observing if `path` is the root route. Returns whether it is running.
    pub fn start(&mut self, path: &str) -> bool {
        self.running = path == ROOT_PATH;
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn selection(&self) -> TabId {
        self.selection
    }

    /// Re-measures the page and returns the tab to propose, if it differs from `active`.
    /// With no qualifying section the active tab stays as it is.
    pub fn poll(&mut self, viewport: &impl ViewportQuery, active: TabId) -> Option<TabId> {
        if !self.running {
            return None;
        }
        let tab = select_section(&self.band, viewport)?;
        self.selection = tab;
        (tab != active).then_some(tab)
    }

    /// [`poll`](Self::poll) against the live page.
    pub fn poll_page(&mut self, active: TabId) -> Option<TabId> {
        #[cfg(target_arch = "wasm32")]
        {
            self.poll(&BrowserViewport, active)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = active;
            None
        }
    }
}

/// Coalesces scroll events into one handler call per animation frame.
///
/// `try_begin` returns `true` when the caller should schedule a frame; events
/// arriving while a frame is scheduled are dropped.
#[derive(Clone, Debug, Default)]
pub struct FrameThrottle {
    pending: Rc<Cell<bool>>,
}

impl FrameThrottle {
    pub fn try_begin(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn finish(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

#[cfg(target_arch = "wasm32")]
impl ViewportQuery for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.inner_height().ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }

    fn section_rect(&self, anchor: &str) -> Option<SectionRect> {
        let document = web_sys::window()?.document()?;
        let rect = document.get_element_by_id(anchor)?.get_bounding_client_rect();
        Some(SectionRect {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    struct FakeViewport {
        offset: f64,
        height: f64,
        rects: HashMap<&'static str, SectionRect>,
    }

    impl FakeViewport {
        fn new(offset: f64, height: f64) -> Self {
            Self {
                offset,
                height,
                rects: HashMap::new(),
            }
        }

        fn with(mut self, tab: TabId, top: f64, bottom: f64) -> Self {
            let anchor = tab.anchor().expect("observed sections have anchors");
            self.rects.insert(anchor, SectionRect { top, bottom });
            self
        }
    }

    impl ViewportQuery for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn section_rect(&self, anchor: &str) -> Option<SectionRect> {
            self.rects.get(anchor).copied()
        }
    }

    #[test]
    fn section_covering_the_band_wins() {
        let viewport = FakeViewport::new(2000.0, 1000.0)
            .with(TabId::Members, -1500.0, -100.0)
            .with(TabId::Events, -100.0, 1200.0)
            .with(TabId::Projects, 1200.0, 2000.0);

        assert_eq!(
            select_section(&ObserverBand::default(), &viewport),
            Some(TabId::Events)
        );
    }

    #[test]
    fn near_top_forces_home() {
        let viewport = FakeViewport::new(99.0, 1000.0).with(TabId::About, -10.0, 990.0);
        assert_eq!(
            select_section(&ObserverBand::default(), &viewport),
            Some(TabId::Home)
        );
    }

    #[test]
    fn sections_outside_the_band_are_ignored() {
        // Top edge below the 50% line.
        let low = FakeViewport::new(500.0, 1000.0).with(TabId::Mentors, 600.0, 1600.0);
        assert_eq!(select_section(&ObserverBand::default(), &low), None);

        // Bottom edge above the 20% line.
        let high = FakeViewport::new(500.0, 1000.0).with(TabId::Mentors, -900.0, 150.0);
        assert_eq!(select_section(&ObserverBand::default(), &high), None);
    }

    #[test]
    fn larger_visible_share_wins() {
        let viewport = FakeViewport::new(800.0, 1000.0)
            .with(TabId::About, -500.0, 300.0)
            .with(TabId::Members, 300.0, 1400.0);
        assert_eq!(
            select_section(&ObserverBand::default(), &viewport),
            Some(TabId::Members)
        );
    }

    #[test]
    fn ties_keep_page_order() {
        let band = ObserverBand {
            top_ratio: 0.7,
            ..ObserverBand::default()
        };
        let viewport = FakeViewport::new(800.0, 1000.0)
            .with(TabId::Blogs, -600.0, 400.0)
            .with(TabId::Mentors, 600.0, 1600.0);
        // Both cover 40% of the viewport.
        assert_eq!(select_section(&band, &viewport), Some(TabId::Blogs));
    }

    #[test]
    fn thresholds_come_from_the_band() {
        let band = ObserverBand {
            top_ratio: 0.7,
            bottom_ratio: 0.2,
            home_threshold_px: 10.0,
        };
        let viewport = FakeViewport::new(50.0, 1000.0).with(TabId::Contact, 600.0, 1600.0);
        assert_eq!(select_section(&band, &viewport), Some(TabId::Contact));
    }

    #[test]
    fn visible_fraction_clips_to_viewport() {
        let rect = SectionRect {
            top: -300.0,
            bottom: 1500.0,
        };
        assert_eq!(visible_fraction(rect, 1000.0), 1.0);
        assert_eq!(visible_fraction(rect, 0.0), 0.0);
    }

    #[test]
    fn observer_keeps_previous_selection_when_nothing_qualifies() {
        let mut observer = ScrollObserver::new(ObserverBand::default());
        assert!(observer.start("/"));

        let viewport = FakeViewport::new(900.0, 1000.0).with(TabId::Events, -100.0, 900.0);
        assert_eq!(observer.poll(&viewport, TabId::Home), Some(TabId::Events));

        let gap = FakeViewport::new(3000.0, 1000.0);
        assert_eq!(observer.poll(&gap, TabId::Events), None);
        assert_eq!(observer.selection(), TabId::Events);
    }

    #[test]
    fn gap_after_a_click_keeps_the_clicked_tab() {
        let mut observer = ScrollObserver::new(ObserverBand::default());
        observer.start("/");

        let events = FakeViewport::new(2000.0, 1000.0).with(TabId::Events, -100.0, 900.0);
        assert_eq!(observer.poll(&events, TabId::Home), Some(TabId::Events));

        // Active Projects has no measured section, so nothing qualifies here.
        let landed = FakeViewport::new(3200.0, 1000.0)
            .with(TabId::Events, -1200.0, 0.0)
            .with(TabId::Projects, 1500.0, 2500.0);
        assert_eq!(observer.poll(&landed, TabId::ProjectsActive), None);
    }

    #[test]
    fn observer_only_emits_changes() {
        let mut observer = ScrollObserver::new(ObserverBand::default());
        observer.start("/");
        let viewport = FakeViewport::new(10.0, 1000.0);
        assert_eq!(observer.poll(&viewport, TabId::Home), None);
        assert_eq!(observer.poll(&viewport, TabId::Contact), Some(TabId::Home));
    }

    #[test]
    fn observer_is_idle_off_the_root_route() {
        let mut observer = ScrollObserver::new(ObserverBand::default());
        assert!(!observer.start("/blogs"));
        let viewport = FakeViewport::new(10.0, 1000.0);
        assert_eq!(observer.poll(&viewport, TabId::Blogs), None);

        observer.start("/");
        observer.stop();
        assert!(!observer.is_running());
        assert_eq!(observer.poll(&viewport, TabId::Blogs), None);
    }

    #[test]
    fn throttle_drops_events_within_a_frame() {
        let throttle = FrameThrottle::default();
        assert!(throttle.try_begin());
        assert!(!throttle.try_begin());
        assert!(!throttle.try_begin());
        throttle.finish();
        assert!(!throttle.is_pending());
        assert!(throttle.try_begin());
    }
}
