use crate::content::SectionId;

pub const DEFAULT_BACK_TO_TOP_THRESHOLD: f64 = 30.0;

/// Viewport measurements taken on a scroll event, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            document_height,
            viewport_height,
        }
    }

    pub fn scrollable(self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// Percentage of the page scrolled, always finite and within `0..=100`.
///
/// A page no taller than the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    let range = metrics.scrollable();
    if !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    let progress = metrics.scroll_top / range * 100.0;
    if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewAction {
    Mounted,
    Scrolled(ScrollMetrics),
    SelectSection(String),
    OpenVideo,
    CloseVideo,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Wire id of the selected section. Not validated: an id outside
    /// [`SectionId::ALL`] renders the whole README.
    pub active_section: String,
    pub is_visible: bool,
    pub scroll_progress: f64,
    pub video_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Welcome.as_str().to_string(),
            is_visible: false,
            scroll_progress: 0.0,
            video_open: false,
        }
    }
}

impl ViewState {
    /// Applies `action` and reports whether any field changed.
    pub fn apply(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::Mounted => replace(&mut self.is_visible, true),
            ViewAction::Scrolled(metrics) => {
                replace(&mut self.scroll_progress, scroll_progress(metrics))
            }
            ViewAction::SelectSection(id) => replace(&mut self.active_section, id),
            ViewAction::OpenVideo => replace(&mut self.video_open, true),
            ViewAction::CloseVideo => replace(&mut self.video_open, false),
        }
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section.as_str()
    }

    pub fn back_to_top_visible(&self, threshold: f64) -> bool {
        self.scroll_progress > threshold
    }
}

fn replace<T: PartialEq>(slot: &mut T, next: T) -> bool {
    if *slot == next {
        return false;
    }
    *slot = next;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_at_top_and_bottom() {
        assert_eq!(scroll_progress(ScrollMetrics::new(0.0, 3000.0, 800.0)), 0.0);
        assert_eq!(scroll_progress(ScrollMetrics::new(2200.0, 3000.0, 800.0)), 100.0);
        assert_eq!(scroll_progress(ScrollMetrics::new(1100.0, 3000.0, 800.0)), 50.0);
    }

    #[test]
    fn progress_is_finite_without_scroll_range() {
        let flat = scroll_progress(ScrollMetrics::new(0.0, 800.0, 800.0));
        assert!(flat.is_finite());
        assert_eq!(flat, 0.0);
        assert_eq!(scroll_progress(ScrollMetrics::new(10.0, 600.0, 800.0)), 0.0);
        assert_eq!(scroll_progress(ScrollMetrics::new(f64::NAN, 3000.0, 800.0)), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        // Overscroll bounce on touch devices reports values past either end.
        assert_eq!(scroll_progress(ScrollMetrics::new(-40.0, 3000.0, 800.0)), 0.0);
        assert_eq!(scroll_progress(ScrollMetrics::new(2500.0, 3000.0, 800.0)), 100.0);
    }

    #[test]
    fn defaults_to_welcome() {
        let state = ViewState::default();
        assert!(state.is_active(SectionId::Welcome));
        assert!(!state.is_visible);
        assert!(!state.video_open);
    }

    #[test]
    fn mount_is_idempotent() {
        let mut state = ViewState::default();
        assert!(state.apply(ViewAction::Mounted));
        assert!(!state.apply(ViewAction::Mounted));
        assert!(state.is_visible);
    }

    #[test]
    fn selects_any_section_id() {
        let mut state = ViewState::default();
        assert!(state.apply(ViewAction::SelectSection("features".to_string())));
        assert!(state.is_active(SectionId::Features));
        assert!(!state.apply(ViewAction::SelectSection("features".to_string())));

        assert!(state.apply(ViewAction::SelectSection("changelog".to_string())));
        assert_eq!(state.active_section, "changelog");
        assert!(SectionId::ALL.iter().all(|s| !state.is_active(*s)));
    }

    #[test]
    fn closing_video_twice_is_a_no_op() {
        let mut state = ViewState::default();
        assert!(!state.apply(ViewAction::CloseVideo));
        assert!(state.apply(ViewAction::OpenVideo));
        assert!(state.apply(ViewAction::CloseVideo));
        assert!(!state.apply(ViewAction::CloseVideo));
        assert!(!state.video_open);
    }

    #[test]
    fn back_to_top_follows_threshold() {
        let mut state = ViewState::default();
        state.apply(ViewAction::Scrolled(ScrollMetrics::new(550.0, 3000.0, 800.0)));
        assert_eq!(state.scroll_progress, 25.0);
        assert!(!state.back_to_top_visible(DEFAULT_BACK_TO_TOP_THRESHOLD));

        state.apply(ViewAction::Scrolled(ScrollMetrics::new(1100.0, 3000.0, 800.0)));
        assert!(state.back_to_top_visible(DEFAULT_BACK_TO_TOP_THRESHOLD));
    }
}
