/// Edge triggered fetch gate driven by sentinel visibility.
///
/// The sentinel is an invisible marker the renderer keeps past the last
/// tile. Scrolling it into view asks for one more page, keeping it in
/// view does not ask again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SentinelPager {
    visible: bool,
}

impl SentinelPager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report sentinel visibility, true means fetch now.
    ///
    /// Fires at most once per hidden to visible transition and only
    /// while more pages are available.
    pub fn observe(&mut self, visible: bool, has_next: bool) -> bool {
        let entered = visible && !self.visible;

        self.visible = visible;

        entered && has_next
    }

    /// Forget the last state, the next sighting counts as an entry.
    pub fn reset(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_entry() {
        let mut pager = SentinelPager::new();

        assert!(pager.observe(true, true));

        // Still in view, no second trigger.
        assert!(!pager.observe(true, true));
        assert!(!pager.observe(true, true));

        assert!(!pager.observe(false, true));

        assert!(pager.observe(true, true));
    }

    #[test]
    fn exhausted_feed_never_triggers() {
        let mut pager = SentinelPager::new();

        assert!(!pager.observe(true, false));
        assert!(!pager.observe(false, false));
        assert!(!pager.observe(true, false));
    }

    #[test]
    fn reset_rearms_the_trigger() {
        let mut pager = SentinelPager::new();

        assert!(pager.observe(true, true));
        assert!(!pager.observe(true, true));

        pager.reset();

        assert!(pager.observe(true, true));
    }
}
