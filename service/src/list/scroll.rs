//! Scroll-driven pagination trigger.

use std::num::NonZeroU32;

/// Scroll position of a list container, in pixels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Scroll {
    /// Total height of the scrolled content.
    pub scroll_height: u32,

    /// Distance the content is scrolled by.
    pub scroll_top: u32,

    /// Visible height of the container.
    pub client_height: u32,
}

impl Scroll {
    /// Returns the distance left to the bottom of the content.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.scroll_height
            .saturating_sub(self.scroll_top)
            .saturating_sub(self.client_height)
    }

    /// Indicates whether the bottom of the content is closer than the
    /// provided `threshold`.
    #[must_use]
    pub const fn is_near_bottom(&self, threshold: NonZeroU32) -> bool {
        self.remaining() < threshold.get()
    }
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroU32;

    use super::Scroll;

    const THRESHOLD: NonZeroU32 = match NonZeroU32::new(50) {
        Some(n) => n,
        None => unreachable!(),
    };

    #[test]
    fn triggers_below_threshold_only() {
        let at = |scroll_top| Scroll {
            scroll_height: 1000,
            scroll_top,
            client_height: 400,
        };

        assert_eq!(at(500).remaining(), 100);
        assert!(!at(500).is_near_bottom(THRESHOLD));
        assert!(!at(550).is_near_bottom(THRESHOLD));
        assert!(at(551).is_near_bottom(THRESHOLD));
        assert!(at(600).is_near_bottom(THRESHOLD));
    }

    #[test]
    fn short_content_is_at_bottom() {
        let scroll = Scroll {
            scroll_height: 300,
            scroll_top: 0,
            client_height: 400,
        };

        assert_eq!(scroll.remaining(), 0);
        assert!(scroll.is_near_bottom(THRESHOLD));
    }

    #[test]
    fn smallest_threshold_triggers_at_very_bottom() {
        let bottom = Scroll {
            scroll_height: 1000,
            scroll_top: 600,
            client_height: 400,
        };

        assert!(bottom.is_near_bottom(NonZeroU32::MIN));
        assert!(!Scroll {
            scroll_top: 599,
            ..bottom
        }
        .is_near_bottom(NonZeroU32::MIN));
    }
}
