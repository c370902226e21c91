//! State machine behind the collapsing navigation bar.
//!
//! The bar never reads the scroll offset. It reacts to intersection changes of
//! a sentinel placed above it: once the sentinel leaves the viewport the bar
//! collapses, and it expands again when the sentinel comes back.

use crate::viewport::Scroller;

/// Class applied while the bar is collapsed.
pub const COLLAPSED_CLASS: &str = "sticky-nav-full";
/// Class applied when auto-collapse is turned off.
pub const DISABLED_CLASS: &str = "remove-sticky";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyState {
    /// Auto-collapse is off. Terminal for the lifetime of the mount.
    Disabled,
    Expanded,
    Collapsed,
}

impl StickyState {
    #[must_use]
    pub const fn initial(auto_collapsed_nav_bar: bool) -> Self {
        if auto_collapsed_nav_bar {
            Self::Expanded
        } else {
            Self::Disabled
        }
    }

    /// Whether a sentinel observer should exist in this state.
    #[must_use]
    pub const fn is_observing(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Next state after the sentinel reported `is_intersecting`.
    #[must_use]
    pub const fn on_intersection(self, is_intersecting: bool) -> Self {
        match (self, is_intersecting) {
            (Self::Disabled, _) => Self::Disabled,
            (_, true) => Self::Expanded,
            (_, false) => Self::Collapsed,
        }
    }

    /// Applies an intersection event in place. Returns `true` if the state changed,
    /// so repeated identical events never notify subscribers.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        let next = self.on_intersection(is_intersecting);
        if next == *self {
            return false;
        }
        *self = next;
        true
    }

    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Disabled => DISABLED_CLASS,
            Self::Expanded => "",
            Self::Collapsed => COLLAPSED_CLASS,
        }
    }
}

/// Parts of the header a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRegion {
    /// The bar itself, not one of its children.
    Background,
    Title,
    Logo,
    Navigation,
}

impl HeaderRegion {
    #[must_use]
    pub const fn scrolls_to_top(self) -> bool {
        matches!(self, Self::Background | Self::Title)
    }
}

/// Scrolls to the top when `region` is on the allow-list. Returns whether it did.
pub fn handle_header_click<S>(region: HeaderRegion, scroller: &S) -> bool
where
    S: Scroller + ?Sized,
{
    if !region.scrolls_to_top() {
        return false;
    }
    scroller.scroll_to_top();
    true
}
