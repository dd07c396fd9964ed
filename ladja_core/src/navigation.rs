//! Smooth-scroll navigation contract.

use crate::section::SectionId;

/// Something that can bring a section's top edge to the viewport top.
pub trait Navigator {
    /// Start a smooth scroll to `id`. Returns `false` when the section's
    /// element is not present, in which case nothing happens.
    fn scroll_to(&self, id: SectionId) -> bool;
}

/// What a navigation request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Scroll started
    Scrolled(SectionId),
    /// Known section, but its element is absent
    Missing(SectionId),
    /// Target names no section
    Unknown,
}

impl NavOutcome {
    /// Whether a scroll was started.
    pub fn scrolled(&self) -> bool {
        matches!(self, NavOutcome::Scrolled(_))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records every scroll request; sections listed in `absent` fail.
    #[derive(Default)]
    pub(crate) struct RecordingNavigator {
        pub(crate) absent: Vec<SectionId>,
        pub(crate) calls: RefCell<Vec<SectionId>>,
    }

    impl Navigator for RecordingNavigator {
        fn scroll_to(&self, id: SectionId) -> bool {
            if self.absent.contains(&id) {
                return false;
            }
            self.calls.borrow_mut().push(id);
            true
        }
    }
}
