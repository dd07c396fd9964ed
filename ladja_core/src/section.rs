//! Section identifiers shared by the tracker, the navigation bar and the DOM.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownSection;

/// One of the page's fixed, top-level sections.
///
/// The string form (see [`SectionId::as_str`]) is the element `id` in the
/// rendered document and the navigation target used by links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum SectionId {
    /// Full-height banner at the top of the page
    #[default]
    Hero,
    /// Vision / about prose
    About,
    /// Division cards
    Divisions,
    /// Projected impact stats panel
    Impact,
    /// Partner grid
    Partners,
    /// Footer with contact details
    Contact,
}

impl SectionId {
    /// Every section, in document order. This is also the priority order
    /// used when more than one section straddles the anchor line.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Divisions,
        SectionId::Impact,
        SectionId::Partners,
        SectionId::Contact,
    ];

    /// Sections linked from the navigation bar (the hero has no link).
    pub const NAV: [SectionId; 5] = [
        SectionId::About,
        SectionId::Divisions,
        SectionId::Impact,
        SectionId::Partners,
        SectionId::Contact,
    ];

    /// Element id in the rendered document.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Divisions => "divisions",
            SectionId::Impact => "impact",
            SectionId::Partners => "partners",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label: the identifier with its first letter capitalised.
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Hero",
            SectionId::About => "About",
            SectionId::Divisions => "Divisions",
            SectionId::Impact => "Impact",
            SectionId::Partners => "Partners",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
