//! SVG icon components using Lucide Icons.
//!
//! All icons are from the [Lucide](https://lucide.dev/) set: 24x24 viewBox,
//! stroked with `currentColor`. Each icon's shapes are flattened into a
//! single path (circles and rects written as arcs and lines).

use ladja_core::content::IconKind;
use leptos::prelude::*;

/// Renders an inline SVG icon.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Anchor size="32" /> }
/// ```
#[component]
pub fn Icon(
    /// Which icon to draw
    kind: IconKind,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon_path(kind)></path>
        </svg>
    }
}

/// Path data for an icon.
pub const fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Anchor => ICON_ANCHOR,
        IconKind::Truck => ICON_TRUCK,
        IconKind::Droplets => ICON_DROPLETS,
        IconKind::Cpu => ICON_CPU,
        IconKind::ChevronDown => ICON_CHEVRON_DOWN,
        IconKind::Building2 => ICON_BUILDING_2,
        IconKind::ArrowUpRight => ICON_ARROW_UP_RIGHT,
        IconKind::Mail => ICON_MAIL,
        IconKind::Phone => ICON_PHONE,
        IconKind::MapPin => ICON_MAP_PIN,
        IconKind::Linkedin => ICON_LINKEDIN,
        IconKind::Twitter => ICON_TWITTER,
    }
}

// =============================================================================
// Lucide Icons - https://lucide.dev/
// =============================================================================

/// Anchor (ZB Series)
pub const ICON_ANCHOR: &str = "M12 22V8M5 12H2a10 10 0 0 0 20 0h-3M9 5a3 3 0 1 0 6 0a3 3 0 1 0-6 0";

/// Truck (AJ Series)
pub const ICON_TRUCK: &str = "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2M15 18H9M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14M15 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0M5 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0";

/// Droplets (Water Systems)
pub const ICON_DROPLETS: &str = "M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05zM12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97";

/// Cpu (EyenwanOS)
pub const ICON_CPU: &str = "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM9 9h6v6H9zM15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2";

/// Chevron down (mobile menu toggle)
pub const ICON_CHEVRON_DOWN: &str = "M6 9l6 6 6-6";

/// Building (impact cards)
pub const ICON_BUILDING_2: &str = "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18ZM6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2M10 6h4M10 10h4M10 14h4M10 18h4";

/// Arrow up-right (outbound links)
pub const ICON_ARROW_UP_RIGHT: &str = "M7 7h10v10M7 17 17 7";

/// Mail
pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7";

/// Phone
pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z";

/// Map pin
pub const ICON_MAP_PIN: &str = "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0";

/// LinkedIn
pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0";

/// X / Twitter
pub const ICON_TWITTER: &str = "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z";

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconKind; 12] = [
        IconKind::Anchor,
        IconKind::Truck,
        IconKind::Droplets,
        IconKind::Cpu,
        IconKind::ChevronDown,
        IconKind::Building2,
        IconKind::ArrowUpRight,
        IconKind::Mail,
        IconKind::Phone,
        IconKind::MapPin,
        IconKind::Linkedin,
        IconKind::Twitter,
    ];

    #[test]
    fn every_icon_starts_with_an_absolute_move() {
        for kind in ALL {
            let path = icon_path(kind);
            assert!(path.starts_with('M'), "{kind:?} path must open with M");
        }
    }

    #[test]
    fn paths_only_use_svg_path_characters() {
        for kind in ALL {
            let bad: Vec<char> = icon_path(kind)
                .chars()
                .filter(|c| !(c.is_ascii_digit() || " .-,MmLlHhVvCcSsQqTtAaZz".contains(*c)))
                .collect();
            assert!(bad.is_empty(), "{kind:?} has stray characters {bad:?}");
        }
    }
}
