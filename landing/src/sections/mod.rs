// Landing page sections
// Developed with 💀 by The Ladja Team (c)2025

mod about;
mod cta;
mod divisions;
mod footer;
mod hero;
mod impact;
mod nav;
mod partners;

pub use about::About;
pub use cta::CtaBand;
pub use divisions::Divisions;
pub use footer::Footer;
pub use hero::Hero;
pub use impact::{Impact, StatCard};
pub use nav::Nav;
pub use partners::Partners;
