//! Site components

mod blocks;
mod cards;
mod decor;
mod hero;
mod icons;
mod nav;
pub mod reveal;

pub use blocks::SectionView;
pub use cards::ActionLink;
pub use decor::PageBackdrop;
pub use hero::{BannerHero, CoverHero};
pub use nav::Navbar;
