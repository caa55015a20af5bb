//! Nemesis Group site core
//!
//! Framework-free model behind the brochure site: static content, the
//! page/section model each route renders, the route table and navigation
//! tree, the reveal-on-scroll latch and the navbar dropdown state machine.
//! The Leptos front end in `ng-site` only maps these values to markup.

pub mod config;
pub mod content;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod routes;
pub mod validate;

use thiserror::Error;

pub use config::SiteConfig;
pub use nav::{Dropdown, DropdownState, NavRoute};
pub use page::{Action, Block, Hero, LinkTarget, Page, PageSection};
pub use reveal::{Motion, RevealLatch, RevealState, Trigger};
pub use routes::Route;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dangling anchor '#{anchor}' on {route}")]
    DanglingAnchor { route: Route, anchor: String },

    #[error("Duplicate anchor '#{anchor}' on {route}")]
    DuplicateAnchor { route: Route, anchor: String },

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::DanglingAnchor {
            route: Route::HrTraining,
            anchor: "enroll".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Dangling anchor '#enroll' on /services/hr-training"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "busy");
        let err: SiteError = io.into();
        assert!(matches!(err, SiteError::Io(_)));
    }
}
