//! Route table

use crate::content;
use crate::page::Page;
use crate::SiteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every page the site serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Services,
    HrTraining,
    CustomerTraining,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Services,
        Route::HrTraining,
        Route::CustomerTraining,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
            Route::HrTraining => "/services/hr-training",
            Route::CustomerTraining => "/services/customer-training",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Services => "Services",
            Route::HrTraining => "HR Training",
            Route::CustomerTraining => "Customer Care Training",
        }
    }

    /// Resolve a request path. Query strings, fragments and one trailing
    /// slash are ignored; anything else must match exactly.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        let path = if path.is_empty() { "/" } else { path };
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Build the page model rendered at this route
    pub fn page(self) -> Page {
        match self {
            Route::Home => content::home::page(),
            Route::Services => content::services::page(),
            Route::HrTraining => content::training::page(&content::hr::PROGRAM),
            Route::CustomerTraining => content::training::page(&content::customer_care::PROGRAM),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| SiteError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Services.path(), "/services");
        assert_eq!(Route::HrTraining.path(), "/services/hr-training");
        assert_eq!(
            Route::CustomerTraining.path(),
            "/services/customer-training"
        );
    }

    #[test]
    fn test_from_path_round_trips_every_route() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_tolerates_trailing_slash_and_fragment() {
        assert_eq!(Route::from_path("/services/"), Some(Route::Services));
        assert_eq!(Route::from_path("/services/hr-training#enroll"), Some(Route::HrTraining));
        assert_eq!(Route::from_path("/?ref=brochure"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_path("/careers"), None);
        assert_eq!(Route::from_path("/services/banking"), None);
        let err = "/careers".parse::<Route>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownRoute(ref p) if p == "/careers"));
    }

    #[test]
    fn test_every_route_builds_its_own_page() {
        for route in Route::ALL {
            assert_eq!(route.page().route, route);
        }
    }
}
