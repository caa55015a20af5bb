//! Link checks over the page model
//!
//! Every in-page anchor must name a section on the page it points at,
//! section ids must be unique per page, and route links can only come from
//! the route table. The server runs [`check_site`] before accepting
//! connections.

use crate::nav;
use crate::page::{LinkTarget, Page};
use crate::routes::Route;
use crate::{SiteError, SiteResult};
use std::collections::HashSet;
use tracing::warn;

/// All link defects on one page
pub fn page_defects(page: &Page) -> Vec<SiteError> {
    let mut defects = Vec::new();

    let mut seen = HashSet::new();
    for id in page.anchor_ids() {
        if !seen.insert(id) {
            defects.push(SiteError::DuplicateAnchor {
                route: page.route,
                anchor: id.to_string(),
            });
        }
    }

    for link in page.links() {
        match link {
            LinkTarget::Route(_) => {}
            LinkTarget::Anchor(id) => {
                if !seen.contains(id) {
                    defects.push(dangling(page.route, id));
                }
            }
            LinkTarget::RouteAnchor(route, id) => {
                if route == page.route {
                    if !seen.contains(id) {
                        defects.push(dangling(route, id));
                    }
                } else if !has_anchor(route, id) {
                    defects.push(dangling(route, id));
                }
            }
        }
    }

    defects
}

pub fn check_page(page: &Page) -> SiteResult<()> {
    match page_defects(page).into_iter().next() {
        Some(defect) => Err(defect),
        None => Ok(()),
    }
}

/// Defects across every routed page and the navbar
pub fn site_defects() -> Vec<SiteError> {
    let mut defects: Vec<SiteError> = Route::ALL
        .iter()
        .flat_map(|route| page_defects(&route.page()))
        .collect();

    for entry in nav::all_entries() {
        match entry.target {
            LinkTarget::Route(_) => {}
            LinkTarget::RouteAnchor(route, id) => {
                if !has_anchor(route, id) {
                    defects.push(dangling(route, id));
                }
            }
            // The navbar is on every page, so a bare anchor must exist everywhere
            LinkTarget::Anchor(id) => {
                for route in Route::ALL {
                    if !has_anchor(route, id) {
                        defects.push(dangling(route, id));
                    }
                }
            }
        }
    }

    for defect in &defects {
        warn!(%defect, "content defect");
    }
    defects
}

pub fn check_site() -> SiteResult<()> {
    match site_defects().into_iter().next() {
        Some(defect) => Err(defect),
        None => Ok(()),
    }
}

/// Check a rendered `href` found on the page at `route`.
///
/// Fragment-only links resolve against `route`; path links must match the
/// route table exactly. External schemes (`http:`, `mailto:`, `tel:`) pass.
pub fn check_href(route: Route, href: &str) -> SiteResult<()> {
    if is_external(href) {
        return Ok(());
    }

    let (path, fragment) = match href.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (href, None),
    };

    let target = if path.is_empty() {
        route
    } else {
        Route::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .ok_or_else(|| SiteError::UnknownRoute(path.to_string()))?
    };

    match fragment {
        Some(id) if !has_anchor(target, id) => Err(SiteError::DanglingAnchor {
            route: target,
            anchor: id.to_string(),
        }),
        _ => Ok(()),
    }
}

fn is_external(href: &str) -> bool {
    ["http://", "https://", "mailto:", "tel:"]
        .iter()
        .any(|scheme| href.starts_with(scheme))
}

fn has_anchor(route: Route, id: &str) -> bool {
    route.page().anchor_ids().any(|a| a == id)
}

fn dangling(route: Route, id: &str) -> SiteError {
    SiteError::DanglingAnchor {
        route,
        anchor: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Action, Block, PageSection};

    #[test]
    fn test_every_page_is_clean() {
        for route in Route::ALL {
            let page = route.page();
            assert!(page_defects(&page).is_empty(), "defects on {}", route);
        }
        assert!(check_site().is_ok());
    }

    #[test]
    fn test_dangling_anchor_is_reported() {
        static ACTIONS: [Action; 1] = [Action::primary("Enroll", LinkTarget::Anchor("enrol"))];
        let mut page = Route::HrTraining.page();
        page.sections.push(
            PageSection::new("Typo").with_block(Block::Callout(crate::page::Callout {
                actions: &ACTIONS,
                ..crate::page::Callout::new("Typo")
            })),
        );
        let defects = page_defects(&page);
        assert_eq!(defects.len(), 1);
        assert!(matches!(
            &defects[0],
            SiteError::DanglingAnchor { route: Route::HrTraining, anchor } if anchor == "enrol"
        ));
        assert!(check_page(&page).is_err());
    }

    #[test]
    fn test_duplicate_anchor_is_reported() {
        let mut page = Route::Home.page();
        page.sections.push(PageSection::new("Again").with_id("contact"));
        let defects = page_defects(&page);
        assert!(defects.iter().any(|d| matches!(
            d,
            SiteError::DuplicateAnchor { anchor, .. } if anchor == "contact"
        )));
    }

    #[test]
    fn test_check_href() {
        assert!(check_href(Route::HrTraining, "#enroll").is_ok());
        assert!(check_href(Route::HrTraining, "#skills").is_ok());
        assert!(check_href(Route::Services, "/#contact").is_ok());
        assert!(check_href(Route::Home, "/services/customer-training").is_ok());
        assert!(check_href(Route::Home, "tel:+918808062698").is_ok());

        assert!(matches!(
            check_href(Route::Services, "#contact"),
            Err(SiteError::DanglingAnchor { route: Route::Services, .. })
        ));
        assert!(matches!(
            check_href(Route::Home, "/services/banking"),
            Err(SiteError::UnknownRoute(_))
        ));
    }
}
