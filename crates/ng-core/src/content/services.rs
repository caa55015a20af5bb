//! Services index page content

use crate::page::{Backdrop, Block, Hero, Page, ServiceTile, TileStyle};
use crate::reveal::Motion;
use crate::routes::Route;

const PROGRAMS: &[ServiceTile] = &[
    ServiceTile {
        title: "HR Training",
        desc: "Recruitment, onboarding, HR operations, HRMS basics, compliance overview, interview preparation.",
        to: Some(Route::HrTraining),
    },
    ServiceTile {
        title: "Customer Care Training",
        desc: "Communication, objection handling, ticketing process, CRM basics, call etiquette, role plays.",
        to: Some(Route::CustomerTraining),
    },
];

pub fn page() -> Page {
    Page {
        route: Route::Services,
        title: "Services | Nemesis Group",
        hero: Hero::Banner {
            title: "Services",
            intro: "Placement-oriented training programs designed for interview readiness and practical job skills.",
            blocks: vec![Block::ServiceTiles {
                tiles: PROGRAMS,
                style: TileStyle::Open,
            }],
        },
        sections: Vec::new(),
        backdrop: Backdrop::Plain,
        entrance: Motion::in_view(14),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::LinkTarget;

    #[test]
    fn test_exactly_two_service_cards() {
        let tiles = page().linked_tiles();
        assert_eq!(tiles.len(), 2);
        let hrefs: Vec<_> = tiles
            .iter()
            .filter_map(|t| t.to)
            .map(|r| r.path())
            .collect();
        assert_eq!(
            hrefs,
            vec!["/services/hr-training", "/services/customer-training"]
        );
    }

    #[test]
    fn test_services_page_has_no_anchors() {
        let page = page();
        assert_eq!(page.anchor_ids().count(), 0);
        assert!(page
            .links()
            .iter()
            .all(|link| matches!(link, LinkTarget::Route(_))));
    }
}
