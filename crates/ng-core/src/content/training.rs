//! Training program page template
//!
//! Both program detail pages share one layout: a cover hero with a
//! brochure panel, a run of program sections and a closing enroll/contact
//! section. A [`TrainingProgram`] record holds everything that differs.

use super::{BRAND, CONTACT};
use crate::page::{
    Action, Backdrop, Block, Callout, Card, ContactBlock, Cover, Hero, HeroVisual, HexTile,
    LinkTarget, Page, PageSection, Panel, Pill, ThankYou,
};
use crate::reveal::Motion;
use crate::routes::Route;

/// Anchor of the closing section on every program page
pub const ENROLL_ID: &str = "enroll";

/// One section of a program page.
///
/// With a `lead` panel the section is laid out in two columns: the panel
/// on the left and the first card row stacked on the right. Without one,
/// each card row becomes its own grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramSection {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub lead: Option<Panel>,
    pub cards: &'static [&'static [Card]],
    pub callout: Option<Callout>,
}

impl ProgramSection {
    fn build(&self) -> PageSection {
        let mut section = PageSection::new(self.title)
            .with_id(self.id)
            .with_subtitle(self.subtitle);

        match self.lead {
            Some(lead) => {
                let side: Vec<Block> = self
                    .cards
                    .first()
                    .map(|row| Block::Cards {
                        columns: 1,
                        cards: row,
                    })
                    .into_iter()
                    .collect();
                section = section.with_block(Block::Columns(vec![vec![Block::Panel(lead)], side]));
            }
            None => {
                for row in self.cards {
                    section = section.with_block(Block::Cards {
                        columns: row.len() as u8,
                        cards: row,
                    });
                }
            }
        }

        if let Some(callout) = self.callout {
            section = section.with_block(Block::Callout(callout));
        }
        section
    }
}

/// Everything that varies between program pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingProgram {
    pub route: Route,
    pub document_title: &'static str,
    pub headline: &'static [&'static str],
    pub tagline: &'static str,
    pub subline: Option<&'static str>,
    pub pills: &'static [Pill],
    /// Hero link to the first program section
    pub explore_label: &'static str,
    pub footnote: &'static str,
    pub panel_title: &'static str,
    pub panel_blurb: Option<&'static str>,
    pub highlights: &'static [&'static str],
    pub images: [HexTile; 3],
    pub sections: &'static [ProgramSection],
    pub enroll_subtitle: &'static str,
    /// Enroll-card link back to the first program section
    pub enroll_explore_label: &'static str,
    pub thanks: ThankYou,
}

impl TrainingProgram {
    /// Id of the section the "explore" links jump to
    pub fn first_section_id(&self) -> &'static str {
        self.sections.first().map(|s| s.id).unwrap_or(ENROLL_ID)
    }
}

/// Build the page for a program
pub fn page(program: &TrainingProgram) -> Page {
    let explore = LinkTarget::Anchor(program.first_section_id());
    let enroll = LinkTarget::Anchor(ENROLL_ID);

    let cover = Cover {
        back: Some(Action::back("Back to Services", Route::Services)),
        kicker: BRAND,
        headline: program.headline,
        tagline: program.tagline,
        subline: program.subline,
        badge: None,
        pills: program.pills,
        actions: vec![
            Action::primary("Enroll / Contact", enroll),
            Action::secondary(program.explore_label, explore),
        ],
        facts: &[],
        footnote: Some(program.footnote),
        visual: HeroVisual::Panel {
            title: program.panel_title,
            blurb: program.panel_blurb,
            highlights: program.highlights,
            images: program.images,
            cta: Action::compact("Contact Now", enroll),
        },
    };

    let mut sections: Vec<PageSection> = program.sections.iter().map(|s| s.build()).collect();
    sections.push(
        PageSection::new("Enroll / Contact")
            .with_id(ENROLL_ID)
            .with_subtitle(program.enroll_subtitle)
            .with_block(Block::Contact(ContactBlock {
                show_address: false,
                actions: vec![
                    Action::primary("View Services", LinkTarget::Route(Route::Services)),
                    Action::secondary(program.enroll_explore_label, explore),
                ],
                thanks: program.thanks,
            })),
    );

    Page {
        route: program.route,
        title: program.document_title,
        hero: Hero::Cover(cover),
        sections,
        backdrop: Backdrop::Full,
        entrance: Motion::in_view(14),
    }
}

/// "Visit" line in the hero panel footer
pub fn visit_line() -> String {
    format!("Visit: {}", CONTACT.website)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{customer_care, hr};
    use crate::page::{Icon, PanelBody};

    const ROW: &[Card] = &[Card::new(Icon::Clock, "Timing", "10 AM to 10 PM")];

    #[test]
    fn test_lead_section_uses_columns() {
        let section = ProgramSection {
            id: "online",
            title: "Online Training",
            subtitle: "Live sessions",
            lead: Some(Panel {
                label: "PROGRAM",
                body: PanelBody::Checks(&["Doubt clearing sessions"]),
                note: None,
            }),
            cards: &[ROW],
            callout: None,
        }
        .build();
        assert_eq!(section.blocks.len(), 1);
        match &section.blocks[0] {
            Block::Columns(columns) => {
                assert_eq!(columns.len(), 2);
                assert!(matches!(columns[1][0], Block::Cards { columns: 1, .. }));
            }
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_rows_become_grids_without_lead() {
        let section = ProgramSection {
            id: "why",
            title: "Why",
            subtitle: "Because",
            lead: None,
            cards: &[ROW, ROW],
            callout: Some(Callout::new("Start")),
        }
        .build();
        assert_eq!(section.blocks.len(), 3);
        assert!(matches!(section.blocks[2], Block::Callout(_)));
    }

    #[test]
    fn test_programs_share_layout() {
        for program in [&hr::PROGRAM, &customer_care::PROGRAM] {
            let page = page(program);
            assert_eq!(page.sections.last().and_then(|s| s.id), Some(ENROLL_ID));
            assert_eq!(page.route, program.route);
            let explore = page.action(program.explore_label).expect("explore action");
            assert_eq!(explore.target, LinkTarget::Anchor(program.first_section_id()));
            assert_eq!(
                page.action("Back to Services").map(|a| a.target),
                Some(LinkTarget::Route(Route::Services))
            );
        }
    }

    #[test]
    fn test_visit_line() {
        assert_eq!(visit_line(), "Visit: www.nemesisgroup.in");
    }
}
