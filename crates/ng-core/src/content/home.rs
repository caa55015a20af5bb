//! Home page content

use super::{hex, BRAND, PHOTO_CAREER, PHOTO_CLASSROOM, PHOTO_TEAM};
use crate::page::{
    Action, Backdrop, Block, Card, ContactBlock, ContentItem, Cover, Hero, HeroVisual, Icon,
    LinkTarget, NextStep, Page, PageSection, ServiceTile, ThankYou, TileStyle,
};
use crate::reveal::Motion;
use crate::routes::Route;

const HERO_FACTS: &[(&str, &str)] = &[
    ("FOCUS", "Job-ready skills"),
    ("FORMAT", "Practical learning"),
    ("OUTCOME", "Placement support"),
];

fn cover() -> Cover {
    Cover {
        back: None,
        kicker: BRAND,
        headline: &["CERTIFIED", "PROFESSIONAL", "TRAINING"],
        tagline: "Guaranteed Interviews & Placement Assurance",
        subline: None,
        badge: Some("TRAINING & DEVELOPMENT"),
        pills: &[],
        actions: vec![
            Action::primary("Explore Services", LinkTarget::Route(Route::Services)),
            Action::secondary("Contact", LinkTarget::Anchor("contact")),
        ],
        facts: HERO_FACTS,
        footnote: None,
        visual: HeroVisual::Collage {
            images: [
                hex(PHOTO_CLASSROOM, "Training"),
                hex(PHOTO_TEAM, "Professional"),
                hex(PHOTO_CAREER, "Career"),
            ],
        },
    }
}

const OVERVIEW: &[Card] = &[
    Card::new(
        Icon::Users,
        "Fresher-focused programs",
        "Designed for candidates starting their careers with clear processes, real scenarios, and confidence-building.",
    ),
    Card::new(
        Icon::Briefcase,
        "Strong client network",
        "Placement support with interview preparation and guidance to help candidates secure suitable opportunities.",
    ),
];

const VISION_MISSION: &[Card] = &[
    Card::new(
        Icon::Sparkles,
        "Our Mission",
        "Empower fresher candidates by identifying potential talent and delivering industry-focused training in HR, Customer Care, and Banking & Finance — with practical skill development and placement support.",
    ),
    Card::new(
        Icon::Shield,
        "Our Vision",
        "Become a trusted leader in talent development and staffing solutions by creating job-ready professionals and meaningful employment opportunities through quality training and ethical practices.",
    ),
];

const WHY_IT_MATTERS: &[Card] = &[
    Card::new(
        Icon::CheckCircle,
        "Supports Career & Business Growth",
        "Continuous learning enhances performance, adaptability, and long-term career growth while maintaining a skilled workforce.",
    ),
    Card::new(
        Icon::CheckCircle,
        "Builds Job-Ready Skills",
        "Bridges the gap between education and industry needs, improving practical skills, confidence, and workplace professionalism.",
    ),
];

const DESIGN_STEPS: &[ContentItem] = &[
    ContentItem::pair(
        "Identify Skill Gaps",
        "Analyze learner needs and industry requirements to define objectives.",
    ),
    ContentItem::pair(
        "Set Clear Goals",
        "Establish measurable outcomes aligned with career needs.",
    ),
    ContentItem::pair(
        "Practical Learning",
        "Real examples, case studies, hands-on activities.",
    ),
    ContentItem::pair(
        "Expert Trainers",
        "Experienced professionals with industry insights.",
    ),
    ContentItem::pair(
        "Continuous Evaluation",
        "Measure progress and update content for effectiveness.",
    ),
];

const OUTCOMES: &[Card] = &[
    Card::new(
        Icon::CheckCircle,
        "Reaction",
        "Measures immediate response — engagement, interest, and satisfaction with content and delivery.",
    ),
    Card::new(
        Icon::CheckCircle,
        "Satisfaction",
        "Evaluates relevance, trainer effectiveness, environment, and perceived value toward career development.",
    ),
    Card::new(
        Icon::CheckCircle,
        "Advantage",
        "Highlights improved skills, confidence, productivity, employability, and long-term career growth.",
    ),
];

const DEVELOPMENT: &[Card] = &[
    Card::new(
        Icon::Users,
        "Soft Skills Improvement",
        "Communication, teamwork, leadership, problem-solving, professionalism, and confidence in dynamic corporate environments.",
    ),
    Card::new(
        Icon::Briefcase,
        "Career Growth",
        "Builds expertise, improves performance, and strengthens promotion readiness, job stability, and long-term success.",
    ),
];

const SERVICES: &[ServiceTile] = &[
    ServiceTile {
        title: "HR Training Services",
        desc: "Recruitment, staffing, HR operations, payroll basics, labor laws, compliance, employee engagement, and workplace professionalism.",
        to: Some(Route::HrTraining),
    },
    ServiceTile {
        title: "Customer Care Training Services",
        desc: "Communication skills, call handling, email/chat etiquette, problem-solving, complaint management, and service quality.",
        to: Some(Route::CustomerTraining),
    },
    ServiceTile {
        title: "Banking & Finance Training Services",
        desc: "Banking fundamentals, financial products, customer service, KYC norms, compliance awareness, and professional conduct.",
        to: None,
    },
    ServiceTile {
        title: "Skill Development & Soft Skills Training",
        desc: "Communication, teamwork, confidence, time management, and professional behavior for corporate readiness.",
        to: None,
    },
    ServiceTile {
        title: "Practical & Industry-Oriented Training",
        desc: "Real-life scenarios, case studies, role plays, and hands-on learning with experienced industry professionals.",
        to: None,
    },
    ServiceTile {
        title: "Placement Support Services",
        desc: "Interview preparation, career guidance, and placement assistance through a strong client network.",
        to: None,
    },
];

const THANKS: ThankYou = ThankYou {
    label: None,
    title: "Thank you",
    body: "Thank you for exploring Nemesis Group for your training and career development needs. We support your journey toward professional growth with the right skills, confidence, and opportunities.",
    next: NextStep {
        label: Some("NEXT STEP"),
        title: "Book a quick call for program guidance",
        body: "Get the right training path based on your goal: HR, Customer Care, or Banking & Finance.",
        action: Action::primary("Contact Now", LinkTarget::Anchor("contact")),
    },
};

fn contact_block() -> ContactBlock {
    ContactBlock {
        show_address: true,
        actions: vec![
            Action::primary("View Services", LinkTarget::Route(Route::Services)),
            Action::secondary("About", LinkTarget::Anchor("overview")),
        ],
        thanks: THANKS,
    }
}

pub fn page() -> Page {
    Page {
        route: Route::Home,
        title: "Nemesis Group | Certified Professional Training",
        hero: Hero::Cover(cover()),
        sections: sections(),
        backdrop: Backdrop::Full,
        entrance: Motion::in_view(16),
    }
}

fn sections() -> Vec<PageSection> {
    vec![
        PageSection::new("Staffing + Training + Placement support for freshers")
            .with_id("overview")
            .with_eyebrow("Company Overview")
            .with_subtitle("Nemesis Group supports fresher candidates through selection, professional training, and placement assistance — with job-oriented programs that build practical skills, communication, and workplace professionalism.")
            .with_block(Block::Cards { columns: 2, cards: OVERVIEW }),
        PageSection::new("Build job-ready professionals with ethical, long-term growth")
            .with_id("vision-mission")
            .with_eyebrow("Vision & Mission")
            .with_subtitle("We bridge the gap between education and employment by delivering industry-focused training and supporting sustainable career success.")
            .with_block(Block::Cards { columns: 2, cards: VISION_MISSION }),
        PageSection::new("Better performance, adaptability, and employability")
            .with_id("why")
            .with_eyebrow("Why Training & Development Matters")
            .with_subtitle("Training helps individuals grow and organizations stay competitive — while making candidates industry-ready with confidence and professionalism.")
            .with_block(Block::Cards { columns: 2, cards: WHY_IT_MATTERS }),
        PageSection::new("A structured approach that delivers outcomes")
            .with_id("design")
            .with_eyebrow("Designing Effective Training")
            .with_subtitle("From identifying skill gaps to continuous evaluation — training is built around measurable objectives and real-world learning.")
            .with_block(Block::Steps(DESIGN_STEPS)),
        PageSection::new("Reaction, Satisfaction, and Advantage")
            .with_id("rsa")
            .with_eyebrow("Training Outcomes")
            .with_subtitle("We measure how well training is received, how relevant it feels, and what benefits candidates gain for employability and growth.")
            .with_block(Block::Cards { columns: 3, cards: OUTCOMES }),
        PageSection::new("Soft skills + career growth that compounds")
            .with_id("development")
            .with_eyebrow("Employee Development")
            .with_subtitle("Continuous development improves communication, teamwork, leadership, and promotion readiness — aligning individual goals with organizational growth.")
            .with_block(Block::Cards { columns: 2, cards: DEVELOPMENT }),
        PageSection::new("Programs designed for real roles")
            .with_id("all-services")
            .with_eyebrow("Training & Services")
            .with_subtitle("Comprehensive training with practical scenarios, hands-on learning, and placement support.")
            .with_block(Block::ServiceTiles {
                tiles: SERVICES,
                style: TileStyle::Arrow,
            }),
        PageSection::new("Talk to us for training and placement support")
            .with_id("contact")
            .with_eyebrow("Contact")
            .with_subtitle("Reach out for program details, schedules, and placement assistance.")
            .with_block(Block::Contact(contact_block())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_section_order() {
        let ids: Vec<_> = page().anchor_ids().collect();
        assert_eq!(
            ids,
            vec![
                "overview",
                "vision-mission",
                "why",
                "design",
                "rsa",
                "development",
                "all-services",
                "contact"
            ]
        );
    }

    #[test]
    fn test_explore_services_goes_to_services() {
        let action = page().action("Explore Services").expect("hero action");
        assert_eq!(action.target, LinkTarget::Route(Route::Services));
        assert_eq!(action.target.href(), "/services");
    }

    #[test]
    fn test_only_two_services_have_pages() {
        let linked: Vec<_> = page()
            .linked_tiles()
            .into_iter()
            .filter_map(|tile| tile.to)
            .collect();
        assert_eq!(linked, vec![Route::HrTraining, Route::CustomerTraining]);
    }

    #[test]
    fn test_five_design_steps() {
        let page = page();
        let design = page.section("design").expect("design section");
        assert!(matches!(design.blocks[0], Block::Steps(steps) if steps.len() == 5));
    }
}
