//! Customer care training course content

use super::training::{ProgramSection, TrainingProgram, ENROLL_ID};
use super::{hex, PHOTO_SUPPORT_TEAM, PHOTO_TEAM};
use crate::page::{
    Action, Callout, Card, ContentItem, Icon, LinkTarget, NextStep, Panel, PanelBody, Pill,
    ThankYou,
};
use crate::routes::Route;

const PILLS: &[Pill] = &[
    Pill::new(Icon::Clock, "Online Training (Daily / Weekend)"),
    Pill::new(Icon::Headphones, "Voice + Non-Voice Support"),
    Pill::new(Icon::ShieldCheck, "Interview & Placement Support"),
];

const HIGHLIGHTS: &[&str] = &[
    "Communication skills (verbal + written)",
    "Inbound & outbound call handling",
    "Email & chat support",
    "Complaint & escalation handling",
];

const MODULES: &[&str] = &[
    "Communication Skills (verbal + written)",
    "Call Handling Techniques (inbound & outbound)",
    "Email & Chat Support",
    "Problem-Solving Skills",
    "Complaint Management",
    "Service Quality Standards",
    "Soft Skills Development (patience, empathy, teamwork)",
    "Practical Exposure (role plays, simulations)",
];

const COVERAGE_CARDS: &[Card] = &[
    Card::new(
        Icon::MessageSquareText,
        "Advanced communication + customer interaction",
        "Build confident speaking, writing, empathy, and professional tone for real customer conversations.",
    ),
    Card::new(
        Icon::ShieldCheck,
        "Practical role plays + real-time scenarios",
        "Mock calls, email/chat templates, complaint handling, and simulations to become job-ready.",
    ),
];

const FEATURES: &[Card] = &[
    Card::new(
        Icon::CheckCircle,
        "Call Handling + Digital Support",
        "Inbound/outbound calling techniques with email, chat, and digital customer support training.",
    ),
    Card::new(
        Icon::ShieldCheck,
        "Complaints + Escalations",
        "Complaint resolution, escalation handling, and service quality improvement methods.",
    ),
    Card::new(
        Icon::Users,
        "CRM Basics + Professionalism",
        "CRM tools basics, customer data handling, confidence building, and workplace professionalism.",
    ),
];

const ALSO_INCLUDES: Callout = Callout {
    checks: &[
        "Practical role plays and real-time scenarios",
        "Problem-solving & service excellence methods",
        "Interview preparation and placement support",
        "Soft skills and confidence-building drills",
    ],
    ..Callout::new("Also Includes")
};

const ONLINE_PROGRAM: &[&str] = &[
    "Interactive Live Training Sessions",
    "40+ Hrs Practical Learning",
    "Delivered by Working Professionals",
    "1 Year Access to Recorded Sessions",
    "Daily 2 Hrs or Weekend 10 Hrs",
    "Placement assistance will be provided",
    "Doubt clearing sessions",
    "Regular assignments + assessments",
];

const TIMING: &[Card] = &[Card::new(
    Icon::Clock,
    "Timing",
    "Support window: 10 AM to 10 PM. Choose daily batches or weekend batches as per availability.",
)];

const INDUSTRIES: &[&str] = &[
    "BPO & Call Center",
    "Corporate Offices & MNCs",
    "Banking & Financial Services",
    "E-Commerce & Retail",
    "Telecom & IT Services",
    "Healthcare & Insurance",
    "Travel / Hospitality / Airlines",
];

const CAREER_CARDS: &[Card] = &[
    Card::new(
        Icon::Briefcase,
        "Job-ready outcomes",
        "Training focuses on customer handling, service quality, and professional communication for fast hiring readiness.",
    ),
    Card::new(
        Icon::Headphones,
        "Voice & Non-Voice support",
        "Voice process + chat/email support skills for wide opportunity coverage.",
    ),
];

const STEPS: &[ContentItem] = &[
    ContentItem::pair(
        "Training Duration (3–6 Weeks)",
        "Communication, call handling, support process, email/chat etiquette, complaint handling, professionalism.",
    ),
    ContentItem::pair(
        "Practical Exposure & Assessments (1 Week)",
        "Mock calls, role plays, live scenarios, assessments to ensure job readiness.",
    ),
    ContentItem::pair(
        "Resume Preparation & Profile Building (3–5 Days)",
        "Professional resume + interview behavior and communication improvement guidance.",
    ),
    ContentItem::pair(
        "Interview Scheduling (2–4 Weeks)",
        "Guaranteed interview calls through corporate and BPO network.",
    ),
    ContentItem::pair(
        "Interview Rounds & Selection (1–3 Weeks)",
        "Multiple interview attempts supported until placement.",
    ),
    ContentItem::pair(
        "Offer Letter & Joining (3–7 Days)",
        "Offer letter, documentation, and joining formalities.",
    ),
];

const TIMELINE_CARDS: &[Card] = &[
    Card::new(
        Icon::Clock,
        "Total time to get placed",
        "Average placement time is 1.5–2.5 months including training, practice, resume prep, interviews, and selection.",
    ),
    Card::new(
        Icon::ShieldCheck,
        "What affects timeline?",
        "Communication skills, interview performance, and current hiring demand in customer care industry.",
    ),
];

const SUCCESS_CARDS: &[Card] = &[
    Card::new(
        Icon::Sparkles,
        "Growth & stability",
        "Structured training supports long-term employment stability and growth across industries.",
    ),
    Card::new(
        Icon::ShieldCheck,
        "High-value skill development",
        "Advanced communication, service excellence, and leadership skills enable progress into QA, training, management, and customer success.",
    ),
];

const CORE_STRENGTHS: Callout = Callout {
    checks: &[
        "Clear & confident communication",
        "Smart problem handling",
        "Growth-oriented career path",
    ],
    check_columns: 3,
    ..Callout::new("Core strengths you build")
};

const WHY_TOP: &[Card] = &[
    Card::new(
        Icon::ShieldCheck,
        "Industry-Focused Curriculum",
        "Communication, call handling, complaint resolution, and service excellence aligned to corporate needs.",
    ),
    Card::new(
        Icon::Users,
        "Experienced Trainers",
        "Learn from working customer care professionals with hands-on industry exposure.",
    ),
    Card::new(
        Icon::Headphones,
        "Practical & Interactive Learning",
        "Live sessions, role plays, mock calls, and real-world scenarios ensure job readiness.",
    ),
];

const WHY_BOTTOM: &[Card] = &[
    Card::new(
        Icon::CheckCircle,
        "Certification & Placement Support",
        "Professional certification plus guaranteed interview opportunities and placement assistance.",
    ),
    Card::new(
        Icon::Clock,
        "Flexible Online Training",
        "Daily or weekend batches with 1-year access to recorded sessions for revision.",
    ),
];

const ADVANCEMENT_ACTIONS: &[Action] = &[
    Action::primary("Enroll Today", LinkTarget::Anchor(ENROLL_ID)),
    Action::secondary("Placement Timeline", LinkTarget::Anchor("timeline")),
];

const ADVANCEMENT: Callout = Callout {
    prominent: true,
    body: Some("Cultivate advanced communication, leadership, and workplace acumen while leveraging Nemesis Group’s corporate network for premium interview opportunities and assured placement in customer care roles."),
    actions: ADVANCEMENT_ACTIONS,
    ..Callout::new("Strategic Career Advancement")
};

const SECTIONS: &[ProgramSection] = &[
    ProgramSection {
        id: "coverage",
        title: "Course Coverage",
        subtitle: "Our Customer Care Training Program equips freshers with practical skills required for professional customer support roles.",
        lead: Some(Panel {
            label: "MODULES",
            body: PanelBody::Dots(MODULES),
            note: None,
        }),
        cards: &[COVERAGE_CARDS],
        callout: None,
    },
    ProgramSection {
        id: "features",
        title: "Customer Care Professional Training – Key Features",
        subtitle: "Job-oriented training with communication mastery, support process training, and placement preparation.",
        lead: None,
        cards: &[FEATURES],
        callout: Some(ALSO_INCLUDES),
    },
    ProgramSection {
        id: "online",
        title: "Online Training",
        subtitle: "Interactive live sessions with practical learning and recorded access.",
        lead: Some(Panel {
            label: "PROGRAM",
            body: PanelBody::Checks(ONLINE_PROGRAM),
            note: None,
        }),
        cards: &[TIMING],
        callout: None,
    },
    ProgramSection {
        id: "career",
        title: "Career Opportunities After Customer Care Training",
        subtitle: "Open roles across BPO, corporate support, banking, e-commerce, telecom, healthcare, and hospitality.",
        lead: Some(Panel {
            label: "INDUSTRIES",
            body: PanelBody::Roles(INDUSTRIES),
            note: Some("Roles include Customer Care Executive, Support Executive, Client Service/Helpdesk, Relationship Support, and more."),
        }),
        cards: &[CAREER_CARDS],
        callout: None,
    },
    ProgramSection {
        id: "timeline",
        title: "Process & Timeline After Customer Care Certification",
        subtitle: "From course start to job joining: typically 1.5 to 2.5 months (depends on batch + interview performance).",
        lead: Some(Panel {
            label: "STEPS",
            body: PanelBody::Timeline(STEPS),
            note: None,
        }),
        cards: &[TIMELINE_CARDS],
        callout: None,
    },
    ProgramSection {
        id: "success",
        title: "Build a Successful Career in Customer Care",
        subtitle: "Customer care offers scalable career progression with cross-industry demand and long-term stability.",
        lead: None,
        cards: &[SUCCESS_CARDS],
        callout: Some(CORE_STRENGTHS),
    },
    ProgramSection {
        id: "why",
        title: "Why choose Nemesis Group for Customer Care Training?",
        subtitle: "Industry-focused curriculum, practical learning, and placement support.",
        lead: None,
        cards: &[WHY_TOP, WHY_BOTTOM],
        callout: Some(ADVANCEMENT),
    },
];

pub const PROGRAM: TrainingProgram = TrainingProgram {
    route: Route::CustomerTraining,
    document_title: "Customer Care Training | Nemesis Group",
    headline: &["CUSTOMER CARE", "TRAINING", "COURSE COVERAGE"],
    tagline: "Job-oriented training designed to equip freshers for professional customer support roles.",
    subline: None,
    pills: PILLS,
    explore_label: "View Course Coverage",
    footnote: "Designed for freshers • Practical learning • Corporate readiness",
    panel_title: "Course Coverage",
    panel_blurb: Some("Communication, call handling, email/chat support, problem solving, complaint handling, service quality, soft skills, and practical exposure."),
    highlights: HIGHLIGHTS,
    images: [
        hex(PHOTO_TEAM, "Customer Care"),
        hex(PHOTO_TEAM, "Professional"),
        hex(PHOTO_SUPPORT_TEAM, "Support Team"),
    ],
    sections: SECTIONS,
    enroll_subtitle: "Call or message for batch schedule, fee details, and placement guidance.",
    enroll_explore_label: "Course Coverage",
    thanks: ThankYou {
        label: Some("THANK YOU"),
        title: "Thank you for choosing Nemesis Group",
        body: "Our programs combine practical learning, professional certification, and placement support, ensuring candidates are equipped to excel in competitive customer care roles.",
        next: NextStep {
            label: None,
            title: "Next step",
            body: "Share your education, location, and preferred role (Voice/Non-Voice). We’ll guide the best batch and placement path.",
            action: Action::primary("Contact Now", LinkTarget::Anchor(ENROLL_ID)),
        },
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::training;

    #[test]
    fn test_customer_care_sections() {
        let page = training::page(&PROGRAM);
        let ids: Vec<_> = page.anchor_ids().collect();
        assert_eq!(
            ids,
            vec![
                "coverage", "features", "online", "career", "timeline", "success", "why", "enroll"
            ]
        );
    }

    #[test]
    fn test_course_coverage_links() {
        let page = training::page(&PROGRAM);
        assert_eq!(
            page.action("View Course Coverage").map(|a| a.target),
            Some(LinkTarget::Anchor("coverage"))
        );
        assert_eq!(
            page.action("Course Coverage").map(|a| a.target),
            Some(LinkTarget::Anchor("coverage"))
        );
        assert_eq!(
            page.action("Placement Timeline").map(|a| a.target),
            Some(LinkTarget::Anchor("timeline"))
        );
    }

    #[test]
    fn test_industry_list() {
        assert_eq!(INDUSTRIES.len(), 7);
        assert_eq!(MODULES.len(), 8);
        assert_eq!(CORE_STRENGTHS.check_columns, 3);
    }
}
