//! HR certification course content

use super::training::{ProgramSection, TrainingProgram, ENROLL_ID};
use super::{hex, PHOTO_CAREER, PHOTO_CLASSROOM, PHOTO_TEAM};
use crate::page::{
    Action, Callout, Card, ContentItem, Icon, LinkTarget, NextStep, Panel, PanelBody, Pill,
    ThankYou,
};
use crate::routes::Route;

const PILLS: &[Pill] = &[
    Pill::new(Icon::Clock, "8 Weeks | Live Online Classes"),
    Pill::new(Icon::Users, "Mentoring & Feedback"),
    Pill::new(Icon::Briefcase, "Perfect for freelancers"),
];

const HIGHLIGHTS: &[&str] = &[
    "Guaranteed Interviews & Placement Assurance",
    "Live Online Training + Practical Sessions",
    "Mentoring, Feedback & Doubt clearing",
    "Resume building + Interview preparation",
];

const MODULES: &[&str] = &[
    "Understanding organization structure",
    "Staff Management",
    "Payroll Management",
    "Employee Hiring",
    "Recruitment",
    "Labour laws",
    "Employee Development Skills",
    "Training and Development Programs",
    "Talent Acquisition and Retention",
    "Workforce Planning and Job Analysis",
    "HR Analytics and Reporting",
    "Diversity and Inclusion in the Workplace",
    "HR Information Systems (HRIS)",
    "Organizational Behavior and Culture",
    "Leadership and Management in HR",
];

const SKILL_CARDS: &[Card] = &[
    Card::new(
        Icon::GraduationCap,
        "Live learning + practical exposure",
        "Live sessions, assignments, role plays, and HR tool exposure to build corporate readiness.",
    ),
    Card::new(
        Icon::ShieldCheck,
        "Certification + Placement support",
        "Professional resume building, interview preparation, and continuous interview support.",
    ),
];

const FEATURES: &[Card] = &[
    Card::new(
        Icon::CheckCircle,
        "Practical Sessions",
        "60 hrs practical sessions and 40+ hrs practical learning, delivered by working professionals.",
    ),
    Card::new(
        Icon::Briefcase,
        "Placement & Interview Prep",
        "Assured job placement support, interview preparation, designated placement advisor.",
    ),
    Card::new(
        Icon::Users,
        "Learning Support",
        "Interactive Q&A, doubt clearing, weekly practice assignments, 1-year access to recorded sessions.",
    ),
];

const SCHEDULE_PILLS: &[Pill] = &[
    Pill::new(Icon::Clock, "10 AM to 10 PM (support window)"),
    Pill::new(Icon::CheckCircle, "HR Certification Assistance"),
];

const SCHEDULE: Callout = Callout {
    body: Some("Interactive live training sessions with daily 2 hrs or weekend 10 hrs option. Regular assignments and assessments are included."),
    pills: SCHEDULE_PILLS,
    aside: Some(Panel {
        label: "Includes",
        body: PanelBody::Checks(&[
            "Interactive live training",
            "40+ hrs practical learning",
            "Doubt clearing sessions",
            "Assignments & assessments",
            "1 year recorded access",
        ]),
        note: None,
    }),
    ..Callout::new("Online Training Schedule")
};

const ROLES: &[&str] = &[
    "HR Executive",
    "Recruiter",
    "Talent Acquisition Specialist",
    "HR Coordinator",
    "Payroll Executive",
    "HR Operations Executive",
    "Employee Relations Officer",
    "Training & Development Executive",
];

const CAREER_CARDS: &[Card] = &[
    Card::new(
        Icon::Briefcase,
        "Long-term growth",
        "Opens growth opportunities in corporate HR departments, staffing, and consulting firms.",
    ),
    Card::new(
        Icon::Users,
        "Confidence + professionalism",
        "Candidates gain confidence, professional skills, and hands-on HR knowledge for corporate readiness.",
    ),
];

const STEPS: &[ContentItem] = &[
    ContentItem::pair(
        "HR Training Duration (1–2 Months)",
        "4–8 weeks covering recruitment, HR operations, payroll basics, labour laws, compliance, and corporate practices.",
    ),
    ContentItem::pair(
        "Practical Exposure & Assessments (1–2 Weeks)",
        "Practical assignments, case studies, mock interviews, and HR tool exposure for corporate readiness.",
    ),
    ContentItem::pair(
        "Resume Preparation & Profile Building (3–5 Days)",
        "Professional HR resume + LinkedIn profile optimization and interview preparation.",
    ),
    ContentItem::pair(
        "Interview Scheduling (2–4 Weeks)",
        "Guaranteed interview calls based on skill matching and job availability through corporate network.",
    ),
    ContentItem::pair(
        "Interview Rounds & Selection (1–3 Weeks)",
        "Multiple attempts possible; continuous interview support is provided.",
    ),
    ContentItem::pair(
        "Placement Confirmation & Joining (1–2 Weeks)",
        "Offer letter, background verification, and joining formalities.",
    ),
];

const TIMELINE_CARDS: &[Card] = &[
    Card::new(
        Icon::Clock,
        "Total time to get placed",
        "Average timeline is around 2–3 months from course start to final job joining (may vary by performance and job market).",
    ),
    Card::new(
        Icon::ShieldCheck,
        "Continuous support",
        "Candidates who actively participate in training sessions and interview prep often secure jobs faster.",
    ),
];

const WHY_TOP: &[Card] = &[
    Card::new(
        Icon::Briefcase,
        "Industry-oriented training",
        "Covers recruitment, HR operations, payroll basics, labour laws, compliance, and employee engagement.",
    ),
    Card::new(
        Icon::GraduationCap,
        "Professional certification",
        "Enhances credibility and job readiness.",
    ),
    Card::new(
        Icon::Users,
        "Experienced trainers",
        "Learn from working HR professionals with real corporate exposure.",
    ),
];

const WHY_BOTTOM: &[Card] = &[
    Card::new(
        Icon::CheckCircle,
        "Practical learning approach",
        "Live cases, role plays, assignments, and corporate scenarios.",
    ),
    Card::new(
        Icon::CheckCircle,
        "Guaranteed interviews",
        "Continuous interview support after training completion.",
    ),
    Card::new(
        Icon::CheckCircle,
        "Placement assistance",
        "Strong corporate connections to support job placement.",
    ),
];

const START_ACTIONS: &[Action] = &[
    Action::primary("Enroll Today", LinkTarget::Anchor(ENROLL_ID)),
    Action::secondary("Get Trained", LinkTarget::Anchor(ENROLL_ID)),
    Action::secondary("Get Placed", LinkTarget::Anchor("timeline")),
];

const START: Callout = Callout {
    prominent: true,
    body: Some("We help you gain confidence, professional skills, and hands-on HR knowledge so you can enter the corporate world prepared and assured. We provide a transparent, structured, career-focused training program with proper guidance and placement assistance."),
    actions: START_ACTIONS,
    ..Callout::new("Start your HR career with confidence")
};

const SECTIONS: &[ProgramSection] = &[
    ProgramSection {
        id: "skills",
        title: "Skills Covered in Human Resource",
        subtitle: "A complete corporate HR skill-set designed for freshers and entry-level candidates.",
        lead: Some(Panel {
            label: "MODULES",
            body: PanelBody::Dots(MODULES),
            note: None,
        }),
        cards: &[SKILL_CARDS],
        callout: None,
    },
    ProgramSection {
        id: "features",
        title: "Human Resource Training Key Features",
        subtitle: "Built as a practical program with mentoring, assignments, recorded access, and placement assistance.",
        lead: None,
        cards: &[FEATURES],
        callout: Some(SCHEDULE),
    },
    ProgramSection {
        id: "career",
        title: "Career Opportunities After HR Training",
        subtitle: "After completing HR training, candidates can pursue multiple roles across corporate HR departments and consulting firms.",
        lead: Some(Panel {
            label: "ROLES",
            body: PanelBody::Roles(ROLES),
            note: Some("This training builds strong communication, organizational, and people-management skills."),
        }),
        cards: &[CAREER_CARDS],
        callout: None,
    },
    ProgramSection {
        id: "timeline",
        title: "Process & Timeline After HR Certification",
        subtitle: "From training to joining, an average placement timeline of around 2 to 3 months, depending on performance and interview readiness.",
        lead: Some(Panel {
            label: "STEPS",
            body: PanelBody::Timeline(STEPS),
            note: None,
        }),
        cards: &[TIMELINE_CARDS],
        callout: None,
    },
    ProgramSection {
        id: "why",
        title: "Why choose Nemesis Group for HR Training?",
        subtitle: "Industry-oriented training with practical learning and placement support.",
        lead: None,
        cards: &[WHY_TOP, WHY_BOTTOM],
        callout: Some(START),
    },
];

pub const PROGRAM: TrainingProgram = TrainingProgram {
    route: Route::HrTraining,
    document_title: "HR Training | Nemesis Group",
    headline: &["HR – HUMAN RESOURCE", "CERTIFICATION COURSE"],
    tagline: "Guaranteed Interviews & Placement Assurance",
    subline: Some("Begin Your HR Career"),
    pills: PILLS,
    explore_label: "View Skills Covered",
    footnote: "Limited seats available • www.nemesisgroup.in",
    panel_title: "Highlights",
    panel_blurb: None,
    highlights: HIGHLIGHTS,
    images: [
        hex(PHOTO_TEAM, "HR Training"),
        hex(PHOTO_CLASSROOM, "Live Classes"),
        hex(PHOTO_CAREER, "Career"),
    ],
    sections: SECTIONS,
    enroll_subtitle: "Call or message for batches, schedule, fee details, and placement guidance.",
    enroll_explore_label: "Skills Covered",
    thanks: ThankYou {
        label: Some("THANK YOU"),
        title: "Thank you for exploring",
        body: "We appreciate the trust shown by students and parents in our professional training programs. We are committed to industry-focused learning, practical exposure, and placement support to help freshers build confident and successful careers.",
        next: NextStep {
            label: None,
            title: "Next step",
            body: "Share your profile (education + location + preferred role). We’ll guide the best batch and placement path.",
            action: Action::primary("Contact Now", LinkTarget::Anchor(ENROLL_ID)),
        },
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::training;
    use crate::page::Block;

    #[test]
    fn test_hr_sections() {
        let page = training::page(&PROGRAM);
        let ids: Vec<_> = page.anchor_ids().collect();
        assert_eq!(
            ids,
            vec!["skills", "features", "career", "timeline", "why", "enroll"]
        );
    }

    #[test]
    fn test_view_skills_scrolls_to_skills() {
        let page = training::page(&PROGRAM);
        let action = page.action("View Skills Covered").expect("hero action");
        assert_eq!(action.target, LinkTarget::Anchor("skills"));
        assert_eq!(
            page.action("Get Placed").map(|a| a.target),
            Some(LinkTarget::Anchor("timeline"))
        );
    }

    #[test]
    fn test_module_list() {
        assert_eq!(MODULES.len(), 15);
        assert_eq!(ROLES.len(), 8);
        assert_eq!(STEPS.len(), 6);
        let page = training::page(&PROGRAM);
        let skills = page.section("skills").expect("skills section");
        assert!(matches!(&skills.blocks[0], Block::Columns(columns) if columns.len() == 2));
    }
}
