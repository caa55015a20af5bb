//! Page model
//!
//! Every route is described by a [`Page`]: a hero followed by an ordered
//! list of [`PageSection`]s built from static content. Links are typed
//! ([`LinkTarget`]) so route links can only point at the route table and
//! in-page anchors can be checked against section ids.

use crate::reveal::Motion;
use crate::routes::Route;

/// Icons used across the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowLeft,
    ArrowRight,
    Briefcase,
    CheckCircle,
    ChevronDown,
    Clock,
    Globe,
    GraduationCap,
    Headphones,
    Mail,
    MapPin,
    MessageSquareText,
    Phone,
    Shield,
    ShieldCheck,
    Sparkles,
    Users,
}

/// A heading/body pair, or plain text when `heading` is `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentItem {
    pub heading: Option<&'static str>,
    pub body: &'static str,
}

impl ContentItem {
    pub const fn text(body: &'static str) -> Self {
        Self {
            heading: None,
            body,
        }
    }

    pub const fn pair(heading: &'static str, body: &'static str) -> Self {
        Self {
            heading: Some(heading),
            body,
        }
    }
}

impl From<&'static str> for ContentItem {
    fn from(body: &'static str) -> Self {
        ContentItem::text(body)
    }
}

impl From<(&'static str, &'static str)> for ContentItem {
    fn from((heading, body): (&'static str, &'static str)) -> Self {
        ContentItem::pair(heading, body)
    }
}

/// Where a link goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    Route(Route),
    /// Section id on the current page
    Anchor(&'static str),
    /// Section id on another page
    RouteAnchor(Route, &'static str),
}

impl LinkTarget {
    pub fn href(&self) -> String {
        match self {
            LinkTarget::Route(route) => route.path().to_string(),
            LinkTarget::Anchor(id) => format!("#{}", id),
            LinkTarget::RouteAnchor(route, id) => format!("{}#{}", route.path(), id),
        }
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            LinkTarget::Route(route) | LinkTarget::RouteAnchor(route, _) => Some(*route),
            LinkTarget::Anchor(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    /// Solid white button
    #[default]
    Primary,
    /// Translucent outlined button
    Secondary,
    /// Smaller solid button used inside panels
    Compact,
    /// Bare text link
    Plain,
}

/// A call-to-action link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub target: LinkTarget,
    pub emphasis: Emphasis,
    pub icon: Option<Icon>,
}

impl Action {
    pub const fn primary(label: &'static str, target: LinkTarget) -> Self {
        Self {
            label,
            target,
            emphasis: Emphasis::Primary,
            icon: Some(Icon::ArrowRight),
        }
    }

    pub const fn secondary(label: &'static str, target: LinkTarget) -> Self {
        Self {
            label,
            target,
            emphasis: Emphasis::Secondary,
            icon: None,
        }
    }

    pub const fn compact(label: &'static str, target: LinkTarget) -> Self {
        Self {
            label,
            target,
            emphasis: Emphasis::Compact,
            icon: Some(Icon::ArrowRight),
        }
    }

    pub const fn back(label: &'static str, route: Route) -> Self {
        Self {
            label,
            target: LinkTarget::Route(route),
            emphasis: Emphasis::Plain,
            icon: Some(Icon::ArrowLeft),
        }
    }
}

/// Small icon + title + description card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

impl Card {
    pub const fn new(icon: Icon, title: &'static str, desc: &'static str) -> Self {
        Self { icon, title, desc }
    }
}

/// Service summary, linked when the service has its own page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTile {
    pub title: &'static str,
    pub desc: &'static str,
    pub to: Option<Route>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStyle {
    /// Arrow badge on the right
    Arrow,
    /// "Open" footer link
    Open,
}

/// Rounded badge with an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pill {
    pub icon: Icon,
    pub text: &'static str,
}

impl Pill {
    pub const fn new(icon: Icon, text: &'static str) -> Self {
        Self { icon, text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelBody {
    /// Dot-marked list
    Dots(&'static [&'static str]),
    /// Check-marked list
    Checks(&'static [&'static str]),
    /// Grid of role pills
    Roles(&'static [&'static str]),
    /// Numbered steps
    Timeline(&'static [ContentItem]),
}

/// Labelled content panel ("MODULES", "ROLES", "STEPS", ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub label: &'static str,
    pub body: PanelBody,
    pub note: Option<&'static str>,
}

/// Wide highlighted box closing a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callout {
    pub title: &'static str,
    /// Large heading instead of the card-sized one
    pub prominent: bool,
    pub body: Option<&'static str>,
    pub pills: &'static [Pill],
    pub checks: &'static [&'static str],
    pub check_columns: u8,
    /// Inset panel shown beside the text
    pub aside: Option<Panel>,
    pub actions: &'static [Action],
}

impl Callout {
    pub const fn new(title: &'static str) -> Self {
        Self {
            title,
            prominent: false,
            body: None,
            pills: &[],
            checks: &[],
            check_columns: 2,
            aside: None,
            actions: &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextStep {
    pub label: Option<&'static str>,
    pub title: &'static str,
    pub body: &'static str,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThankYou {
    pub label: Option<&'static str>,
    pub title: &'static str,
    pub body: &'static str,
    pub next: NextStep,
}

/// Contact details card beside a thank-you note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactBlock {
    pub show_address: bool,
    pub actions: Vec<Action>,
    pub thanks: ThankYou,
}

/// Child block of a section
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Cards { columns: u8, cards: &'static [Card] },
    /// Numbered "STEP n" tiles
    Steps(&'static [ContentItem]),
    ServiceTiles {
        tiles: &'static [ServiceTile],
        style: TileStyle,
    },
    /// Side-by-side columns, each a vertical stack
    Columns(Vec<Vec<Block>>),
    Panel(Panel),
    Callout(Callout),
    Contact(ContactBlock),
}

impl Block {
    /// Every link reachable from this block
    pub fn links(&self) -> Vec<LinkTarget> {
        match self {
            Block::Cards { .. } | Block::Steps(_) | Block::Panel(_) => Vec::new(),
            Block::ServiceTiles { tiles, .. } => tiles
                .iter()
                .filter_map(|tile| tile.to.map(LinkTarget::Route))
                .collect(),
            Block::Columns(columns) => columns
                .iter()
                .flatten()
                .flat_map(|block| block.links())
                .collect(),
            Block::Callout(callout) => callout.actions.iter().map(|a| a.target).collect(),
            Block::Contact(contact) => contact
                .actions
                .iter()
                .map(|a| a.target)
                .chain(std::iter::once(contact.thanks.next.action.target))
                .collect(),
        }
    }

    /// Every action in this block, in document order
    pub fn actions(&self) -> Vec<Action> {
        match self {
            Block::Columns(columns) => columns
                .iter()
                .flatten()
                .flat_map(|block| block.actions())
                .collect(),
            Block::Callout(callout) => callout.actions.to_vec(),
            Block::Contact(contact) => {
                let mut actions = contact.actions.clone();
                actions.push(contact.thanks.next.action);
                actions
            }
            _ => Vec::new(),
        }
    }
}

/// A titled, optionally anchored block of content
#[derive(Debug, Clone, PartialEq)]
pub struct PageSection {
    pub id: Option<&'static str>,
    pub eyebrow: Option<&'static str>,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub blocks: Vec<Block>,
}

impl PageSection {
    pub fn new(title: &'static str) -> Self {
        Self {
            id: None,
            eyebrow: None,
            title,
            subtitle: None,
            blocks: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_eyebrow(mut self, eyebrow: &'static str) -> Self {
        self.eyebrow = Some(eyebrow);
        self
    }

    pub fn with_subtitle(mut self, subtitle: &'static str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

/// Image clipped to a hexagon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexTile {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroVisual {
    /// Three hex images over a white disc, with a contact card
    Collage { images: [HexTile; 3] },
    /// Brochure-style panel with highlights and images
    Panel {
        title: &'static str,
        blurb: Option<&'static str>,
        highlights: &'static [&'static str],
        images: [HexTile; 3],
        cta: Action,
    },
}

/// Full-height opening block of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    pub back: Option<Action>,
    pub kicker: &'static str,
    pub headline: &'static [&'static str],
    pub tagline: &'static str,
    pub subline: Option<&'static str>,
    pub badge: Option<&'static str>,
    pub pills: &'static [Pill],
    pub actions: Vec<Action>,
    /// Label/value fact tiles
    pub facts: &'static [(&'static str, &'static str)],
    pub footnote: Option<&'static str>,
    pub visual: HeroVisual,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Hero {
    Cover(Cover),
    /// Plain heading, intro and blocks
    Banner {
        title: &'static str,
        intro: &'static str,
        blocks: Vec<Block>,
    },
}

impl Hero {
    pub fn actions(&self) -> Vec<Action> {
        match self {
            Hero::Cover(cover) => {
                let mut actions: Vec<Action> = cover.back.into_iter().collect();
                actions.extend_from_slice(&cover.actions);
                if let HeroVisual::Panel { cta, .. } = cover.visual {
                    actions.push(cta);
                }
                actions
            }
            Hero::Banner { blocks, .. } => blocks.iter().flat_map(|b| b.actions()).collect(),
        }
    }

    pub fn links(&self) -> Vec<LinkTarget> {
        match self {
            Hero::Cover(_) => self.actions().iter().map(|a| a.target).collect(),
            Hero::Banner { blocks, .. } => blocks.iter().flat_map(|b| b.links()).collect(),
        }
    }
}

/// Decorative background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// Gradient, two glows and three dot grids
    Full,
    /// Gradient and a single dot grid
    Plain,
}

/// A complete routed page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub route: Route,
    /// Document title
    pub title: &'static str,
    pub hero: Hero,
    pub sections: Vec<PageSection>,
    pub backdrop: Backdrop,
    /// Entrance applied to section headers and cards
    pub entrance: Motion,
}

impl Page {
    pub fn section(&self, id: &str) -> Option<&PageSection> {
        self.sections.iter().find(|s| s.id == Some(id))
    }

    /// Section ids in document order
    pub fn anchor_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().filter_map(|s| s.id)
    }

    /// Every link on the page, hero first
    pub fn links(&self) -> Vec<LinkTarget> {
        let mut links = self.hero.links();
        for section in &self.sections {
            links.extend(section.blocks.iter().flat_map(|b| b.links()));
        }
        links
    }

    /// Every call-to-action on the page, hero first
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = self.hero.actions();
        for section in &self.sections {
            actions.extend(section.blocks.iter().flat_map(|b| b.actions()));
        }
        actions
    }

    /// First action with the given label
    pub fn action(&self, label: &str) -> Option<Action> {
        self.actions().into_iter().find(|a| a.label == label)
    }

    /// Service tiles that link somewhere, across hero and sections
    pub fn linked_tiles(&self) -> Vec<ServiceTile> {
        let mut blocks: Vec<&Block> = Vec::new();
        if let Hero::Banner { blocks: hero, .. } = &self.hero {
            blocks.extend(hero.iter());
        }
        blocks.extend(self.sections.iter().flat_map(|s| s.blocks.iter()));
        blocks
            .into_iter()
            .filter_map(|b| match b {
                Block::ServiceTiles { tiles, .. } => Some(*tiles),
                _ => None,
            })
            .flatten()
            .filter(|t| t.to.is_some())
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_href() {
        assert_eq!(LinkTarget::Route(Route::Services).href(), "/services");
        assert_eq!(LinkTarget::Anchor("enroll").href(), "#enroll");
        assert_eq!(
            LinkTarget::RouteAnchor(Route::Home, "contact").href(),
            "/#contact"
        );
    }

    #[test]
    fn test_content_item_conversions() {
        let plain: ContentItem = "Recruitment".into();
        assert_eq!(plain.heading, None);
        let pair: ContentItem = ("Set Clear Goals", "Establish outcomes.").into();
        assert_eq!(pair.heading, Some("Set Clear Goals"));
        assert_eq!(pair.body, "Establish outcomes.");
    }

    #[test]
    fn test_section_builder() {
        let section = PageSection::new("Course Coverage")
            .with_id("coverage")
            .with_subtitle("Practical skills")
            .with_block(Block::Steps(&[]));
        assert_eq!(section.id, Some("coverage"));
        assert_eq!(section.eyebrow, None);
        assert_eq!(section.blocks.len(), 1);
    }

    #[test]
    fn test_nested_column_links() {
        static ACTIONS: [Action; 1] = [Action::secondary("Get Placed", LinkTarget::Anchor("timeline"))];
        let callout = Callout {
            actions: &ACTIONS,
            ..Callout::new("Start")
        };
        let block = Block::Columns(vec![vec![Block::Callout(callout)], vec![]]);
        assert_eq!(block.links(), vec![LinkTarget::Anchor("timeline")]);
        assert_eq!(block.actions()[0].label, "Get Placed");
    }
}
