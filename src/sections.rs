use serde::{Deserialize, Serialize};

pub const ROOT_PATH: &str = "/";
pub const BLOGS_PREFIX: &str = "/blogs";
pub const PROJECTS_PREFIX: &str = "/projects";

/// Navigable sections of the site. Exactly one is highlighted in the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    Home,
    About,
    Members,
    Events,
    Projects,
    ProjectsActive,
    Blogs,
    Mentors,
    Contact,
}

/// Sections the scroll observer measures, in page order.
pub const OBSERVED_SECTIONS: [TabId; 7] = [
    TabId::About,
    TabId::Members,
    TabId::Events,
    TabId::Projects,
    TabId::Blogs,
    TabId::Mentors,
    TabId::Contact,
];

impl TabId {
    pub const ALL: [TabId; 9] = [
        TabId::Home,
        TabId::About,
        TabId::Members,
        TabId::Events,
        TabId::Projects,
        TabId::ProjectsActive,
        TabId::Blogs,
        TabId::Mentors,
        TabId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Home => "home",
            TabId::About => "about",
            TabId::Members => "members",
            TabId::Events => "events",
            TabId::Projects => "projects",
            TabId::ProjectsActive => "projects-active",
            TabId::Blogs => "blogs",
            TabId::Mentors => "mentors",
            TabId::Contact => "contact",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        TabId::ALL.into_iter().find(|tab| tab.as_str() == value)
    }

    /// DOM id of the section on the home page. `None` means top of page.
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            TabId::Home => None,
            TabId::About => Some("about-us"),
            TabId::Members => Some("members-section"),
            TabId::Events => Some("events-section"),
            TabId::Projects => Some("projects-section"),
            TabId::ProjectsActive => Some("active-projects-section"),
            TabId::Blogs => Some("blogs-section"),
            TabId::Mentors => Some("mentors-section"),
            TabId::Contact => Some("contact-section"),
        }
    }

    /// Route prefix of the standalone page backing this tab, if any.
    pub fn page_prefix(&self) -> Option<&'static str> {
        match self {
            TabId::Blogs => Some(BLOGS_PREFIX),
            TabId::Projects => Some(PROJECTS_PREFIX),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabId::Home => "Home",
            TabId::About => "About Us",
            TabId::Members => "Members",
            TabId::Events => "Events",
            TabId::Projects => "Projects Archived",
            TabId::ProjectsActive => "Active Projects",
            TabId::Blogs => "Blogs",
            TabId::Mentors => "Mentors",
            TabId::Contact => "Contact Us",
        }
    }

    /// Whether the navbar button for `self` should light up while `active` is selected.
    pub fn highlights(&self, active: TabId) -> bool {
        match self {
            TabId::Projects => matches!(active, TabId::Projects | TabId::ProjectsActive),
            other => *other == active,
        }
    }
}
