use dioxus::prelude::*;
use dioxus_router::Link;

use crate::api::{Announcement, ApiError};
use crate::blogs::BlogsSection;
use crate::contact::ContactSection;
use crate::content::{Profile, MEMBERS, MENTORS};
use crate::dom;
use crate::events::EventsSection;
use crate::hooks::use_api;
use crate::layout::{ExternalLink, SectionHeading};
use crate::projects::{ActiveProjectsSection, ProjectsSection};
use crate::routes::Route;
use crate::sections::TabId;

const LOADING_TEXT: &str = "Loading announcements...";
const EMPTY_TEXT: &str = "No announcements yet.";

/// Ticker text for the announcement bar. A failed fetch reads as empty.
pub fn ticker_text(announcements: Option<&Result<Vec<Announcement>, ApiError>>) -> String {
    match announcements {
        None => LOADING_TEXT.to_string(),
        Some(Ok(items)) if !items.is_empty() => items
            .iter()
            .map(|item| item.text.as_str())
            .collect::<Vec<_>>()
            .join(" | "),
        Some(_) => EMPTY_TEXT.to_string(),
    }
}

#[component]
pub fn Home() -> Element {
    let announcements = use_api("announcements", |api| async move { api.announcements().await });
    let ticker = ticker_text(announcements.read().as_ref());

    rsx! {
        document::Title { "Chips & Bytes" }
        div { class: "page home-page",
            div { class: "hero-section",
                div { class: "hero-grid",
                    div { class: "hero-left",
                        h1 { class: "main-heading", "Welcome to" }
                        h2 { class: "typing-heading", "Chips & Bytes" }
                        p { class: "subheading", "Explore the world of Computer Architecture" }
                        div { class: "hero-buttons",
                            button {
                                class: "btn primary button-glow",
                                onclick: move |_| {
                                    if let Some(anchor) = TabId::Contact.anchor() {
                                        dom::scroll_into_view(anchor);
                                    }
                                },
                                "Join Our Community"
                            }
                        }
                    }
                    div { class: "hero-right",
                        img {
                            class: "bouncing-icon",
                            src: "/assets/logo_white_full.png",
                            alt: "Chips & Bytes Logo",
                        }
                    }
                }
                div { class: "announcements-bar", role: "marquee",
                    div { class: "scroll-text",
                        span { class: "announcement-highlight", "Latest Updates: " }
                        "{ticker}"
                    }
                }
            }
            HomeSection { tab: TabId::About, About {} }
            HomeSection { tab: TabId::Members,
                ProfileGrid {
                    title: "Members",
                    subtitle: "The people who keep the club running.",
                    profiles: MEMBERS,
                }
            }
            HomeSection { tab: TabId::Events, EventsSection {} }
            HomeSection { tab: TabId::ProjectsActive, ActiveProjectsSection {} }
            HomeSection { tab: TabId::Projects, ProjectsSection {} }
            HomeSection { tab: TabId::Blogs, BlogsSection {} }
            HomeSection { tab: TabId::Mentors,
                ProfileGrid {
                    title: "Mentors",
                    subtitle: "Faculty and alumni guiding our work.",
                    profiles: MENTORS,
                }
            }
            HomeSection { tab: TabId::Contact, ContactSection {} }
            div { class: "admin-link",
                Link { to: Route::AdminLogin {}, class: "admin-login-link", "Admin \u{2699}" }
            }
        }
    }
}

/// Anchor wrapper the scroll observer measures.
#[component]
fn HomeSection(tab: TabId, children: Element) -> Element {
    let anchor = tab.anchor().unwrap_or_default();
    rsx! {
        div { id: anchor, class: "tab-section-container", {children} }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        section { class: "about-page",
            SectionHeading {
                title: "About Us".to_string(),
                subtitle: Some("Chips & Bytes is the Computer Architecture Club of SSSIHL.".to_string()),
            }
            div { class: "about-grid",
                div { class: "about-card",
                    h3 { "What we do" }
                    p {
                        "We study how processors, memory systems and interconnects work, "
                        "from the instruction set down to the silicon."
                    }
                }
                div { class: "about-card",
                    h3 { "How we learn" }
                    p {
                        "Talks, hands-on workshops and long-running projects, "
                        "written up on our blogs so others can follow along."
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileGrid(title: &'static str, subtitle: &'static str, profiles: &'static [Profile]) -> Element {
    rsx! {
        section { class: "profiles-page",
            SectionHeading { title: title.to_string(), subtitle: Some(subtitle.to_string()) }
            div { class: "profile-grid",
                for profile in profiles.iter() {
                    div { key: "{profile.name}", class: "profile-card",
                        img { class: "profile-image", src: profile.image, alt: profile.name }
                        h3 { class: "profile-name", "{profile.name}" }
                        p { class: "profile-designation", "{profile.designation}" }
                        p { class: "profile-summary", "{profile.summary}" }
                        if let Some(linkedin) = profile.linkedin {
                            ExternalLink { href: linkedin.to_string(), class: Some("profile-link".to_string()), "LinkedIn" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn announcement(text: &str) -> Announcement {
        Announcement {
            id: text.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn ticker_joins_announcements() {
        let loaded = Ok(vec![announcement("Workshop on Friday"), announcement("New blog up")]);
        assert_eq!(ticker_text(Some(&loaded)), "Workshop on Friday | New blog up");
    }

    #[test]
    fn ticker_placeholders() {
        assert_eq!(ticker_text(None), "Loading announcements...");
        assert_eq!(ticker_text(Some(&Ok(Vec::new()))), "No announcements yet.");
        assert_eq!(
            ticker_text(Some(&Err(ApiError::Network("offline".to_string())))),
            "No announcements yet."
        );
    }
}
