use dioxus::prelude::*;
use dioxus_router::Link;

use crate::carousel::Carousel;
use crate::content::{repo_name, ActiveProject, ACTIVE_PROJECTS, GIT_LINKS};
use crate::layout::{ExternalLink, SectionHeading};
use crate::routes::Route;

#[component]
pub fn ActiveProjectsSection() -> Element {
    rsx! {
        section { class: "projects-page",
            SectionHeading {
                title: "Active Projects".to_string(),
                subtitle: Some("Explore active projects by our community members.".to_string()),
            }
            Carousel { slider_id: "active-projects-slider",
                for project in ACTIVE_PROJECTS.iter().copied() {
                    div { key: "{project.id}", class: "project-card",
                        div { class: "card-content",
                            h3 { class: "project-title", "{project.title}" }
                            p { class: "project-description", "{project.description}" }
                            ProjectAuthors { project }
                            if let Some(repo) = project.repo {
                                ExternalLink { href: repo.to_string(), class: Some("continue-link".to_string()), "View Repo" }
                            }
                        }
                    }
                }
                div { class: "project-card more-card",
                    Link { to: Route::ActiveProjects {}, class: "more-card-link",
                        h3 { class: "more-title", "More..." }
                        p { class: "more-description", "Explore all active projects and contributors" }
                    }
                }
            }
            div { class: "read-more-container",
                Link { to: Route::ActiveProjects {}, class: "read-more-link", "View All Active Projects \u{2192}" }
            }
        }
    }
}

#[component]
fn ProjectAuthors(project: ActiveProject) -> Element {
    rsx! {
        p { class: "project-author",
            "By: "
            for (index, author) in project.authors.iter().enumerate() {
                if index > 0 {
                    ", "
                }
                {match author.linkedin {
                    Some(linkedin) => rsx! {
                        ExternalLink { href: linkedin.to_string(), class: Some("author-link".to_string()), "{author.name}" }
                    },
                    None => rsx! { "{author.name}" },
                }}
            }
        }
    }
}

#[component]
pub fn ActiveProjects() -> Element {
    rsx! {
        document::Title { "Active Projects | Chips & Bytes" }
        div { class: "page detail-page",
            SectionHeading {
                title: "All Active Projects".to_string(),
                subtitle: Some("Full list of active projects with descriptions and authors.".to_string()),
            }
            div { class: "active-projects-full-list",
                for project in ACTIVE_PROJECTS.iter().copied() {
                    article { key: "{project.id}", class: "active-project-full-card",
                        h2 { "{project.title}" }
                        p { "{project.description}" }
                        ProjectAuthors { project }
                        if let Some(repo) = project.repo {
                            ExternalLink { href: repo.to_string(), "View Repo \u{2192}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section { class: "projects-page",
            SectionHeading {
                title: "Projects Archived".to_string(),
                subtitle: Some("Finished work from past semesters, open on GitHub.".to_string()),
            }
            RepoList { links: GIT_LINKS.to_vec() }
            div { class: "read-more-container",
                Link { to: Route::ProjectDetails {}, class: "read-more-link", "View All Projects \u{2192}" }
            }
        }
    }
}

#[component]
fn RepoList(links: Vec<&'static str>) -> Element {
    rsx! {
        ul { class: "repo-list",
            for link in links {
                li { key: "{link}", class: "repo-item",
                    ExternalLink { href: link.to_string(), class: Some("repo-link".to_string()), "{repo_name(link)}" }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        document::Title { "Projects | Chips & Bytes" }
        div { class: "page detail-page",
            ActiveProjectsSection {}
            ProjectsSection {}
        }
    }
}

#[component]
pub fn ProjectDetails() -> Element {
    rsx! {
        document::Title { "Project Repositories | Chips & Bytes" }
        div { class: "page detail-page",
            SectionHeading {
                title: "Project Repositories".to_string(),
                subtitle: Some("Every repository the club has published.".to_string()),
            }
            RepoList { links: GIT_LINKS.to_vec() }
            h2 { class: "subsection-heading", "Active project repositories" }
            RepoList { links: active_repos() }
        }
    }
}

/// Repositories linked from active projects, in catalogue order.
fn active_repos() -> Vec<&'static str> {
    ACTIVE_PROJECTS
        .iter()
        .filter_map(|project| project.repo)
        .collect()
}
