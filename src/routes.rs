use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::admin::{AdminDashboard, AdminGate, AdminLogin};
use crate::api::ApiClient;
use crate::blogs::{BlogDetails, Blogs};
use crate::config::use_runtime_config;
use crate::events::{Events, PastEvents};
use crate::home::Home;
use crate::layout::SiteShell;
use crate::projects::{ActiveProjects, ProjectDetails, Projects};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let config = match config_resource() {
        None => {
            return rsx! {
                document::Title { "Chips & Bytes" }
                div { class: "page loading",
                    h1 { "Loading config..." }
                }
            }
        }
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            return rsx! {
                document::Title { "Chips & Bytes" }
                div { class: "page loading",
                    h1 { "Config load failed" }
                    p { "{err}" }
                }
            }
        }
    };

    let api = ApiClient::new(&config);
    use_context_provider(|| config);
    use_context_provider(|| api);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#0b1120" }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteShell)]
        #[route("/")]
        Home {},
        #[route("/blogs")]
        Blogs {},
        #[route("/blogs/details")]
        BlogDetails {},
        #[route("/projects")]
        Projects {},
        #[route("/projects/active")]
        ActiveProjects {},
        #[route("/projects/details")]
        ProjectDetails {},
        #[route("/events")]
        Events {},
        #[route("/events/details")]
        PastEvents {},
        #[route("/admin")]
        AdminLogin {},
        #[layout(AdminGate)]
            #[route("/admin/dashboard")]
            AdminDashboard {},
        #[end_layout]
        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found | Chips & Bytes" }
        div { class: "page not-found",
            h1 { class: "tab-heading", "404" }
            p { class: "tab-desc", "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "read-more-link", "Back to the home page \u{2192}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    use crate::route_listener::{classify, forced_tab, RouteKind};
    use crate::sections::TabId;

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::BlogDetails {}.to_string(), "/blogs/details");
        assert_eq!(Route::ActiveProjects {}.to_string(), "/projects/active");
        assert_eq!(Route::PastEvents {}.to_string(), "/events/details");
        assert_eq!(Route::AdminDashboard {}.to_string(), "/admin/dashboard");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = Route::from_str("/nope/here").ok();
        assert!(matches!(route, Some(Route::NotFound { .. })));
    }

    #[test]
    fn rendered_paths_force_the_expected_tabs() {
        assert_eq!(classify(&Route::Home {}.to_string()), RouteKind::Root);
        assert_eq!(forced_tab(&Route::BlogDetails {}.to_string()), Some(TabId::Blogs));
        assert_eq!(forced_tab(&Route::ActiveProjects {}.to_string()), Some(TabId::Projects));
        assert_eq!(forced_tab(&Route::PastEvents {}.to_string()), None);
    }
}
