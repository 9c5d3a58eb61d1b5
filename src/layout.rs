use dioxus::prelude::*;
use dioxus_router::Outlet;

use crate::date::current_year;
use crate::navbar::Navbar;
use crate::routes::Route;

/// Navbar, routed page and footer.
#[component]
pub fn SiteShell() -> Element {
    rsx! {
        Navbar {}
        main { class: "page-content",
            Outlet::<Route> {}
        }
        Footer {}
    }
}

#[component]
pub fn SectionHeading(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        h1 { class: "tab-heading", "{title}" }
        if let Some(subtitle) = subtitle {
            p { class: "tab-desc", "{subtitle}" }
        }
    }
}

#[component]
pub fn LoadingSpinner(label: String) -> Element {
    rsx! {
        div { class: "loading-container", role: "status",
            div { class: "loading-spinner" }
            p { "{label}" }
        }
    }
}

#[component]
pub fn ExternalLink(href: String, class: Option<String>, children: Element) -> Element {
    let class = class.unwrap_or_else(|| "read-more-link".to_string());
    rsx! {
        a { href: "{href}", class: "{class}", target: "_blank", rel: "noopener noreferrer", {children} }
    }
}

#[component]
fn Footer() -> Element {
    let year = current_year();
    rsx! {
        footer { class: "site-footer",
            p { "\u{a9} {year} Chips & Bytes, Computer Architecture Club, SSSIHL" }
            p { class: "footer-links",
                ExternalLink { href: "https://medium.com/@saratgandholi".to_string(), class: Some("footer-link".to_string()), "Medium" }
                " \u{b7} "
                ExternalLink { href: "https://github.com/GandholiSarat".to_string(), class: Some("footer-link".to_string()), "GitHub" }
            }
        }
    }
}
