use dioxus::prelude::*;
use dioxus_router::Link;

use crate::api::ApiClient;
use crate::carousel::{is_mobile, Carousel};
use crate::content::BLOG_LINKS;
use crate::dom;
use crate::layout::{ExternalLink, LoadingSpinner, SectionHeading};
use crate::previews::{fetch_previews, LinkPreview};
use crate::routes::Route;

/// Medium author and slug from an article URL, for the plain link list.
pub fn article_label(url: &str) -> String {
    let Some(path) = url.split("medium.com/").nth(1) else {
        return url.to_string();
    };
    let path = path.trim_end_matches('/');
    let (author, slug) = path.split_once('/').unwrap_or(("", path));
    // Medium slugs end in a hex post id.
    let title = match slug.rsplit_once('-') {
        Some((title, id)) if id.len() >= 8 && id.chars().all(|c| c.is_ascii_hexdigit()) => title,
        _ => slug,
    };
    let words = title.replace('-', " ");
    if author.is_empty() {
        words
    } else {
        format!("{words} ({author})")
    }
}

#[component]
pub fn BlogsSection() -> Element {
    let api = use_context::<ApiClient>();
    let previews = use_resource(move || {
        let api = api.clone();
        async move { fetch_previews(&api, BLOG_LINKS).await }
    });
    let mobile = is_mobile(dom::window_width());
    let more_text = if mobile {
        "Explore more content"
    } else {
        "Explore all our blogs and discover more amazing content"
    };
    let card_class = if mobile { "blog-card mobile-card" } else { "blog-card" };

    rsx! {
        section { class: "blogs-page",
            SectionHeading {
                title: "Blogs".to_string(),
                subtitle: Some("Read articles and tutorials written by our community members.".to_string()),
            }
            {match previews() {
                None => rsx! {
                    LoadingSpinner { label: "Loading blogs...".to_string() }
                },
                Some(previews) => rsx! {
                    Carousel { slider_id: "blogs-slider",
                        for preview in previews {
                            BlogCard { key: "{preview.url}", preview, mobile, card_class }
                        }
                        div { class: "{card_class} more-card",
                            Link { to: Route::BlogDetails {}, class: "more-card-link",
                                h3 { class: "more-title", "More..." }
                                p { class: "more-description", "{more_text}" }
                            }
                        }
                    }
                    div { class: "read-more-container",
                        Link { to: Route::BlogDetails {}, class: "read-more-link", "View All Blogs \u{2192}" }
                    }
                },
            }}
        }
    }
}

#[component]
fn BlogCard(preview: LinkPreview, mobile: bool, card_class: &'static str) -> Element {
    let excerpt = preview.excerpt(mobile);
    rsx! {
        div { class: card_class,
            div { class: "card-content",
                if !preview.image.is_empty() {
                    div { class: "image-container",
                        img { class: "blog-image", src: "{preview.image}", alt: "{preview.title}" }
                    }
                }
                div { class: "text-content",
                    h3 { class: "blog-title", "{preview.title}" }
                    p { class: "blog-description", "{excerpt}" }
                    ExternalLink { href: preview.url.clone(), class: Some("blog-read-link".to_string()), "Read Article \u{2197}" }
                }
            }
        }
    }
}

#[component]
pub fn Blogs() -> Element {
    rsx! {
        document::Title { "Blogs | Chips & Bytes" }
        div { class: "page detail-page", BlogsSection {} }
    }
}

#[component]
pub fn BlogDetails() -> Element {
    rsx! {
        document::Title { "All Blogs | Chips & Bytes" }
        div { class: "page detail-page",
            SectionHeading {
                title: "All Blogs".to_string(),
                subtitle: Some("Every article our members have published.".to_string()),
            }
            ol { class: "blog-list",
                for link in BLOG_LINKS.iter().copied() {
                    li { key: "{link}", class: "blog-list-item",
                        ExternalLink { href: link.to_string(), class: Some("blog-list-link".to_string()), "{article_label(link)}" }
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

    #[test]
    fn labels_strip_the_post_id() {
        assert_eq!(
            article_label("https://medium.com/@saratgandholi/tracing-code-execution-c2d2f2b84ab6"),
            "tracing code execution (@saratgandholi)"
        );
    }

    #[test]
    fn labels_keep_slugs_without_an_id() {
        assert_eq!(
            article_label("https://medium.com/@someone/pipelines-explained/"),
            "pipelines explained (@someone)"
        );
        assert_eq!(article_label("https://example.com/post"), "https://example.com/post");
    }
}
