use dioxus::prelude::*;
use dioxus_router::Link;

use crate::api::{ApiError, EventRecord};
use crate::content::{past_events, PastEvent};
use crate::date::format_long_date;
use crate::hooks::use_api;
use crate::layout::{ExternalLink, LoadingSpinner, SectionHeading};
use crate::routes::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum EventsView {
    Loading,
    Empty,
    Cards(Vec<EventRecord>),
}

/// Failed fetches render like an empty list; the error is logged by the hook.
pub fn events_view(result: Option<&Result<Vec<EventRecord>, ApiError>>) -> EventsView {
    match result {
        None => EventsView::Loading,
        Some(Ok(events)) if !events.is_empty() => EventsView::Cards(events.clone()),
        Some(_) => EventsView::Empty,
    }
}

#[component]
pub fn EventsSection() -> Element {
    let events = use_api("events", |api| async move { api.events().await });
    let view = events_view(events.read().as_ref());

    rsx! {
        section { class: "events-page",
            SectionHeading {
                title: "Events".to_string(),
                subtitle: Some("Join our upcoming workshops, hackathons, and seminars.".to_string()),
            }
            {match view {
                EventsView::Loading => rsx! {
                    LoadingSpinner { label: "Loading...".to_string() }
                },
                EventsView::Empty => rsx! {
                    p { class: "empty-state", "No events found." }
                },
                EventsView::Cards(events) => rsx! {
                    div { class: "events-grid",
                        for event in events {
                            EventCard { key: "{event.id}", event }
                        }
                    }
                },
            }}
            div { class: "read-more-container",
                Link { to: Route::PastEvents {}, class: "read-more-link", "View Past Events \u{2192}" }
            }
        }
    }
}

#[component]
fn EventCard(event: EventRecord) -> Element {
    let date = format_long_date(&event.date);
    rsx! {
        article { class: "event-card",
            header { class: "event-card-header",
                h2 { class: "event-title", "{event.title}" }
                if !event.speaker.is_empty() {
                    span { class: "event-speaker", "by {event.speaker}" }
                }
            }
            div { class: "event-meta",
                span { class: "event-date", "\u{1f5d3}\u{fe0f} {date}" }
                if !event.time.is_empty() {
                    span { class: "event-time", "\u{1f552} {event.time}" }
                }
                if !event.location.is_empty() {
                    span { class: "event-location", "\u{1f4cd} {event.location}" }
                }
            }
            p { class: "event-description", "{event.description}" }
        }
    }
}

#[component]
pub fn Events() -> Element {
    rsx! {
        document::Title { "Events | Chips & Bytes" }
        div { class: "page detail-page", EventsSection {} }
    }
}

#[component]
pub fn PastEvents() -> Element {
    let events = past_events();
    rsx! {
        document::Title { "Past Events | Chips & Bytes" }
        div { class: "page detail-page",
            SectionHeading {
                title: "Past Events".to_string(),
                subtitle: Some("Reports and resources from sessions we have already held.".to_string()),
            }
            div { class: "events-grid",
                for event in events {
                    PastEventCard { key: "{event.id}", event }
                }
            }
        }
    }
}

#[component]
fn PastEventCard(event: PastEvent) -> Element {
    let date = format_long_date(event.date);
    rsx! {
        article { class: "event-card past-event-card",
            h2 { class: "event-title", "{event.title}" }
            span { class: "event-date", "{date}" }
            div { class: "past-event-links",
                ExternalLink { href: event.report_link.to_string(), "Report" }
                ExternalLink { href: event.resources_link.to_string(), "Resources" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn view_follows_fetch_state() {
        assert_eq!(events_view(None), EventsView::Loading);

        let empty: Result<Vec<EventRecord>, ApiError> = Ok(Vec::new());
        assert_eq!(events_view(Some(&empty)), EventsView::Empty);

        let failed: Result<Vec<EventRecord>, ApiError> =
            Err(ApiError::Status { status: 502, message: "bad gateway".to_string() });
        assert_eq!(events_view(Some(&failed)), EventsView::Empty);
    }

    #[test]
    fn loaded_events_become_cards() {
        let record: EventRecord = serde_json::from_str(
            r#"{"_id":"e1","title":"Cache Coherence","speaker":"Sarat","date":"2025-07-26","time":"5 PM","location":"Lab 2","description":"MESI in practice"}"#,
        )
        .unwrap();
        let loaded = Ok(vec![record.clone()]);
        assert_eq!(events_view(Some(&loaded)), EventsView::Cards(vec![record]));
    }
}
