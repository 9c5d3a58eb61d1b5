use serde::Deserialize;

use crate::api::ApiClient;

pub const PREVIEW_LIMIT: usize = 7;
const EXCERPT_CHARS: usize = 100;
const MOBILE_EXCERPT_CHARS: usize = 80;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkPreview {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

#[derive(Deserialize)]
struct MicrolinkResponse {
    data: MicrolinkData,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MicrolinkData {
    title: Option<String>,
    description: Option<String>,
    image: Option<MicrolinkImage>,
    url: Option<String>,
}

#[derive(Deserialize)]
struct MicrolinkImage {
    url: Option<String>,
}

impl LinkPreview {
    fn from_microlink(response: MicrolinkResponse, requested: &str) -> Self {
        let data = response.data;
        Self {
            title: data.title.unwrap_or_default(),
            description: data.description.unwrap_or_default(),
            image: data.image.and_then(|image| image.url).unwrap_or_default(),
            url: data
                .url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| requested.to_string()),
        }
    }

    pub fn excerpt(&self, mobile: bool) -> String {
        excerpt(&self.description, mobile)
    }
}

/// Leading slice of `text` followed by an ellipsis.
pub fn excerpt(text: &str, mobile: bool) -> String {
    let limit = if mobile {
        MOBILE_EXCERPT_CHARS
    } else {
        EXCERPT_CHARS
    };
    let head: String = text.chars().take(limit).collect();
    format!("{head}...")
}

/// Previews for the first few links, in order. Links whose preview fails are skipped.
pub async fn fetch_previews(api: &ApiClient, links: &[&str]) -> Vec<LinkPreview> {
    let mut previews = Vec::new();
    for link in links.iter().take(PREVIEW_LIMIT) {
        match api.link_preview::<MicrolinkResponse>(link).await {
            Ok(response) => previews.push(LinkPreview::from_microlink(response, link)),
            Err(err) => tracing::warn!(link = %link, error = %err, "previews.fetch_failed"),
        }
    }
    tracing::debug!(count = previews.len(), "previews.loaded");
    previews
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_microlink_payload() {
        let body = r#"{"status":"success","data":{"title":"Caches 101","description":"Why locality matters","image":{"url":"https://cdn/x.png","width":1200},"url":"https://medium.com/p/1","publisher":"Medium"}}"#;
        let response: MicrolinkResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            LinkPreview::from_microlink(response, "https://medium.com/p/1?source=x"),
            LinkPreview {
                title: "Caches 101".to_string(),
                description: "Why locality matters".to_string(),
                image: "https://cdn/x.png".to_string(),
                url: "https://medium.com/p/1".to_string(),
            }
        );
    }

    #[test]
    fn missing_fields_fall_back() {
        let response: MicrolinkResponse =
            serde_json::from_str(r#"{"data":{"title":"Only title","image":null}}"#).unwrap();
        let preview = LinkPreview::from_microlink(response, "https://medium.com/p/2");
        assert_eq!(preview.image, "");
        assert_eq!(preview.url, "https://medium.com/p/2");
    }

    #[test]
    fn excerpt_is_shorter_on_mobile() {
        let text = "x".repeat(150);
        assert_eq!(excerpt(&text, false).len(), 103);
        assert_eq!(excerpt(&text, true).len(), 83);
        assert_eq!(excerpt("short", false), "short...");
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let text = "é".repeat(120);
        assert_eq!(excerpt(&text, true).chars().count(), 83);
    }
}
