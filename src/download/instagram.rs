//! Instagram post metadata
//!
//! Uses the public post JSON (`/p/{shortcode}/?__a=1&__d=dis`). Two response
//! shapes are in circulation: the `items` list of the mobile API and the
//! older `graphql.shortcode_media` document. Both are handled.

use super::Post;
use crate::error::{CarouselOcrError, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

const POST_ENDPOINT: &str = "https://www.instagram.com/p";

/// Last non-empty path segment of the post URL.
pub fn shortcode_from_url(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw.trim())
        .map_err(|_| CarouselOcrError::UnsupportedUrl(raw.to_string()))?;
    parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(|| CarouselOcrError::UnsupportedUrl(raw.to_string()))
}

pub fn fetch_post(client: &Client, url: &str) -> Result<Post> {
    let shortcode = shortcode_from_url(url)?;
    let endpoint = format!("{}/{}/?__a=1&__d=dis", POST_ENDPOINT, shortcode);
    debug!("instagram: GET {}", endpoint);

    let body: Value = client
        .get(&endpoint)
        .header("X-IG-App-ID", "936619743392459")
        .send()?
        .error_for_status()?
        .json()?;

    parse_post(&body)
}

pub fn parse_post(body: &Value) -> Result<Post> {
    if let Some(item) = body.pointer("/items/0") {
        return parse_api_item(item);
    }
    if let Some(media) = body.pointer("/graphql/shortcode_media") {
        return parse_graphql_media(media);
    }
    Err(CarouselOcrError::UnexpectedResponse(
        "Instagram: post não encontrado na resposta".into(),
    ))
}

fn parse_api_item(item: &Value) -> Result<Post> {
    let caption = item
        .pointer("/caption/text")
        .and_then(Value::as_str)
        .map(str::to_string);

    let image_urls: Vec<Option<String>> = match item.get("carousel_media").and_then(Value::as_array) {
        Some(children) => children.iter().map(best_candidate).collect(),
        None => vec![best_candidate(item)],
    };

    finish(caption, image_urls)
}

fn best_candidate(node: &Value) -> Option<String> {
    node.pointer("/image_versions2/candidates/0/url")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn parse_graphql_media(media: &Value) -> Result<Post> {
    let caption = media
        .pointer("/edge_media_to_caption/edges/0/node/text")
        .and_then(Value::as_str)
        .map(str::to_string);

    let display_url = |node: &Value| {
        node.get("display_url")
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    let image_urls: Vec<Option<String>> = match media
        .pointer("/edge_sidecar_to_children/edges")
        .and_then(Value::as_array)
    {
        Some(edges) => edges
            .iter()
            .map(|edge| edge.get("node").and_then(display_url))
            .collect(),
        None => vec![display_url(media)],
    };

    finish(caption, image_urls)
}

fn finish(caption: Option<String>, image_urls: Vec<Option<String>>) -> Result<Post> {
    if image_urls.iter().all(Option::is_none) {
        return Err(CarouselOcrError::NoImagesInPost);
    }
    Ok(Post {
        caption: caption.filter(|c| !c.is_empty()),
        image_urls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shortcode_from_url() {
        assert_eq!(shortcode_from_url("https://www.instagram.com/p/C1a2b3/").unwrap(), "C1a2b3");
        assert_eq!(shortcode_from_url("https://instagram.com/reel/XyZ?igsh=1").unwrap(), "XyZ");
        assert!(shortcode_from_url("https://instagram.com/").is_err());
    }

    #[test]
    fn test_parse_api_carousel() {
        let body = json!({
            "items": [{
                "caption": {"text": "Legenda aqui"},
                "carousel_media": [
                    {"image_versions2": {"candidates": [{"url": "https://cdn/1.jpg"}, {"url": "https://cdn/1s.jpg"}]}},
                    {"image_versions2": {"candidates": []}},
                    {"image_versions2": {"candidates": [{"url": "https://cdn/3.jpg"}]}}
                ]
            }]
        });
        let post = parse_post(&body).unwrap();
        assert_eq!(post.caption.as_deref(), Some("Legenda aqui"));
        assert_eq!(
            post.image_urls,
            vec![Some("https://cdn/1.jpg".to_string()), None, Some("https://cdn/3.jpg".to_string())]
        );
    }

    #[test]
    fn test_parse_api_single_image_without_caption() {
        let body = json!({
            "items": [{
                "caption": null,
                "image_versions2": {"candidates": [{"url": "https://cdn/only.jpg"}]}
            }]
        });
        let post = parse_post(&body).unwrap();
        assert!(post.caption.is_none());
        assert_eq!(post.image_urls.len(), 1);
    }

    #[test]
    fn test_parse_graphql_sidecar() {
        let body = json!({
            "graphql": {"shortcode_media": {
                "display_url": "https://cdn/cover.jpg",
                "edge_media_to_caption": {"edges": [{"node": {"text": "Oi"}}]},
                "edge_sidecar_to_children": {"edges": [
                    {"node": {"display_url": "https://cdn/a.jpg"}},
                    {"node": {"display_url": "https://cdn/b.jpg"}}
                ]}
            }}
        });
        let post = parse_post(&body).unwrap();
        assert_eq!(post.caption.as_deref(), Some("Oi"));
        assert_eq!(post.image_urls.len(), 2);
        assert_eq!(post.image_urls[1].as_deref(), Some("https://cdn/b.jpg"));
    }

    #[test]
    fn test_parse_unknown_shape() {
        let err = parse_post(&json!({"status": "fail"})).unwrap_err();
        assert!(matches!(err, CarouselOcrError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_parse_no_images() {
        let body = json!({"items": [{"carousel_media": []}]});
        let err = parse_post(&body).unwrap_err();
        assert!(matches!(err, CarouselOcrError::NoImagesInPost));
    }
}
