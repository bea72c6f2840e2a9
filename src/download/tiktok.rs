//! TikTok photo-post metadata
//!
//! The post page embeds its data as JSON in
//! `<script id="__UNIVERSAL_DATA_FOR_REHYDRATION__">`. The photo carousel
//! lives under `imagePost.images[].imageURL.urlList`; the caption is `desc`.

use super::Post;
use crate::error::{CarouselOcrError, Result};
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::debug;

const REHYDRATION_SCRIPT: &str = "script#__UNIVERSAL_DATA_FOR_REHYDRATION__";
const ITEM_POINTER: &str = "/__DEFAULT_SCOPE__/webapp.video-detail/itemInfo/itemStruct";

pub fn fetch_post(client: &Client, url: &str) -> Result<Post> {
    debug!("tiktok: GET {}", url);
    let html = client.get(url.trim()).send()?.error_for_status()?.text()?;
    let data = extract_rehydration_json(&html)?;
    let item = data.pointer(ITEM_POINTER).ok_or(CarouselOcrError::NotACarousel)?;
    parse_item(item)
}

/// Pull the embedded JSON document out of the page.
pub fn extract_rehydration_json(html: &str) -> Result<Value> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(REHYDRATION_SCRIPT)
        .map_err(|e| CarouselOcrError::UnexpectedResponse(format!("selector: {:?}", e)))?;

    let script = document
        .select(&selector)
        .next()
        .ok_or_else(|| CarouselOcrError::UnexpectedResponse("TikTok: dados da página ausentes".into()))?;

    let raw: String = script.text().collect();
    Ok(serde_json::from_str(&raw)?)
}

/// Read caption and image URLs from an item. Accepts both the page's
/// camelCase keys and the snake_case keys of the mobile API.
pub fn parse_item(item: &Value) -> Result<Post> {
    let image_post = item
        .get("imagePost")
        .or_else(|| item.get("image_post"))
        .ok_or(CarouselOcrError::NotACarousel)?;

    let images = image_post
        .get("images")
        .and_then(Value::as_array)
        .filter(|images| !images.is_empty())
        .ok_or(CarouselOcrError::NoImagesInPost)?;

    let image_urls = images.iter().map(last_url).collect();

    let caption = item
        .get("desc")
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Ok(Post { caption, image_urls })
}

/// The last URL of the image's URL list (the highest quality one).
fn last_url(image: &Value) -> Option<String> {
    image
        .pointer("/imageURL/urlList")
        .or_else(|| image.pointer("/image_url/url_list"))
        .and_then(Value::as_array)
        .and_then(|list| list.last())
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_item_photo_post() {
        let item = json!({
            "desc": "Dicas #estudo",
            "imagePost": {"images": [
                {"imageURL": {"urlList": ["https://p16/1-low.jpg", "https://p16/1.jpg"]}},
                {"imageURL": {"urlList": []}},
                {"imageURL": {"urlList": ["https://p16/3.jpg"]}}
            ]}
        });
        let post = parse_item(&item).unwrap();
        assert_eq!(post.caption.as_deref(), Some("Dicas #estudo"));
        assert_eq!(
            post.image_urls,
            vec![Some("https://p16/1.jpg".to_string()), None, Some("https://p16/3.jpg".to_string())]
        );
    }

    #[test]
    fn test_parse_item_snake_case() {
        let item = json!({
            "desc": "",
            "image_post": {"images": [{"image_url": {"url_list": ["a", "b"]}}]}
        });
        let post = parse_item(&item).unwrap();
        assert!(post.caption.is_none());
        assert_eq!(post.image_urls, vec![Some("b".to_string())]);
    }

    #[test]
    fn test_video_is_not_a_carousel() {
        let item = json!({"desc": "vídeo", "video": {"playAddr": "x"}});
        assert!(matches!(parse_item(&item).unwrap_err(), CarouselOcrError::NotACarousel));
    }

    #[test]
    fn test_empty_image_list() {
        let item = json!({"imagePost": {"images": []}});
        assert!(matches!(parse_item(&item).unwrap_err(), CarouselOcrError::NoImagesInPost));
    }

    #[test]
    fn test_extract_rehydration_json() {
        let html = r#"<html><head>
            <script id="__UNIVERSAL_DATA_FOR_REHYDRATION__" type="application/json">
            {"__DEFAULT_SCOPE__": {"webapp.video-detail": {"itemInfo": {"itemStruct":
              {"desc": "oi", "imagePost": {"images": [{"imageURL": {"urlList": ["u1"]}}]}}}}}}
            </script></head><body></body></html>"#;
        let data = extract_rehydration_json(html).unwrap();
        let item = data.pointer(ITEM_POINTER).unwrap();
        let post = parse_item(item).unwrap();
        assert_eq!(post.caption.as_deref(), Some("oi"));
        assert_eq!(post.image_urls, vec![Some("u1".to_string())]);
    }

    #[test]
    fn test_missing_script() {
        let err = extract_rehydration_json("<html><body>captcha</body></html>").unwrap_err();
        assert!(matches!(err, CarouselOcrError::UnexpectedResponse(_)));
    }
}
