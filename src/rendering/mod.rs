//! The page model the viewer renders into.
//!
//! `Page` is a small, typed stand-in for the DOM of the random dog page: one
//! media region, a status icon and label, a debug panel and the trigger
//! button. It can be serialized to HTML with [`Page::to_html`].

pub mod detail;
pub mod html;
pub mod media;

use crate::payload::DogResponse;
use crate::status::{StatusCategory, StatusIcon, UiState};
use detail::DetailLine;
use media::MediaElement;

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Current media element. Empty until the first response arrives.
    pub media: Option<MediaElement>,
    pub status_icon: StatusIcon,
    pub status_text: String,
    /// Class applied to `#info`, `#status` and `#debug-header`.
    pub status_class: StatusCategory,
    pub detail: Vec<DetailLine>,
}

impl Default for Page {
    fn default() -> Self {
        let state = UiState::default();
        Self {
            media: None,
            status_icon: state.category().icon(),
            status_text: state.label(),
            status_class: state.category(),
            detail: Vec::new(),
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the media region with an element for `url`.
    pub fn render_media(&mut self, url: &str) {
        self.media = Some(MediaElement::for_url(url));
    }

    /// Update the status label and detail panel from `payload`, record its
    /// status in `state`, and restyle.
    ///
    /// A missing payload (a failure without a parseable body) resets the state
    /// to "no status", which renders in the neutral category.
    pub fn render_status(&mut self, state: &mut UiState, payload: Option<&DogResponse>) {
        state.debug_status = payload.and_then(|p| p.status.clone());
        self.status_text = state.label();
        self.detail = payload.map(detail::detail_lines).unwrap_or_default();
        self.apply_status_style(state);
    }

    /// Restyle the icon and classes from `state`. Used both by `render_status`
    /// and by the refresh that follows every completed request.
    pub fn apply_status_style(&mut self, state: &UiState) {
        let category = state.category();
        self.status_class = category;
        self.status_icon = category.icon();
    }

    /// Show the loading spinner in place of the status icon.
    pub fn show_loading(&mut self, loader_src: &str) {
        self.status_icon = StatusIcon::Loading {
            src: loader_src.to_string(),
        };
    }

    /// Fit a loaded image to the viewport. Returns the shrink factor applied,
    /// or `None` when the region holds no image.
    pub fn adjust_media_fit(&mut self, natural_height: u32, viewport_height: u32) -> Option<u8> {
        match &mut self.media {
            Some(MediaElement::Image(img)) => {
                let shrink = media::fit_shrink(natural_height, viewport_height);
                img.flex_shrink = Some(shrink);
                Some(shrink)
            }
            _ => None,
        }
    }

    pub fn media_src(&self) -> Option<&str> {
        self.media.as_ref().map(|m| m.src())
    }

    pub fn to_html(&self) -> String {
        html::render_page(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Status;
    use scraper::{Html, Selector};

    fn select_one(doc: &Html, sel: &str) -> String {
        let s = Selector::parse(sel).unwrap();
        doc.select(&s)
            .next()
            .map(|n| n.text().collect::<String>())
            .unwrap_or_default()
    }

    fn attr(doc: &Html, sel: &str, name: &str) -> Option<String> {
        let s = Selector::parse(sel).unwrap();
        doc.select(&s)
            .next()
            .and_then(|n| n.value().attr(name).map(|v| v.to_string()))
    }

    #[test]
    fn new_media_replaces_old() {
        let mut page = Page::new();
        page.render_media("https://x/a.jpg");
        page.render_media("https://x/b.webm");
        assert_eq!(page.media_src(), Some("https://x/b.webm"));

        let doc = Html::parse_document(&page.to_html());
        let any_media = Selector::parse("#dog img, #dog video").unwrap();
        assert_eq!(doc.select(&any_media).count(), 1);
        assert_eq!(attr(&doc, "#dog video source", "src").as_deref(), Some("https://x/b.webm"));
        assert!(attr(&doc, "#dog video", "muted").is_some());
        assert!(attr(&doc, "#dog video", "autoplay").is_some());
        assert!(attr(&doc, "#dog video", "controls").is_some());
    }

    #[test]
    fn ok_status_renders_success() {
        let mut page = Page::new();
        let mut state = UiState::default();
        let payload = DogResponse::parse(r#"{"status":"ok","dog":{"url":"https://x/a.jpg"}}"#).unwrap();

        page.render_media(payload.media_url().unwrap());
        page.render_status(&mut state, Some(&payload));

        assert_eq!(state.debug_status, Some(Status::Ok));
        assert_eq!(page.status_text, "OK");
        assert_eq!(page.status_class, StatusCategory::Success);
        assert_eq!(page.status_icon, StatusIcon::Check);

        let doc = Html::parse_document(&page.to_html());
        assert_eq!(attr(&doc, "#dog img", "src").as_deref(), Some("https://x/a.jpg"));
        for region in ["#info", "#status", "#debug-header"] {
            assert_eq!(attr(&doc, region, "class").as_deref(), Some("success"), "{}", region);
        }
        assert_eq!(select_one(&doc, "#status"), "OK");
        assert_eq!(select_one(&doc, "#status-icon"), "\u{2714}");
    }

    #[test]
    fn failure_statuses_render_cross() {
        for status in ["error", "breaker-open"] {
            let mut page = Page::new();
            let mut state = UiState::default();
            let payload = DogResponse::parse(&format!(r#"{{"status":"{}"}}"#, status)).unwrap();
            page.render_status(&mut state, Some(&payload));

            assert_eq!(page.status_class, StatusCategory::Failure);
            let doc = Html::parse_document(&page.to_html());
            assert_eq!(attr(&doc, "#info", "class").as_deref(), Some("error"));
            assert_eq!(select_one(&doc, "#status-icon"), "\u{2717}");
            assert_eq!(select_one(&doc, "#status"), status.to_uppercase());
        }
    }

    #[test]
    fn missing_payload_is_neutral() {
        let mut page = Page::new();
        let mut state = UiState {
            debug_status: Some(Status::Ok),
        };
        page.render_status(&mut state, None);
        assert_eq!(state.debug_status, None);
        assert_eq!(page.status_text, "DEFAULT");
        assert_eq!(page.status_class, StatusCategory::Neutral);
        assert_eq!(page.status_icon, StatusIcon::Check);
        assert!(page.detail.is_empty());
    }

    #[test]
    fn status_text_is_escaped() {
        let mut page = Page::new();
        let mut state = UiState::default();
        let payload = DogResponse::parse(r#"{"status":"<b>odd</b>"}"#).unwrap();
        page.render_status(&mut state, Some(&payload));

        let html = page.to_html();
        assert!(!html.contains("<b>"));
        let doc = Html::parse_document(&html);
        assert_eq!(select_one(&doc, "#status"), "<B>ODD</B>");
        assert_eq!(attr(&doc, "#status", "class").as_deref(), Some("default"));
    }

    #[test]
    fn loading_then_restyle() {
        let mut page = Page::new();
        let state = UiState {
            debug_status: Some(Status::BreakerOpen),
        };
        page.show_loading("images/ajax-loader.gif");
        let doc = Html::parse_document(&page.to_html());
        assert_eq!(attr(&doc, "#status-icon img#loader", "src").as_deref(), Some("images/ajax-loader.gif"));

        page.apply_status_style(&state);
        assert_eq!(page.status_icon, StatusIcon::Cross);
        assert_eq!(page.status_class, StatusCategory::Failure);
    }

    #[test]
    fn fit_applies_to_images_only() {
        let mut page = Page::new();
        assert_eq!(page.adjust_media_fit(2000, 720), None);

        page.render_media("https://x/tall.png");
        assert_eq!(page.adjust_media_fit(2000, 720), Some(1));
        let doc = Html::parse_document(&page.to_html());
        assert_eq!(attr(&doc, "#dog img", "style").as_deref(), Some("flex-shrink: 1"));
        assert_eq!(page.adjust_media_fit(400, 720), Some(0));

        page.render_media("https://x/clip.mp4");
        assert_eq!(page.adjust_media_fit(2000, 720), None);
    }
}
