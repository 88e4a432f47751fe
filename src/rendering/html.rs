//! HTML serialization of the page model

use super::media::MediaElement;
use super::Page;
use crate::status::StatusIcon;

pub const PAGE_TITLE: &str = "Random Dog!";

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn class_attr(page: &Page) -> String {
    format!(" class=\"{}\"", page.status_class.class())
}

fn icon_html(icon: &StatusIcon) -> String {
    match icon {
        StatusIcon::Loading { src } => format!("<img id=\"loader\" src=\"{}\">", escape_html(src)),
        other => other
            .glyph()
            .map(|c| format!("&#{};", c as u32))
            .unwrap_or_default(),
    }
}

fn media_html(media: &MediaElement) -> String {
    match media {
        MediaElement::Image(img) => {
            let style = img
                .flex_shrink
                .map(|s| format!(" style=\"flex-shrink: {}\"", s))
                .unwrap_or_default();
            format!("<img src=\"{}\"{}>", escape_html(&img.src), style)
        }
        MediaElement::Video(v) => {
            let mut attrs = String::new();
            if v.controls {
                attrs.push_str(" controls");
            }
            if v.muted {
                attrs.push_str(" muted");
            }
            if v.autoplay {
                attrs.push_str(" autoplay");
            }
            format!(
                "<video{}><source src=\"{}\"></video>",
                attrs,
                escape_html(&v.src)
            )
        }
    }
}

pub fn render_page(page: &Page) -> String {
    let class = class_attr(page);
    let media = page.media.as_ref().map(media_html).unwrap_or_default();
    let detail = page
        .detail
        .iter()
        .map(|l| escape_html(&l.to_string()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{title}</title></head>
<body>
<h1>{title} <span id="status-icon">{icon}</span></h1>
<div id="dog">{media}</div>
<button id="next" type="button">New Dog!</button>
<section id="info"{class}>
<h2 id="debug-header"{class}>Debug: <span id="status"{class}>{status}</span></h2>
<pre id="info-text">{detail}</pre>
</section>
</body>
</html>
"#,
        title = escape_html(PAGE_TITLE),
        icon = icon_html(&page.status_icon),
        media = media,
        class = class,
        status = escape_html(&page.status_text),
        detail = detail,
    )
}
