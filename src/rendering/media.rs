//! Media elements shown in the `#dog` region

/// File extensions rendered as `<video>` rather than `<img>`.
pub const VIDEO_EXTENSIONS: [&str; 2] = [".mp4", ".webm"];

/// Playback state of a video element
#[derive(Debug, Clone, PartialEq)]
pub enum MediaState {
    Playing,
    Paused,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    /// Set once the image has loaded and been fitted to the viewport.
    pub flex_shrink: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub src: String,
    pub controls: bool,
    pub muted: bool,
    pub autoplay: bool,
    pub state: MediaState,
}

impl Video {
    pub fn play(&mut self) {
        self.state = MediaState::Playing;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaElement {
    Image(Image),
    Video(Video),
}

impl MediaElement {
    /// Build the element for `url`: a muted, autoplaying video for known video
    /// extensions, an image for everything else.
    pub fn for_url(url: &str) -> Self {
        if is_video_url(url) {
            let mut video = Video {
                src: url.to_string(),
                controls: true,
                muted: true,
                autoplay: true,
                state: MediaState::Paused,
            };
            video.play();
            MediaElement::Video(video)
        } else {
            MediaElement::Image(Image {
                src: url.to_string(),
                flex_shrink: None,
            })
        }
    }

    pub fn src(&self) -> &str {
        match self {
            MediaElement::Image(i) => &i.src,
            MediaElement::Video(v) => &v.src,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaElement::Video(_))
    }
}

pub fn is_video_url(url: &str) -> bool {
    VIDEO_EXTENSIONS.iter().any(|ext| url.ends_with(ext))
}

/// Flex shrink factor for a loaded image: allow shrinking only when the image
/// is taller than the viewport.
pub fn fit_shrink(natural_height: u32, viewport_height: u32) -> u8 {
    if viewport_height < natural_height {
        1
    } else {
        0
    }
}
