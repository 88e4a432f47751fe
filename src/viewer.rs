//! The `DogViewer` controller: button press → `/dog` request → render.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use scraper::{Html, Selector};

use crate::client::{DogClient, FetchedDog, RequestFailure};
use crate::rendering::Page;
use crate::status::UiState;
use crate::{Error, Result, TextSnapshot, ViewerConfig};

/// Page plus the status state it was last rendered from. Always locked and
/// mutated together so a completed request renders atomically.
#[derive(Debug, Default)]
struct Screen {
    page: Page,
    state: UiState,
}

/// What a single press ended up rendering.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A dog was fetched and its media is displayed.
    Loaded { url: String },
    /// The request failed; the fallback image is displayed.
    Failed(RequestFailure),
}

impl Outcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Outcome::Loaded { .. })
    }
}

pub struct DogViewer {
    config: ViewerConfig,
    client: DogClient,
    screen: Mutex<Screen>,
}

impl DogViewer {
    pub fn new(config: ViewerConfig) -> Result<Self> {
        let client = DogClient::new(&config)?;
        info!("Viewer ready, fetching dogs from {}", client.endpoint());
        Ok(Self {
            config,
            client,
            screen: Mutex::new(Screen::default()),
        })
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    fn screen(&self) -> MutexGuard<'_, Screen> {
        self.screen.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Handle a press of the "new dog" button.
    ///
    /// Never fails: request errors are rendered as the fallback image. Presses
    /// may overlap; whichever request completes last is what stays on screen.
    pub async fn request_new_dog(&self) -> Outcome {
        self.screen().page.show_loading(&self.config.loader_image);

        let result = self.client.fetch().await;

        let mut screen = self.screen();
        let Screen { page, state } = &mut *screen;
        let outcome = match result {
            Ok(FetchedDog { url, payload }) => {
                debug!("Rendering {}", url);
                page.render_media(&url);
                page.render_status(state, Some(&payload));
                Outcome::Loaded { url }
            }
            Err(failure) => {
                warn!("{}", failure);
                page.render_media(&self.config.error_image);
                page.render_status(state, failure.payload.as_ref());
                Outcome::Failed(failure)
            }
        };

        // request-completed refresh
        page.apply_status_style(state);
        outcome
    }

    /// Called once the displayed image has loaded, with its natural height.
    pub fn adjust_media_fit(&self, natural_height: u32) -> Option<u8> {
        self.screen()
            .page
            .adjust_media_fit(natural_height, self.config.viewport.height)
    }

    pub fn page(&self) -> Page {
        self.screen().page.clone()
    }

    pub fn ui_state(&self) -> UiState {
        self.screen().state.clone()
    }

    pub fn html(&self) -> String {
        self.screen().page.to_html()
    }

    /// Render the page and extract a text summary from the resulting HTML.
    pub fn render_text_snapshot(&self) -> Result<TextSnapshot> {
        let (html, url) = {
            let screen = self.screen();
            (
                screen.page.to_html(),
                screen.page.media_src().unwrap_or_default().to_string(),
            )
        };

        let document = Html::parse_document(&html);
        let title_sel = Selector::parse("title")
            .map_err(|e| Error::RenderError(format!("Bad selector: {:?}", e)))?;
        let body_sel = Selector::parse("body")
            .map_err(|e| Error::RenderError(format!("Bad selector: {:?}", e)))?;

        let title = document
            .select(&title_sel)
            .next()
            .map(|n| n.text().collect::<String>())
            .unwrap_or_default();

        let text = document
            .select(&body_sel)
            .next()
            .map(|b| b.text().collect::<String>())
            .unwrap_or_default();

        Ok(TextSnapshot { title, text, url })
    }
}
