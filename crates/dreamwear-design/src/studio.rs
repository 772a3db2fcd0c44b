//! The design studio panel on the product detail page.

use dreamwear_commerce::catalog::Product;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{DesignError, DesignResult};
use crate::generator::DesignGenerator;
use crate::prompt::{DesignImage, DesignPrompt};

const SUGGESTIONS: [&str; 5] = [
    "Cyberpunk cat",
    "Space astronaut",
    "Neon samurai",
    "Abstract waves",
    "Retro gaming",
];

/// Prompt ideas shown under the prompt box.
pub fn suggestions() -> &'static [&'static str] {
    &SUGGESTIONS
}

/// Where the studio panel is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DesignStatus {
    /// Nothing generated yet, or the last result was discarded.
    #[default]
    Idle,
    /// Waiting on the generator.
    Generating { prompt: DesignPrompt },
    /// A result is on screen.
    Ready { image: DesignImage },
    /// The shopper accepted the result.
    Accepted { image: DesignImage },
}

/// State machine for one product's design panel.
#[derive(Debug, Clone, Default)]
pub struct DesignStudio {
    status: DesignStatus,
    /// Status to restore if the in-flight generation fails.
    previous: Option<DesignStatus>,
}

impl DesignStudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &DesignStatus {
        &self.status
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.status, DesignStatus::Generating { .. })
    }

    /// The image on screen, accepted or not.
    pub fn current_image(&self) -> Option<&DesignImage> {
        match &self.status {
            DesignStatus::Ready { image } | DesignStatus::Accepted { image } => Some(image),
            _ => None,
        }
    }

    /// URI to attach to the cart line, once accepted.
    pub fn accepted_design(&self) -> Option<&str> {
        match &self.status {
            DesignStatus::Accepted { image } => Some(&image.url),
            _ => None,
        }
    }

    /// Start a generation for `text`.
    ///
    /// Fails with `Busy` while another generation is in flight and with
    /// `EmptyPrompt` for blank text. Neither changes the state.
    pub fn begin(&mut self, text: &str) -> DesignResult<DesignPrompt> {
        if self.is_generating() {
            warn!(prompt = text, "Design generation already in progress");
            return Err(DesignError::Busy);
        }
        let prompt = DesignPrompt::new(text).inspect_err(|_| {
            warn!("Empty design prompt rejected");
        })?;

        let previous = std::mem::replace(
            &mut self.status,
            DesignStatus::Generating {
                prompt: prompt.clone(),
            },
        );
        self.previous = Some(previous);
        debug!(prompt = %prompt, "Design generation started");
        Ok(prompt)
    }

    /// Deliver the generator's result.
    ///
    /// On success the image is shown; on failure the studio returns to the
    /// state it had before [`begin`](Self::begin).
    pub fn finish(&mut self, result: DesignResult<DesignImage>) -> DesignResult<&DesignImage> {
        if !self.is_generating() {
            return Err(DesignError::NotGenerating);
        }
        let previous = self.previous.take().unwrap_or_default();

        match result {
            Ok(image) => {
                info!(prompt = %image.prompt, url = %image.url, "Design generated");
                self.status = DesignStatus::Ready { image };
                self.current_image().ok_or(DesignError::NothingToAccept)
            }
            Err(err) => {
                warn!(error = %err, "Design generation failed");
                self.status = previous;
                Err(err)
            }
        }
    }

    /// Abandon the in-flight generation and return to the state it
    /// replaced. Returns `false` if nothing was generating.
    pub fn cancel(&mut self) -> bool {
        if !self.is_generating() {
            return false;
        }
        self.status = self.previous.take().unwrap_or_default();
        debug!("Design generation cancelled");
        true
    }

    /// Generate a design for `text` and show it.
    ///
    /// Dropping the returned future before it completes cancels the
    /// generation, so a timed-out request never leaves the studio busy.
    pub async fn generate(
        &mut self,
        generator: &dyn DesignGenerator,
        text: &str,
    ) -> DesignResult<DesignImage> {
        let prompt = self.begin(text)?;
        let pending = PendingGeneration { studio: self };
        let result = generator.generate(&prompt).await;
        let finished = pending.studio.finish(result).cloned();
        drop(pending);
        finished
    }

    /// Accept the image on screen.
    pub fn accept(&mut self) -> DesignResult<DesignImage> {
        let image = match &self.status {
            DesignStatus::Ready { image } | DesignStatus::Accepted { image } => image.clone(),
            _ => return Err(DesignError::NothingToAccept),
        };
        debug!(url = %image.url, "Design accepted");
        self.status = DesignStatus::Accepted {
            image: image.clone(),
        };
        Ok(image)
    }

    /// "Try again": discard the image on screen. Ignored while generating;
    /// use [`cancel`](Self::cancel) to abandon a request.
    pub fn reject(&mut self) {
        if !self.is_generating() {
            self.status = DesignStatus::Idle;
        }
    }

    /// Images for the product gallery: the product's own gallery, or its
    /// first image followed by the design once one is on screen.
    pub fn preview_gallery(&self, product: &Product) -> Vec<String> {
        let gallery = product.gallery();
        match self.current_image() {
            Some(image) => {
                let first = gallery.first().copied().unwrap_or(product.image.as_str());
                vec![first.to_string(), image.url.clone()]
            }
            None => gallery.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Rolls the studio back if a generation is dropped mid-flight.
struct PendingGeneration<'a> {
    studio: &'a mut DesignStudio,
}

impl Drop for PendingGeneration<'_> {
    fn drop(&mut self) {
        if self.studio.cancel() {
            warn!("Design generation dropped before completion");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{FailingDesignGenerator, MockDesignGenerator};
    use dreamwear_commerce::money::{Currency, Money};
    use std::time::Duration;

    fn generator() -> MockDesignGenerator {
        MockDesignGenerator::new(Duration::from_millis(50), "https://designs.example/out.png")
    }

    fn hoodie() -> Product {
        Product::new("1", "Cosmic Explorer Hoodie", Money::from_minor(5999, Currency::USD), "a.jpeg")
            .with_images(["a.jpeg", "b.jpeg", "c.jpeg"])
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_then_accept() {
        let mut studio = DesignStudio::new();

        let image = studio.generate(&generator(), "Cyberpunk cat").await.unwrap();
        assert_eq!(image.prompt.as_str(), "Cyberpunk cat");
        assert!(matches!(studio.status(), DesignStatus::Ready { .. }));
        assert!(studio.accepted_design().is_none());

        let accepted = studio.accept().unwrap();
        assert_eq!(accepted, image);
        assert_eq!(studio.accepted_design(), Some("https://designs.example/out.png"));
    }

    #[tokio::test]
    async fn test_empty_prompt_requests_nothing() {
        let mut studio = DesignStudio::new();

        let err = studio
            .generate(&FailingDesignGenerator::new("unreachable"), "   ")
            .await
            .unwrap_err();

        assert_eq!(err, DesignError::EmptyPrompt);
        assert_eq!(studio.status(), &DesignStatus::Idle);
    }

    #[test]
    fn test_second_request_while_generating_is_busy() {
        let mut studio = DesignStudio::new();
        studio.begin("Neon samurai").unwrap();

        assert_eq!(studio.begin("Retro gaming"), Err(DesignError::Busy));
        assert!(studio.is_generating());
    }

    #[test]
    fn test_finish_without_begin() {
        let mut studio = DesignStudio::new();
        let image = DesignImage {
            prompt: DesignPrompt::new("cat").unwrap(),
            url: "x.png".to_string(),
        };
        assert_eq!(studio.finish(Ok(image)), Err(DesignError::NotGenerating));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_restores_previous_state() {
        let mut studio = DesignStudio::new();
        let shown = studio.generate(&generator(), "Abstract waves").await.unwrap();

        let err = studio
            .generate(&FailingDesignGenerator::new("model offline"), "Space astronaut")
            .await
            .unwrap_err();

        assert_eq!(err, DesignError::Generation("model offline".to_string()));
        assert_eq!(studio.status(), &DesignStatus::Ready { image: shown });
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_out_generation_can_be_retried() {
        let mut studio = DesignStudio::new();
        let slow = MockDesignGenerator::new(Duration::from_secs(10), "https://designs.example/slow.png");

        let timed_out =
            tokio::time::timeout(Duration::from_secs(1), studio.generate(&slow, "Cyberpunk cat")).await;
        assert!(timed_out.is_err());
        assert_eq!(studio.status(), &DesignStatus::Idle);

        let image = studio.generate(&generator(), "Cyberpunk cat").await.unwrap();
        assert_eq!(image.url, "https://designs.example/out.png");
        assert!(matches!(studio.status(), DesignStatus::Ready { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_generation_restores_shown_image() {
        let mut studio = DesignStudio::new();
        let shown = studio.generate(&generator(), "Abstract waves").await.unwrap();
        let slow = MockDesignGenerator::new(Duration::from_secs(10), "https://designs.example/slow.png");

        let timed_out =
            tokio::time::timeout(Duration::from_millis(100), studio.generate(&slow, "Neon samurai")).await;

        assert!(timed_out.is_err());
        assert_eq!(studio.status(), &DesignStatus::Ready { image: shown });
    }

    #[test]
    fn test_cancel_restores_previous_state() {
        let mut studio = DesignStudio::new();
        assert!(!studio.cancel());

        studio.begin("Retro gaming").unwrap();
        assert!(studio.cancel());
        assert_eq!(studio.status(), &DesignStatus::Idle);
        assert!(studio.begin("Retro gaming").is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reject_discards_result() {
        let mut studio = DesignStudio::new();
        studio.generate(&generator(), "Retro gaming").await.unwrap();

        studio.reject();

        assert_eq!(studio.status(), &DesignStatus::Idle);
        assert_eq!(studio.accept(), Err(DesignError::NothingToAccept));
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_gallery() {
        let mut studio = DesignStudio::new();
        let product = hoodie();
        assert_eq!(studio.preview_gallery(&product), vec!["a.jpeg", "b.jpeg", "c.jpeg"]);

        studio.generate(&generator(), "Cyberpunk cat").await.unwrap();
        assert_eq!(
            studio.preview_gallery(&product),
            vec!["a.jpeg", "https://designs.example/out.png"]
        );
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(suggestions().len(), 5);
        assert_eq!(suggestions()[0], "Cyberpunk cat");
    }
}
