//! Design generator boundary.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{DesignError, DesignResult};
use crate::prompt::{DesignImage, DesignPrompt};

/// Simulated generation time.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// Image returned by the mock generator.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1336873/pexels-photo-1336873.jpeg";

/// Something that turns a prompt into an image.
#[async_trait]
pub trait DesignGenerator: Send + Sync {
    /// Generate a design for `prompt`.
    async fn generate(&self, prompt: &DesignPrompt) -> DesignResult<DesignImage>;
}

/// Generator that waits `latency` and returns a fixed image.
#[derive(Debug, Clone)]
pub struct MockDesignGenerator {
    latency: Duration,
    image_url: String,
}

impl MockDesignGenerator {
    pub fn new(latency: Duration, image_url: impl Into<String>) -> Self {
        Self {
            latency,
            image_url: image_url.into(),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockDesignGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY, DEFAULT_IMAGE_URL)
    }
}

#[async_trait]
impl DesignGenerator for MockDesignGenerator {
    async fn generate(&self, prompt: &DesignPrompt) -> DesignResult<DesignImage> {
        debug!(prompt = %prompt, latency_ms = self.latency.as_millis() as u64, "Generating design");
        tokio::time::sleep(self.latency).await;
        Ok(DesignImage {
            prompt: prompt.clone(),
            url: self.image_url.clone(),
        })
    }
}

/// Generator that always fails.
#[derive(Debug, Clone)]
pub struct FailingDesignGenerator {
    reason: String,
}

impl FailingDesignGenerator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl DesignGenerator for FailingDesignGenerator {
    async fn generate(&self, _prompt: &DesignPrompt) -> DesignResult<DesignImage> {
        Err(DesignError::Generation(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_mock_waits_latency() {
        let generator = MockDesignGenerator::default();
        let prompt = DesignPrompt::new("Space astronaut").unwrap();

        let start = tokio::time::Instant::now();
        let image = generator.generate(&prompt).await.unwrap();

        assert!(start.elapsed() >= DEFAULT_LATENCY);
        assert_eq!(image.url, DEFAULT_IMAGE_URL);
        assert_eq!(image.prompt, prompt);
    }

    #[tokio::test]
    async fn test_failing_generator() {
        let generator = FailingDesignGenerator::new("quota exceeded");
        let prompt = DesignPrompt::new("Retro gaming").unwrap();

        assert_eq!(
            generator.generate(&prompt).await,
            Err(DesignError::Generation("quota exceeded".to_string()))
        );
    }
}
