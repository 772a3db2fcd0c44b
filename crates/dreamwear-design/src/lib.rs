//! AI design studio for Dreamwear.
//!
//! Turns a text prompt into a design image through a [`DesignGenerator`]
//! and tracks the studio panel's state while the request is in flight. The
//! accepted image is attached to a cart line as its custom design; this
//! crate never touches the cart itself.
//!
//! # Example
//!
//! ```rust
//! use dreamwear_design::{DesignStudio, MockDesignGenerator};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), dreamwear_design::DesignError> {
//! let generator = MockDesignGenerator::new(Duration::ZERO, "https://designs.example/cat.png");
//! let mut studio = DesignStudio::new();
//!
//! studio.generate(&generator, "Cyberpunk cat").await?;
//! let design = studio.accept()?;
//! assert_eq!(design.url, "https://designs.example/cat.png");
//! # Ok(())
//! # }
//! ```

mod error;
mod generator;
mod prompt;
mod studio;

pub use error::{DesignError, DesignResult};
pub use generator::{
    DesignGenerator, FailingDesignGenerator, MockDesignGenerator, DEFAULT_IMAGE_URL,
    DEFAULT_LATENCY,
};
pub use prompt::{DesignImage, DesignPrompt};
pub use studio::{suggestions, DesignStatus, DesignStudio};
