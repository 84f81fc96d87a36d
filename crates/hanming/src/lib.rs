//! # `hanming` – The umbrella crate
//!
//! One-stop import for the Hanming Chinese name generator:
//!
//! | Crate                      | What it provides                                                    |
//! |----------------------------|---------------------------------------------------------------------|
//! | **`hanming-core`**         | Errors, message types, provider traits, generic client, JSON scan   |
//! | **`hanming-prompt`**       | Fluent prompt text builder                                          |
//! | **`hanming-types`**        | Request/result types, the name prompt, localized messages           |
//! | **`hanming-openrouter`**   | HTTP backend for OpenRouter *(optional, `openrouter` feature)*      |
//!
//! On top of those this crate adds the [`NameGenerator`] facade (validate,
//! prompt, complete, normalize) and the [`RevealController`] that plays a
//! finished result back field by field.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use hanming::{NameGenerator, RevealController, RevealOutcome};
//! use hanming::types::request::{GenerationRequest, NameStyle};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = hanming::openrouter::OpenRouterAdapterBuilder::new_from_env().build()?;
//!     let controller = RevealController::new(NameGenerator::new(backend));
//!
//!     let request = GenerationRequest::new("Raymond").with_style(NameStyle::Heroic);
//!     if let RevealOutcome::Revealed(name) = controller.generate(request).await? {
//!         println!("{} ({})", name.characters, name.romanization);
//!     }
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/hanming/latest")]

mod generator;
pub mod reveal;

pub use generator::NameGenerator;
pub use reveal::{
    GenerationPhase, GenerationView, RevealController, RevealOutcome, RevealStage, RevealTimings,
};

pub use hanming_core::*;
pub use hanming_prompt as prompt;
pub use hanming_types as types;

#[cfg(feature = "openrouter")]
pub use hanming_openrouter as openrouter;
