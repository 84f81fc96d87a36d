//! Provider-agnostic building blocks of the Hanming name generator: the
//! error model, chat message types, prompt traits, the backend trait and a
//! generic client that turns a typed prompt into a decoded answer.
pub mod client;
pub mod error;
pub mod generic;
pub mod json_extract;
pub mod model;
pub mod provider;
pub mod template;

pub use client::HanmingClient;
