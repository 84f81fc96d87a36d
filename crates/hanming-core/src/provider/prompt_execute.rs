use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    template::{IntoPrompt, PromptTemplate},
};

/// Executes a typed [`PromptTemplate`] end to end: one chat completion, JSON
/// extraction from the completion text, decoding into `P::Output`.
///
/// The blanket constraint on `P::Message` guarantees at **compile time** that
/// callers only feed the backend messages it understands.
pub trait PromptExecutionProvider: Send + Sync {
    /// Chat message type consumed by the underlying backend.
    type Message: Send + Sync + 'static;

    fn prompt_execute<'a, 'p, P>(
        &'a self,
        prompt: P,
    ) -> Pin<Box<dyn Future<Output = Result<P::Output>> + Send + 'p>>
    where
        'a: 'p,
        P: PromptTemplate + Send + Sync + 'p,
        <P as IntoPrompt>::Message: Into<Self::Message> + Clone;
}
