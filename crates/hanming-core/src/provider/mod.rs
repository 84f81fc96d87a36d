mod chat_complete;
mod prompt_execute;

pub use chat_complete::*;
pub use prompt_execute::*;
