mod name_prompt;

pub use name_prompt::NamePrompt;
