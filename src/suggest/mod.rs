mod client;
mod models;
mod parser;
mod suggest_error;

pub use client::SuggestClient;
pub use models::Suggestion;
pub use parser::{parse_reply, PLACEHOLDER};
pub use suggest_error::SuggestError;
