use serde::Serialize;

/// One ranked station proposal out of the model reply. `station` keeps the
/// full "1. 駅名" line as the rank label; `reason` is the free text that
/// followed it. Slots the model never filled hold the N/A placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub station: String,
    pub reason: String,
}

// Chat-completion request body.
//
// request
//  ├── model
//  ├── messages[]
//  │    ├── role
//  │    └── content
//  └── max_tokens

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}
