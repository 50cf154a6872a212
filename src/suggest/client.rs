// client.rs
use crate::suggest::models::{ChatMessage, ChatRequest, Suggestion};
use crate::suggest::parser::parse_reply;
use crate::suggest::SuggestError;
use reqwest::blocking::Client;
use serde_json::Value;

const ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 500;
const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub struct SuggestClient {
    client: Client,
}

impl SuggestClient {
    pub fn new() -> Result<Self, SuggestError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Ask the model for five hidden-gem stations within
    /// `commuting_minutes` of `work_station`. One blocking call, no
    /// retries; the caller's thread waits until the API answers or errors.
    pub fn fetch_suggestions(
        &self,
        work_station: &str,
        commuting_minutes: u32,
    ) -> Result<Vec<Suggestion>, SuggestError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            SuggestError::Config("OPENAI_API_KEY environment variable not set".into())
        })?;

        let prompt = build_prompt(work_station, commuting_minutes);
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
        };

        let resp = self
            .client
            .post(ENDPOINT)
            .bearer_auth(&api_key)
            .json(&request)
            .send()
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        // Read status before body; a failed request still has a body worth
        // showing to the user.
        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SuggestError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: Value =
            serde_json::from_str(&text).map_err(|e| SuggestError::JsonParse(e.to_string()))?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(SuggestError::MissingContent)?;

        Ok(parse_reply(content.trim()))
    }
}

fn build_prompt(work_station: &str, commuting_minutes: u32) -> String {
    format!(
        "{work_station}に{commuting_minutes}分以内に行ける、生活が便利で、住みやすい穴場の駅を5つ提案し、その理由を述べてください。また、提案の冒頭に「生活が便利で、住みやすい穴場の駅を5つ提案します」という前置きを言わずに、1位のおすすめの駅名から説明を始めて下さい。"
    )
}
