use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SuggestError {
    Config(String),
    Network(String),
    Api { status: u16, body: String },
    JsonParse(String),
    MissingContent,
}

impl fmt::Display for SuggestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestError::Config(msg) => write!(f, "Config error: {msg}"),
            SuggestError::Network(msg) => write!(f, "Network error: {msg}"),
            // The two failure shapes users actually hit are reported in the
            // UI language, wording kept from the first release.
            SuggestError::Api { status, body } => write!(
                f,
                "APIリクエストが失敗しました。ステータスコード: {status}, レスポンス: {body}"
            ),
            SuggestError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            SuggestError::MissingContent => {
                write!(f, "APIレスポンスに'choices'キーが含まれていません。")
            }
        }
    }
}

impl Error for SuggestError {}
