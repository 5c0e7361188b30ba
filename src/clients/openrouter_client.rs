use serde::Deserialize;
use serde::Serialize;

use crate::models::message::Message;

const COMPLETIONS_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const MODEL: &str = "qwen/qwen3-4b:free";
const MAX_TOKENS: u32 = 1000;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

// Single round trip: the entire transcript is resent on every turn, and
// the reply is the first choice's message content.
pub async fn send_chat(
    transcript: &[Message],
    api_key: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let request = CompletionRequest {
        model: MODEL,
        max_tokens: MAX_TOKENS,
        messages: transcript,
    };

    let client = reqwest::Client::new();
    let response = client
        .post(COMPLETIONS_URL)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?; // read the body once

    if !status.is_success() {
        eprintln!("Completion error {}: {}", status, text);
        return Err(format!("Request failed with status {}", status).into());
    }

    let parsed: CompletionResponse = serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse JSON: {}\nRaw body: {}", e, text))?;

    if let Some(choice) = parsed.choices.first() {
        Ok(choice.message.content.clone())
    } else {
        eprintln!("No choices found in response.\nRaw body:\n{}", text);
        Err("No response from completion endpoint".to_string().into())
    }
}
