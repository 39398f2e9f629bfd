//! Dummy LLM provider — formats the request back into the reply.
//! Used to exercise the full request path without a real API key; the reply
//! embeds the prompt, query, and a truncated view of the document so tests
//! can assert the provider saw the right inputs.

use crate::llm::{CompletionRequest, LlmResponse, ProviderError};

/// How much of the document text is echoed before truncation.
const DOCUMENT_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse, ProviderError> {
        let preview: String = request
            .document_text
            .chars()
            .take(DOCUMENT_PREVIEW_CHARS)
            .collect();
        let model = request.model.as_deref().unwrap_or("default");

        let text = format!(
            "Generated response based on:\n\
             System Prompt: {}\n\
             User Query: {}\n\
             Document Text: {}... (truncated)\n\
             Model: {}\n\
             \n\
             This is a placeholder response from the LLM service.",
            request.system_prompt, request.user_query, preview, model,
        );

        Ok(LlmResponse { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(document: &str, model: Option<&str>) -> CompletionRequest {
        CompletionRequest {
            system_prompt: "You are a legal expert.".into(),
            user_query: "Summarize this case.".into(),
            document_text: document.into(),
            model: model.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn reply_embeds_all_inputs() {
        let p = DummyProvider;
        let reply = p.complete(&request("case text", Some("gemini-pro"))).await.unwrap();
        assert!(reply.text.contains("System Prompt: You are a legal expert."));
        assert!(reply.text.contains("User Query: Summarize this case."));
        assert!(reply.text.contains("Document Text: case text"));
        assert!(reply.text.contains("Model: gemini-pro"));
    }

    #[tokio::test]
    async fn document_is_truncated_to_preview() {
        let p = DummyProvider;
        let long = "x".repeat(500);
        let reply = p.complete(&request(&long, None)).await.unwrap();
        let expected = format!("Document Text: {}... (truncated)", "x".repeat(100));
        assert!(reply.text.contains(&expected));
        assert!(!reply.text.contains(&"x".repeat(101)));
    }

    #[tokio::test]
    async fn missing_model_renders_default() {
        let p = DummyProvider;
        let reply = p.complete(&request("doc", None)).await.unwrap();
        assert!(reply.text.contains("Model: default"));
    }
}
