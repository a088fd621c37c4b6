use std::error::Error;
use std::sync::Arc;

use log::{ info, warn };

use crate::cli::Args;
use crate::llm::{ LlmConfig, LlmError };
use crate::llm::chat::{ ChatClient, new_client as new_chat_client };
use crate::models::chat::ChatMessage;
use crate::prompt;
use crate::session::{ window, SessionStore };

/// Relays user text to the chat completion provider and keeps each session's
/// running history. One agent serves every session.
#[derive(Clone)]
pub struct RelayAgent {
    chat_client: Arc<dyn ChatClient>,
    translate_client: Arc<dyn ChatClient>,
    sessions: SessionStore,
    history_limit: usize,
}

impl RelayAgent {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let (chat_client, translate_client) = Self::initialize_llm_clients(args)?;
        Ok(
            Self::with_clients(
                chat_client,
                translate_client,
                SessionStore::new(),
                args.history_limit
            )
        )
    }

    /// Assembles the agent from ready-built parts. `new` funnels through
    /// here, and tests use it to inject stub clients.
    pub fn with_clients(
        chat_client: Arc<dyn ChatClient>,
        translate_client: Arc<dyn ChatClient>,
        sessions: SessionStore,
        history_limit: usize
    ) -> Self {
        Self {
            chat_client,
            translate_client,
            sessions,
            history_limit,
        }
    }

    fn initialize_llm_clients(
        args: &Args
    ) -> Result<(Arc<dyn ChatClient>, Arc<dyn ChatClient>), Box<dyn Error + Send + Sync>> {
        let chat_api_key = if !args.chat_api_key.is_empty() {
            Some(args.chat_api_key.clone())
        } else {
            None
        };
        let chat_config = LlmConfig {
            api_key: chat_api_key.clone(),
            model: args.chat_model.clone(),
            base_url: args.chat_base_url.clone(),
        };
        let chat_client = new_chat_client(&chat_config).map_err(|e|
            format!("Failed to configure conversation client: {}", e)
        )?;
        info!(
            "Conversation client configured: Model={:?}, BaseURL={:?}",
            chat_config.model.as_deref().unwrap_or("adapter default"),
            chat_config.base_url.as_deref().unwrap_or("adapter default")
        );

        // An empty TRANSLATE_API_KEY counts as unset.
        let own_translate_key = args.translate_api_key.as_deref().filter(|key| !key.is_empty());
        if own_translate_key.is_none() {
            warn!("TRANSLATE_API_KEY not set; translation uses the conversation API key.");
        }
        let translate_api_key_str = own_translate_key.unwrap_or(&args.chat_api_key);
        let translate_api_key = if !translate_api_key_str.is_empty() {
            Some(translate_api_key_str.to_string())
        } else {
            None
        };
        let translate_config = LlmConfig {
            api_key: translate_api_key,
            model: args.translate_model.clone().or_else(|| args.chat_model.clone()),
            base_url: args.chat_base_url.clone(),
        };
        let translate_client = new_chat_client(&translate_config).map_err(|e|
            format!("Failed to configure translation client: {}", e)
        )?;
        info!(
            "Translation client configured: Model={:?}, BaseURL={:?}",
            translate_config.model.as_deref().unwrap_or("adapter default"),
            translate_config.base_url.as_deref().unwrap_or("adapter default")
        );

        Ok((chat_client, translate_client))
    }

    /// One relay turn: record the user message, send the session's history
    /// window to the provider, record the assistant reply and return it.
    ///
    /// The session stays locked for the whole turn, so concurrent turns on
    /// the same session run one after another and user/assistant pairs never
    /// interleave. On provider failure the user message is kept; the next
    /// turn simply continues from a history that ends with it.
    pub async fn process_message(
        &self,
        session_id: &str,
        content: &str
    ) -> Result<String, LlmError> {
        let session = self.sessions.session(session_id).await;
        let mut history = session.history().await;

        history.push(ChatMessage::user(content));

        let completion = self.chat_client.complete(window(&history, self.history_limit)).await?;

        let reply = completion.response;
        history.push(ChatMessage::assistant(reply.clone()));
        Ok(reply)
    }

    /// Opens (or re-opens, with fresh parameters) a practice conversation:
    /// formats the role-play opening prompt and relays it as the session's
    /// next user message.
    pub async fn initialize_conversation(
        &self,
        session_id: &str,
        language: &str,
        level: &str,
        context: &str
    ) -> Result<String, LlmError> {
        let opening = prompt::conversation_opening(language, level, context);
        self.process_message(session_id, &opening).await
    }

    /// One-off translation through the dedicated client. Reads and writes no
    /// session state.
    pub async fn translate(&self, content: &str) -> Result<String, LlmError> {
        let request = [ChatMessage::user(content)];
        let completion = self.translate_client.complete(&request).await?;
        Ok(completion.response)
    }

    /// Drops a session's history so the next turn starts from scratch.
    pub async fn clear(&self, session_id: &str) {
        self.sessions.reset(session_id).await;
    }
}
