use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{ Mutex, MutexGuard };

use crate::models::chat::ChatMessage;

/// One client's conversation history. Messages are ordered oldest-first;
/// that order is the context window sent to the provider.
pub struct Session {
    messages: Mutex<Vec<ChatMessage>>,
}

impl Session {
    fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Lock the history for the duration of a whole relay turn, so a
    /// user/assistant pair can never interleave with a concurrent turn on
    /// the same session.
    pub async fn history(&self) -> MutexGuard<'_, Vec<ChatMessage>> {
        self.messages.lock().await
    }

    pub async fn append(&self, message: ChatMessage) {
        self.messages.lock().await.push(message);
    }

    /// Full ordered copy of the history.
    pub async fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.lock().await.clone()
    }

    pub async fn reset(&self) {
        self.messages.lock().await.clear();
    }
}

/// In-memory store of all sessions, keyed by session id. Cheap to clone;
/// clones share the same map.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, Arc<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create the session for `id`. The map lock covers only the
    /// lookup, never a provider call.
    pub async fn session(&self, id: &str) -> Arc<Session> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Session::new()))
            .clone()
    }

    /// Clear a session's history. Absent sessions stay absent.
    pub async fn reset(&self, id: &str) {
        let session = self.sessions.lock().await.get(id).cloned();
        if let Some(session) = session {
            session.reset().await;
        }
    }
}

/// The slice of history forwarded to the provider: the most recent `limit`
/// messages, or all of them when `limit` is zero.
pub fn window(messages: &[ChatMessage], limit: usize) -> &[ChatMessage] {
    if limit == 0 || messages.len() <= limit {
        messages
    } else {
        &messages[messages.len() - limit..]
    }
}
