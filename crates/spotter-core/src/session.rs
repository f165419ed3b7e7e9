//! Process-wide session state.

use crate::model::Session;
use tokio::sync::RwLock;

/// Holds at most one [`Session`] for the process lifetime.
///
/// Shared by `Arc` between the API client and any other consumer; the lock
/// closes the race between a concurrent authenticate (the only writer) and
/// authenticated requests reading the token. Nothing is persisted, so every
/// process start begins unauthenticated.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Creates an empty store (no session).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any existing session.
    pub async fn set_session(&self, session: Session) {
        *self.current.write().await = Some(session);
    }

    /// Returns a copy of the current session, if any.
    pub async fn current_session(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// True iff a session is present.
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_starts_unauthenticated() {
        let store = SessionStore::new();

        assert!(!store.is_authenticated().await);
        assert_eq!(store.current_session().await, None);
    }

    #[tokio::test]
    async fn test_set_session_makes_authenticated() {
        let store = SessionStore::new();
        store
            .set_session(Session {
                token: "abc".to_string(),
            })
            .await;

        assert!(store.is_authenticated().await);
        assert_eq!(store.current_session().await.unwrap().token, "abc");
    }

    #[tokio::test]
    async fn test_later_session_replaces_earlier() {
        let store = SessionStore::new();
        store
            .set_session(Session {
                token: "first".to_string(),
            })
            .await;
        store
            .set_session(Session {
                token: "second".to_string(),
            })
            .await;

        assert_eq!(store.current_session().await.unwrap().token, "second");
    }

    #[tokio::test]
    async fn test_concurrent_writer_and_readers() {
        let store = Arc::new(SessionStore::new());

        let writer = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for i in 0..100 {
                    store
                        .set_session(Session {
                            token: format!("token-{i}"),
                        })
                        .await;
                }
            })
        };
        let reader = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for _ in 0..100 {
                    if let Some(session) = store.current_session().await {
                        // Never a torn value: always a token the writer set.
                        assert!(session.token.starts_with("token-"));
                    }
                }
            })
        };

        writer.await.unwrap();
        reader.await.unwrap();
        assert!(store.is_authenticated().await);
    }
}
