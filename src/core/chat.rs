//! Chat controller
//!
//! The controller owns the conversation and drives one turn per submission:
//! 1. Records the user message
//! 2. Checks the endpoint is configured
//! 3. Sends the whole session to the worker
//! 4. Records the reply, or an inline error notice
//!
//! A failed turn leaves the user message in the session and adds no
//! assistant message, so the next turn resends it.

use crate::config::{prompts_builtin, Endpoint};
use crate::conversation::{Role, Session, Transcript};
use crate::providers::{Exchange, ExchangeError};

/// Why a turn produced no assistant message
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("Worker endpoint not configured")]
    Unconfigured,

    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

/// Result of a single submission
#[derive(Debug)]
pub enum TurnOutcome {
    /// Blank input, nothing happened
    Ignored,
    Replied(String),
    Failed(TurnError),
}

pub struct ChatController<E> {
    endpoint: Endpoint,
    exchange: E,
    session: Session,
    transcript: Transcript,
}

impl<E: Exchange> ChatController<E> {
    pub fn new(endpoint: Endpoint, exchange: E) -> Self {
        Self::with_session(endpoint, exchange, Session::new())
    }

    /// Start from an existing session (e.g. one seeded with a custom policy)
    pub fn with_session(endpoint: Endpoint, exchange: E, session: Session) -> Self {
        let mut transcript = Transcript::new();
        transcript.push_assistant(prompts_builtin::GREETING);

        Self {
            endpoint,
            exchange,
            session,
            transcript,
        }
    }

    /// Run one turn for the given user input
    pub async fn submit(&mut self, input: &str) -> TurnOutcome {
        let input = input.trim();
        if input.is_empty() {
            return TurnOutcome::Ignored;
        }

        self.transcript.push_user(input);
        self.session.append(Role::User, input);

        let url = match &self.endpoint {
            Endpoint::Configured(url) => url.as_str(),
            Endpoint::Unconfigured => {
                tracing::warn!(session = %self.session.id(), "Skipping turn, worker endpoint not configured");
                self.transcript.push_assistant(prompts_builtin::NOT_CONFIGURED);
                return TurnOutcome::Failed(TurnError::Unconfigured);
            }
        };

        tracing::info!(
            session = %self.session.id(),
            messages = self.session.len(),
            "Submitting turn"
        );

        let result = self.exchange.send(url, self.session.serialize()).await;
        match result {
            Ok(text) => {
                self.session.append(Role::Assistant, text.clone());
                self.transcript.push_reply(text.clone(), input);
                tracing::info!(session = %self.session.id(), "Turn completed");
                TurnOutcome::Replied(text)
            }
            Err(e) => {
                tracing::error!(session = %self.session.id(), "Turn failed: {}", e);
                self.transcript
                    .push_assistant(format!("{}{}", prompts_builtin::ERROR_PREFIX, e));
                TurnOutcome::Failed(e.into())
            }
        }
    }

    /// Start a fresh conversation, keeping the system policy
    pub fn reset(&mut self) {
        self.session.reset();
        self.transcript.clear();
        self.transcript.push_assistant(prompts_builtin::GREETING);
        tracing::info!(session = %self.session.id(), "Conversation reset");
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{Message, Speaker};
    use crate::providers::WorkerClient;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Fake worker that counts calls and replays a fixed result
    #[derive(Clone)]
    struct ScriptedExchange {
        calls: Arc<AtomicUsize>,
        reply: Result<String, (u16, String)>,
    }

    impl ScriptedExchange {
        fn replying(text: &str) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                reply: Ok(text.to_string()),
            }
        }

        fn failing(status: u16, status_text: &str) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                reply: Err((status, status_text.to_string())),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Exchange for ScriptedExchange {
        async fn send(&self, _url: &str, _messages: &[Message]) -> Result<String, ExchangeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err((status, status_text)) => Err(ExchangeError::Transport {
                    status: *status,
                    status_text: status_text.clone(),
                }),
            }
        }
    }

    fn configured() -> Endpoint {
        Endpoint::Configured("https://worker.test".to_string())
    }

    #[tokio::test]
    async fn test_successful_turn_adds_two_messages() {
        let exchange = ScriptedExchange::replying("Try the Revitalift serum.");
        let mut controller = ChatController::new(configured(), exchange.clone());

        for turn in 1..=3 {
            let before = controller.session().len();
            let outcome = controller.submit("What serum should I use?").await;
            assert!(matches!(outcome, TurnOutcome::Replied(ref t) if t == "Try the Revitalift serum."));
            assert_eq!(controller.session().len(), before + 2);
            assert_eq!(exchange.calls(), turn);
        }

        let last = controller.transcript().last().unwrap();
        assert_eq!(last.speaker, Speaker::Assistant);
        assert_eq!(last.question.as_deref(), Some("What serum should I use?"));
        assert_eq!(controller.session().last().unwrap().role, Role::Assistant);
    }

    #[tokio::test]
    async fn test_failed_turn_adds_only_user_message() {
        let exchange = ScriptedExchange::failing(502, "Bad Gateway");
        let mut controller = ChatController::new(configured(), exchange.clone());

        let outcome = controller.submit("Hi").await;
        assert!(matches!(
            outcome,
            TurnOutcome::Failed(TurnError::Exchange(ExchangeError::Transport { status: 502, .. }))
        ));
        assert_eq!(controller.session().len(), 2);
        assert_eq!(controller.session().last().unwrap().role, Role::User);
        assert_eq!(
            controller.transcript().last().unwrap().text,
            "There was an error contacting the worker: Worker error: 502 Bad Gateway"
        );

        // The conversation stays usable
        controller.submit("Still there?").await;
        assert_eq!(controller.session().len(), 3);
    }

    #[tokio::test]
    async fn test_unconfigured_never_sends() {
        let exchange = ScriptedExchange::replying("unused");
        let mut controller = ChatController::new(Endpoint::Unconfigured, exchange.clone());

        let outcome = controller.submit("Which foundation matches me?").await;
        assert!(matches!(outcome, TurnOutcome::Failed(TurnError::Unconfigured)));
        assert_eq!(exchange.calls(), 0);
        assert_eq!(controller.session().len(), 2);
        assert_eq!(
            controller.transcript().last().unwrap().text,
            prompts_builtin::NOT_CONFIGURED
        );
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let exchange = ScriptedExchange::replying("unused");
        let mut controller = ChatController::new(configured(), exchange.clone());

        assert!(matches!(controller.submit("   \n").await, TurnOutcome::Ignored));
        assert_eq!(exchange.calls(), 0);
        assert_eq!(controller.session().len(), 1);
        assert_eq!(controller.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_input_is_trimmed() {
        let exchange = ScriptedExchange::replying("ok");
        let mut controller = ChatController::new(configured(), exchange);

        controller.submit("  hair mask?  ").await;
        assert_eq!(controller.session().messages()[1].content, "hair mask?");
    }

    #[tokio::test]
    async fn test_reset_restores_policy_and_greeting() {
        let session = Session::with_policy("Only skincare.");
        let mut controller =
            ChatController::with_session(configured(), ScriptedExchange::replying("ok"), session);

        controller.submit("one").await;
        controller.submit("two").await;
        assert_eq!(controller.session().len(), 5);

        controller.reset();
        assert_eq!(controller.session().len(), 1);
        assert_eq!(controller.session().messages()[0].role, Role::System);
        assert_eq!(controller.session().messages()[0].content, "Only skincare.");
        assert_eq!(controller.transcript().len(), 1);
        assert_eq!(
            controller.transcript().entries()[0].text,
            prompts_builtin::GREETING
        );
    }

    #[tokio::test]
    async fn test_http_500_against_worker() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller =
            ChatController::new(Endpoint::Configured(server.uri()), WorkerClient::new());
        let outcome = controller.submit("Does this work?").await;

        assert!(matches!(outcome, TurnOutcome::Failed(TurnError::Exchange(_))));
        assert_eq!(controller.session().len(), 2);
        assert_eq!(controller.session().last().unwrap().role, Role::User);
        assert!(controller.transcript().last().unwrap().text.contains("500"));
    }

    #[tokio::test]
    async fn test_resends_full_history() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "text": "Try routine Y." }]
            })))
            .mount(&server)
            .await;

        let mut controller =
            ChatController::new(Endpoint::Configured(server.uri()), WorkerClient::new());
        controller.submit("first").await;
        controller.submit("second").await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);

        let body: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[2]["content"], "Try routine Y.");
        assert_eq!(messages[3]["content"], "second");
    }
}
