//! Conversation session use case.
//!
//! Sequences turns for one chat surface: records the user turn, waits the
//! reply latency, asks the [`ResponseGenerator`] for a reply and records it.
//!
//! A session runs at most one exchange at a time. A second `exchange` while
//! one is in flight fails immediately with
//! [`ExchangeError::ConcurrentExchange`]; nothing is queued.

use crate::config::SessionConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::latency::LatencyStrategy;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};
use tutor_domain::util::preview;
use tutor_domain::{DomainError, History, ResponseGenerator, Turn};

/// Reply given when producing a response fails unexpectedly
pub const APOLOGY_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Errors that can occur when starting an exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("Already processing a message")]
    ConcurrentExchange,
}

/// Single-slot busy flag; released when the guard drops
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Pairs a recorded user turn with its reply
///
/// If the exchange is dropped before the reply is recorded, the apology is
/// recorded in its place so the history never holds an unanswered turn.
struct PendingReply<'a> {
    session: &'a ConversationSession,
    settled: bool,
}

impl PendingReply<'_> {
    fn settle(mut self, reply: &str) {
        self.settled = true;
        self.session.record_reply(reply);
    }
}

impl Drop for PendingReply<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Exchange dropped before replying, recording apology");
            self.session.record_reply(APOLOGY_MESSAGE);
        }
    }
}

/// A conversation between one user and the tutor
///
/// `history`, `reset` and `is_busy` are synchronous; `exchange` is the only
/// suspending operation. The history lock is never held across an await.
pub struct ConversationSession {
    generator: Arc<ResponseGenerator>,
    latency: Arc<dyn LatencyStrategy>,
    conversation_logger: Arc<dyn ConversationLogger>,
    history: Mutex<History>,
    busy: AtomicBool,
}

impl ConversationSession {
    pub fn new(generator: Arc<ResponseGenerator>, latency: Arc<dyn LatencyStrategy>) -> Self {
        Self {
            generator,
            latency,
            conversation_logger: Arc::new(NoConversationLogger),
            history: Mutex::new(History::new()),
            busy: AtomicBool::new(false),
        }
    }

    /// Create a session whose history window follows `config`
    pub fn with_config(
        generator: Arc<ResponseGenerator>,
        latency: Arc<dyn LatencyStrategy>,
        config: &SessionConfig,
    ) -> Result<Self, DomainError> {
        let history = History::with_capacity(config.history_capacity)?;
        let mut session = Self::new(generator, latency);
        session.history = Mutex::new(history);
        Ok(session)
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Run one exchange and return the reply text
    pub async fn exchange(&self, user_text: &str) -> Result<String, ExchangeError> {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            warn!("Rejected exchange: another exchange is in flight");
            self.conversation_logger.log(ConversationEvent::new(
                "exchange_rejected",
                json!({ "content": user_text }),
            ));
            return Err(ExchangeError::ConcurrentExchange);
        };

        debug!("Exchange started: {}", preview(user_text, 60));
        self.lock_history().append(Turn::user(user_text));
        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            json!({ "content": user_text }),
        ));
        let pending = PendingReply {
            session: self,
            settled: false,
        };

        let reply = match self.latency.wait().await {
            Ok(()) => {
                let answer = self.generator.answer(user_text);
                match answer.rule {
                    Some(rule) => info!("Answered with rule '{}'", rule),
                    None => info!("Answered with fallback"),
                }
                answer.response.to_string()
            }
            Err(e) => {
                warn!("Reply failed, apologizing instead: {}", e);
                APOLOGY_MESSAGE.to_string()
            }
        };

        pending.settle(&reply);
        debug!("Exchange finished: {}", preview(&reply, 60));

        Ok(reply)
    }

    /// Snapshot of the history in insertion order
    pub fn history(&self) -> Vec<Turn> {
        self.lock_history().snapshot()
    }

    /// Clear the history; an in-flight exchange keeps running
    pub fn reset(&self) {
        self.lock_history().clear();
        self.conversation_logger
            .log(ConversationEvent::new("history_reset", json!({})));
        info!("Conversation history cleared");
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn generator(&self) -> &ResponseGenerator {
        &self.generator
    }

    fn record_reply(&self, reply: &str) {
        self.lock_history().append(Turn::assistant(reply));
        self.conversation_logger.log(ConversationEvent::new(
            "assistant_response",
            json!({ "content": reply }),
        ));
    }

    fn lock_history(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::latency::{LatencyError, NoLatency};
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Notify;
    use tutor_domain::responder::{GREETING_RESPONSE, TOPICS_RESPONSE, VARIABLES_RESPONSE};
    use tutor_domain::{Role, RuleSet};

    /// Holds every reply until the test releases it
    struct GatedLatency {
        gate: Notify,
    }

    #[async_trait]
    impl LatencyStrategy for GatedLatency {
        async fn wait(&self) -> Result<(), LatencyError> {
            self.gate.notified().await;
            Ok(())
        }
    }

    struct FailingLatency;

    #[async_trait]
    impl LatencyStrategy for FailingLatency {
        async fn wait(&self) -> Result<(), LatencyError> {
            Err(LatencyError::Failed("upstream unavailable".to_string()))
        }
    }

    struct SlowLatency(Duration);

    #[async_trait]
    impl LatencyStrategy for SlowLatency {
        async fn wait(&self) -> Result<(), LatencyError> {
            tokio::time::sleep(self.0).await;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn session_with(latency: Arc<dyn LatencyStrategy>) -> ConversationSession {
        ConversationSession::new(Arc::new(ResponseGenerator::default()), latency)
    }

    async fn wait_until_busy(session: &ConversationSession) {
        while !session.is_busy() {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_scenario_replies() {
        let session = session_with(Arc::new(NoLatency));

        assert_eq!(session.exchange("Hi there").await.unwrap(), GREETING_RESPONSE);

        let variables = session.exchange("explain variables").await.unwrap();
        assert_eq!(variables, VARIABLES_RESPONSE);
        assert!(variables.contains("Three ways to declare variables"));

        assert_eq!(session.exchange("asdkfj").await.unwrap(), TOPICS_RESPONSE);
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_exchange_records_pair() {
        let session = session_with(Arc::new(NoLatency));
        session.exchange("quiz").await.unwrap();

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role(), Role::User);
        assert_eq!(history[0].content(), "quiz");
        assert_eq!(history[1].role(), Role::Assistant);
        assert!(history[1].timestamp() >= history[0].timestamp());
    }

    #[tokio::test]
    async fn test_accepts_empty_input() {
        let session = session_with(Arc::new(NoLatency));
        assert_eq!(session.exchange("").await.unwrap(), TOPICS_RESPONSE);
        assert_eq!(session.history()[0].content(), "");
    }

    #[tokio::test]
    async fn test_concurrent_exchange_is_rejected() {
        let latency = Arc::new(GatedLatency {
            gate: Notify::new(),
        });
        let logger = Arc::new(RecordingLogger::default());
        let session =
            Arc::new(session_with(latency.clone()).with_conversation_logger(logger.clone()));

        let first = {
            let session = session.clone();
            tokio::spawn(async move { session.exchange("hello").await })
        };
        wait_until_busy(&session).await;

        assert_eq!(
            session.exchange("quiz").await,
            Err(ExchangeError::ConcurrentExchange)
        );
        assert!(session.is_busy());

        latency.gate.notify_one();
        assert_eq!(first.await.unwrap().unwrap(), GREETING_RESPONSE);
        assert!(!session.is_busy());

        let contents: Vec<_> = session
            .history()
            .iter()
            .map(|t| t.content().to_string())
            .collect();
        assert_eq!(contents, ["hello", GREETING_RESPONSE]);
        assert_eq!(
            *logger.events.lock().unwrap(),
            ["user_message", "exchange_rejected", "assistant_response"]
        );
    }

    #[tokio::test]
    async fn test_history_keeps_last_five_pairs() {
        let session = session_with(Arc::new(NoLatency));
        for n in 0..12 {
            session.exchange(&format!("message {n}")).await.unwrap();
        }

        let history = session.history();
        assert_eq!(history.len(), 10);
        let users: Vec<_> = history
            .iter()
            .filter(|t| t.is_user())
            .map(|t| t.content().to_string())
            .collect();
        assert_eq!(
            users,
            ["message 7", "message 8", "message 9", "message 10", "message 11"]
        );
        for pair in history.chunks(2) {
            assert_eq!(pair[0].role(), Role::User);
            assert_eq!(pair[1].role(), Role::Assistant);
        }
    }

    #[tokio::test]
    async fn test_reset_clears_history() {
        let session = session_with(Arc::new(NoLatency));
        session.exchange("hello").await.unwrap();
        session.reset();
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_reset_leaves_busy_flag_alone() {
        let latency = Arc::new(GatedLatency {
            gate: Notify::new(),
        });
        let session = Arc::new(session_with(latency.clone()));

        let pending = {
            let session = session.clone();
            tokio::spawn(async move { session.exchange("array").await })
        };
        wait_until_busy(&session).await;

        session.reset();
        assert!(session.is_busy());
        assert!(session.history().is_empty());

        latency.gate.notify_one();
        pending.await.unwrap().unwrap();
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_failed_reply_apologizes_and_releases() {
        let session = session_with(Arc::new(FailingLatency));

        assert_eq!(session.exchange("hello").await.unwrap(), APOLOGY_MESSAGE);
        assert!(!session.is_busy());

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].content(), APOLOGY_MESSAGE);

        // The session stays usable after a failure
        assert_eq!(session.exchange("quiz").await.unwrap(), APOLOGY_MESSAGE);
    }

    #[tokio::test]
    async fn test_dropped_exchange_releases_flag_and_keeps_pair() {
        let session = session_with(Arc::new(SlowLatency(Duration::from_secs(60))));

        let outcome =
            tokio::time::timeout(Duration::from_millis(10), session.exchange("hello")).await;
        assert!(outcome.is_err());
        assert!(!session.is_busy());

        let history = session.history();
        assert_eq!(history.len() % 2, 0);
        assert!(history[0].is_user());
        assert_eq!(history[0].content(), "hello");
        assert_eq!(history[1].role(), Role::Assistant);
        assert_eq!(history[1].content(), APOLOGY_MESSAGE);
    }

    #[tokio::test]
    async fn test_custom_capacity() {
        let config = SessionConfig::default().with_history_capacity(4);
        let session = ConversationSession::with_config(
            Arc::new(ResponseGenerator::default()),
            Arc::new(NoLatency),
            &config,
        )
        .unwrap();

        for _ in 0..5 {
            session.exchange("hey").await.unwrap();
        }
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn test_invalid_capacity_is_rejected() {
        let config = SessionConfig::default().with_history_capacity(3);
        let result = ConversationSession::with_config(
            Arc::new(ResponseGenerator::default()),
            Arc::new(NoLatency),
            &config,
        );
        assert!(matches!(result, Err(DomainError::InvalidHistoryCapacity(3))));
    }

    #[tokio::test]
    async fn test_sessions_share_rules_not_state() {
        let generator = Arc::new(ResponseGenerator::new(RuleSet::javascript_tutor()));
        let a = ConversationSession::new(generator.clone(), Arc::new(NoLatency));
        let b = ConversationSession::new(generator, Arc::new(NoLatency));

        a.exchange("hello").await.unwrap();
        assert_eq!(a.history().len(), 2);
        assert!(b.history().is_empty());
    }

    #[tokio::test]
    async fn test_conversation_events_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let session =
            session_with(Arc::new(NoLatency)).with_conversation_logger(logger.clone());

        session.exchange("hello").await.unwrap();
        session.reset();

        assert_eq!(
            *logger.events.lock().unwrap(),
            ["user_message", "assistant_response", "history_reset"]
        );
    }
}
