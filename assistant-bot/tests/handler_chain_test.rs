//! Integration tests for [`assistant_bot::HandlerChain`].
//!
//! Covers: before/after order, before stopping the chain, Reply stopping the handle phase and
//! reaching after(), Ignore falling through to the next handler, and errors aborting the chain.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assistant_bot::{BotError, Chat, Handler, HandlerChain, HandlerResponse, Message, MessageKind, User};
use chrono::Utc;

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat::private(123),
        kind: MessageKind::Text,
        content: content.to_string(),
        photos: Vec::new(),
        created_at: Utc::now(),
    }
}

struct CountingHandler {
    response: HandlerResponse,
    handle_count: Arc<AtomicUsize>,
}

impl CountingHandler {
    fn new(response: HandlerResponse, handle_count: Arc<AtomicUsize>) -> Self {
        Self {
            response,
            handle_count,
        }
    }
}

#[async_trait::async_trait]
impl Handler for CountingHandler {
    async fn handle(&self, _message: &Message) -> assistant_bot::Result<HandlerResponse> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// **Test: before returning false stops the chain; handle is not run.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> assistant_bot::Result<bool> {
            Ok(false)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(CountingHandler::new(
            HandlerResponse::Continue,
            handle_count.clone(),
        )));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

/// **Test: Reply ends the handle phase and is passed to after().**
#[tokio::test]
async fn test_reply_stops_chain_and_passes_to_after() {
    struct CaptureResponseHandler {
        seen: Arc<std::sync::Mutex<Option<HandlerResponse>>>,
    }

    #[async_trait::async_trait]
    impl Handler for CaptureResponseHandler {
        async fn after(
            &self,
            _message: &Message,
            response: &HandlerResponse,
        ) -> assistant_bot::Result<()> {
            *self.seen.lock().unwrap() = Some(response.clone());
            Ok(())
        }
    }

    let seen = Arc::new(std::sync::Mutex::new(None));
    let replied = Arc::new(AtomicUsize::new(0));
    let unreachable = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CaptureResponseHandler { seen: seen.clone() }))
        .add_handler(Arc::new(CountingHandler::new(
            HandlerResponse::Reply("Javob.".to_string()),
            replied.clone(),
        )))
        .add_handler(Arc::new(CountingHandler::new(
            HandlerResponse::Continue,
            unreachable.clone(),
        )));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("Javob.".to_string()));
    assert_eq!(replied.load(Ordering::SeqCst), 1);
    assert_eq!(unreachable.load(Ordering::SeqCst), 0);
    assert_eq!(
        *seen.lock().unwrap(),
        Some(HandlerResponse::Reply("Javob.".to_string()))
    );
}

/// **Test: Ignore falls through; the final response is Ignore if nobody stops.**
#[tokio::test]
async fn test_ignore_falls_through() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CountingHandler::new(
            HandlerResponse::Ignore,
            first.clone(),
        )))
        .add_handler(Arc::new(CountingHandler::new(
            HandlerResponse::Continue,
            second.clone(),
        )));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Ignore);
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

/// **Test: before runs first→last, after runs last→first.**
#[tokio::test]
async fn test_multiple_handlers_executed_in_order() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));

    struct OrderHandler {
        name: &'static str,
        order: Arc<std::sync::Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl Handler for OrderHandler {
        async fn before(&self, _message: &Message) -> assistant_bot::Result<bool> {
            self.order.lock().unwrap().push(format!("before_{}", self.name));
            Ok(true)
        }

        async fn after(
            &self,
            _message: &Message,
            _response: &HandlerResponse,
        ) -> assistant_bot::Result<()> {
            self.order.lock().unwrap().push(format!("after_{}", self.name));
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "first",
            order: order.clone(),
        }))
        .add_handler(Arc::new(OrderHandler {
            name: "second",
            order: order.clone(),
        }));

    chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(
        *order.lock().unwrap(),
        vec!["before_first", "before_second", "after_second", "after_first"]
    );
}

/// **Test: An error from handle aborts the chain; after() is not run.**
#[tokio::test]
async fn test_handle_error_aborts_chain() {
    struct FailingHandler;

    #[async_trait::async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _message: &Message) -> assistant_bot::Result<HandlerResponse> {
            Err(BotError::Bot("send failed".to_string()))
        }
    }

    struct AfterCounter(Arc<AtomicUsize>);

    #[async_trait::async_trait]
    impl Handler for AfterCounter {
        async fn after(
            &self,
            _message: &Message,
            _response: &HandlerResponse,
        ) -> assistant_bot::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    let after_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(AfterCounter(after_count.clone())))
        .add_handler(Arc::new(FailingHandler));

    let result = chain.handle(&create_test_message("test")).await;

    assert!(matches!(result, Err(BotError::Bot(_))));
    assert_eq!(after_count.load(Ordering::SeqCst), 0);
    assert!(chain.len() == 2 && !chain.is_empty());
}
