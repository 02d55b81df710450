//! Test utilities for viralcopy_models tests.
//!
//! This module provides a mock transport and a log-event counter.

pub mod mock_transport;

#[allow(unused_imports)]
pub use mock_transport::{MockBehavior, MockTransport, RecordedCall};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use viralcopy_models::GeminiConfig;

/// Counts error-level events.
pub struct ErrorCounter {
    count: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Installs an error counter as the thread's default subscriber.
///
/// Keep the guard alive for the duration of the test. Only valid on the
/// current-thread runtime `#[tokio::test]` uses by default.
#[allow(dead_code)]
pub fn capture_errors() -> (DefaultGuard, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(ErrorCounter {
        count: Arc::clone(&count),
    });
    (tracing::subscriber::set_default(subscriber), count)
}

/// Config with a dummy key.
#[allow(dead_code)]
pub fn test_config() -> GeminiConfig {
    GeminiConfig::with_api_key("test-key")
}
