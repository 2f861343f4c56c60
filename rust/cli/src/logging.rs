//! Diagnostic logging for the console game.
//!
//! Logs go to stderr so stdout only ever carries the rendered table and
//! replies to the player. `RUST_LOG` wins over the configured filter.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// One captured log event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Collects events in memory so tests can assert on what the engine logged.
#[derive(Debug, Clone, Default)]
pub struct TestLogSubscriber {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn into_layer<S>(self) -> TestLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        TestLayer {
            subscriber: self,
            _phantom: PhantomData,
        }
    }

    /// Runs `f` with this collector as the thread's default subscriber.
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let registry = Registry::default().with(self.clone().into_layer::<Registry>());
        tracing::subscriber::with_default(registry, f)
    }
}

pub struct TestLayer<S> {
    subscriber: TestLogSubscriber,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for TestLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        self.subscriber.lock().push(LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value_str = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value_str);
        } else {
            self.fields.push((field.name().to_string(), value_str));
        }
    }
}

/// Installs the stderr subscriber. A second call, or a subscriber set by
/// someone else, leaves the existing one in place.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use patience_engine::deck::SuitCount;
    use patience_engine::engine::{Engine, STOCK};
    use patience_engine::pile::{PileRef, PileType};
    use patience_engine::rules::OpenRules;
    use tracing::{info, warn};

    #[test]
    fn captures_messages_and_fields() {
        let logs = TestLogSubscriber::new();
        logs.capture(|| {
            info!(pile = "T3", "card moved");
            warn!("deal stopped");
        });

        let entries = logs.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::INFO);
        assert!(entries[0].message.contains("card moved"));
        assert_eq!(entries[0].field("pile"), Some("\"T3\""));
        assert_eq!(entries[1].level, Level::WARN);

        logs.clear();
        assert!(logs.entries().is_empty());
    }

    #[test]
    fn engine_logs_its_seed() {
        let logs = TestLogSubscriber::new();
        logs.capture(|| Engine::new(SuitCount::Four, Box::new(OpenRules), Some(99)));

        let shuffled = logs
            .entries()
            .into_iter()
            .find(|e| e.message.contains("deck shuffled"))
            .expect("shuffle should be logged");
        assert_eq!(shuffled.level, Level::INFO);
        assert_eq!(shuffled.field("seed"), Some("99"));
        assert!(shuffled.target.starts_with("patience_engine"));
    }

    #[test]
    fn failed_moves_are_not_logged_as_moves() {
        let logs = TestLogSubscriber::new();
        logs.capture(|| {
            let mut engine = Engine::new(SuitCount::One, Box::new(OpenRules), Some(1));
            engine.register_pile(PileType::Stock, 1, 0, 0);
            engine.register_pile(PileType::Tableau, 1, 0, 1);
            let t0 = PileRef::new(PileType::Tableau, 0);
            assert!(engine.move_card(t0, STOCK).is_err());
        });
        assert!(!logs.entries().iter().any(|e| e.message.contains("cards moved")));
    }

    #[test]
    fn init_logging_twice_is_harmless() {
        init_logging("warn");
        init_logging("debug");
    }
}
