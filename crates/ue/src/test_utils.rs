//! test utilities for verifying log output.

use std::sync::{Arc, Mutex};
use tracing::{
    field::{Field, Visit},
    subscriber::set_default,
    Event, Level, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer,
};

/// a recorded event with its level, target and captured fields.
#[derive(Debug, Clone)]
pub(crate) struct EventRecord {
    pub(crate) level: Level,
    pub(crate) target: String,
    pub(crate) fields: Vec<(String, String)>,
}

impl EventRecord {
    pub(crate) fn message(&self) -> Option<&str> {
        self.field("message")
    }

    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

struct FieldCollector {
    fields: Vec<(String, String)>,
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .push((field.name().to_string(), value.to_string()));
    }
}

/// a tracing layer that records events for test assertions.
#[derive(Debug, Clone, Default)]
pub(crate) struct EventCollector {
    events: Arc<Mutex<Vec<EventRecord>>>,
}

impl EventCollector {
    /// events recorded at `level` under `target`.
    pub(crate) fn events(&self, level: Level, target: &str) -> Vec<EventRecord> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.level == level && e.target == target)
            .cloned()
            .collect()
    }

    /// messages of the events recorded at `level` under `target`.
    pub(crate) fn messages(&self, level: Level, target: &str) -> Vec<String> {
        self.events(level, target)
            .iter()
            .filter_map(|e| e.message().map(str::to_string))
            .collect()
    }

    /// installs this collector as the default subscriber for the current thread,
    /// returning a guard that restores the previous subscriber on drop.
    pub(crate) fn as_default(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        set_default(subscriber)
    }
}

impl<S: Subscriber> Layer<S> for EventCollector {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut collector = FieldCollector { fields: Vec::new() };
        event.record(&mut collector);

        let metadata = event.metadata();
        self.events.lock().unwrap().push(EventRecord {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            fields: collector.fields,
        });
    }
}
