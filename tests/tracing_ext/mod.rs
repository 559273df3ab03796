//! Tests for tracing integration.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};

use error_trail::tracing_ext::{ResultLogExt, ResultSpanExt};
use error_trail::{ChainResult, ErrorChain, Location};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Span, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

#[derive(Debug)]
struct RecordedEvent {
    level: Level,
    fields: HashMap<&'static str, String>,
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<RecordedEvent>>>);

struct FieldCollector(HashMap<&'static str, String>);

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name(), format!("{:?}", value));
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut collector = FieldCollector(HashMap::new());
        event.record(&mut collector);
        self.0
            .lock()
            .unwrap()
            .push(RecordedEvent { level: *event.metadata().level(), fields: collector.0 });
    }
}

fn capture_events(f: impl FnOnce()) -> Vec<RecordedEvent> {
    let recorder = Recorder::default();
    let subscriber = Registry::default().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, f);
    let mut events = recorder.0.lock().unwrap();
    std::mem::take(&mut *events)
}

#[test]
fn wrap_in_current_span_adds_span_entry() {
    let result: Result<i32, io::Error> = Err(io::Error::other("failed"));
    let err = result.wrap_in_current_span().unwrap_err();

    assert_eq!(err.depth(), 2);
    assert_eq!(err.msg(0), "failed");
    assert!(err.msg(1).starts_with("in span '"));
}

#[test]
fn wrap_in_span_ok_passes_through() {
    let result: Result<i32, io::Error> = Ok(42);
    assert_eq!(result.wrap_in_current_span().unwrap(), 42);
}

#[test]
fn disabled_span_is_reported_as_unknown() {
    let result: ChainResult<()> = Err(ErrorChain::new("boom"));
    let err = result.wrap_in_span(&Span::none()).unwrap_err();

    assert_eq!(err.msg(1), "in span 'unknown'");
    assert_eq!(err.header(1).file, "mod.rs");
}

#[test]
fn log_emits_one_error_event_with_chain_fields() {
    let err = ErrorChain::new_at(Location::new("src/db.rs", 8), "pool exhausted")
        .wrap_at(Location::new("src/api.rs", 21), "GET /jobs");

    let events = capture_events(|| err.log());

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::ERROR);
    assert_eq!(event.fields["depth"], "2");
    assert_eq!(event.fields["root"], "pool exhausted");
    assert_eq!(event.fields["origin"], "db.rs:8");
    assert_eq!(event.fields["message"], err.render());
}

#[test]
fn log_err_logs_only_on_err() {
    let mut passed = None;
    let events = capture_events(|| {
        let ok: ChainResult<u8> = Ok(1);
        passed = Some(ok.log_err().unwrap());
    });
    assert_eq!(passed, Some(1));
    assert!(events.is_empty());

    let mut depth = 0;
    let events = capture_events(|| {
        let result: ChainResult<()> = Err(ErrorChain::new("root").wrap("context"));
        depth = result.log_err().unwrap_err().depth();
    });
    assert_eq!(depth, 2);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fields["root"], "root");
}

#[test]
fn log_handles_empty_chain() {
    let events = capture_events(|| ErrorChain::default().log());

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fields["depth"], "0");
    assert_eq!(events[0].fields["root"], "");
    assert_eq!(events[0].fields["origin"], "");
    assert_eq!(events[0].fields["message"], "");
}
