use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Fire-and-forget analytics sink.
///
/// Implementations must never fail and must not block: the navigation core
/// calls into the sink after a state mutation has already committed, and the
/// mutation's success does not depend on the emission being delivered.
pub trait AnalyticsSink {
    fn event(&self, name: &str, payload: Option<serde_json::Value>);
    fn pageview(&self, path: &str);
}

/// Sink that drops every emission. Useful for shells without analytics wired
/// up, and as the default in tests that don't assert on emissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn event(&self, _name: &str, _payload: Option<serde_json::Value>) {}
    fn pageview(&self, _path: &str) {}
}

/// Sink that logs emissions through `tracing` instead of a transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn event(&self, name: &str, payload: Option<serde_json::Value>) {
        match payload {
            Some(payload) => tracing::debug!(target: "analytics", name, %payload, "event"),
            None => tracing::debug!(target: "analytics", name, "event"),
        }
    }

    fn pageview(&self, path: &str) {
        tracing::debug!(target: "analytics", path, "pageview");
    }
}

/// A single recorded emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Emission {
    Event {
        name: String,
        payload: Option<serde_json::Value>,
    },
    Pageview {
        path: String,
    },
}

/// Sink that buffers emissions in memory until the shell drains them, for
/// transports that upload in batches. Also serves as the recorder in tests.
///
/// Single-threaded by design, like the rest of the core.
#[derive(Debug, Default)]
pub struct BufferingAnalytics {
    buffer: RefCell<Vec<Emission>>,
}

impl BufferingAnalytics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns everything buffered so far.
    #[must_use]
    pub fn take(&self) -> Vec<Emission> {
        self.buffer.borrow_mut().drain(..).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().is_empty()
    }
}

impl AnalyticsSink for BufferingAnalytics {
    fn event(&self, name: &str, payload: Option<serde_json::Value>) {
        self.buffer.borrow_mut().push(Emission::Event {
            name: name.to_owned(),
            payload,
        });
    }

    fn pageview(&self, path: &str) {
        self.buffer
            .borrow_mut()
            .push(Emission::Pageview { path: path.to_owned() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn buffering_sink_records_in_order() {
        let sink = BufferingAnalytics::new();
        sink.pageview("/create");
        sink.event("toggleSidebar", Some(json!({ "target": true })));
        sink.event("closeFactoryPage", None);

        let emissions = sink.take();
        assert_eq!(
            emissions,
            vec![
                Emission::Pageview { path: "/create".into() },
                Emission::Event {
                    name: "toggleSidebar".into(),
                    payload: Some(json!({ "target": true })),
                },
                Emission::Event { name: "closeFactoryPage".into(), payload: None },
            ]
        );
        assert!(sink.is_empty());
    }
}
