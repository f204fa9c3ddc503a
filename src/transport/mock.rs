//! Mock transport for unit testing

use super::{PublishOptions, StringPublisher, StringTopic, Transport};
use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Mock synchronization service for unit testing
///
/// Records every published value together with the topic path and publish
/// options it was sent under, counts topic lookups per path, and can inject
/// transmit failures.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[derive(Default)]
struct MockTransportInner {
    topic_lookups: HashMap<String, usize>,
    published: Vec<PublishedValue>,
    fail_lookups: bool,
    fail_sets: bool,
}

/// One value recorded by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedValue {
    /// Topic path the value was published on
    pub path: String,
    /// Options the publish handle was opened with
    pub options: PublishOptions,
    /// The transmitted text
    pub value: String,
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `string_topic` calls made for the given path
    pub fn topic_lookups(&self, path: &str) -> usize {
        let inner = self.inner.lock();
        inner.topic_lookups.get(path).copied().unwrap_or(0)
    }

    /// All recorded values, in publish order
    pub fn published(&self) -> Vec<PublishedValue> {
        self.inner.lock().published.clone()
    }

    /// Recorded values for one topic path, in publish order
    pub fn published_on(&self, path: &str) -> Vec<PublishedValue> {
        let inner = self.inner.lock();
        inner
            .published
            .iter()
            .filter(|p| p.path == path)
            .cloned()
            .collect()
    }

    /// Make every subsequent `string_topic` lookup fail (or succeed again)
    pub fn fail_lookups(&self, fail: bool) {
        self.inner.lock().fail_lookups = fail;
    }

    /// Make every subsequent `set` call fail (or succeed again)
    pub fn fail_sets(&self, fail: bool) {
        self.inner.lock().fail_sets = fail;
    }

    /// Clear recorded values and lookup counts
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.topic_lookups.clear();
        inner.published.clear();
    }
}

impl Transport for MockTransport {
    fn string_topic(&self, path: &str) -> Result<Box<dyn StringTopic>> {
        let mut inner = self.inner.lock();
        *inner.topic_lookups.entry(path.to_string()).or_insert(0) += 1;
        if inner.fail_lookups {
            return Err(Error::TopicUnavailable(path.to_string()));
        }
        Ok(Box::new(MockTopic {
            path: path.to_string(),
            inner: Arc::clone(&self.inner),
        }))
    }
}

struct MockTopic {
    path: String,
    inner: Arc<Mutex<MockTransportInner>>,
}

impl StringTopic for MockTopic {
    fn publish(&self, options: PublishOptions) -> Result<Arc<dyn StringPublisher>> {
        Ok(Arc::new(MockPublisher {
            path: self.path.clone(),
            options,
            inner: Arc::clone(&self.inner),
        }))
    }
}

struct MockPublisher {
    path: String,
    options: PublishOptions,
    inner: Arc<Mutex<MockTransportInner>>,
}

impl StringPublisher for MockPublisher {
    fn set(&self, value: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.fail_sets {
            return Err(Error::Transport(format!(
                "injected failure on {}",
                self.path
            )));
        }
        inner.published.push(PublishedValue {
            path: self.path.clone(),
            options: self.options,
            value: value.to_string(),
        });
        Ok(())
    }
}
