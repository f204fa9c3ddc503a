//! Transport seam for the shared synchronization service
//!
//! The synchronization service (connection management, wire protocol,
//! multi-subscriber replication) lives outside this crate. Publishing goes
//! through three small traits mirroring its topic model: look up a string
//! topic by path, open a publish handle with options, set successive values
//! on the handle.

use crate::error::Result;
use std::sync::Arc;

mod mock;
pub use mock::{MockTransport, PublishedValue};

/// Options applied when opening a publish handle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishOptions {
    /// Deliver every value to all current subscribers, not just the latest
    pub send_all: bool,
    /// Deliver repeated identical values instead of suppressing them
    pub keep_duplicates: bool,
}

/// Connection to the synchronization service
pub trait Transport: Send + Sync {
    /// Look up the string topic at the given path
    ///
    /// Must be idempotent per path: repeated lookups refer to the same topic.
    fn string_topic(&self, path: &str) -> Result<Box<dyn StringTopic>>;
}

/// A named string-valued topic on the synchronization service
pub trait StringTopic {
    /// Open a publish handle on this topic with the given options
    fn publish(&self, options: PublishOptions) -> Result<Arc<dyn StringPublisher>>;
}

/// Live publish handle bound to one topic
///
/// `set` is `&self` so one handle can be shared across threads; the service
/// serializes individual set calls.
pub trait StringPublisher: Send + Sync {
    /// Transmit one value
    fn set(&self, value: &str) -> Result<()>;
}
