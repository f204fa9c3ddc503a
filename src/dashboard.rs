//! Elastic dashboard publisher.
//!
//! [`Dashboard`] publishes JSON-encoded notifications to
//! `/Elastic/RobotNotifications` and tab selection commands to
//! `/Elastic/SelectedTab`. Both operations are fire-and-forget: failures are
//! logged and counted, never surfaced to the caller, so they are safe to
//! issue from hot robot control loops.

use crate::error::Result;
use crate::notification::Notification;
use crate::transport::{PublishOptions, StringPublisher, Transport};
use log::{debug, error};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// String topic receiving JSON-encoded notifications
pub const NOTIFICATION_TOPIC: &str = "/Elastic/RobotNotifications";

/// String topic receiving tab selection commands
pub const SELECTED_TAB_TOPIC: &str = "/Elastic/SelectedTab";

/// Publisher for one Elastic dashboard instance
///
/// Construct once at process start with the transport connection and share it
/// (by reference or inside an `Arc`) with every call site. Publish handles
/// are created lazily on first use and reused for the life of the publisher.
///
/// # Example
/// ```
/// use elasticlib::transport::MockTransport;
/// use elasticlib::{Dashboard, Notification, NotificationLevel};
/// use std::sync::Arc;
///
/// let dashboard = Dashboard::new(Arc::new(MockTransport::new()));
/// dashboard.send_alert(&Notification::new(
///     NotificationLevel::Info,
///     "Auto selected",
///     "Running 4-piece center",
/// ));
/// dashboard.select_tab("Autonomous");
/// ```
pub struct Dashboard {
    transport: Arc<dyn Transport>,
    notification_handle: TopicHandle,
    selected_tab_handle: TopicHandle,
    dropped_messages: AtomicU64,
}

impl Dashboard {
    /// Create a publisher on the given transport connection
    ///
    /// No topic lookup happens here; handles are created on first send.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            // Notifications are events every current viewer should receive
            notification_handle: TopicHandle::new(
                NOTIFICATION_TOPIC,
                PublishOptions {
                    send_all: true,
                    keep_duplicates: true,
                },
            ),
            // Tab selection is a one-shot command; no send-all fan-out
            selected_tab_handle: TopicHandle::new(
                SELECTED_TAB_TOPIC,
                PublishOptions {
                    send_all: false,
                    keep_duplicates: true,
                },
            ),
            dropped_messages: AtomicU64::new(0),
        }
    }

    /// Send a notification to the dashboard
    ///
    /// The notification is serialized as a JSON string before being
    /// published. Never returns or panics on failure: serialization and
    /// transmit errors are logged to the diagnostic stream, counted in
    /// [`dropped_messages`](Self::dropped_messages), and discarded.
    pub fn send_alert(&self, notification: &Notification) {
        if let Err(e) = self.try_send_alert(notification) {
            error!("Failed to publish notification: {}", e);
            self.dropped_messages.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn try_send_alert(&self, notification: &Notification) -> Result<()> {
        let json = notification.to_json()?;
        let publisher = self.notification_handle.get(self.transport.as_ref())?;
        publisher.set(&json)
    }

    /// Select the dashboard tab with the given name
    ///
    /// If no tab matches the name, the dashboard ignores the command. If the
    /// name is a number, the dashboard selects the tab at that index.
    /// Failures are logged and counted, never surfaced.
    pub fn select_tab(&self, tab_name: &str) {
        if let Err(e) = self.try_select_tab(tab_name) {
            error!("Failed to publish tab selection: {}", e);
            self.dropped_messages.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn try_select_tab(&self, tab_name: &str) -> Result<()> {
        let publisher = self.selected_tab_handle.get(self.transport.as_ref())?;
        publisher.set(tab_name)
    }

    /// Select the dashboard tab at the given index
    ///
    /// If the index is greater than or equal to the number of tabs, the
    /// dashboard ignores the command.
    pub fn select_tab_index(&self, tab_index: usize) {
        self.select_tab(&tab_index.to_string());
    }

    /// Number of messages dropped because of serialization or transmit
    /// failures since this publisher was created
    pub fn dropped_messages(&self) -> u64 {
        self.dropped_messages.load(Ordering::Relaxed)
    }
}

/// Lazily created publish handle for one topic
struct TopicHandle {
    path: &'static str,
    options: PublishOptions,
    publisher: Mutex<Option<Arc<dyn StringPublisher>>>,
}

impl TopicHandle {
    fn new(path: &'static str, options: PublishOptions) -> Self {
        Self {
            path,
            options,
            publisher: Mutex::new(None),
        }
    }

    /// Return the memoized publisher, creating it on first use
    ///
    /// The lock is held across creation, so concurrent first use performs
    /// exactly one topic lookup. A failed lookup is not memoized; the next
    /// call retries.
    fn get(&self, transport: &dyn Transport) -> Result<Arc<dyn StringPublisher>> {
        let mut slot = self.publisher.lock();
        if let Some(publisher) = slot.as_ref() {
            return Ok(Arc::clone(publisher));
        }
        let topic = transport.string_topic(self.path)?;
        let publisher = topic.publish(self.options)?;
        debug!("Created publish handle for {}", self.path);
        *slot = Some(Arc::clone(&publisher));
        Ok(publisher)
    }
}
