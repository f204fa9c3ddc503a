//! Elasticlib - client library for the Elastic dashboard
//!
//! Publishes robot notifications and tab selection commands onto string
//! topics of a shared key-value synchronization service, for display on an
//! Elastic dashboard watching those topics.
//!
//! The synchronization service itself (connections, wire protocol,
//! fan-out to subscribers) is external; it is reached through the
//! [`transport::Transport`] trait. [`transport::MockTransport`] implements
//! the same seam for tests.
//!
//! ## Usage
//!
//! Build a [`Notification`], hand it to a process-wide [`Dashboard`]:
//!
//! ```
//! use elasticlib::transport::MockTransport;
//! use elasticlib::{Dashboard, Notification, NotificationLevel};
//! use std::sync::Arc;
//!
//! let dashboard = Dashboard::new(Arc::new(MockTransport::new()));
//!
//! dashboard.send_alert(
//!     &Notification::new(NotificationLevel::Warning, "Low battery", "12.1 V")
//!         .with_display_seconds(5.0),
//! );
//! ```

pub mod dashboard;
pub mod error;
pub mod notification;
pub mod transport;

// Re-export commonly used types
pub use dashboard::{Dashboard, NOTIFICATION_TOPIC, SELECTED_TAB_TOPIC};
pub use error::{Error, Result};
pub use notification::{Notification, NotificationLevel};
