//! Notification value object published to the dashboard.
//!
//! A [`Notification`] describes one alert: severity level, title, description,
//! display duration, and display dimensions. Every field has a safe default so
//! a record is always serializable, even when built with [`Notification::default`].

use crate::error::Result;
use serde::Serialize;

/// Severity level of a dashboard notification
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationLevel {
    /// Informational message
    #[default]
    Info,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

/// One notification to display on the dashboard
///
/// Serialized as a JSON object with the fields `level`, `title`,
/// `description`, `displayTime` (milliseconds), `width`, and `height`.
///
/// # Example
/// ```
/// use elasticlib::{Notification, NotificationLevel};
///
/// let notification = Notification::new(NotificationLevel::Warning, "Low battery", "12.1 V")
///     .with_display_seconds(5.0)
///     .with_automatic_height();
/// ```
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Notification {
    level: NotificationLevel,
    title: String,
    description: String,
    #[serde(rename = "displayTime")]
    display_time_millis: u32,
    width: f64,
    height: f64,
}

impl Default for Notification {
    /// Empty informational notification with default duration and dimensions
    fn default() -> Self {
        Self::new(NotificationLevel::Info, "", "")
    }
}

impl Notification {
    /// Default display duration in milliseconds
    pub const DEFAULT_DISPLAY_TIME_MILLIS: u32 = 3000;
    /// Default display width
    pub const DEFAULT_WIDTH: f64 = 350.0;
    /// Height value that lets the dashboard size the notification itself
    pub const AUTOMATIC_HEIGHT: f64 = -1.0;

    /// Create a notification with default display time and dimensions
    ///
    /// # Arguments
    /// - `level`: Severity level
    /// - `title`: Title text
    /// - `description`: Descriptive text
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
            display_time_millis: Self::DEFAULT_DISPLAY_TIME_MILLIS,
            width: Self::DEFAULT_WIDTH,
            height: Self::AUTOMATIC_HEIGHT,
        }
    }

    /// Encode this notification as a JSON string
    ///
    /// Cannot fail for any record reachable through this API; the error path
    /// exists so the publisher can catch and log instead of panicking.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Severity level of this notification
    pub fn level(&self) -> NotificationLevel {
        self.level
    }

    pub fn set_level(&mut self, level: NotificationLevel) {
        self.level = level;
    }

    /// Title text of this notification
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Descriptive text of this notification
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Display duration in milliseconds; 0 means the notification never
    /// auto-dismisses
    pub fn display_time_millis(&self) -> u32 {
        self.display_time_millis
    }

    pub fn set_display_time_millis(&mut self, millis: u32) {
        self.display_time_millis = millis;
    }

    /// Set the display duration in seconds, rounded half away from zero to
    /// the nearest millisecond
    pub fn set_display_time_seconds(&mut self, seconds: f64) {
        self.display_time_millis = (seconds * 1000.0).round() as u32;
    }

    /// Width of the notification display area
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Height of the notification display area; negative means automatic
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Set the level and return the notification for chaining
    pub fn with_level(mut self, level: NotificationLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the title and return the notification for chaining
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description and return the notification for chaining
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the display duration in seconds and return the notification for
    /// chaining
    pub fn with_display_seconds(self, seconds: f64) -> Self {
        self.with_display_millis((seconds * 1000.0).round() as u32)
    }

    /// Set the display duration in milliseconds and return the notification
    /// for chaining
    pub fn with_display_millis(mut self, millis: u32) -> Self {
        self.display_time_millis = millis;
        self
    }

    /// Set the width and return the notification for chaining
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the height and return the notification for chaining
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Let the dashboard determine the height automatically
    pub fn with_automatic_height(mut self) -> Self {
        self.height = Self::AUTOMATIC_HEIGHT;
        self
    }

    /// Keep the notification on screen until dismissed by the user
    ///
    /// Sets the display time to 0. Auto-dismiss is re-enabled by setting any
    /// display time greater than 0.
    pub fn with_no_auto_dismiss(mut self) -> Self {
        self.display_time_millis = 0;
        self
    }
}
