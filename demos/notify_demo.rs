//! Notification walkthrough against a recording transport
//!
//! Exercises the full publish surface without a live synchronization
//! service: sends a notification at each level, a sticky notification, and a
//! couple of tab selections, then dumps what would have gone over the wire.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example notify_demo
//! ```
//!
//! To publish to a real dashboard, implement [`elasticlib::transport::Transport`]
//! over your synchronization service client and pass that to [`Dashboard::new`]
//! instead.

use elasticlib::transport::MockTransport;
use elasticlib::{Dashboard, Notification, NotificationLevel};
use std::sync::Arc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let transport = MockTransport::new();
    let dashboard = Dashboard::new(Arc::new(transport.clone()));

    log::info!("1. One notification per level...");
    dashboard.send_alert(&Notification::new(
        NotificationLevel::Info,
        "Auto selected",
        "Running 4-piece center",
    ));
    dashboard.send_alert(&Notification::new(
        NotificationLevel::Warning,
        "Low battery",
        "12.1 V",
    ));
    dashboard.send_alert(&Notification::new(
        NotificationLevel::Error,
        "Fault",
        "Arm encoder offline",
    ));

    log::info!("2. Sticky notification (no auto-dismiss, fixed size)...");
    dashboard.send_alert(
        &Notification::new(NotificationLevel::Warning, "Brownout watch", "Check PDH channel 7")
            .with_no_auto_dismiss()
            .with_width(400.0)
            .with_height(120.0),
    );

    log::info!("3. Tab selection by name and by index...");
    dashboard.select_tab("Autonomous");
    dashboard.select_tab_index(2);

    log::info!("4. Published values:");
    for published in transport.published() {
        log::info!("   {} <- {}", published.path, published.value);
    }
    log::info!("Dropped messages: {}", dashboard.dropped_messages());
}
