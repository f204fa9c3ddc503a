//! Integration tests for the dashboard publisher over the mock transport

use elasticlib::transport::MockTransport;
use elasticlib::{
    Dashboard, NOTIFICATION_TOPIC, Notification, NotificationLevel, SELECTED_TAB_TOPIC,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::thread;

#[test]
fn test_notification_round_trips_through_generic_decoder() {
    let transport = MockTransport::new();
    let dashboard = Dashboard::new(Arc::new(transport.clone()));

    dashboard.send_alert(
        &Notification::new(NotificationLevel::Warning, "Low battery", "12.1 V")
            .with_display_millis(5000)
            .with_width(420.0)
            .with_height(90.0),
    );

    let published = transport.published_on(NOTIFICATION_TOPIC);
    assert_eq!(published.len(), 1);
    let value: Value = serde_json::from_str(&published[0].value).unwrap();
    assert_eq!(
        value,
        json!({
            "level": "WARNING",
            "title": "Low battery",
            "description": "12.1 V",
            "displayTime": 5000,
            "width": 420.0,
            "height": 90.0,
        })
    );
}

#[test]
fn test_publish_options_differ_per_topic() {
    let transport = MockTransport::new();
    let dashboard = Dashboard::new(Arc::new(transport.clone()));

    dashboard.send_alert(&Notification::default());
    dashboard.select_tab("Teleop");

    let notification = &transport.published_on(NOTIFICATION_TOPIC)[0];
    assert!(notification.options.send_all);
    assert!(notification.options.keep_duplicates);

    let tab = &transport.published_on(SELECTED_TAB_TOPIC)[0];
    assert!(!tab.options.send_all);
    assert!(tab.options.keep_duplicates);
}

#[test]
fn test_concurrent_first_use_creates_one_handle() {
    let transport = MockTransport::new();
    let dashboard = Arc::new(Dashboard::new(Arc::new(transport.clone())));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dashboard = Arc::clone(&dashboard);
            thread::spawn(move || {
                for _ in 0..25 {
                    dashboard.send_alert(&Notification::new(
                        NotificationLevel::Info,
                        format!("thread {i}"),
                        "",
                    ));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(transport.topic_lookups(NOTIFICATION_TOPIC), 1);
    assert_eq!(transport.published_on(NOTIFICATION_TOPIC).len(), 8 * 25);
    assert_eq!(dashboard.dropped_messages(), 0);
}

#[test]
fn test_transmit_failure_does_not_poison_the_handle() {
    let transport = MockTransport::new();
    let dashboard = Dashboard::new(Arc::new(transport.clone()));

    transport.fail_sets(true);
    dashboard.send_alert(&Notification::default());
    assert_eq!(dashboard.dropped_messages(), 1);
    assert!(transport.published_on(NOTIFICATION_TOPIC).is_empty());

    transport.fail_sets(false);
    dashboard.send_alert(&Notification::default());
    assert_eq!(dashboard.dropped_messages(), 1);
    assert_eq!(transport.published_on(NOTIFICATION_TOPIC).len(), 1);
    // The failed set cost no extra topic lookup
    assert_eq!(transport.topic_lookups(NOTIFICATION_TOPIC), 1);
}

#[test]
fn test_failed_lookup_is_not_memoized() {
    let transport = MockTransport::new();
    let dashboard = Dashboard::new(Arc::new(transport.clone()));

    transport.fail_lookups(true);
    dashboard.select_tab("Autonomous");
    assert_eq!(dashboard.dropped_messages(), 1);

    // Once the service is reachable the next call creates the handle
    transport.fail_lookups(false);
    dashboard.select_tab("Autonomous");
    assert_eq!(dashboard.dropped_messages(), 1);
    assert_eq!(transport.published_on(SELECTED_TAB_TOPIC).len(), 1);
    assert_eq!(transport.topic_lookups(SELECTED_TAB_TOPIC), 2);
}

#[test]
fn test_tab_selection_by_index_and_name_are_identical() {
    let transport = MockTransport::new();
    let dashboard = Dashboard::new(Arc::new(transport.clone()));

    dashboard.select_tab_index(5);
    dashboard.select_tab("5");

    let published = transport.published_on(SELECTED_TAB_TOPIC);
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].value, "5");
    assert_eq!(published[1].value, "5");
}
