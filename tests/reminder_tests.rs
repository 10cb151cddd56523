#![allow(clippy::unwrap_used)]

use chrono::Utc;
use screening_bot::conversation::UserId;
use screening_bot::services::reminder::ReminderScheduler;
use screening_bot::transport::RecordingTransport;
use std::sync::Arc;
use std::time::Duration;
use tokio_test::assert_ok;

const DAY: Duration = Duration::from_secs(86_400);

async fn setup_scheduler() -> (ReminderScheduler, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    let scheduler = ReminderScheduler::new(transport.clone()).await.unwrap();
    (scheduler, transport)
}

#[tokio::test]
async fn test_schedule_records_pending_reminder() {
    let (scheduler, _transport) = setup_scheduler().await;
    let user = UserId(42);

    assert_ok!(scheduler.schedule(user, DAY, "reminder").await);

    let pending = scheduler.pending(user).await.unwrap();
    assert_eq!(pending.message, "reminder");
    let seconds_until = (pending.fire_at - Utc::now()).num_seconds();
    assert!((86_390..=86_400).contains(&seconds_until));
    assert_eq!(scheduler.pending_count().await, 1);
}

#[tokio::test]
async fn test_rescheduling_replaces_pending_reminder() {
    let (scheduler, _transport) = setup_scheduler().await;
    let user = UserId(43);

    scheduler.schedule(user, DAY, "first").await.unwrap();
    let first = scheduler.pending(user).await.unwrap();
    scheduler.schedule(user, DAY, "second").await.unwrap();
    let second = scheduler.pending(user).await.unwrap();

    assert_eq!(scheduler.pending_count().await, 1);
    assert_eq!(second.message, "second");
    assert_ne!(first.job_id, second.job_id);
}

#[tokio::test]
async fn test_reminders_for_different_users_coexist() {
    let (scheduler, _transport) = setup_scheduler().await;

    scheduler.schedule(UserId(1), DAY, "one").await.unwrap();
    scheduler.schedule(UserId(2), DAY, "two").await.unwrap();

    assert_eq!(scheduler.pending_count().await, 2);
}

#[tokio::test]
async fn test_fire_delivers_once() {
    let (scheduler, transport) = setup_scheduler().await;
    let user = UserId(44);
    scheduler.schedule(user, DAY, "fill out the form").await.unwrap();

    assert!(scheduler.fire(user).await);
    assert!(!scheduler.fire(user).await);

    let sent = transport.messages_for(user);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, "fill out the form");
    assert!(sent[0].keyboard.is_none());
    assert!(scheduler.pending(user).await.is_none());
}

#[tokio::test]
async fn test_fire_without_pending_reminder_is_noop() {
    let (scheduler, transport) = setup_scheduler().await;

    assert!(!scheduler.fire(UserId(45)).await);
    assert!(transport.messages().is_empty());
}

#[tokio::test]
async fn test_scenario_d_delivery_failure_is_swallowed() {
    let transport = Arc::new(RecordingTransport::failing());
    let scheduler = ReminderScheduler::new(transport.clone()).await.unwrap();
    let u2 = UserId(2);
    let other = UserId(3);
    scheduler.schedule(u2, DAY, "reminder for u2").await.unwrap();
    scheduler.schedule(other, DAY, "reminder for other").await.unwrap();

    // Delivery fails but the reminder is consumed and nothing propagates
    assert!(scheduler.fire(u2).await);
    assert!(scheduler.pending(u2).await.is_none());
    assert!(!scheduler.fire(u2).await);

    // Other users keep being served
    transport.set_failing(false);
    assert!(scheduler.fire(other).await);
    assert_eq!(transport.messages_for(other).len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_timer_fires_after_delay() {
    let (scheduler, transport) = setup_scheduler().await;
    scheduler.start().await.unwrap();
    let user = UserId(46);

    scheduler
        .schedule(user, Duration::from_secs(1), "timer reminder")
        .await
        .unwrap();

    let mut delivered = false;
    for _ in 0..40 {
        if !transport.messages_for(user).is_empty() {
            delivered = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    assert!(delivered, "reminder was not delivered by the timer");
    assert_eq!(transport.messages_for(user).len(), 1);
    assert!(scheduler.pending(user).await.is_none());

    scheduler.shutdown().await.unwrap();
    assert!(!scheduler.is_running());
}

#[tokio::test]
async fn test_shutdown_drops_pending_reminders() {
    let (scheduler, transport) = setup_scheduler().await;
    scheduler.start().await.unwrap();
    assert!(scheduler.is_running());
    scheduler.schedule(UserId(47), DAY, "lost").await.unwrap();

    scheduler.shutdown().await.unwrap();

    assert_eq!(scheduler.pending_count().await, 0);
    assert!(transport.messages().is_empty());
}
