use crate::conversation::UserId;
use crate::error::Result;
use crate::transport::Transport;
use crate::utils::logging::{log_delivery_error, log_reminder_event};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

/// A reminder waiting for its one-shot job to elapse.
#[derive(Debug, Clone)]
pub struct PendingReminder {
    pub job_id: Uuid,
    pub fire_at: DateTime<Utc>,
    pub message: String,
}

/// Sends one deferred follow-up per user.
///
/// Scheduling again for the same user replaces the pending reminder. A
/// failed delivery is logged and dropped.
#[derive(Clone)]
pub struct ReminderScheduler {
    inner: Arc<Inner>,
}

struct Inner {
    transport: Arc<dyn Transport>,
    jobs: JobScheduler,
    pending: Mutex<HashMap<UserId, PendingReminder>>,
    running: AtomicBool,
}

impl ReminderScheduler {
    pub async fn new(transport: Arc<dyn Transport>) -> Result<Self> {
        let jobs = JobScheduler::new().await?;

        Ok(Self {
            inner: Arc::new(Inner {
                transport,
                jobs,
                pending: Mutex::new(HashMap::new()),
                running: AtomicBool::new(false),
            }),
        })
    }

    pub async fn start(&self) -> Result<()> {
        self.inner.jobs.start().await?;
        self.inner.running.store(true, Ordering::SeqCst);
        tracing::info!("Reminder scheduler started");
        Ok(())
    }

    /// Stops the timer loop. Pending reminders are discarded.
    pub async fn shutdown(&self) -> Result<()> {
        self.inner.running.store(false, Ordering::SeqCst);
        let dropped = {
            let mut pending = self.inner.pending.lock().await;
            let count = pending.len();
            pending.clear();
            count
        };
        let mut jobs = self.inner.jobs.clone();
        jobs.shutdown().await?;
        tracing::info!("Reminder scheduler stopped, {} pending reminder(s) dropped", dropped);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    /// Arranges for `message` to reach `user` after `delay`.
    pub async fn schedule(
        &self,
        user: UserId,
        delay: Duration,
        message: impl Into<String>,
    ) -> Result<()> {
        let message = message.into();
        let mut pending = self.inner.pending.lock().await;

        if let Some(previous) = pending.remove(&user) {
            if let Err(e) = self.inner.jobs.remove(&previous.job_id).await {
                tracing::warn!("Failed to remove replaced reminder job {}: {}", previous.job_id, e);
            }
            log_reminder_event("replaced", user, Some(&previous.job_id.to_string()));
        }

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let job = Job::new_one_shot_async(delay, move |job_id, _l| {
            let weak = weak.clone();
            Box::pin(async move {
                if let Some(inner) = weak.upgrade() {
                    inner.fire_job(user, job_id).await;
                }
            })
        })?;
        let job_id = self.inner.jobs.add(job).await?;

        let fire_at = Utc::now() + chrono::Duration::seconds(delay.as_secs() as i64);
        log_reminder_event("scheduled", user, Some(&format!("fires at {}", fire_at.to_rfc3339())));
        pending.insert(
            user,
            PendingReminder {
                job_id,
                fire_at,
                message,
            },
        );
        Ok(())
    }

    /// Delivers the user's pending reminder immediately.
    ///
    /// Returns false when nothing was pending.
    pub async fn fire(&self, user: UserId) -> bool {
        let Some(reminder) = self.inner.pending.lock().await.remove(&user) else {
            return false;
        };

        if let Err(e) = self.inner.jobs.remove(&reminder.job_id).await {
            tracing::debug!("Reminder job {} already gone: {}", reminder.job_id, e);
        }
        self.inner.deliver(user, &reminder.message).await;
        true
    }

    pub async fn pending(&self, user: UserId) -> Option<PendingReminder> {
        self.inner.pending.lock().await.get(&user).cloned()
    }

    pub async fn pending_count(&self) -> usize {
        self.inner.pending.lock().await.len()
    }
}

impl Inner {
    /// Timer path: only the user's current job may deliver.
    async fn fire_job(&self, user: UserId, job_id: Uuid) {
        let reminder = {
            let mut pending = self.pending.lock().await;
            match pending.get(&user) {
                Some(current) if current.job_id == job_id => pending.remove(&user),
                _ => None,
            }
        };

        match reminder {
            Some(reminder) => self.deliver(user, &reminder.message).await,
            None => log_reminder_event("stale job skipped", user, Some(&job_id.to_string())),
        }
    }

    async fn deliver(&self, user: UserId, message: &str) {
        match self.transport.send_message(user, message, None).await {
            Ok(()) => log_reminder_event("delivered", user, None),
            Err(e) => log_delivery_error("reminder", user, &e.to_string()),
        }
    }
}
