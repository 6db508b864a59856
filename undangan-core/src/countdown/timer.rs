use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::{Countdown, compute_countdown};
use crate::constants::TICK_MILLIS;

/// Source of the current instant.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Recomputes the countdown once per second and publishes it on a watch channel.
///
/// The background task exits for good once the target is reached. Dropping
/// the timer aborts the task.
pub struct CountdownTimer {
    state_rx: watch::Receiver<Countdown>,
    shutdown: Arc<Notify>,
    handle: Option<JoinHandle<()>>,
}

impl CountdownTimer {
    /// Evaluate immediately and, unless already expired, schedule a tick every second.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<C: Clock>(target: DateTime<Utc>, clock: C) -> Self {
        let initial = compute_countdown(target, clock.now());
        let (state_tx, state_rx) = watch::channel(initial);
        let shutdown = Arc::new(Notify::new());

        let handle = if initial.is_expired() {
            debug!(%target, "countdown already expired, not scheduling");
            None
        } else {
            Some(tokio::spawn(tick_task(
                target,
                clock,
                state_tx,
                Arc::clone(&shutdown),
            )))
        };

        CountdownTimer {
            state_rx,
            shutdown,
            handle,
        }
    }

    /// Latest published value.
    pub fn current(&self) -> Countdown {
        *self.state_rx.borrow()
    }

    /// A receiver notified on every change.
    pub fn subscribe(&self) -> watch::Receiver<Countdown> {
        self.state_rx.clone()
    }

    /// Whether the recurring schedule is still armed.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop ticking. The last published value stays available.
    pub fn cancel(&self) {
        self.shutdown.notify_one();
    }

    /// Wait for the background task to finish (expiry or cancellation).
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn tick_task<C: Clock>(
    target: DateTime<Utc>,
    clock: C,
    state_tx: watch::Sender<Countdown>,
    shutdown: Arc<Notify>,
) {
    // First tick fires immediately.
    let mut interval = tokio::time::interval(Duration::from_millis(TICK_MILLIS));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                debug!("countdown cancelled");
                break;
            }
            _ = interval.tick() => {
                let countdown = compute_countdown(target, clock.now());
                state_tx.send_if_modified(|current| {
                    if *current == countdown {
                        false
                    } else {
                        *current = countdown;
                        true
                    }
                });

                if countdown.is_expired() {
                    info!(%target, "countdown reached the event start");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::CountdownState;
    use chrono::{Duration as ChronoDuration, TimeZone};
    use tokio::time::Instant;

    /// Follows tokio's (possibly paused) clock from a fixed wall-clock origin.
    struct VirtualClock {
        origin: Instant,
        base: DateTime<Utc>,
    }

    impl VirtualClock {
        fn new(base: DateTime<Utc>) -> Self {
            VirtualClock {
                origin: Instant::now(),
                base,
            }
        }
    }

    impl Clock for VirtualClock {
        fn now(&self) -> DateTime<Utc> {
            let elapsed = Instant::now() - self.origin;
            self.base + ChronoDuration::from_std(elapsed).unwrap()
        }
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 25, 9, 59, 57).unwrap()
    }

    fn seconds_left(seconds: u32) -> Countdown {
        Countdown::Running(CountdownState {
            seconds,
            ..CountdownState::ZERO
        })
    }

    #[tokio::test(start_paused = true)]
    async fn evaluates_immediately_on_start() {
        let target = base() + ChronoDuration::seconds(3);
        let timer = CountdownTimer::start(target, VirtualClock::new(base()));

        assert_eq!(timer.current(), seconds_left(3));
        assert!(timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_every_second_until_expired() {
        let target = base() + ChronoDuration::seconds(3);
        let timer = CountdownTimer::start(target, VirtualClock::new(base()));
        let mut rx = timer.subscribe();

        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let value = *rx.borrow_and_update();
            seen.push(value);
            if value.is_expired() {
                break;
            }
        }

        assert_eq!(seen, vec![seconds_left(2), seconds_left(1), Countdown::Expired]);

        timer.join().await;
    }

    #[tokio::test(start_paused = true)]
    async fn expired_timer_is_not_rearmed() {
        let target = base() + ChronoDuration::seconds(1);
        let timer = CountdownTimer::start(target, VirtualClock::new(base()));

        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
        tokio::task::yield_now().await;

        assert_eq!(timer.current(), Countdown::Expired);
        assert!(!timer.is_running());

        tokio::time::sleep(std::time::Duration::from_secs(10)).await;
        assert_eq!(timer.current(), Countdown::Expired);
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn past_target_never_schedules() {
        let target = base() - ChronoDuration::minutes(1);
        let timer = CountdownTimer::start(target, VirtualClock::new(base()));

        assert_eq!(timer.current(), Countdown::Expired);
        assert_eq!(timer.current().state(), CountdownState::ZERO);
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticking() {
        let target = base() + ChronoDuration::hours(1);
        let timer = CountdownTimer::start(target, VirtualClock::new(base()));
        let rx = timer.subscribe();

        timer.cancel();
        tokio::task::yield_now().await;
        let frozen = *rx.borrow();

        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        assert_eq!(*rx.borrow(), frozen);
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_the_task() {
        let target = base() + ChronoDuration::hours(1);
        let timer = CountdownTimer::start(target, VirtualClock::new(base()));
        let mut rx = timer.subscribe();

        drop(timer);

        // Sender lives in the aborted task, so the channel closes.
        assert!(rx.changed().await.is_err());
    }
}
