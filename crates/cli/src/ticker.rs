use std::time::Duration;

use liftlog_domain::{Scheduler, Task, TickToken};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

/// Schedules one interval task per timer run. Ticks are delivered through
/// the receiver returned by [`channel`].
pub struct TokioScheduler {
    sender: UnboundedSender<TickToken>,
}

pub struct TokioTask(JoinHandle<()>);

#[must_use]
pub fn channel() -> (TokioScheduler, UnboundedReceiver<TickToken>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (TokioScheduler { sender }, receiver)
}

impl Scheduler for TokioScheduler {
    type Task = TokioTask;

    fn every_second(&mut self, token: TickToken) -> TokioTask {
        let sender = self.sender.clone();
        TokioTask(tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if sender.send(token).is_err() {
                    break;
                }
            }
        }))
    }
}

impl Task for TokioTask {
    fn cancel(&mut self) {
        self.0.abort();
    }
}
