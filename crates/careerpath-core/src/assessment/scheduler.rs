//! Deferred results transition on a tokio runtime.
//!
//! For hosts that want results to appear on their own after the display
//! delay instead of polling `tick()`. Each scheduled ticket gets one task;
//! the controller's ticket check makes a late or duplicate task harmless.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::controller::{now_ms, AssessmentController};
use crate::error::AssessmentError;
use crate::events::Event;

/// Shares one controller between the caller and its deferred tasks.
#[derive(Debug, Clone)]
pub struct ResultsScheduler {
    controller: Arc<Mutex<AssessmentController>>,
}

/// Handle to one scheduled results transition.
#[derive(Debug)]
pub struct ScheduledResults {
    ticket: u64,
    handle: JoinHandle<Option<Event>>,
    controller: Arc<Mutex<AssessmentController>>,
}

impl ResultsScheduler {
    pub fn new(controller: AssessmentController) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
        }
    }

    pub fn controller(&self) -> Arc<Mutex<AssessmentController>> {
        Arc::clone(&self.controller)
    }

    /// Submit an answer and, if it scheduled results, spawn the task that
    /// fires them.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Propagates the controller's rejection unchanged.
    pub async fn submit_answer(
        &self,
        question_id: &str,
        rating: i64,
    ) -> Result<(Vec<Event>, Option<ScheduledResults>), AssessmentError> {
        let mut controller = self.controller.lock().await;
        let events = controller.submit_answer(question_id, rating)?;
        let scheduled = match controller.pending_results() {
            Some(pending) if events.iter().any(is_scheduled) => {
                let delay = pending.due_epoch_ms.saturating_sub(now_ms());
                Some(self.spawn(pending.ticket, Duration::from_millis(delay)))
            }
            _ => None,
        };
        Ok((events, scheduled))
    }

    fn spawn(&self, ticket: u64, delay: Duration) -> ScheduledResults {
        let controller = Arc::clone(&self.controller);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.lock().await.complete_scheduled(ticket)
        });
        tracing::debug!(ticket, delay_ms = delay.as_millis() as u64, "results task spawned");
        ScheduledResults {
            ticket,
            handle,
            controller: Arc::clone(&self.controller),
        }
    }
}

impl ScheduledResults {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Wait for the transition. `None` if the ticket went stale or the task
    /// was aborted.
    pub async fn wait(self) -> Option<Event> {
        self.handle.await.ok().flatten()
    }

    /// Abort the task and cancel its ticket.
    pub async fn cancel(self) -> Option<Event> {
        self.handle.abort();
        let mut controller = self.controller.lock().await;
        match controller.pending_results() {
            Some(pending) if pending.ticket == self.ticket => controller.cancel_pending(),
            _ => None,
        }
    }
}

fn is_scheduled(event: &Event) -> bool {
    matches!(event, Event::ResultsScheduled { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Stage;

    async fn scheduler_in_questions(delay_ms: u64, skills: &[&str]) -> ResultsScheduler {
        let scheduler = ResultsScheduler::new(AssessmentController::with_results_delay(delay_ms));
        {
            let shared = scheduler.controller();
            let mut controller = shared.lock().await;
            controller.start_test();
            controller
                .complete_skill_selection(skills.iter().map(|s| s.to_string()).collect())
                .unwrap();
        }
        scheduler
    }

    #[tokio::test]
    async fn results_fire_after_delay() {
        let scheduler = scheduler_in_questions(20, &["A", "B"]).await;

        let (_, scheduled) = scheduler.submit_answer("A-0", 30).await.unwrap();
        assert!(scheduled.is_none());

        let (_, scheduled) = scheduler.submit_answer("B-1", 70).await.unwrap();
        let scheduled = scheduled.expect("last answer schedules results");
        assert_eq!(scheduler.controller().lock().await.stage(), Stage::Questions);

        let event = scheduled.wait().await;
        assert!(matches!(event, Some(Event::AssessmentCompleted { progress: 100, .. })));

        let shared = scheduler.controller();
        let controller = shared.lock().await;
        assert_eq!(controller.stage(), Stage::Results);
        assert_eq!(controller.progress(), 100);
    }

    #[tokio::test]
    async fn answering_twice_spawns_one_task() {
        let scheduler = scheduler_in_questions(20, &["A"]).await;

        let (_, first) = scheduler.submit_answer("A-0", 30).await.unwrap();
        let (events, second) = scheduler.submit_answer("A-0", 50).await.unwrap();
        assert!(second.is_none());
        assert_eq!(events.len(), 1);

        assert!(first.unwrap().wait().await.is_some());
        assert_eq!(scheduler.controller().lock().await.answers()["A-0"], 50);
    }

    #[tokio::test]
    async fn cancel_keeps_questions_stage() {
        let scheduler = scheduler_in_questions(10_000, &["A"]).await;

        let (_, scheduled) = scheduler.submit_answer("A-0", 30).await.unwrap();
        let cancelled = scheduled.unwrap().cancel().await;
        assert!(matches!(cancelled, Some(Event::ResultsCancelled { ticket: 1, .. })));

        let shared = scheduler.controller();
        let controller = shared.lock().await;
        assert_eq!(controller.stage(), Stage::Questions);
        assert!(controller.pending_results().is_none());
    }
}
