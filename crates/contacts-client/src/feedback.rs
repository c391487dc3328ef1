use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};
use tokio::task::JoinHandle;

pub const FEEDBACK_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
struct FeedbackState {
    message: Option<String>,
    generation: u64,
    pending_clear: Option<JoinHandle<()>>,
}

/// A transient status message that clears itself after a delay. Showing a
/// new message cancels the pending clear of the previous one.
#[derive(Clone, Debug)]
pub struct Feedback {
    state: Arc<Mutex<FeedbackState>>,
    delay: Duration,
}

impl Default for Feedback {
    fn default() -> Self {
        Self::with_delay(FEEDBACK_DELAY)
    }
}

impl Feedback {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(FeedbackState::default())),
            delay,
        }
    }

    pub fn message(&self) -> Option<String> {
        self.get_state_locked().message.clone()
    }

    /// Must be called from within a tokio runtime.
    pub fn display(&self, message: &str) {
        let mut state = self.get_state_locked();

        if let Some(pending_clear) = state.pending_clear.take() {
            pending_clear.abort();
        }

        state.generation += 1;
        state.message = Some(message.to_owned());

        let generation = state.generation;
        let shared_state = Arc::clone(&self.state);
        let delay = self.delay;

        state.pending_clear = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut state = match shared_state.lock() {
                Ok(state) => state,
                Err(poisoned) => poisoned.into_inner(),
            };

            // a newer message owns the slot now
            if state.generation == generation {
                state.message = None;
                state.pending_clear = None;
            }
        }));
    }

    pub fn clear(&self) {
        let mut state = self.get_state_locked();

        if let Some(pending_clear) = state.pending_clear.take() {
            pending_clear.abort();
        }

        state.generation += 1;
        state.message = None;
    }

    fn get_state_locked(&self) -> MutexGuard<FeedbackState> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
