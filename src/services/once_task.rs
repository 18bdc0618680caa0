//! Exactly-once memoized task.
//!
//! `OnceTask` runs its initializer at most once and shares the outcome,
//! success or failure, with every caller. Unlike a compute-if-absent cache, a
//! failed run is never retried.

use std::sync::{Condvar, Mutex, MutexGuard};

use crate::domain::models::ResolutionState;

enum TaskState<T, E> {
    NotStarted,
    InProgress,
    Done(T),
    Failed(E),
}

impl<T, E> TaskState<T, E> {
    const fn resolution_state(&self) -> ResolutionState {
        match self {
            Self::NotStarted => ResolutionState::NotStarted,
            Self::InProgress => ResolutionState::InProgress,
            Self::Done(_) => ResolutionState::Done,
            Self::Failed(_) => ResolutionState::Failed,
        }
    }
}

/// A task whose result is computed at most once.
pub struct OnceTask<T, E> {
    state: Mutex<TaskState<T, E>>,
    finished: Condvar,
}

impl<T: Clone, E: Clone> OnceTask<T, E> {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(TaskState::NotStarted),
            finished: Condvar::new(),
        }
    }

    /// Run `init` if no run has started yet, otherwise wait for the running
    /// one and return its outcome.
    ///
    /// Callers that arrive while another thread is running `init` block until
    /// it finishes. If `init` panics the task goes back to `NotStarted` and
    /// the panic propagates to the caller that ran it.
    pub fn get_or_init<F>(&self, init: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut state = self.lock();
        loop {
            match &*state {
                TaskState::Done(value) => return Ok(value.clone()),
                TaskState::Failed(err) => return Err(err.clone()),
                TaskState::NotStarted => break,
                TaskState::InProgress => {}
            }
            state = self
                .finished
                .wait(state)
                .unwrap_or_else(std::sync::PoisonError::into_inner);
        }
        *state = TaskState::InProgress;
        drop(state);

        let mut reset = ResetOnUnwind { task: self, armed: true };
        let outcome = init();
        reset.armed = false;

        let mut state = self.lock();
        *state = match &outcome {
            Ok(value) => TaskState::Done(value.clone()),
            Err(err) => TaskState::Failed(err.clone()),
        };
        drop(state);
        self.finished.notify_all();
        outcome
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ResolutionState {
        self.lock().resolution_state()
    }

    /// The cached value, if the task finished successfully.
    pub fn get(&self) -> Option<T> {
        match &*self.lock() {
            TaskState::Done(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, TaskState<T, E>> {
        // Poisoning only happens if a panic escapes while the lock is held,
        // and no user code runs under the lock.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<T: Clone, E: Clone> Default for OnceTask<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> std::fmt::Debug for OnceTask<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self
            .state
            .try_lock()
            .ok()
            .map(|s| s.resolution_state());
        f.debug_struct("OnceTask").field("state", &state).finish()
    }
}

struct ResetOnUnwind<'a, T: Clone, E: Clone> {
    task: &'a OnceTask<T, E>,
    armed: bool,
}

impl<T: Clone, E: Clone> Drop for ResetOnUnwind<'_, T, E> {
    fn drop(&mut self) {
        if self.armed {
            *self.task.lock() = TaskState::NotStarted;
            self.task.finished.notify_all();
        }
    }
}
