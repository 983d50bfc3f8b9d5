//! Failure types for the cancellable gathers

use fpkit_core::{Maybe, NonEmptyList, Outcome};

/// Why [`gather_results_until`](crate::gather_results_until) did not
/// produce every value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatherError<E> {
    /// A task failed; this is the first failure to complete.
    #[error("task failed: {0}")]
    Task(E),

    /// The batch was cancelled before every task finished.
    #[error("gather cancelled with {completed} task(s) completed and {pending} pending")]
    Cancelled {
        /// Tasks that had completed successfully.
        completed: usize,
        /// Tasks that had not completed.
        pending: usize,
    },
}

impl<E> GatherError<E> {
    /// Whether the batch was cancelled rather than failed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Why [`gather_results_accumulate_until`](crate::gather_results_accumulate_until)
/// did not produce every value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccumulateError<T, E> {
    /// Every task finished and at least one failed; errors are in
    /// submission order.
    #[error("{count} task(s) failed: {0}", count = .0.len())]
    Failed(NonEmptyList<E>),

    /// The batch was cancelled; holds whatever had completed.
    #[error(
        "gather cancelled with {done} of {total} task(s) completed",
        done = .0.completed(),
        total = .0.len()
    )]
    Cancelled(Partial<T, E>),
}

impl<T, E> AccumulateError<T, E> {
    /// Whether the batch was cancelled rather than failed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

/// Outcomes of a cancelled accumulate-gather, by submission index.
///
/// Slots for tasks that never completed are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial<T, E> {
    slots: Vec<Option<Outcome<T, E>>>,
}

impl<T, E> Partial<T, E> {
    pub(crate) fn new(slots: Vec<Option<Outcome<T, E>>>) -> Self {
        Self { slots }
    }

    /// Number of submitted tasks.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no tasks were submitted.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of tasks that had completed, successfully or not.
    pub fn completed(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of tasks that had not completed.
    pub fn pending(&self) -> usize {
        self.len() - self.completed()
    }

    /// The outcome of task `index`, if it completed.
    pub fn get(&self, index: usize) -> Maybe<&Outcome<T, E>> {
        self.slots.get(index).and_then(Option::as_ref).into()
    }

    /// Completed outcomes with their submission index, in submission order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Outcome<T, E>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|o| (i, o)))
    }

    /// Successful values in submission order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().filter_map(|(_, o)| match o {
            Outcome::Ok(v) => Some(v),
            Outcome::Err(_) => None,
        })
    }

    /// Errors in submission order.
    pub fn errors(&self) -> impl Iterator<Item = &E> {
        self.iter().filter_map(|(_, o)| match o {
            Outcome::Ok(_) => None,
            Outcome::Err(e) => Some(e),
        })
    }

    /// One slot per submitted task.
    pub fn into_slots(self) -> Vec<Option<Outcome<T, E>>> {
        self.slots
    }
}
