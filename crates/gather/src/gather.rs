//! [`Gather`] and the free gather functions

use std::convert::Infallible;
use std::future::{self, Future};
use std::ops::ControlFlow;

use tokio_util::sync::CancellationToken;

use fpkit_core::{Maybe, NonEmptyList, Outcome};
use fpkit_error::FpResult;

use crate::config::GatherConfig;
use crate::drive::{Driven, drive};
use crate::error::{AccumulateError, GatherError, Partial};

/// Runs batches of `Outcome`-returning futures concurrently.
///
/// All futures of a batch are polled on the task that awaits the gather;
/// nothing is spawned, so tasks need not be `Send` or `'static`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gather {
    config: GatherConfig,
}

impl Gather {
    /// No concurrency limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `config`, rejecting it if it does not validate.
    pub fn with_config(config: GatherConfig) -> FpResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &GatherConfig {
        &self.config
    }

    /// Fail-fast gather; see [`gather_results`].
    pub async fn run<I, F, T, E>(&self, tasks: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Outcome<T, E>>,
    {
        let (driven, slots) = self.fail_fast(tasks, future::pending::<Infallible>()).await;
        match driven {
            Driven::Finished => Outcome::Ok(slots.into_iter().flatten().collect()),
            Driven::Stopped(e) => Outcome::Err(e),
            Driven::Cancelled { signal, .. } => match signal {},
        }
    }

    /// Accumulating gather; see [`gather_results_accumulate`].
    pub async fn run_accumulate<I, F, T, E>(&self, tasks: I) -> Outcome<Vec<T>, NonEmptyList<E>>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Outcome<T, E>>,
    {
        let (driven, slots) = self.accumulate(tasks, future::pending::<Infallible>()).await;
        match driven {
            Driven::Finished => split(slots),
            Driven::Stopped(never) => match never {},
            Driven::Cancelled { signal, .. } => match signal {},
        }
    }

    /// Cancellable fail-fast gather; see [`gather_results_until`].
    pub async fn run_until<I, F, T, E>(
        &self,
        tasks: I,
        token: &CancellationToken,
    ) -> Outcome<Vec<T>, GatherError<E>>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Outcome<T, E>>,
    {
        let (driven, slots) = self.fail_fast(tasks, token.cancelled()).await;
        match driven {
            Driven::Finished => Outcome::Ok(slots.into_iter().flatten().collect()),
            Driven::Stopped(e) => Outcome::Err(GatherError::Task(e)),
            Driven::Cancelled {
                completed, pending, ..
            } => Outcome::Err(GatherError::Cancelled { completed, pending }),
        }
    }

    /// Cancellable accumulating gather; see
    /// [`gather_results_accumulate_until`].
    pub async fn run_accumulate_until<I, F, T, E>(
        &self,
        tasks: I,
        token: &CancellationToken,
    ) -> Outcome<Vec<T>, AccumulateError<T, E>>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Outcome<T, E>>,
    {
        let (driven, slots) = self.accumulate(tasks, token.cancelled()).await;
        match driven {
            Driven::Finished => split(slots).map_err(AccumulateError::Failed),
            Driven::Stopped(never) => match never {},
            Driven::Cancelled { .. } => {
                Outcome::Err(AccumulateError::Cancelled(Partial::new(slots)))
            }
        }
    }

    async fn fail_fast<I, F, T, E, K>(
        &self,
        tasks: I,
        cancel: K,
    ) -> (Driven<E, K::Output>, Vec<Option<T>>)
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Outcome<T, E>>,
        K: Future,
    {
        let tasks: Vec<F> = tasks.into_iter().collect();
        let mut slots = empty_slots(tasks.len());
        let driven = drive(tasks, self.config.window(), cancel, |index, outcome| match outcome {
            Outcome::Ok(value) => {
                slots[index] = Some(value);
                ControlFlow::Continue(())
            }
            Outcome::Err(e) => ControlFlow::Break(e),
        })
        .await;
        (driven, slots)
    }

    async fn accumulate<I, F, T, E, K>(
        &self,
        tasks: I,
        cancel: K,
    ) -> (Driven<Infallible, K::Output>, Vec<Option<Outcome<T, E>>>)
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Outcome<T, E>>,
        K: Future,
    {
        let tasks: Vec<F> = tasks.into_iter().collect();
        let mut slots = empty_slots(tasks.len());
        let driven = drive(tasks, self.config.window(), cancel, |index, outcome| {
            slots[index] = Some(outcome);
            ControlFlow::Continue(())
        })
        .await;
        (driven, slots)
    }
}

fn empty_slots<T>(len: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(len);
    slots.resize_with(len, || None);
    slots
}

// Values in submission order, or every error in submission order.
fn split<T, E>(slots: Vec<Option<Outcome<T, E>>>) -> Outcome<Vec<T>, NonEmptyList<E>> {
    let mut values = Vec::with_capacity(slots.len());
    let mut errors = Vec::new();
    for outcome in slots.into_iter().flatten() {
        match outcome {
            Outcome::Ok(v) => values.push(v),
            Outcome::Err(e) => errors.push(e),
        }
    }
    match NonEmptyList::from_vec(errors) {
        Maybe::Some(errors) => Outcome::Err(errors),
        Maybe::Empty => Outcome::Ok(values),
    }
}

/// Runs every task concurrently and returns all values in submission order.
///
/// The first `Err` *to complete* is returned as soon as it arrives, and the
/// tasks still running are dropped.
///
/// ```rust
/// use fpkit_core::Outcome;
/// use fpkit_gather::gather_results;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let tasks = [1, 2, 3].map(|n| async move { Outcome::<_, String>::Ok(n * 10) });
/// let ok = gather_results(tasks).await;
/// assert_eq!(ok, Outcome::Ok(vec![10, 20, 30]));
/// # });
/// ```
pub async fn gather_results<I, F, T, E>(tasks: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Outcome<T, E>>,
{
    Gather::new().run(tasks).await
}

/// Runs every task to completion.
///
/// Returns all values in submission order when every task succeeds,
/// otherwise all errors in submission order, whatever order the tasks
/// finished in.
pub async fn gather_results_accumulate<I, F, T, E>(tasks: I) -> Outcome<Vec<T>, NonEmptyList<E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Outcome<T, E>>,
{
    Gather::new().run_accumulate(tasks).await
}

/// [`gather_results`] that stops when `token` is cancelled.
///
/// Cancellation is checked before each completion is taken, so a task
/// finishing at the same moment as the cancel is not counted.
pub async fn gather_results_until<I, F, T, E>(
    tasks: I,
    token: &CancellationToken,
) -> Outcome<Vec<T>, GatherError<E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Outcome<T, E>>,
{
    Gather::new().run_until(tasks, token).await
}

/// [`gather_results_accumulate`] that stops when `token` is cancelled,
/// keeping every outcome that had completed in a [`Partial`].
pub async fn gather_results_accumulate_until<I, F, T, E>(
    tasks: I,
    token: &CancellationToken,
) -> Outcome<Vec<T>, AccumulateError<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Outcome<T, E>>,
{
    Gather::new().run_accumulate_until(tasks, token).await
}
