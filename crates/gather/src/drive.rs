//! The polling loop shared by every gather
//!
//! Tasks are polled on the caller's task through a `FuturesUnordered`
//! window. Dropping the loop (on early stop, on cancellation, or when the
//! caller drops the gather future) drops every task still in the window or
//! the queue, which cancels it.

use std::future::Future;
use std::ops::ControlFlow;
use std::pin::pin;

use futures::FutureExt;
use futures::stream::{FuturesUnordered, StreamExt};

use fpkit_core::Outcome;

/// How the loop ended.
pub(crate) enum Driven<B, C> {
    /// Every task completed and none asked to stop.
    Finished,
    /// A completion handler broke out of the loop.
    Stopped(B),
    /// The cancel signal fired first.
    Cancelled {
        signal: C,
        completed: usize,
        pending: usize,
    },
}

/// Polls `tasks` with at most `window` in flight, handing each outcome to
/// `on_complete` together with its submission index.
///
/// `cancel` is checked before every completion; when it resolves the loop
/// ends without waiting for the remaining tasks.
#[tracing::instrument(
    level = "debug",
    name = "gather",
    skip_all,
    fields(tasks = tasks.len(), window = window)
)]
pub(crate) async fn drive<F, T, E, B, K, S>(
    tasks: Vec<F>,
    window: usize,
    cancel: K,
    mut on_complete: S,
) -> Driven<B, K::Output>
where
    F: Future<Output = Outcome<T, E>>,
    K: Future,
    S: FnMut(usize, Outcome<T, E>) -> ControlFlow<B>,
{
    let total = tasks.len();
    let mut queue = tasks
        .into_iter()
        .enumerate()
        .map(|(index, task)| task.map(move |outcome| (index, outcome)));
    let mut running: FuturesUnordered<_> = queue.by_ref().take(window).collect();
    let mut cancel = pin!(cancel);
    let mut completed = 0_usize;

    while !running.is_empty() {
        let next = tokio::select! {
            biased;
            signal = cancel.as_mut() => {
                let pending = total - completed;
                tracing::info!(completed, pending, "gather cancelled");
                return Driven::Cancelled { signal, completed, pending };
            }
            next = running.next() => next,
        };
        let Some((index, outcome)) = next else { break };
        completed += 1;

        if let ControlFlow::Break(stop) = on_complete(index, outcome) {
            tracing::debug!(
                index,
                completed,
                pending = total - completed,
                "gather stopped at first failure"
            );
            return Driven::Stopped(stop);
        }
        if let Some(task) = queue.next() {
            running.push(task);
        }
    }

    tracing::trace!(completed, "gather finished");
    Driven::Finished
}
