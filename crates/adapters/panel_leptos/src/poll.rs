//! Periodic state polling, opt-in via the `watch` query parameter.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Interval between refreshes.
const POLL_INTERVAL_MS: u32 = 1_000;

/// Whether the query string asks for periodic polling.
///
/// `watch` is a presence-only flag: `?watch`, `?watch=` and `?watch=anything`
/// all count, as does `watch` among other parameters.
#[must_use]
pub fn watch_requested(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair.split('=').next() == Some("watch"))
}

/// Start refreshing the state every second for the lifetime of the page.
///
/// There is deliberately no cancellation path: the loop runs until the page
/// unloads, issuing a new refresh every interval regardless of whether the
/// previous one completed.
pub fn start_polling<F, Fut>(refresh: F)
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()>,
{
    spawn_local(async move {
        loop {
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
            refresh().await;
        }
    });
}
