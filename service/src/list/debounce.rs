//! Debouncing of free text search input.

use std::time::Duration;

use futures::{
    channel::mpsc::{self, UnboundedReceiver, UnboundedSender},
    Stream, StreamExt as _,
};

/// Default quiescence window of a [`Debouncer`].
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(400);

/// Creates a new [`Debouncer`] fed by the returned sender.
#[must_use]
pub fn channel<T>(
    window: Duration,
) -> (UnboundedSender<T>, Debouncer<UnboundedReceiver<T>>) {
    let (tx, rx) = mpsc::unbounded();
    (tx, Debouncer::new(rx, window))
}

/// Delays values of the input [`Stream`] until it stays quiet for the whole
/// window, yielding only the last value of every burst.
///
/// A value still pending when the input closes is yielded right away.
#[derive(Debug)]
pub struct Debouncer<S> {
    /// Input [`Stream`].
    input: S,

    /// Quiescence window.
    window: Duration,

    /// Indicator whether the input [`Stream`] is closed.
    closed: bool,
}

impl<S> Debouncer<S> {
    /// Creates a new [`Debouncer`] over the provided `input`.
    #[must_use]
    pub const fn new(input: S, window: Duration) -> Self {
        Self {
            input,
            window,
            closed: false,
        }
    }
}

impl<S: Stream + Unpin> Debouncer<S> {
    /// Waits for the next settled value.
    ///
    /// [`None`] is returned once the input is closed and drained.
    pub async fn next(&mut self) -> Option<S::Item> {
        if self.closed {
            return None;
        }
        let Some(mut pending) = self.input.next().await else {
            self.closed = true;
            return None;
        };
        loop {
            tokio::select! {
                next = self.input.next() => match next {
                    Some(value) => pending = value,
                    None => {
                        self.closed = true;
                        return Some(pending);
                    }
                },
                () = tokio::time::sleep(self.window) => return Some(pending),
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use tokio::time::{self, Instant};

    use super::channel;

    const WINDOW: Duration = Duration::from_millis(400);

    #[tokio::test(start_paused = true)]
    async fn yields_last_value_after_window() {
        let (tx, mut searches) = channel(WINDOW);
        tx.unbounded_send("a").unwrap();
        tx.unbounded_send("as").unwrap();
        let started = Instant::now();

        assert_eq!(searches.next().await, Some("as"));
        assert!(started.elapsed() >= WINDOW);
    }

    #[tokio::test(start_paused = true)]
    async fn restarts_window_on_each_value() {
        let (tx, mut searches) = channel(WINDOW);

        let typing = async move {
            for text in ["a", "as", "ash", "asha"] {
                tx.unbounded_send(text).unwrap();
                time::sleep(Duration::from_millis(300)).await;
            }
            time::sleep(Duration::from_secs(1)).await;
        };
        let settled = async {
            let mut settled = vec![];
            while let Some(text) = searches.next().await {
                settled.push((text, Instant::now()));
            }
            settled
        };
        let started = Instant::now();
        let ((), settled) = tokio::join!(typing, settled);

        assert_eq!(settled.len(), 1);
        assert_eq!(settled[0].0, "asha");
        let elapsed = settled[0].1 - started;
        assert!(elapsed >= Duration::from_millis(1300), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1400), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn flushes_pending_value_on_close() {
        let (tx, mut searches) = channel(WINDOW);
        tx.unbounded_send("asha").unwrap();
        drop(tx);
        let started = Instant::now();

        assert_eq!(searches.next().await, Some("asha"));
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(searches.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn closes_without_pending_value() {
        let (tx, mut searches) = channel::<&str>(WINDOW);
        drop(tx);

        assert_eq!(searches.next().await, None);
        assert_eq!(searches.next().await, None);
    }
}
