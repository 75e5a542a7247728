use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

/// Non-blocking view of a confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The session is still open
    Pending,
    Resolved(bool),
    /// The session ended without resolving
    Abandoned,
}

/// The single-resolution answer of one dialog session.
///
/// Awaiting it yields `Some(value)` when a decision resolved the session, or
/// `None` once the session has closed without resolving. Only `PageLeave`
/// resolves; the canvas types act on their own and never do.
#[derive(Debug)]
pub struct Confirmation {
    receiver: oneshot::Receiver<bool>,
    // Cached once observed, `try_recv` only yields the value once
    settled: Option<Resolution>,
}

impl Confirmation {
    pub(crate) fn channel() -> (oneshot::Sender<bool>, Self) {
        let (sender, receiver) = oneshot::channel();
        (sender, Self { receiver, settled: None })
    }

    /// Check the outcome without waiting
    pub fn try_resolution(&mut self) -> Resolution {
        if let Some(resolution) = self.settled {
            return resolution;
        }
        let resolution = match self.receiver.try_recv() {
            Ok(Some(value)) => Resolution::Resolved(value),
            Ok(None) => return Resolution::Pending,
            Err(oneshot::Canceled) => Resolution::Abandoned,
        };
        self.settled = Some(resolution);
        resolution
    }
}

impl Future for Confirmation {
    type Output = Option<bool>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.settled {
            Some(Resolution::Resolved(value)) => return Poll::Ready(Some(value)),
            Some(Resolution::Abandoned) => return Poll::Ready(None),
            _ => {}
        }
        Pin::new(&mut self.receiver).poll(cx).map(|result| result.ok())
    }
}
