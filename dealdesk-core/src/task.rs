use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Abstraction over a handle that can be queried for completion and aborted.
pub trait Abortable {
    /// Abort the underlying task if it is still running.
    fn abort(&mut self);
    /// Return `true` if the underlying task has completed.
    fn is_finished(&self) -> bool;
}

impl Abortable for JoinHandle<()> {
    fn abort(&mut self) {
        // JoinHandle::abort takes &self
        Self::abort(self);
    }

    fn is_finished(&self) -> bool {
        Self::is_finished(self)
    }
}

/// Abstraction over a cooperative stop signal.
pub trait Cancellable {
    /// Ask the owning task to wind down.
    fn cancel(&self);
}

impl Cancellable for CancellationToken {
    fn cancel(&self) {
        Self::cancel(self);
    }
}

/// Drop-time logic for task handles:
/// - fire the stop signal
/// - abort the task if it hasn't finished yet
pub fn drop_impl<H, S>(inner: &mut Option<H>, stop: &S)
where
    H: Abortable,
    S: Cancellable,
{
    stop.cancel();
    if let Some(mut h) = inner.take()
        && !h.is_finished()
    {
        h.abort();
    }
}

/// Owned handle to a spawned background loop.
///
/// Dropping the handle cancels the loop's token and aborts the task; call
/// [`TaskHandle::stop`] to wait for a clean exit instead.
#[derive(Debug)]
pub struct TaskHandle {
    inner: Option<JoinHandle<()>>,
    token: CancellationToken,
}

impl TaskHandle {
    /// Wrap a spawned task together with the token it watches.
    #[must_use]
    pub const fn new(inner: JoinHandle<()>, token: CancellationToken) -> Self {
        Self {
            inner: Some(inner),
            token,
        }
    }

    /// Spawn `f(token)` on the current runtime and return its handle.
    pub fn spawn<F, Fut>(token: CancellationToken, f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let join = tokio::spawn(f(token.clone()));
        Self::new(join, token)
    }

    /// True once the task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Cancel the task and wait for it to exit.
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(h) = self.inner.take() {
            let _ = h.await;
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        drop_impl(&mut self.inner, &self.token);
    }
}
