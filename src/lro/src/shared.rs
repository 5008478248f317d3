// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::handle::{OperationHandle, OperationState, cancel_operation};
use crate::model::Operation;
use crate::stub::dynamic;
use gax::Result;
use gax::options::RequestOptions;
use std::sync::{Arc, OnceLock};
use tokio::sync::{Mutex, watch};

/// A long-running operation that can be awaited from multiple tasks.
///
/// Clones share a single polling loop. At most one `GetOperation` request is
/// in flight at any time, and every caller of
/// [until_done][SharedOperation::until_done] observes the same outcome. The
/// first outcome is final: if a poll fails, all waiters receive that error.
/// Use [OperationHandle::wait] directly to resume polling after errors.
///
/// Readers of [snapshot][SharedOperation::snapshot] see the last snapshot
/// received by the polling loop, without waiting for it.
///
/// # Example
/// ```
/// # use vision_lro::{OperationHandle, SharedOperation};
/// # async fn sample(handle: OperationHandle<wkt::Empty, wkt::Empty>) -> gax::Result<()> {
/// let shared = handle.into_shared();
/// let waiter = {
///     let shared = shared.clone();
///     tokio::spawn(async move { shared.until_done().await })
/// };
/// let response = shared.until_done().await?;
/// let _ = waiter.await;
/// # Ok(()) }
/// ```
pub struct SharedOperation<R, M> {
    inner: Arc<Inner<R, M>>,
}

struct Inner<R, M> {
    name: String,
    handle: Mutex<OperationHandle<R, M>>,
    outcome: OnceLock<Result<R>>,
    snapshots: watch::Receiver<Operation>,
    stub: Arc<dyn dynamic::Operations>,
    options: RequestOptions,
}

impl<R, M> SharedOperation<R, M> {
    /// Wraps `handle` so it can be shared.
    pub fn new(mut handle: OperationHandle<R, M>) -> Self {
        let (sender, snapshots) = watch::channel(handle.snapshot().clone());
        handle.set_publisher(sender);
        let inner = Inner {
            name: handle.name().to_string(),
            stub: handle.stub(),
            options: handle.options().clone(),
            snapshots,
            outcome: OnceLock::new(),
            handle: Mutex::new(handle),
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// The name of the operation.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The last snapshot received by the polling loop.
    pub fn snapshot(&self) -> Operation {
        self.inner.snapshots.borrow().clone()
    }

    /// The state of the last snapshot received by the polling loop.
    pub fn state(&self) -> OperationState {
        OperationState::from(&*self.inner.snapshots.borrow())
    }

    /// Returns a receiver notified each time the polling loop receives a new
    /// snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Operation> {
        self.inner.snapshots.clone()
    }

    /// Requests the cancellation of the operation.
    ///
    /// This does not wait for the polling loop. Waiters observe the
    /// cancellation once the service reports the operation as complete.
    pub async fn cancel(&self) -> Result<()> {
        cancel_operation(
            self.inner.stub.as_ref(),
            &self.inner.name,
            self.inner.options.clone(),
        )
        .await
    }

    /// Waits until the operation completes, sharing the polling loop with
    /// any other waiters.
    ///
    /// Dropping the returned future releases the polling loop. If no other
    /// waiter picks it up, polling stops. The operation in the service is
    /// not affected.
    pub async fn until_done(&self) -> Result<R>
    where
        R: Clone,
    {
        if let Some(outcome) = self.inner.outcome.get() {
            return outcome.clone();
        }
        let mut handle = self.inner.handle.lock().await;
        if let Some(outcome) = self.inner.outcome.get() {
            return outcome.clone();
        }
        let outcome = handle.wait().await;
        self.inner.outcome.get_or_init(|| outcome).clone()
    }
}

impl<R, M> Clone for SharedOperation<R, M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R, M> std::fmt::Debug for SharedOperation<R, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedOperation")
            .field("name", &self.inner.name)
            .field("snapshot", &*self.inner.snapshots.borrow())
            .field("completed", &self.inner.outcome.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::tests::{MockOperations, new_handle, pending, success};
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;
    type TestResult = anyhow::Result<()>;

    #[tokio::test(start_paused = true)]
    async fn concurrent_waiters_share_polls() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockOperations::new();
        for percent in [25, 50] {
            mock.expect_get_operation()
                .once()
                .in_sequence(&mut seq)
                .returning(move |_, _| Ok(pending(percent)));
        }
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(success("r-1")));

        let shared = new_handle(pending(0), mock).into_shared();
        let other = shared.clone();
        let (a, b) = tokio::join!(shared.until_done(), other.until_done());
        assert_eq!(a?.name, "r-1");
        assert_eq!(b?.name, "r-1");
        assert_eq!(shared.state(), OperationState::Succeeded);
        // Completed operations return the cached outcome.
        assert_eq!(shared.until_done().await?.name, "r-1");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn waiters_spawned_on_runtime() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .once()
            .returning(|_, _| Ok(success("r-1")));
        let shared = new_handle(pending(0), mock).into_shared();
        let tasks = (0..4)
            .map(|_| {
                let shared = shared.clone();
                tokio::spawn(async move { shared.until_done().await })
            })
            .collect::<Vec<_>>();
        for t in tasks {
            let got = t.await??;
            assert_eq!(got.name, "r-1");
        }
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn first_error_is_shared() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation().once().returning(|_, _| {
            Err(Error::service(
                Status::default().set_code(Code::Unavailable),
            ))
        });
        let shared = new_handle(pending(0), mock).into_shared();
        let other = shared.clone();
        let (a, b) = tokio::join!(shared.until_done(), other.until_done());
        let a = a.unwrap_err();
        let b = b.unwrap_err();
        assert_eq!(a.status().map(|s| s.code), Some(Code::Unavailable));
        assert_eq!(b.status().map(|s| s.code), Some(Code::Unavailable));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn snapshots() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .once()
            .returning(|_, _| Ok(success("r-1")));
        let shared = new_handle(pending(0), mock).into_shared();
        assert_eq!(shared.name(), "op-1");
        assert_eq!(shared.snapshot(), pending(0));
        assert_eq!(shared.state(), OperationState::Pending);
        let mut rx = shared.subscribe();

        let reader = tokio::spawn(async move {
            rx.changed().await?;
            let done = rx.borrow_and_update().done;
            Ok::<bool, tokio::sync::watch::error::RecvError>(done)
        });
        shared.until_done().await?;
        assert!(reader.await??);
        assert_eq!(shared.snapshot(), success("r-1"));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn cancel() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_cancel_operation()
            .once()
            .withf(|r, _| r.name == "op-1")
            .returning(|_, _| Ok(()));
        let shared = new_handle(pending(0), mock).into_shared();
        shared.cancel().await?;
        assert_eq!(shared.state(), OperationState::Pending);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_waiter_stops_polling() -> TestResult {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let mut mock = MockOperations::new();
        mock.expect_get_operation().returning(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(pending(10))
        });
        let shared = new_handle(pending(0), mock).into_shared();
        let waited = tokio::time::timeout(Duration::from_millis(5500), shared.until_done()).await;
        assert!(waited.is_err(), "{waited:?}");
        let polls = count.load(Ordering::SeqCst);
        assert_eq!(polls, 5);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), polls);
        Ok(())
    }

    #[test]
    fn debug() {
        let mock = MockOperations::new();
        let shared = new_handle(pending(0), mock).into_shared();
        let got = format!("{shared:?}");
        assert!(got.contains("op-1"), "{got}");
    }
}
