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

use crate::model::{CancelOperationRequest, GetOperationRequest, Operation, operation};
use crate::stub::dynamic;
use crate::{Decoders, PollingResult};
use gax::Result;
use gax::error::Error;
use gax::error::rpc::Code;
use gax::options::RequestOptions;
use gax::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use gax::polling_policy::{PollingPolicy, PollingPolicyArg, Unlimited};
use gax::polling_state::PollingState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// The state of a long-running operation, derived from its last snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationState {
    /// The operation is still running.
    Pending,
    /// The operation completed successfully.
    Succeeded,
    /// The operation completed with an error.
    Failed,
    /// The operation completed with a [Code::Cancelled] error.
    Cancelled,
}

impl OperationState {
    /// Returns true for the states where the service no longer changes the
    /// operation.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl From<&Operation> for OperationState {
    fn from(value: &Operation) -> Self {
        if !value.done {
            return Self::Pending;
        }
        match value.error() {
            Some(status) if status.code == Code::Cancelled => Self::Cancelled,
            Some(_) => Self::Failed,
            None => Self::Succeeded,
        }
    }
}

type MetadataObserver<M> = Arc<dyn Fn(&M) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Progress {
    // The initial snapshot has not been examined.
    Initial,
    Polling,
    // The last snapshot is terminal.
    Done,
}

// Why a `GetOperation` request did not produce a snapshot.
#[derive(Debug)]
enum Fetch {
    // The polling policy ran out of time while the request was in flight.
    OutOfTime(Error),
    Failed(Error),
}

impl From<Fetch> for Error {
    fn from(value: Fetch) -> Self {
        match value {
            Fetch::OutOfTime(e) | Fetch::Failed(e) => e,
        }
    }
}

/// A typed handle to a long-running operation.
///
/// The handle wraps the last observed [Operation] snapshot, the decoders for
/// its payloads, and the transport used to poll it. The client libraries
/// create a handle when a long-running RPC starts. Applications can then:
///
/// * [wait][OperationHandle::wait] until the operation completes, or
/// * [refresh][OperationHandle::refresh] the snapshot on their own schedule,
/// * [cancel][OperationHandle::cancel] the operation,
/// * use the handle as a [Poller][crate::Poller].
///
/// Polling is resumable: if `wait()` returns an error because a poll failed,
/// calling `wait()` again continues from the last snapshot. Dropping the
/// future returned by `wait()` stops the local polling loop, the operation
/// continues in the service.
///
/// # Parameters
/// * `R` - the response type, returned when the operation succeeds.
/// * `M` - the metadata type, reported while the operation is in progress.
///
/// # Example
/// ```
/// # use vision_lro::{OperationHandle, Decoders, model::Operation};
/// # async fn sample(stub: std::sync::Arc<dyn vision_lro::stub::dynamic::Operations>) -> gax::Result<()> {
/// let initial = Operation::default().set_name("op-1");
/// let mut handle = OperationHandle::new(initial, stub, Decoders::<wkt::Empty, wkt::Empty>::new())
///     .with_metadata_observer(|m: &wkt::Empty| println!("progress {m:?}"));
/// let response = handle.wait().await?;
/// println!("done {response:?}");
/// # Ok(()) }
/// ```
pub struct OperationHandle<R, M> {
    snapshot: Operation,
    decoders: Decoders<R, M>,
    stub: Arc<dyn dynamic::Operations>,
    options: RequestOptions,
    polling_policy: Arc<dyn PollingPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    polling_state: PollingState,
    observer: Option<MetadataObserver<M>>,
    publisher: Option<watch::Sender<Operation>>,
    progress: Progress,
    reported: bool,
}

impl<R, M> OperationHandle<R, M> {
    /// Creates a handle from the snapshot returned by the RPC that started
    /// the operation.
    ///
    /// The handle polls until the operation completes, waiting between polls
    /// with [ExponentialBackoff][gax::exponential_backoff::ExponentialBackoff].
    pub fn new(
        initial: Operation,
        stub: Arc<dyn dynamic::Operations>,
        decoders: Decoders<R, M>,
    ) -> Self {
        Self {
            snapshot: initial,
            decoders,
            stub,
            options: RequestOptions::default(),
            polling_policy: Arc::new(Unlimited),
            backoff_policy: Arc::new(gax::exponential_backoff::ExponentialBackoff::default()),
            polling_state: PollingState::default(),
            observer: None,
            publisher: None,
            progress: Progress::Initial,
            reported: false,
        }
    }

    /// Sets the options for each `GetOperation` and `CancelOperation` request.
    ///
    /// Any polling policy or polling backoff policy in `options` replaces
    /// the policies in the handle.
    pub fn with_request_options(mut self, options: RequestOptions) -> Self {
        if let Some(p) = options.polling_policy() {
            self.polling_policy = p.clone();
        }
        if let Some(p) = options.polling_backoff_policy() {
            self.backoff_policy = p.clone();
        }
        self.options = options;
        self
    }

    /// Sets the polling policy, which limits how long [wait][Self::wait] polls.
    pub fn with_polling_policy<V: Into<PollingPolicyArg>>(mut self, v: V) -> Self {
        let arg: PollingPolicyArg = v.into();
        self.polling_policy = arg.into();
        self
    }

    /// Sets the polling backoff policy, which controls the period between
    /// polls.
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        let arg: PollingBackoffPolicyArg = v.into();
        self.backoff_policy = arg.into();
        self
    }

    /// Registers a function called with the decoded metadata of each poll.
    ///
    /// The observer runs once per `GetOperation` response that carries
    /// metadata. The metadata in the initial snapshot is available via
    /// [metadata][Self::metadata].
    pub fn with_metadata_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&M) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// The name of the operation.
    pub fn name(&self) -> &str {
        &self.snapshot.name
    }

    /// The last observed snapshot.
    pub fn snapshot(&self) -> &Operation {
        &self.snapshot
    }

    /// The state of the last observed snapshot.
    pub fn state(&self) -> OperationState {
        OperationState::from(&self.snapshot)
    }

    /// The number of `GetOperation` requests made by this handle.
    pub fn attempt_count(&self) -> u32 {
        self.polling_state.attempt_count
    }

    /// Decodes the metadata in the last observed snapshot, if any.
    pub fn metadata(&self) -> Result<Option<M>> {
        self.snapshot
            .metadata
            .as_ref()
            .map(|m| self.decoders.decode_metadata(m))
            .transpose()
    }

    /// Fetches the latest snapshot of the operation.
    ///
    /// This makes exactly one `GetOperation` request, using the stored
    /// operation name. Errors from the transport are returned unchanged, the
    /// request is not retried. The request is made even if the operation is
    /// already complete. The request is bounded by the attempt timeout in the
    /// request options and by the time left in the polling policy.
    ///
    /// If the snapshot includes metadata it is decoded and delivered to the
    /// metadata observer. A metadata decoding error is returned.
    pub async fn refresh(&mut self) -> Result<&Operation> {
        self.fetch().await?;
        Ok(&self.snapshot)
    }

    /// Requests the cancellation of the operation.
    ///
    /// Cancellation is best-effort. The local snapshot does not change, the
    /// next poll reflects the state in the service. Operations that are
    /// successfully cancelled complete with a [Code::Cancelled] error.
    pub async fn cancel(&self) -> Result<()> {
        cancel_operation(self.stub.as_ref(), self.name(), self.options.clone()).await
    }

    /// Waits until the operation completes and returns its decoded response.
    ///
    /// If the initial snapshot is already complete this returns without
    /// making any requests. Otherwise it polls the operation, waiting between
    /// polls as directed by the polling backoff policy.
    ///
    /// Returns an error if:
    /// * the operation completes with an error, see [Error::is_operation],
    /// * a `GetOperation` request fails,
    /// * the polling policy stops the loop, see [Error::is_timeout] and
    ///   [Error::is_exhausted]. A time limit also bounds the `GetOperation`
    ///   request in flight,
    /// * the response or metadata cannot be decoded.
    ///
    /// Calling `wait()` again after an error resumes polling. Calling it after
    /// the operation completed returns the same outcome without any requests.
    pub async fn wait(&mut self) -> Result<R> {
        loop {
            match self.step().await {
                PollingResult::Completed(r) => return r,
                PollingResult::PollingError(e) => return Err(e),
                PollingResult::InProgress(_) => {}
            }
            let period = self.wait_period();
            tokio::time::sleep(period).await;
        }
    }

    /// Wraps the handle so it can be awaited from multiple tasks.
    pub fn into_shared(self) -> crate::SharedOperation<R, M> {
        crate::SharedOperation::new(self)
    }

    pub(crate) fn set_publisher(&mut self, publisher: watch::Sender<Operation>) {
        self.publisher = Some(publisher);
    }

    pub(crate) fn stub(&self) -> Arc<dyn dynamic::Operations> {
        self.stub.clone()
    }

    pub(crate) fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Advances the polling loop by one step.
    ///
    /// The first step examines the initial snapshot. Each following step
    /// makes one `GetOperation` request, until the operation completes.
    pub(crate) async fn step(&mut self) -> PollingResult<R, M> {
        match self.progress {
            Progress::Done => return PollingResult::Completed(self.decode_result()),
            Progress::Initial => self.progress = Progress::Polling,
            Progress::Polling if self.snapshot.done => {}
            Progress::Polling => match self.fetch().await {
                Ok(()) => {}
                Err(Fetch::OutOfTime(e)) => return PollingResult::Completed(Err(e)),
                Err(Fetch::Failed(e)) => return PollingResult::PollingError(e),
            },
        }
        if self.snapshot.done {
            self.progress = Progress::Done;
            tracing::debug!(
                operation = %self.snapshot.name,
                attempts = self.polling_state.attempt_count,
                state = ?self.state(),
                "long-running operation completed"
            );
            return PollingResult::Completed(self.decode_result());
        }
        let metadata = match self.metadata() {
            Ok(m) => m,
            Err(e) => return PollingResult::PollingError(e),
        };
        if let Some(e) = self
            .polling_policy
            .on_in_progress(&self.polling_state, &self.snapshot.name)
        {
            return PollingResult::Completed(Err(e));
        }
        PollingResult::InProgress(metadata)
    }

    /// The step reported by [Poller::poll][crate::Poller::poll].
    pub(crate) async fn poll_step(&mut self) -> Option<PollingResult<R, M>> {
        if self.reported {
            return None;
        }
        let result = self.step().await;
        if matches!(result, PollingResult::Completed(_)) {
            self.reported = true;
        }
        Some(result)
    }

    fn wait_period(&self) -> Duration {
        let period = self.backoff_policy.wait_period(&self.polling_state);
        match self.polling_policy.remaining_time(&self.polling_state) {
            Some(remaining) => std::cmp::min(period, remaining),
            None => period,
        }
    }

    // The deadline for the next `GetOperation` request, and whether it is set
    // by the polling policy rather than the attempt timeout.
    fn request_deadline(&self) -> Option<(Duration, bool)> {
        let attempt = *self.options.attempt_timeout();
        let remaining = self.polling_policy.remaining_time(&self.polling_state);
        match (attempt, remaining) {
            (Some(a), Some(r)) if r <= a => Some((r, true)),
            (Some(a), _) => Some((a, false)),
            (None, Some(r)) => Some((r, true)),
            (None, None) => None,
        }
    }

    async fn fetch(&mut self) -> std::result::Result<(), Fetch> {
        self.polling_state.attempt_count = self.polling_state.attempt_count.saturating_add(1);
        tracing::debug!(
            operation = %self.snapshot.name,
            attempt = self.polling_state.attempt_count,
            "polling long-running operation"
        );
        let request = GetOperationRequest::default().set_name(&self.snapshot.name);
        let pending = self.stub.get_operation(request, self.options.clone());
        let latest = match self.request_deadline() {
            None => pending.await,
            Some((deadline, from_policy)) => match tokio::time::timeout(deadline, pending).await {
                Ok(r) => r,
                Err(elapsed) if from_policy => {
                    let e = self
                        .polling_policy
                        .on_in_progress(&self.polling_state, &self.snapshot.name)
                        .unwrap_or_else(|| Error::timeout(elapsed));
                    return Err(Fetch::OutOfTime(e));
                }
                Err(elapsed) => Err(Error::timeout(elapsed)),
            },
        }
        .map_err(Fetch::Failed)?;
        self.snapshot = latest;
        if let Some(publisher) = &self.publisher {
            publisher.send_replace(self.snapshot.clone());
        }
        if let Some(m) = self.metadata().map_err(Fetch::Failed)? {
            if let Some(observer) = &self.observer {
                observer(&m);
            }
        }
        Ok(())
    }

    fn decode_result(&self) -> Result<R> {
        match &self.snapshot.result {
            Some(operation::Result::Response(any)) => self.decoders.decode_response(any),
            Some(operation::Result::Error(status)) => Err(Error::operation(status.as_ref().clone())),
            None => Err(Error::deser(format!(
                "neither result nor error set in completed operation {}",
                self.snapshot.name
            ))),
        }
    }
}

impl<R, M> std::fmt::Debug for OperationHandle<R, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationHandle")
            .field("snapshot", &self.snapshot)
            .field("decoders", &self.decoders)
            .field("options", &self.options)
            .field("polling_policy", &self.polling_policy)
            .field("backoff_policy", &self.backoff_policy)
            .field("polling_state", &self.polling_state)
            .field("progress", &self.progress)
            .finish()
    }
}

pub(crate) async fn cancel_operation(
    stub: &dyn dynamic::Operations,
    name: &str,
    options: RequestOptions,
) -> Result<()> {
    let request = CancelOperationRequest::default().set_name(name);
    tracing::debug!(operation = %name, "cancelling long-running operation");
    stub.cancel_operation(request, options)
        .await
        .inspect_err(|e| tracing::warn!(operation = %name, "cannot cancel operation: {e}"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::Poller;
    use gax::error::rpc::Status;
    use gax::polling_backoff_policy::FixedInterval;
    use gax::polling_policy::{LimitedAttemptCount, LimitedElapsedTime};
    use std::sync::Mutex;
    use test_case::test_case;
    use wkt::message::Message;
    type TestResult = anyhow::Result<()>;

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    pub(crate) struct Resource {
        pub name: String,
    }

    impl Message for Resource {
        fn typename() -> &'static str {
            "type.googleapis.com/test.v1.Resource"
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    pub(crate) struct CreateResourceMetadata {
        pub percent: u32,
    }

    impl Message for CreateResourceMetadata {
        fn typename() -> &'static str {
            "type.googleapis.com/test.v1.CreateResourceMetadata"
        }
    }

    pub(crate) type TestHandle = OperationHandle<Resource, CreateResourceMetadata>;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) Operations {}
        impl crate::stub::Operations for Operations {
            async fn get_operation(&self, req: GetOperationRequest, _options: RequestOptions) -> Result<Operation>;
            async fn cancel_operation(&self, req: CancelOperationRequest, _options: RequestOptions) -> Result<()>;
        }
    }

    pub(crate) fn pending(percent: u32) -> Operation {
        let metadata = wkt::Any::from_msg(&CreateResourceMetadata { percent })
            .expect("metadata should serialize");
        Operation::default()
            .set_name("op-1")
            .set_metadata(metadata)
    }

    pub(crate) fn success(name: &str) -> Operation {
        let response = wkt::Any::from_msg(&Resource {
            name: name.to_string(),
        })
        .expect("response should serialize");
        Operation::default()
            .set_name("op-1")
            .set_done(true)
            .set_response(response)
    }

    pub(crate) fn failure(code: Code) -> Operation {
        Operation::default()
            .set_name("op-1")
            .set_done(true)
            .set_error(Status::default().set_code(code).set_message("test-only"))
    }

    pub(crate) fn new_handle(initial: Operation, mock: MockOperations) -> TestHandle {
        OperationHandle::new(initial, Arc::new(mock), Decoders::new())
            .with_polling_backoff_policy(FixedInterval::new(Duration::from_secs(1)))
    }

    #[test_case(Operation::default(), OperationState::Pending; "pending")]
    #[test_case(success("r"), OperationState::Succeeded; "succeeded")]
    #[test_case(failure(Code::NotFound), OperationState::Failed; "failed")]
    #[test_case(failure(Code::Cancelled), OperationState::Cancelled; "cancelled")]
    fn state_from_snapshot(op: Operation, want: OperationState) {
        let got = OperationState::from(&op);
        assert_eq!(got, want);
        assert_eq!(got.is_terminal(), want != OperationState::Pending);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_done_without_polling() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation().never();
        let mut handle = new_handle(success("r-1"), mock);
        let got = handle.wait().await?;
        assert_eq!(got.name, "r-1");
        assert_eq!(handle.attempt_count(), 0);
        assert_eq!(handle.state(), OperationState::Succeeded);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_polls_until_done() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockOperations::new();
        for percent in [25, 50] {
            mock.expect_get_operation()
                .once()
                .in_sequence(&mut seq)
                .withf(|r, _| r.name == "op-1")
                .returning(move |_, _| Ok(pending(percent)));
        }
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(success("r-1")));

        let start = tokio::time::Instant::now();
        let mut handle = new_handle(pending(0), mock);
        let got = handle.wait().await?;
        assert_eq!(got.name, "r-1");
        assert_eq!(handle.attempt_count(), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(3));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_operation_error() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .once()
            .returning(|_, _| Ok(failure(Code::NotFound)));
        let mut handle = new_handle(pending(0), mock);
        let err = handle.wait().await.unwrap_err();
        assert!(err.is_operation(), "{err:?}");
        assert!(!err.is_cancelled(), "{err:?}");
        let status = err.operation_status().expect("operation errors have a status");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "test-only");
        assert_eq!(handle.state(), OperationState::Failed);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_resumes_after_polling_error() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Err(Error::service(
                    Status::default()
                        .set_code(Code::Unavailable)
                        .set_message("try-again"),
                ))
            });
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(success("r-1")));

        let mut handle = new_handle(pending(0), mock);
        let err = handle.wait().await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
        assert_eq!(handle.state(), OperationState::Pending);

        let got = handle.wait().await?;
        assert_eq!(got.name, "r-1");
        // The outcome is cached, no more requests.
        let got = handle.wait().await?;
        assert_eq!(got.name, "r-1");
        assert_eq!(handle.attempt_count(), 2);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn metadata_observer() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(pending(50)));
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(success("r-1")));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        let mut handle = new_handle(pending(0), mock).with_metadata_observer(
            move |m: &CreateResourceMetadata| {
                captured.lock().expect("not poisoned").push(m.percent)
            },
        );
        assert_eq!(
            handle.metadata()?,
            Some(CreateResourceMetadata { percent: 0 })
        );
        handle.wait().await?;
        assert_eq!(*seen.lock().expect("not poisoned"), vec![50]);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn metadata_decode_error() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation().once().returning(|_, _| {
            let bad = wkt::Any::from_msg(&Resource::default()).expect("serializes");
            Ok(Operation::default().set_name("op-1").set_metadata(bad))
        });
        let mut handle = new_handle(pending(0), mock);
        let err = handle.wait().await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn response_decode_error() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation().never();
        let wrong = wkt::Any::from_msg(&CreateResourceMetadata { percent: 100 })?;
        let initial = Operation::default()
            .set_name("op-1")
            .set_done(true)
            .set_response(wrong);
        let mut handle = new_handle(initial, mock);
        let err = handle.wait().await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn done_without_result() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation().never();
        let initial = Operation::default().set_name("op-1").set_done(true);
        let mut handle = new_handle(initial, mock);
        let err = handle.wait().await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(err.to_string().contains("op-1"), "{err}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn time_limit() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .returning(|_, _| Ok(pending(10)));
        let start = tokio::time::Instant::now();
        let mut handle = new_handle(pending(0), mock)
            .with_polling_backoff_policy(FixedInterval::new(Duration::from_secs(2)))
            .with_polling_policy(LimitedElapsedTime::new(Duration::from_secs(5)));
        let err = handle.wait().await.unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        // Sleeps for 2s, 2s, and then the remaining 1s.
        assert_eq!(start.elapsed(), Duration::from_secs(5));
        assert_eq!(handle.attempt_count(), 3);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn attempt_limit() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .times(3)
            .returning(|_, _| Ok(pending(10)));
        let mut handle =
            new_handle(pending(0), mock).with_polling_policy(LimitedAttemptCount::new(3));
        let err = handle.wait().await.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    // Answers each `GetOperation` request after a delay.
    #[derive(Debug)]
    struct SlowOperations(Duration);

    impl crate::stub::Operations for SlowOperations {
        async fn get_operation(
            &self,
            _req: GetOperationRequest,
            _options: RequestOptions,
        ) -> Result<Operation> {
            tokio::time::sleep(self.0).await;
            Ok(pending(50))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn time_limit_bounds_slow_requests() -> TestResult {
        let start = tokio::time::Instant::now();
        let stub = Arc::new(SlowOperations(Duration::from_secs(100)));
        let mut handle: TestHandle = OperationHandle::new(pending(0), stub, Decoders::new())
            .with_polling_policy(LimitedElapsedTime::new(Duration::from_secs(5)));
        let err = handle.wait().await.unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert_eq!(start.elapsed(), Duration::from_secs(5));
        assert_eq!(handle.attempt_count(), 1);
        // The handle reports the outcome as final.
        assert!(matches!(handle.step().await, PollingResult::Completed(Err(_))));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn attempt_timeout_within_time_limit() -> TestResult {
        let start = tokio::time::Instant::now();
        let stub = Arc::new(SlowOperations(Duration::from_secs(100)));
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_secs(2));
        let mut handle: TestHandle = OperationHandle::new(pending(0), stub, Decoders::new())
            .with_request_options(options)
            .with_polling_policy(LimitedElapsedTime::new(Duration::from_secs(60)));
        let err = handle.wait().await.unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert_eq!(start.elapsed(), Duration::from_secs(2));
        // A slow attempt is a polling error, the loop can resume.
        assert!(matches!(handle.step().await, PollingResult::PollingError(_)));
        assert_eq!(start.elapsed(), Duration::from_secs(4));
        assert_eq!(handle.attempt_count(), 2);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn request_options_policies() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .times(2)
            .returning(|_, _| Ok(pending(10)));
        let mut options = RequestOptions::default();
        options.set_polling_policy(LimitedAttemptCount::new(2));
        let mut handle = new_handle(pending(0), mock).with_request_options(options);
        let err = handle.wait().await.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_after_done() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .once()
            .withf(|r, _| r.name == "op-1")
            .returning(|_, _| Ok(success("r-2")));
        let mut handle = new_handle(success("r-1"), mock);
        let got = handle.refresh().await?;
        assert!(got.done);
        let want = wkt::Any::from_msg(&Resource {
            name: "r-2".to_string(),
        })?;
        assert_eq!(got.response(), Some(&want));
        assert_eq!(handle.attempt_count(), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_error() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation().once().returning(|_, _| {
            Err(Error::service(
                Status::default().set_code(Code::PermissionDenied),
            ))
        });
        let mut handle = new_handle(pending(0), mock);
        let err = handle.refresh().await.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
        assert_eq!(handle.snapshot(), &pending(0));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn cancel() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_cancel_operation()
            .once()
            .withf(|r, _| r.name == "op-1")
            .returning(|_, _| Ok(()));
        mock.expect_get_operation().never();
        let handle = new_handle(pending(0), mock);
        handle.cancel().await?;
        assert_eq!(handle.state(), OperationState::Pending);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_error() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_cancel_operation().once().returning(|_, _| {
            Err(Error::service(
                Status::default().set_code(Code::FailedPrecondition),
            ))
        });
        let handle = new_handle(pending(0), mock);
        let err = handle.cancel().await.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::FailedPrecondition));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn poller() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .once()
            .returning(|_, _| Ok(success("r-1")));
        let mut handle = new_handle(pending(10), mock);

        let p = handle.poll().await;
        assert!(
            matches!(&p, Some(PollingResult::InProgress(Some(m))) if m.percent == 10),
            "{p:?}"
        );
        let p = handle.poll().await;
        assert!(
            matches!(&p, Some(PollingResult::Completed(Ok(r))) if r.name == "r-1"),
            "{p:?}"
        );
        let p = handle.poll().await;
        assert!(p.is_none(), "{p:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn poller_until_done() -> TestResult {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .once()
            .returning(|_, _| Ok(success("r-1")));
        let handle = new_handle(pending(10), mock);
        let got = handle.until_done().await?;
        assert_eq!(got.name, "r-1");
        Ok(())
    }

    #[cfg(feature = "unstable-stream")]
    #[tokio::test(start_paused = true)]
    async fn poller_stream() -> TestResult {
        use futures::StreamExt;
        let mut seq = mockall::Sequence::new();
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(pending(50)));
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(success("r-1")));
        let handle = new_handle(pending(10), mock);
        let results = handle.into_stream().collect::<Vec<_>>().await;
        assert_eq!(results.len(), 3, "{results:?}");
        assert!(
            matches!(&results[1], PollingResult::InProgress(Some(m)) if m.percent == 50),
            "{results:?}"
        );
        assert!(
            matches!(&results[2], PollingResult::Completed(Ok(_))),
            "{results:?}"
        );
        Ok(())
    }
}
