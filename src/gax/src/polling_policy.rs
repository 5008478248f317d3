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

//! Defines the types for polling policies.
//!
//! # Example
//! ```
//! # use vision_gax::polling_policy::*;
//! use std::time::Duration;
//! // Poll for at most 15 minutes or at most 50 attempts: whichever limit is
//! // reached first stops the polling loop.
//! let policy = Unlimited
//!     .with_time_limit(Duration::from_secs(15 * 60))
//!     .with_attempt_limit(50);
//! ```
//!
//! The client libraries automatically poll long-running operations (LROs) and
//! need a mechanism to limit the polling loop duration. Errors while polling
//! are never retried: a failed `GetOperation` request ends the loop. The
//! polling policy only decides if the loop may continue while the operation
//! is still in progress.
//!
//! To configure the default polling policy for a client, use
//! [ClientConfig::set_polling_policy]. To configure the polling policy used
//! for a specific request, use [RequestOptionsBuilder::with_polling_policy].
//!
//! [ClientConfig::set_polling_policy]: crate::client_config::ClientConfig::set_polling_policy
//! [RequestOptionsBuilder::with_polling_policy]: crate::options::RequestOptionsBuilder::with_polling_policy

use crate::error::Error;
use crate::polling_state::PollingState;
use std::sync::Arc;
use std::time::Duration;

/// Determines how long the polling loop may continue.
pub trait PollingPolicy: Send + Sync + std::fmt::Debug {
    /// Called when the LRO is successfully polled, but the LRO is still in
    /// progress.
    ///
    /// Returns an error to stop the polling loop, or `None` to continue.
    ///
    /// # Parameters
    /// * `state` - the loop start time and the number of polling attempts so
    ///   far. The initial request that started the operation is not counted.
    /// * `operation_name` - the name of the operation, used in error messages.
    fn on_in_progress(&self, state: &PollingState, operation_name: &str) -> Option<Error>;

    /// The remaining time in the polling loop, if the policy limits it.
    ///
    /// The polling loop never sleeps past this time.
    fn remaining_time(&self, _state: &PollingState) -> Option<Duration> {
        None
    }
}

/// A helper type to use [PollingPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct PollingPolicyArg(pub(crate) Arc<dyn PollingPolicy>);

impl<T> std::convert::From<T> for PollingPolicyArg
where
    T: PollingPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn PollingPolicy>> for PollingPolicyArg {
    fn from(value: Arc<dyn PollingPolicy>) -> Self {
        Self(value)
    }
}

impl std::convert::From<PollingPolicyArg> for Arc<dyn PollingPolicy> {
    fn from(value: PollingPolicyArg) -> Self {
        value.0
    }
}

/// Extension trait for [PollingPolicy]
pub trait PollingPolicyExt: PollingPolicy + Sized {
    /// Decorate a [PollingPolicy] to limit the total elapsed time in the
    /// polling loop.
    ///
    /// Once the time spent in the polling loop (including time in backoff)
    /// reaches the prescribed duration, `on_in_progress()` returns a
    /// [timeout][Error::is_timeout] error.
    ///
    /// # Example
    /// ```
    /// # use vision_gax::polling_policy::*;
    /// # use vision_gax::polling_state::PollingState;
    /// use std::time::Duration;
    /// let policy = Unlimited.with_time_limit(Duration::from_secs(10));
    /// let state = PollingState::default();
    /// assert!(policy.on_in_progress(&state, "op-1").is_none());
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [PollingPolicy] to limit the number of poll attempts.
    ///
    /// Once `attempt_count >= maximum_attempts`, `on_in_progress()` returns
    /// an [exhausted][Error::is_exhausted] error.
    ///
    /// # Example
    /// ```
    /// # use vision_gax::polling_policy::*;
    /// # use vision_gax::polling_state::PollingState;
    /// let policy = Unlimited.with_attempt_limit(3);
    /// let state = PollingState::default().set_attempt_count(2_u32);
    /// assert!(policy.on_in_progress(&state, "op-1").is_none());
    /// let state = PollingState::default().set_attempt_count(3_u32);
    /// assert!(policy.on_in_progress(&state, "op-1").is_some());
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: PollingPolicy> PollingPolicyExt for T {}

/// A polling policy that never stops the loop.
///
/// This is the default. An operation that never completes is polled until
/// the application drops the future awaiting it.
#[derive(Clone, Debug, Default)]
pub struct Unlimited;

impl PollingPolicy for Unlimited {
    fn on_in_progress(&self, _state: &PollingState, _operation_name: &str) -> Option<Error> {
        None
    }
}

/// A polling policy decorator that limits the total time in the polling loop.
///
/// # Parameters
/// * `P` - the inner polling policy, defaults to [Unlimited].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = Unlimited>
where
    P: PollingPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: Unlimited,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: PollingPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn in_progress_impl(&self, state: &PollingState, operation_name: &str) -> Option<Error> {
        let elapsed = state.elapsed();
        if elapsed < self.maximum_duration {
            return None;
        }
        Some(Error::timeout(LimitExceeded::new(
            operation_name,
            "elapsed time",
            format!("{elapsed:?}"),
            format!("{:?}", self.maximum_duration),
        )))
    }
}

impl<P> PollingPolicy for LimitedElapsedTime<P>
where
    P: PollingPolicy,
{
    fn on_in_progress(&self, state: &PollingState, operation_name: &str) -> Option<Error> {
        self.inner
            .on_in_progress(state, operation_name)
            .or_else(|| self.in_progress_impl(state, operation_name))
    }

    fn remaining_time(&self, state: &PollingState) -> Option<Duration> {
        let remaining = self.maximum_duration.saturating_sub(state.elapsed());
        match self.inner.remaining_time(state) {
            Some(inner) => Some(std::cmp::min(inner, remaining)),
            None => Some(remaining),
        }
    }
}

/// A polling policy decorator that limits the number of attempts.
///
/// Setting the maximum number of attempts to 0 stops the loop the first time
/// the operation is found in progress.
///
/// # Parameters
/// * `P` - the inner polling policy, defaults to [Unlimited].
#[derive(Debug)]
pub struct LimitedAttemptCount<P = Unlimited>
where
    P: PollingPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: Unlimited,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: PollingPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }

    fn in_progress_impl(&self, count: u32, operation_name: &str) -> Option<Error> {
        if count < self.maximum_attempts {
            return None;
        }
        Some(Error::exhausted(LimitExceeded::new(
            operation_name,
            "attempt count",
            count.to_string(),
            self.maximum_attempts.to_string(),
        )))
    }
}

impl<P> PollingPolicy for LimitedAttemptCount<P>
where
    P: PollingPolicy,
{
    fn on_in_progress(&self, state: &PollingState, operation_name: &str) -> Option<Error> {
        self.inner
            .on_in_progress(state, operation_name)
            .or_else(|| self.in_progress_impl(state.attempt_count, operation_name))
    }

    fn remaining_time(&self, state: &PollingState) -> Option<Duration> {
        self.inner.remaining_time(state)
    }
}

/// Indicates that a polling loop reached one of its limits.
#[derive(Debug, thiserror::Error)]
#[error(
    "polling loop for {operation_name} stopped, {limit_name} value ({value}) reached limit ({limit})"
)]
pub struct LimitExceeded {
    operation_name: String,
    limit_name: &'static str,
    value: String,
    limit: String,
}

impl LimitExceeded {
    pub fn new(
        operation_name: &str,
        limit_name: &'static str,
        value: String,
        limit: String,
    ) -> Self {
        Self {
            operation_name: operation_name.to_string(),
            limit_name,
            value,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use tokio::time::Instant;

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl PollingPolicy for Policy {
            fn on_in_progress(&self, state: &PollingState, operation_name: &str) -> Option<Error>;
            fn remaining_time(&self, state: &PollingState) -> Option<Duration>;
        }
    }

    // Verify `PollingPolicyArg` can be converted from the desired types.
    #[test]
    fn polling_policy_arg() {
        let policy = LimitedAttemptCount::new(3);
        let _ = PollingPolicyArg::from(policy);

        let policy: Arc<dyn PollingPolicy> = Arc::new(LimitedAttemptCount::new(3));
        let arg = PollingPolicyArg::from(policy);
        let _: Arc<dyn PollingPolicy> = arg.into();
    }

    #[tokio::test(start_paused = true)]
    async fn unlimited() {
        let p = Unlimited;
        let state = PollingState::default().set_attempt_count(1_000_000_u32);
        tokio::time::advance(Duration::from_secs(365 * 24 * 3600)).await;
        assert!(p.on_in_progress(&state, "op-1").is_none());
        assert!(p.remaining_time(&state).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn limited_elapsed_time() {
        let p = LimitedElapsedTime::new(Duration::from_secs(60));
        let state = PollingState::default();
        assert!(p.on_in_progress(&state, "op-1").is_none());
        assert_eq!(p.remaining_time(&state), Some(Duration::from_secs(60)));

        tokio::time::advance(Duration::from_secs(45)).await;
        assert!(p.on_in_progress(&state, "op-1").is_none());
        assert_eq!(p.remaining_time(&state), Some(Duration::from_secs(15)));

        tokio::time::advance(Duration::from_secs(15)).await;
        let err = p.on_in_progress(&state, "op-1");
        assert!(err.as_ref().is_some_and(Error::is_timeout), "{err:?}");
        assert_eq!(p.remaining_time(&state), Some(Duration::ZERO));

        let err = err.unwrap();
        assert!(err.to_string().contains("op-1"), "{err}");
        let source = err.source().and_then(|e| e.downcast_ref::<LimitExceeded>());
        assert!(source.is_some(), "{err:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn limited_elapsed_time_inner_stops_first() {
        let mut mock = MockPolicy::new();
        mock.expect_on_in_progress()
            .times(1)
            .returning(|_, _| Some(Error::other("inner")));
        mock.expect_remaining_time()
            .times(1)
            .returning(|_| Some(Duration::from_secs(5)));

        let p = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let state = PollingState::default();
        let err = p.on_in_progress(&state, "op-1");
        assert!(err.is_some_and(|e| e.to_string().contains("inner")));
        assert_eq!(p.remaining_time(&state), Some(Duration::from_secs(5)));
    }

    #[tokio::test(start_paused = true)]
    async fn limited_elapsed_time_shorter_than_inner() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_| Some(Duration::from_secs(600)));

        let p = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let state = PollingState::default().set_loop_start(Instant::now());
        assert_eq!(p.remaining_time(&state), Some(Duration::from_secs(60)));
    }

    #[test]
    fn limited_attempt_count() {
        let p = LimitedAttemptCount::new(3);
        for count in 0..3_u32 {
            let state = PollingState::default().set_attempt_count(count);
            assert!(p.on_in_progress(&state, "op-1").is_none(), "{count}");
        }
        let state = PollingState::default().set_attempt_count(3_u32);
        let err = p.on_in_progress(&state, "op-1");
        assert!(err.as_ref().is_some_and(Error::is_exhausted), "{err:?}");
        assert!(p.remaining_time(&state).is_none());
    }

    #[test]
    fn limited_attempt_count_zero() {
        let p = LimitedAttemptCount::new(0);
        let state = PollingState::default();
        let err = p.on_in_progress(&state, "op-1");
        assert!(err.is_some_and(|e| e.is_exhausted()));
    }

    #[test]
    fn limited_attempt_count_inner() {
        let mut mock = MockPolicy::new();
        mock.expect_on_in_progress()
            .times(1)
            .returning(|_, _| Some(Error::other("inner")));
        mock.expect_remaining_time()
            .times(1)
            .returning(|_| Some(Duration::from_secs(7)));

        let p = LimitedAttemptCount::custom(mock, 100);
        let state = PollingState::default();
        let err = p.on_in_progress(&state, "op-1");
        assert!(err.is_some_and(|e| e.to_string().contains("inner")));
        assert_eq!(p.remaining_time(&state), Some(Duration::from_secs(7)));
    }

    #[tokio::test(start_paused = true)]
    async fn composed_limits() {
        let p = Unlimited
            .with_time_limit(Duration::from_secs(10))
            .with_attempt_limit(5);
        let state = PollingState::default().set_attempt_count(2_u32);
        assert!(p.on_in_progress(&state, "op-1").is_none());

        let exhausted = state.clone().set_attempt_count(5_u32);
        let err = p.on_in_progress(&exhausted, "op-1");
        assert!(err.is_some_and(|e| e.is_exhausted()));

        tokio::time::advance(Duration::from_secs(10)).await;
        let err = p.on_in_progress(&state, "op-1");
        assert!(err.is_some_and(|e| e.is_timeout()));
        assert_eq!(p.remaining_time(&state), Some(Duration::ZERO));
    }
}
