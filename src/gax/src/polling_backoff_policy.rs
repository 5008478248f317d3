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

//! Defines the trait for polling backoff policies and common implementations.
//!
//! The client libraries poll long-running operations (LROs) until completion.
//! Between polls they back off to avoid overloading the service. Polling
//! backoff policies do not use jitter, the wait periods are deterministic.
//!
//! The most common implementation is truncated [exponential backoff]. The
//! backoff period grows exponentially until some limit is reached. This works
//! well when the expected execution time is not known in advance. Use
//! [FixedInterval] when the service documents a recommended polling period.
//!
//! To configure the default polling backoff policy for a client, use
//! [ClientConfig::set_polling_backoff_policy]. To configure the polling
//! backoff policy used for a specific request, use
//! [RequestOptionsBuilder::with_polling_backoff_policy].
//!
//! [ClientConfig::set_polling_backoff_policy]: crate::client_config::ClientConfig::set_polling_backoff_policy
//! [RequestOptionsBuilder::with_polling_backoff_policy]: crate::options::RequestOptionsBuilder::with_polling_backoff_policy
//!
//! # Example
//! ```
//! # use vision_gax::exponential_backoff::Error;
//! # use vision_gax::exponential_backoff::ExponentialBackoffBuilder;
//! use std::time::Duration;
//!
//! let policy = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_millis(100))
//!     .with_maximum_delay(Duration::from_secs(5))
//!     .with_scaling(4.0)
//!     .build()?;
//! // `policy` implements the `PollingBackoffPolicy` trait.
//! # Ok::<(), Error>(())
//! ```
//!
//! [exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use crate::polling_state::PollingState;
use std::sync::Arc;
use std::time::Duration;

/// Defines the trait implemented by all polling backoff strategies.
pub trait PollingBackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the delay before the next poll.
    ///
    /// The polling loop calls this method before each `GetOperation` request.
    /// `state.attempt_count` is the number of requests made so far, it is zero
    /// before the first poll.
    fn wait_period(&self, state: &PollingState) -> Duration;
}

/// A helper type to use [PollingBackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct PollingBackoffPolicyArg(pub(crate) Arc<dyn PollingBackoffPolicy>);

impl<T: PollingBackoffPolicy + 'static> std::convert::From<T> for PollingBackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn PollingBackoffPolicy>> for PollingBackoffPolicyArg {
    fn from(value: Arc<dyn PollingBackoffPolicy>) -> Self {
        Self(value)
    }
}

impl std::convert::From<PollingBackoffPolicyArg> for Arc<dyn PollingBackoffPolicy> {
    fn from(value: PollingBackoffPolicyArg) -> Self {
        value.0
    }
}

/// Waits the same period between every poll.
///
/// # Example
/// ```
/// # use vision_gax::polling_backoff_policy::*;
/// # use vision_gax::polling_state::PollingState;
/// use std::time::Duration;
/// let policy = FixedInterval::new(Duration::from_secs(5));
/// let state = PollingState::default().set_attempt_count(10_u32);
/// assert_eq!(policy.wait_period(&state), Duration::from_secs(5));
/// ```
#[derive(Clone, Debug)]
pub struct FixedInterval {
    period: Duration,
}

impl FixedInterval {
    /// Creates a policy that always waits `period` between polls.
    pub fn new<T: Into<Duration>>(period: T) -> Self {
        Self {
            period: period.into(),
        }
    }
}

impl PollingBackoffPolicy for FixedInterval {
    fn wait_period(&self, _state: &PollingState) -> Duration {
        self.period
    }
}
