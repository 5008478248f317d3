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

//! Defines the input into polling policy queries.

use tokio::time::Instant;

/// The state of a polling loop.
///
/// While polling a long-running operation the client library queries the
/// polling policy and the polling backoff policy. The client library provides
/// an instance of this type to both.
///
/// The loop uses [tokio::time::Instant] so tests can control the clock with
/// `tokio::time::pause()`.
///
/// This struct may gain new fields in future versions of the client libraries.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct PollingState {
    /// The start time for this polling loop.
    pub loop_start: Instant,

    /// The number of `GetOperation` requests made so far.
    pub attempt_count: u32,
}

impl PollingState {
    /// Update the start time, useful in mocks.
    pub fn set_loop_start<T: Into<Instant>>(mut self, v: T) -> Self {
        self.loop_start = v.into();
        self
    }

    /// Update the attempt count, useful in mocks.
    pub fn set_attempt_count<T: Into<u32>>(mut self, v: T) -> Self {
        self.attempt_count = v.into();
        self
    }

    /// The time elapsed since the loop started.
    pub fn elapsed(&self) -> std::time::Duration {
        Instant::now().saturating_duration_since(self.loop_start)
    }
}

impl std::default::Default for PollingState {
    fn default() -> Self {
        Self {
            loop_start: Instant::now(),
            attempt_count: 0,
        }
    }
}
