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

//! Per request options.
//!
//! The client defaults, set in [ClientConfig][crate::client_config::ClientConfig],
//! work for most applications. Some calls need a different configuration, for
//! example a longer polling loop for a large import. The `*Builder` returned
//! by each client method implements the [RequestOptionsBuilder] trait where
//! applications can override the defaults for a single request.

use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_policy::{PollingPolicy, PollingPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters and
/// options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    attempt_timeout: Option<Duration>,
    polling_policy: Option<Arc<dyn PollingPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl RequestOptions {
    /// Sets the per-attempt timeout.
    ///
    /// This limits each RPC, including each `GetOperation` request in a
    /// polling loop. The overall time in a polling loop is set by the polling
    /// policy.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Get the current polling policy override, if any.
    pub fn polling_policy(&self) -> &Option<Arc<dyn PollingPolicy>> {
        &self.polling_policy
    }

    /// Sets the polling policy configuration.
    pub fn set_polling_policy<V: Into<PollingPolicyArg>>(&mut self, v: V) {
        self.polling_policy = Some(v.into().0);
    }

    /// Get the current polling backoff policy override, if any.
    pub fn polling_backoff_policy(&self) -> &Option<Arc<dyn PollingBackoffPolicy>> {
        &self.polling_backoff_policy
    }

    /// Sets the polling backoff policy configuration.
    pub fn set_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(&mut self, v: V) {
        self.polling_backoff_policy = Some(v.into().0);
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The Vision client libraries provide a builder for each RPC. These builders
/// can be used to set the request parameters, e.g., the name of the resource
/// targeted by the RPC, as well as any options affecting the request, such as
/// timeouts or the polling configuration.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the polling policy configuration.
    fn with_polling_policy<V: Into<PollingPolicyArg>>(self, v: V) -> Self;

    /// Sets the polling backoff policy configuration.
    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;
    use crate::client_config::ClientConfig;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// the client libraries.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    /// Fills any option not set in `options` with the client defaults.
    pub fn with_client_defaults(mut options: RequestOptions, config: &ClientConfig) -> RequestOptions {
        if options.polling_policy.is_none() {
            options.polling_policy = config.polling_policy().clone();
        }
        if options.polling_backoff_policy.is_none() {
            options.polling_backoff_policy = config.polling_backoff_policy().clone();
        }
        if options.attempt_timeout.is_none() {
            options.attempt_timeout = *config.attempt_timeout();
        }
        options
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_polling_policy<V: Into<PollingPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_policy(v);
        self
    }

    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_backoff_policy(v);
        self
    }
}
