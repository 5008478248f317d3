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

use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_policy::{PollingPolicy, PollingPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// Configure a client.
///
/// A client represents a connection to the Vision service. The defaults
/// should work for most applications. But some applications may need to
/// override the polling policies, the per-attempt timeout, or enable tracing.
///
/// # Example
/// ```
/// # use vision_gax::client_config::ClientConfig;
/// # use vision_gax::polling_policy::*;
/// use std::time::Duration;
/// let config = ClientConfig::new()
///     .enable_tracing()
///     .set_polling_policy(Unlimited.with_time_limit(Duration::from_secs(600)));
/// assert!(config.tracing_enabled());
/// assert!(config.polling_policy().is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    tracing: bool,
    attempt_timeout: Option<Duration>,
    polling_policy: Option<Arc<dyn PollingPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

const LOGGING_VAR: &str = "VISION_RUST_LOGGING";

impl ClientConfig {
    /// Returns a default [ClientConfig].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the client should trace each request.
    ///
    /// Tracing is enabled with [enable_tracing][Self::enable_tracing], or by
    /// setting the `VISION_RUST_LOGGING` environment variable to `true`.
    pub fn tracing_enabled(&self) -> bool {
        if self.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    /// Enables tracing.
    pub fn enable_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Disables tracing.
    pub fn disable_tracing(mut self) -> Self {
        self.tracing = false;
        self
    }

    /// Configure the default per-attempt timeout.
    pub fn set_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.attempt_timeout = Some(v.into());
        self
    }

    /// Configure the default polling policy.
    pub fn set_polling_policy<V: Into<PollingPolicyArg>>(mut self, v: V) -> Self {
        self.polling_policy = Some(v.into().0);
        self
    }

    /// Configure the default polling backoff policy.
    pub fn set_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.polling_backoff_policy = Some(v.into().0);
        self
    }

    /// The default per-attempt timeout, if any.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// The default polling policy, if any.
    pub fn polling_policy(&self) -> &Option<Arc<dyn PollingPolicy>> {
        &self.polling_policy
    }

    /// The default polling backoff policy, if any.
    pub fn polling_backoff_policy(&self) -> &Option<Arc<dyn PollingBackoffPolicy>> {
        &self.polling_backoff_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::polling_policy::LimitedElapsedTime;
    use scoped_env::ScopedEnv;
    use serial_test::serial;

    #[test]
    #[serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::new();
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
        let config = ClientConfig::new().enable_tracing();
        assert!(config.tracing_enabled(), "expected tracing to be enabled");
        let config = config.disable_tracing();
        assert!(
            !config.tracing_enabled(),
            "expected tracing to be disabled"
        );

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::new();
        assert!(config.tracing_enabled(), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::new();
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
    }

    #[test]
    fn config_polling() {
        let config = ClientConfig::new();
        assert!(config.polling_policy().is_none(), "{config:?}");
        assert!(config.polling_backoff_policy().is_none(), "{config:?}");
        assert!(config.attempt_timeout().is_none(), "{config:?}");

        let config = ClientConfig::new()
            .set_polling_policy(LimitedElapsedTime::new(Duration::from_secs(60)))
            .set_polling_backoff_policy(ExponentialBackoffBuilder::new().clamp())
            .set_attempt_timeout(Duration::from_secs(10));
        assert!(config.polling_policy().is_some(), "{config:?}");
        assert!(config.polling_backoff_policy().is_some(), "{config:?}");
        assert_eq!(config.attempt_timeout(), &Some(Duration::from_secs(10)));
    }
}
