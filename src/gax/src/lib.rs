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

//! API helpers for the Vision client libraries.
//!
//! This crate contains the types and functions shared by the Vision client
//! libraries: the error model, per-request options, client configuration, the
//! policies controlling long-running operation polling loops, and helpers to
//! iterate over paginated list RPCs.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client libraries.
pub mod error;

/// Defines some types and traits to convert and use List RPCs as a Stream.
/// Async streams are not yet stable, so neither is the use of this feature.
#[cfg(feature = "unstable-stream")]
pub mod paginator;

pub mod client_config;
pub mod exponential_backoff;
pub mod options;
pub mod polling_backoff_policy;
pub mod polling_policy;
pub mod polling_state;

#[doc(hidden)]
pub mod unimplemented;
