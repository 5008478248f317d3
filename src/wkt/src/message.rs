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

//! Define traits required of all messages.

/// A trait that must be implemented by all messages.
///
/// Messages sent to and received from the service may be wrapped in
/// [Any][crate::any::Any]. `Any` uses a `@type` field to encode the type
/// name and then validates extraction and insertion against this type.
///
/// # Example
/// ```
/// # use vision_wkt::message::Message;
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Progress { percent: u32 }
///
/// impl Message for Progress {
///     fn typename() -> &'static str {
///         "type.googleapis.com/my.service.v1.Progress"
///     }
/// }
/// assert!(Progress::typename().ends_with(".Progress"));
/// ```
pub trait Message: serde::ser::Serialize + serde::de::DeserializeOwned {
    /// The type URL of this message, e.g.
    /// `type.googleapis.com/google.protobuf.Empty`.
    fn typename() -> &'static str;
}
