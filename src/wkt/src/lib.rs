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

//! Well-known types for the Vision client libraries.
//!
//! Long-running operations carry their metadata and results as
//! `google.protobuf.Any` values. This crate defines [Any], the [Empty]
//! message, the [FieldMask] used by update RPCs, and the
//! [Message][message::Message] trait that ties a Rust type to its protobuf
//! type URL.

mod any;
pub use crate::any::*;
mod empty;
pub use crate::empty::*;
mod field_mask;
pub use crate::field_mask::*;
pub mod message;
