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

//! Google Cloud Client Libraries for Rust - Cloud Vision API
//!
//! This crate contains the clients for the Cloud Vision API:
//!
//! * [ImageAnnotator](client/struct.ImageAnnotator.html) detects and
//!   annotates the contents of images and files.
//! * [ProductSearch](client/struct.ProductSearch.html) manages the products,
//!   product sets, and reference images used in product search.
//!
//! Several RPCs start [long-running operations]. Their request builders
//! return an [OperationHandle][lro::OperationHandle] from `start()`, the
//! handle polls the operation until it completes, and decodes the response
//! and metadata into the types declared in [long_running].
//!
//! The clients send requests through a [stub] trait object. Applications
//! provide the transport, or a mock in their tests.
//!
//! # Available features
//!
//! * `unstable-stream`: enables the `by_page()` and `by_item()` functions of
//!   list RPCs, and the stream adapters of long-running operations. These
//!   functions depend on the `futures::Stream` trait, which is not yet stable.
//!
//! [long-running operations]: https://google.aip.dev/151

pub mod model;

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod long_running;
pub mod path;
pub mod stub;

mod operations;
mod tracing;
