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

//! Types and functions to make long-running operations (LROs) easier to use.
//!
//! Some RPCs in the Vision API, such as importing product sets or annotating
//! a batch of files, start work that outlives the RPC. The service returns an
//! [Operation][model::Operation] which the client polls until the work
//! completes. This crate wraps the operation in a typed
//! [OperationHandle], which decodes the final response and the intermediate
//! metadata, and polls the service with configurable policies.

use gax::Result;
use gax::error::Error;
use std::future::Future;

pub mod model;
pub mod stub;

mod decoder;
pub use decoder::Decoders;
mod handle;
pub use handle::{OperationHandle, OperationState};
mod shared;
pub use shared::SharedOperation;

/// The result of polling a Long-Running Operation (LRO).
///
/// # Parameters
/// * `R` - the response type. This is the type returned when the LRO completes
///   successfully.
/// * `M` - the metadata type. While operations are in progress the LRO may
///   return values of this type.
#[derive(Debug)]
pub enum PollingResult<R, M> {
    /// The operation is still in progress.
    InProgress(Option<M>),
    /// The operation completed. This includes the result.
    ///
    /// The result is also an error if the polling policy stopped the loop.
    Completed(Result<R>),
    /// An error trying to poll the LRO.
    ///
    /// The request to fetch the operation failed, or its metadata could not
    /// be decoded. Polling again makes a new request.
    PollingError(Error),
}

/// The trait implemented by LRO helpers.
///
/// # Parameters
/// * `R` - the response type, that is, the type of response included when the
///   long-running operation completes successfully.
/// * `M` - the metadata type, that is, the type returned by the service when
///   the long-running operation is still in progress.
pub trait Poller<R, M>: Send + sealed::Poller {
    /// Query the current status of the long-running operation.
    ///
    /// The first call reports the snapshot returned by the RPC that started
    /// the operation, without making any requests. Each following call makes
    /// one `GetOperation` request. Returns `None` once a
    /// [Completed][PollingResult::Completed] result was reported.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R, M>>> + Send;

    /// Poll the long-running operation until it completes.
    fn until_done(self) -> impl Future<Output = Result<R>> + Send;

    /// Convert a poller to a [futures::Stream].
    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>>;
}

impl<R, M> Poller<R, M> for OperationHandle<R, M>
where
    R: Send + 'static,
    M: Send + 'static,
{
    async fn poll(&mut self) -> Option<PollingResult<R, M>> {
        self.poll_step().await
    }

    async fn until_done(mut self) -> Result<R> {
        self.wait().await
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> {
        use futures::stream::unfold;
        unfold(self, |mut poller| async move {
            poller.poll().await.map(|pr| (pr, poller))
        })
    }
}

pub(crate) mod sealed {
    pub trait Poller {}
}

impl<R, M> sealed::Poller for OperationHandle<R, M> {}
