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

//! Traits to mock the operations service.
//!
//! Application developers may need to implement the [Operations] trait to
//! mock the transport used by an [OperationHandle][crate::OperationHandle].
//! The client libraries implement it on top of each service stub.

use crate::model::{CancelOperationRequest, GetOperationRequest, Operation};
use gax::Result;
use gax::options::RequestOptions;
use gax::unimplemented::unimplemented_stub;

/// Defines the trait used to query and cancel long-running operations.
///
/// Services gain new RPCs routinely. To avoid breaking applications the trait
/// provides a default implementation of each method. These implementations
/// just panic with an "unimplemented" message.
pub trait Operations: std::fmt::Debug + Send + Sync {
    /// Fetches the latest state of a long-running operation.
    fn get_operation(
        &self,
        _req: GetOperationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Operation>> + Send {
        unimplemented_stub::<Operation>()
    }

    /// Starts asynchronous cancellation on a long-running operation.
    fn cancel_operation(
        &self,
        _req: CancelOperationRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }
}

/// A dyn-compatible version of [Operations].
///
/// The handles store the transport as `Arc<dyn dynamic::Operations>`. Any
/// type implementing [Operations] implements this trait too.
pub mod dynamic {
    use super::*;

    #[async_trait::async_trait]
    pub trait Operations: std::fmt::Debug + Send + Sync {
        async fn get_operation(
            &self,
            req: GetOperationRequest,
            options: RequestOptions,
        ) -> Result<Operation>;

        async fn cancel_operation(
            &self,
            req: CancelOperationRequest,
            options: RequestOptions,
        ) -> Result<()>;
    }

    #[async_trait::async_trait]
    impl<T: super::Operations> Operations for T {
        async fn get_operation(
            &self,
            req: GetOperationRequest,
            options: RequestOptions,
        ) -> Result<Operation> {
            T::get_operation(self, req, options).await
        }

        async fn cancel_operation(
            &self,
            req: CancelOperationRequest,
            options: RequestOptions,
        ) -> Result<()> {
            T::cancel_operation(self, req, options).await
        }
    }
}
