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

//! Adapts the service stubs to the transport used by long-running operation
//! handles.
//!
//! The `GetOperation` and `CancelOperation` RPCs of each service are mixins,
//! the handles returned by `start()` poll through the same stub that started
//! the operation.

use crate::Result;
use lro::model::{CancelOperationRequest, GetOperationRequest, Operation};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub(crate) struct ProductSearchOperations {
    inner: Arc<dyn crate::stub::dynamic::ProductSearch>,
}

impl ProductSearchOperations {
    pub(crate) fn new(inner: Arc<dyn crate::stub::dynamic::ProductSearch>) -> Self {
        Self { inner }
    }
}

impl lro::stub::Operations for ProductSearchOperations {
    async fn get_operation(
        &self,
        req: GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Operation> {
        self.inner.get_operation(req, options).await
    }

    async fn cancel_operation(
        &self,
        req: CancelOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<()> {
        self.inner.cancel_operation(req, options).await
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ImageAnnotatorOperations {
    inner: Arc<dyn crate::stub::dynamic::ImageAnnotator>,
}

impl ImageAnnotatorOperations {
    pub(crate) fn new(inner: Arc<dyn crate::stub::dynamic::ImageAnnotator>) -> Self {
        Self { inner }
    }
}

impl lro::stub::Operations for ImageAnnotatorOperations {
    async fn get_operation(
        &self,
        req: GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Operation> {
        self.inner.get_operation(req, options).await
    }

    async fn cancel_operation(
        &self,
        req: CancelOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<()> {
        self.inner.cancel_operation(req, options).await
    }
}
