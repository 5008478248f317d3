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

//! An in-memory operations service for the integration tests.

use gax::Result;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::options::RequestOptions;
use lro::model::{CancelOperationRequest, GetOperationRequest, Operation};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use wkt::message::Message;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub display_name: String,
}

impl Message for Product {
    fn typename() -> &'static str {
        "type.googleapis.com/test.v1.Product"
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportMetadata {
    pub processed_count: u32,
}

impl Message for ImportMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/test.v1.ImportMetadata"
    }
}

/// Replays a queue of `GetOperation` responses.
///
/// Once the queue is empty each poll fails with `NOT_FOUND`.
#[derive(Debug, Default)]
pub struct FakeOperations {
    responses: Mutex<VecDeque<Result<Operation>>>,
    delay: Option<Duration>,
    polls: AtomicU32,
    cancels: AtomicU32,
}

impl FakeOperations {
    pub fn new<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Result<Operation>>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            ..Default::default()
        }
    }

    /// Each poll takes `delay` before returning.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn polls(&self) -> u32 {
        self.polls.load(Ordering::SeqCst)
    }

    pub fn cancels(&self) -> u32 {
        self.cancels.load(Ordering::SeqCst)
    }
}

impl lro::stub::Operations for FakeOperations {
    async fn get_operation(
        &self,
        req: GetOperationRequest,
        _options: RequestOptions,
    ) -> Result<Operation> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        let next = self.responses.lock().expect("not poisoned").pop_front();
        next.unwrap_or_else(|| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::NotFound)
                    .set_message(format!("{} not found", req.name)),
            ))
        })
    }

    async fn cancel_operation(
        &self,
        _req: CancelOperationRequest,
        _options: RequestOptions,
    ) -> Result<()> {
        self.cancels.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn in_progress(name: &str, processed_count: u32) -> Operation {
    let metadata = wkt::Any::from_msg(&ImportMetadata { processed_count })
        .expect("metadata should serialize");
    Operation::default().set_name(name).set_metadata(metadata)
}

pub fn succeeded(name: &str, product: &str) -> Operation {
    let response = wkt::Any::from_msg(&Product {
        name: product.to_string(),
        display_name: "test-only".to_string(),
    })
    .expect("response should serialize");
    Operation::default()
        .set_name(name)
        .set_done(true)
        .set_response(response)
}

pub fn failed(name: &str, code: Code, message: &str) -> Operation {
    Operation::default()
        .set_name(name)
        .set_done(true)
        .set_error(Status::default().set_code(code).set_message(message))
}
