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

//! The messages used to query and cancel long-running operations.

use gax::error::rpc::Status;
use serde::{Deserialize, Serialize};

/// A long-running operation, as reported by the service.
///
/// The service creates the operation when a long-running RPC starts. The
/// client only reads operations, it never mutates them. Once `done` is `true`
/// the operation is terminal and `result` holds the outcome.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "wire::Operation", into = "wire::Operation")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned name, unique within the service.
    pub name: String,

    /// Service-specific progress information.
    pub metadata: Option<wkt::Any>,

    /// If `false`, the operation is still in progress.
    pub done: bool,

    /// The outcome of the operation, only set when `done` is `true`.
    pub result: Option<operation::Result>,
}

impl Operation {
    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metadata][Operation::metadata].
    pub fn set_metadata<T: Into<wkt::Any>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets the value of [done][Operation::done].
    pub fn set_done(mut self, v: bool) -> Self {
        self.done = v;
        self
    }

    /// Sets the value of [result][Operation::result].
    pub fn set_result<T: Into<Option<operation::Result>>>(mut self, v: T) -> Self {
        self.result = v.into();
        self
    }

    /// Sets [result][Operation::result] to a successful response.
    pub fn set_response<T: Into<wkt::Any>>(self, v: T) -> Self {
        self.set_result(operation::Result::Response(Box::new(v.into())))
    }

    /// Sets [result][Operation::result] to an error.
    pub fn set_error<T: Into<Status>>(self, v: T) -> Self {
        self.set_result(operation::Result::Error(Box::new(v.into())))
    }

    /// The response, if the operation completed successfully.
    pub fn response(&self) -> Option<&wkt::Any> {
        match &self.result {
            Some(operation::Result::Response(r)) => Some(r.as_ref()),
            _ => None,
        }
    }

    /// The error, if the operation failed.
    pub fn error(&self) -> Option<&Status> {
        match &self.result {
            Some(operation::Result::Error(e)) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl wkt::message::Message for Operation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.longrunning.Operation"
    }
}

/// Defines additional types related to [Operation].
pub mod operation {
    use super::*;

    /// The outcome of a completed operation.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Result {
        /// The operation failed.
        Error(Box<Status>),
        /// The operation succeeded, the payload holds the typed response.
        Response(Box<wkt::Any>),
    }
}

/// The request message for `GetOperation`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetOperationRequest {
    /// The name of the operation resource.
    pub name: String,
}

impl GetOperationRequest {
    /// Sets the value of [name][GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for `CancelOperation`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelOperationRequest {
    /// The name of the operation resource to be cancelled.
    pub name: String,
}

impl CancelOperationRequest {
    /// Sets the value of [name][CancelOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

mod wire {
    use super::*;

    // The JSON representation has `error` and `response` as sibling fields.
    #[derive(Clone, Debug, Default, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct Operation {
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        metadata: Option<wkt::Any>,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        done: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<Status>,
        #[serde(skip_serializing_if = "Option::is_none")]
        response: Option<wkt::Any>,
    }

    impl TryFrom<Operation> for super::Operation {
        type Error = String;

        fn try_from(value: Operation) -> std::result::Result<Self, Self::Error> {
            let result = match (value.error, value.response) {
                (Some(_), Some(_)) => {
                    return Err(format!(
                        "operation {} has both `error` and `response` fields",
                        value.name
                    ));
                }
                (Some(e), None) => Some(operation::Result::Error(Box::new(e))),
                (None, Some(r)) => Some(operation::Result::Response(Box::new(r))),
                (None, None) => None,
            };
            Ok(Self {
                name: value.name,
                metadata: value.metadata,
                done: value.done,
                result,
            })
        }
    }

    impl From<super::Operation> for Operation {
        fn from(value: super::Operation) -> Self {
            let (error, response) = match value.result {
                Some(operation::Result::Error(e)) => (Some(*e), None),
                Some(operation::Result::Response(r)) => (None, Some(*r)),
                None => (None, None),
            };
            Self {
                name: value.name,
                metadata: value.metadata,
                done: value.done,
                error,
                response,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn setters() -> TestResult {
        let any = wkt::Any::from_msg(&wkt::Empty::default())?;
        let op = Operation::default()
            .set_name("op-1")
            .set_metadata(any.clone())
            .set_done(true)
            .set_response(any.clone());
        assert_eq!(op.name, "op-1");
        assert_eq!(op.metadata.as_ref(), Some(&any));
        assert!(op.done);
        assert_eq!(op.response(), Some(&any));
        assert!(op.error().is_none(), "{op:?}");

        let status = Status::default().set_code(Code::NotFound).set_message("not found");
        let op = op.set_error(status.clone());
        assert_eq!(op.error(), Some(&status));
        assert!(op.response().is_none(), "{op:?}");

        let op = op.set_result(None);
        assert!(op.result.is_none(), "{op:?}");
        Ok(())
    }

    #[test]
    fn deserialize_pending() -> TestResult {
        let input = json!({
            "name": "op-1",
            "metadata": {"@type": "type.googleapis.com/google.protobuf.Empty"},
        });
        let op = serde_json::from_value::<Operation>(input)?;
        assert_eq!(op.name, "op-1");
        assert!(!op.done);
        assert!(op.metadata.is_some(), "{op:?}");
        assert!(op.result.is_none(), "{op:?}");
        Ok(())
    }

    #[test]
    fn deserialize_error() -> TestResult {
        let input = json!({
            "name": "op-2",
            "done": true,
            "error": {"code": 5, "message": "not found"},
        });
        let op = serde_json::from_value::<Operation>(input)?;
        assert!(op.done);
        let error = op.error().expect("error is set");
        assert_eq!(error.code, Code::NotFound);
        assert_eq!(error.message, "not found");
        Ok(())
    }

    #[test]
    fn deserialize_both_error_and_response() {
        let input = json!({
            "name": "op-3",
            "done": true,
            "error": {"code": 5},
            "response": {"@type": "type.googleapis.com/google.protobuf.Empty"},
        });
        let got = serde_json::from_value::<Operation>(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn serialize() -> TestResult {
        let any = wkt::Any::from_msg(&wkt::Empty::default())?;
        let op = Operation::default()
            .set_name("op-1")
            .set_done(true)
            .set_response(any);
        let got = serde_json::to_value(&op)?;
        let want = json!({
            "name": "op-1",
            "done": true,
            "response": {"@type": "type.googleapis.com/google.protobuf.Empty"},
        });
        assert_eq!(got, want);

        let got = serde_json::to_value(Operation::default().set_name("op-2"))?;
        assert_eq!(got, json!({"name": "op-2"}));
        Ok(())
    }

    #[test]
    fn requests() {
        let get = GetOperationRequest::default().set_name("op-1");
        assert_eq!(get.name, "op-1");
        let cancel = CancelOperationRequest::default().set_name("op-1");
        assert_eq!(cancel.name, "op-1");
    }
}
