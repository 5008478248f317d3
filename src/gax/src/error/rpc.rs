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

//! The canonical status model shared by services and long-running operations.

use serde::{Deserialize, Serialize};

/// A logical error reported by the service.
///
/// Services report failed RPCs with a [Status]. Long-running operations that
/// complete with an error carry the same message in their `error` field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message.
    pub message: String,

    /// The name of the status code, such as `NOT_FOUND`, when the service
    /// reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Additional details about the error, as `Any` messages.
    pub details: Vec<wkt::Any>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [status][Status::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets or clears the value for [status][Status::status].
    pub fn set_or_clear_status<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.status = v.map(|v| v.into());
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<wkt::Any>,
    {
        self.details = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// The canonical error codes for APIs.
///
/// Services return the most specific code that applies. For example,
/// `NOT_FOUND` is preferred over `FAILED_PRECONDITION` when both apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Code {
    /// Not an error; returned on success.
    Ok = 0,

    /// The operation was cancelled, typically by the caller.
    Cancelled = 1,

    /// Unknown error.
    #[default]
    Unknown = 2,

    /// The client specified an invalid argument.
    InvalidArgument = 3,

    /// The deadline expired before the operation could complete.
    DeadlineExceeded = 4,

    /// Some requested entity (e.g., a product or product set) was not found.
    NotFound = 5,

    /// The entity that a client attempted to create already exists.
    AlreadyExists = 6,

    /// The caller does not have permission to execute the operation.
    PermissionDenied = 7,

    /// Some resource has been exhausted, perhaps a per-user quota.
    ResourceExhausted = 8,

    /// The system is not in a state required for the operation's execution.
    FailedPrecondition = 9,

    /// The operation was aborted, typically due to a concurrency issue.
    Aborted = 10,

    /// The operation was attempted past the valid range.
    OutOfRange = 11,

    /// The operation is not implemented or not enabled in this service.
    Unimplemented = 12,

    /// Internal errors.
    Internal = 13,

    /// The service is currently unavailable.
    Unavailable = 14,

    /// Unrecoverable data loss or corruption.
    DataLoss = 15,

    /// The request does not have valid authentication credentials.
    Unauthenticated = 16,
}

impl Code {
    pub fn name(&self) -> &str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl std::convert::From<i32> for Code {
    fn from(value: i32) -> Self {
        match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            2 => Code::Unknown,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => Code::default(),
        }
    }
}

impl std::convert::From<Code> for i32 {
    fn from(value: Code) -> i32 {
        value as i32
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::convert::TryFrom<&str> for Code {
    type Error = String;
    fn try_from(value: &str) -> std::result::Result<Code, Self::Error> {
        (0..=16)
            .map(Code::from)
            .find(|c| c.name() == value)
            .ok_or_else(|| format!("unknown status code value {value}"))
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Code::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn status_basic_setters() {
        let got = Status::default()
            .set_code(Code::NotFound)
            .set_message("test-message");
        let want = Status {
            code: Code::NotFound,
            message: "test-message".into(),
            ..Default::default()
        };
        assert_eq!(got, want);

        let got = Status::default()
            .set_code(5)
            .set_message("test-message");
        assert_eq!(got, want);
    }

    #[test]
    fn status_details() -> Result<()> {
        let detail = wkt::Any::from_msg(&wkt::Empty::default())?;
        let got = Status::default().set_details([detail.clone()]);
        assert_eq!(got.details, vec![detail]);
        Ok(())
    }

    #[test]
    fn serialize_status() -> Result<()> {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("missing");
        let got = serde_json::to_value(&status)?;
        assert_eq!(
            got,
            json!({"code": 5, "message": "missing", "details": []})
        );
        Ok(())
    }

    #[test]
    fn deserialize_status() -> Result<()> {
        let input = json!({"code": 1, "message": "cancelled by user"});
        let got = serde_json::from_value::<Status>(input)?;
        assert_eq!(got.code, Code::Cancelled);
        assert_eq!(got.message, "cancelled by user");
        assert!(got.details.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn status_name() -> Result<()> {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("missing")
            .set_status(Code::NotFound.name());
        assert_eq!(status.status.as_deref(), Some("NOT_FOUND"));
        let got = serde_json::to_value(&status)?;
        let want = json!({"code": 5, "message": "missing", "status": "NOT_FOUND", "details": []});
        assert_eq!(got, want);
        let roundtrip = serde_json::from_value::<Status>(got)?;
        assert_eq!(roundtrip, status);

        let cleared = status.set_or_clear_status(None::<String>);
        assert_eq!(cleared.status, None);
        Ok(())
    }

    #[test]
    fn deserialize_status_name() -> Result<()> {
        let input = json!({"code": 7, "message": "denied", "status": "PERMISSION_DENIED"});
        let got = serde_json::from_value::<Status>(input)?;
        assert_eq!(got.code, Code::PermissionDenied);
        assert_eq!(got.status.as_deref(), Some("PERMISSION_DENIED"));
        Ok(())
    }

    #[test_case(0, Code::Ok)]
    #[test_case(1, Code::Cancelled)]
    #[test_case(5, Code::NotFound)]
    #[test_case(14, Code::Unavailable)]
    #[test_case(16, Code::Unauthenticated)]
    #[test_case(17, Code::Unknown)]
    #[test_case(-1, Code::Unknown)]
    fn code_from_i32(input: i32, want: Code) {
        assert_eq!(Code::from(input), want);
    }

    #[test_case(Code::Ok)]
    #[test_case(Code::Cancelled)]
    #[test_case(Code::NotFound)]
    #[test_case(Code::DataLoss)]
    #[test_case(Code::Unauthenticated)]
    fn code_names(code: Code) {
        assert_eq!(Code::try_from(code.name()), Ok(code));
        assert_eq!(code.to_string(), code.name());
        assert_eq!(Code::from(i32::from(code)), code);
    }

    #[test]
    fn code_unknown_name() {
        let got = Code::try_from("NOT-A-CODE");
        assert!(got.is_err(), "{got:?}");
    }
}
