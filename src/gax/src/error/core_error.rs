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

use super::rpc::{Code, Status};
use std::error::Error as StdError;
use std::sync::Arc;

type BoxError = Box<dyn StdError + Send + Sync>;
type SharedError = Arc<dyn StdError + Send + Sync>;

/// The core error returned by the Vision client libraries.
///
/// Errors come from multiple sources. The service may reject a request, the
/// transport may fail before a response is received, a long-running operation
/// may complete with an error, the polling loop may run out of time or
/// attempts, or a payload may not decode into the expected type.
///
/// Most applications just return the error or log it. Applications that need
/// to interrogate the error can use the predicates on this type, and the
/// [source][std::error::Error::source] for deeper information.
///
/// The type is `Clone`, all the waiters sharing a long-running operation
/// observe the same failure.
///
/// # Example
/// ```
/// use vision_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_operation() => {
///         println!("the operation failed {e}, status={:?}", e.operation_status());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use vision_gax::error::rpc::{Code, Status};
///     # Err(Error::operation(Status::default().set_code(Code::NotFound).set_message("NOT FOUND")))
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<SharedError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use vision_gax::error::Error;
    /// use vision_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// assert!(error.is_transport());
    /// ```
    pub fn service(status: Status) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(status)),
            source: None,
        }
    }

    /// Creates an error for a long-running operation that completed with an
    /// error.
    ///
    /// # Example
    /// ```
    /// use vision_gax::error::Error;
    /// use vision_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::Cancelled).set_message("cancelled");
    /// let error = Error::operation(status.clone());
    /// assert!(error.is_operation());
    /// assert!(error.is_cancelled());
    /// assert_eq!(error.operation_status(), Some(&status));
    /// ```
    pub fn operation(status: Status) -> Self {
        Self {
            kind: ErrorKind::Operation(Box::new(status)),
            source: None,
        }
    }

    /// The long-running operation completed, and the service reports it
    /// failed.
    ///
    /// The request to poll the operation succeeded. The error describes the
    /// outcome of the operation itself, polling again does not change it.
    pub fn is_operation(&self) -> bool {
        matches!(self.kind, ErrorKind::Operation(_))
    }

    /// The long-running operation was cancelled before it completed.
    ///
    /// Services report cancelled operations as completed with an error whose
    /// code is [Code::Cancelled].
    pub fn is_cancelled(&self) -> bool {
        matches!(&self.kind, ErrorKind::Operation(s) if s.code == Code::Cancelled)
    }

    /// The [Status] of a failed long-running operation.
    pub fn operation_status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Operation(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use vision_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Timeout, source)
    }

    /// The operation did not complete before the polling policy expired.
    ///
    /// This is always a client-side generated error. The operation may still
    /// complete in the service, use the operation name to query it later.
    ///
    /// # Troubleshooting
    ///
    /// Some operations, such as importing large product sets, can take many
    /// minutes. Consider increasing the time limit in the polling policy.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted policy.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use vision_gax::error::Error;
    /// let error = Error::exhausted("too many polling attempts");
    /// assert!(error.is_exhausted());
    /// assert!(error.source().is_some());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Exhausted, source)
    }

    /// The polling loop used all the attempts allowed by the polling policy.
    ///
    /// This is always a client-side generated error. Like timeouts, the
    /// operation may still complete in the service.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use vision_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Deserialization, source)
    }

    /// The response, or the payload of an operation, could not be
    /// deserialized.
    ///
    /// # Troubleshooting
    ///
    /// Long-running operations carry their results in a `google.protobuf.Any`.
    /// If the service returns a type the client library does not expect, the
    /// payload cannot be decoded. Upgrading the client library may be the only
    /// possible fix.
    ///
    /// A completed operation with neither a result nor an error is also
    /// reported as a deserialization problem.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Serialization, source)
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. It is never transient.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The [Status] payload associated with a service error.
    ///
    /// # Examples
    /// ```
    /// use vision_gax::error::{Error, rpc::{Code, Status}};
    /// let error = Error::service(Status::default().set_code(Code::NotFound));
    /// if let Some(status) = error.status() {
    ///     if status.code == Code::NotFound {
    ///         println!("cannot find the thing, more details in {:?}", status.details);
    ///     }
    /// }
    /// ```
    ///
    /// Use [operation_status][Error::operation_status] for failed
    /// long-running operations.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Creates an error representing an I/O problem in the transport.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use vision_gax::error::Error;
    /// let error = Error::io("connection reset");
    /// assert!(error.is_io());
    /// assert!(error.is_transport());
    /// ```
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Io, source)
    }

    /// A problem reading or writing to the network.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Creates an error representing a transport problem.
    ///
    /// # Example
    /// ```
    /// use vision_gax::error::Error;
    /// let error = Error::transport("connection refused");
    /// assert!(error.is_transport());
    /// assert!(!error.is_io());
    /// ```
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Transport, source)
    }

    /// The request to the service failed.
    ///
    /// This includes errors returned by the service (see
    /// [status][Error::status]), I/O errors, and any other problem reported
    /// by the transport. The polling loop never retries these errors.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Service(_) | ErrorKind::Io | ErrorKind::Transport
        )
    }

    /// A problem that does not fit any other category.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Other, source)
    }

    fn with_source<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: Some(Arc::from(source.into())),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the operation exceeded the polling deadline {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Io, Some(e)) => write!(f, "cannot read or write to the network {e}"),
            (ErrorKind::Transport, Some(e)) => write!(f, "the transport reports an error: {e}"),
            (ErrorKind::Service(s), _) => write!(
                f,
                "the service reports an error with code {} described as: {}",
                s.code, s.message
            ),
            (ErrorKind::Operation(s), _) => write!(
                f,
                "the operation completed with an error with code {} described as: {}",
                s.code, s.message
            ),
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Clone, Debug)]
enum ErrorKind {
    Serialization,
    Deserialization,
    Timeout,
    Exhausted,
    Io,
    Transport,
    Service(Box<Status>),
    Operation(Box<Status>),
    /// A uncategorized error.
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use test_case::test_case;

    #[derive(Debug, thiserror::Error)]
    #[error("simulated problem {0}")]
    struct Simulated(u32);

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("NOT FOUND");
        let error = Error::service(status.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_operation(), "{error:?}");
        assert!(error.operation_status().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains(Code::NotFound.name()), "{error}");
    }

    #[test]
    fn operation() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("product set not found");
        let error = Error::operation(status.clone());
        assert!(error.is_operation(), "{error:?}");
        assert!(!error.is_cancelled(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert_eq!(error.operation_status(), Some(&status));
        assert!(error.status().is_none(), "{error:?}");
        assert!(
            error.to_string().contains("product set not found"),
            "{error}"
        );
    }

    #[test]
    fn cancelled() {
        let status = Status::default().set_code(Code::Cancelled);
        let error = Error::operation(status);
        assert!(error.is_operation(), "{error:?}");
        assert!(error.is_cancelled(), "{error:?}");

        let error = Error::service(Status::default().set_code(Code::Cancelled));
        assert!(!error.is_cancelled(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(Simulated(1));
        assert!(error.is_timeout(), "{error:?}");
        let got = error.source().and_then(|e| e.downcast_ref::<Simulated>());
        assert!(matches!(got, Some(Simulated(1))), "{error:?}");
        assert!(error.to_string().contains(&Simulated(1).to_string()), "{error}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn exhausted() {
        let error = Error::exhausted(Simulated(2));
        assert!(error.is_exhausted(), "{error:?}");
        let got = error.source().and_then(|e| e.downcast_ref::<Simulated>());
        assert!(matches!(got, Some(Simulated(2))), "{error:?}");
        assert!(error.to_string().contains(&Simulated(2).to_string()), "{error}");
        assert!(!error.is_timeout(), "{error:?}");
    }

    #[test]
    fn deserialization() {
        let error = Error::deser(Simulated(3));
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains(&Simulated(3).to_string()), "{error}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser(Simulated(4));
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("serialize"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io(Simulated(5));
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.to_string().contains(&Simulated(5).to_string()), "{error}");
    }

    #[test]
    fn transport() {
        let error = Error::transport(Simulated(6));
        assert!(!error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains(&Simulated(6).to_string()), "{error}");
    }

    #[test]
    fn other() {
        let error = Error::other(Simulated(7));
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("unclassified"), "{error}");
    }

    #[test_case(Error::timeout("t"))]
    #[test_case(Error::exhausted("e"))]
    #[test_case(Error::transport("x"))]
    #[test_case(Error::operation(Status::default().set_code(Code::Aborted)))]
    fn clone_preserves_kind_and_source(error: Error) {
        let clone = error.clone();
        assert_eq!(clone.to_string(), error.to_string());
        assert_eq!(clone.is_timeout(), error.is_timeout());
        assert_eq!(clone.is_exhausted(), error.is_exhausted());
        assert_eq!(clone.is_transport(), error.is_transport());
        assert_eq!(clone.operation_status(), error.operation_status());
        assert_eq!(clone.source().is_some(), error.source().is_some());
    }
}
