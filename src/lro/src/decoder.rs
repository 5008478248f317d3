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

use gax::Result;
use gax::error::Error;
use wkt::message::Message;

/// The functions that turn the `Any` payloads of an operation into typed
/// values.
///
/// Each long-running RPC has exactly one pair of decoders: one for the
/// response returned when the operation succeeds, and one for the metadata
/// reported while it is in progress. Decoders are plain functions, they have
/// no side effects and can be applied any number of times.
///
/// # Parameters
/// * `R` - the response type.
/// * `M` - the metadata type.
///
/// # Example
/// ```
/// # use vision_lro::Decoders;
/// use wkt::{Any, Empty};
/// let decoders = Decoders::<Empty, Empty>::new();
/// let any = Any::from_msg(&Empty::default())?;
/// assert_eq!(decoders.decode_response(&any)?, Empty::default());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Decoders<R, M> {
    response: fn(&wkt::Any) -> Result<R>,
    metadata: fn(&wkt::Any) -> Result<M>,
}

impl<R, M> Decoders<R, M>
where
    R: Message,
    M: Message,
{
    /// The decoders for operations returning messages of type `R` and
    /// reporting metadata of type `M`.
    ///
    /// A payload with a different type URL fails to decode.
    pub fn new() -> Self {
        Self {
            response: from_any::<R>,
            metadata: from_any::<M>,
        }
    }
}

impl<R, M> Default for Decoders<R, M>
where
    R: Message,
    M: Message,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R, M> Decoders<R, M> {
    /// Creates decoders from custom functions.
    pub fn custom(
        response: fn(&wkt::Any) -> Result<R>,
        metadata: fn(&wkt::Any) -> Result<M>,
    ) -> Self {
        Self { response, metadata }
    }

    /// Decodes the response of a successful operation.
    pub fn decode_response(&self, payload: &wkt::Any) -> Result<R> {
        (self.response)(payload)
    }

    /// Decodes the metadata of an operation.
    pub fn decode_metadata(&self, payload: &wkt::Any) -> Result<M> {
        (self.metadata)(payload)
    }
}

impl<R, M> Clone for Decoders<R, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, M> Copy for Decoders<R, M> {}

impl<R, M> std::fmt::Debug for Decoders<R, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoders")
            .field("response", &std::any::type_name::<R>())
            .field("metadata", &std::any::type_name::<M>())
            .finish()
    }
}

fn from_any<T: Message>(payload: &wkt::Any) -> Result<T> {
    payload.to_msg::<T>().map_err(Error::deser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    struct Resource {
        name: String,
    }

    impl Message for Resource {
        fn typename() -> &'static str {
            "type.googleapis.com/test.Resource"
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    struct Progress {
        percent: i32,
    }

    impl Message for Progress {
        fn typename() -> &'static str {
            "type.googleapis.com/test.Progress"
        }
    }

    #[test]
    fn decode() -> TestResult {
        let decoders = Decoders::<Resource, Progress>::new();
        let resource = Resource {
            name: "projects/p/locations/l/products/p1".into(),
        };
        let any = wkt::Any::from_msg(&resource)?;
        assert_eq!(decoders.decode_response(&any)?, resource);

        let progress = Progress { percent: 50 };
        let any = wkt::Any::from_msg(&progress)?;
        assert_eq!(decoders.decode_metadata(&any)?, progress);
        Ok(())
    }

    #[test]
    fn decode_is_repeatable() -> TestResult {
        let decoders = Decoders::<Resource, Progress>::default();
        let any = wkt::Any::from_msg(&Progress { percent: 25 })?;
        let first = decoders.decode_metadata(&any)?;
        let second = decoders.decode_metadata(&any)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test_case(wkt::Any::from_msg(&Progress { percent: 1 }).unwrap(); "type mismatch")]
    #[test_case(wkt::Any::from_msg(&wkt::Empty::default()).unwrap(); "empty")]
    #[test_case(wkt::Any::default(); "missing type")]
    fn decode_response_error(any: wkt::Any) {
        let decoders = Decoders::<Resource, Progress>::new();
        let got = decoders.decode_response(&any);
        assert!(
            got.as_ref().is_err_and(|e| e.is_deserialization()),
            "{got:?}"
        );
    }

    #[test]
    fn custom() -> TestResult {
        fn response(_: &wkt::Any) -> Result<String> {
            Ok("custom".to_string())
        }
        fn metadata(_: &wkt::Any) -> Result<()> {
            Err(Error::deser("bad metadata"))
        }
        let decoders = Decoders::custom(response, metadata);
        let copy = decoders;
        let any = wkt::Any::default();
        assert_eq!(copy.decode_response(&any)?, "custom");
        assert!(decoders.decode_metadata(&any).is_err());
        let fmt = format!("{decoders:?}");
        assert!(fmt.contains("String"), "{fmt}");
        Ok(())
    }
}
