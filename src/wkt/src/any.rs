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

use crate::message::Message;

type Map = serde_json::Map<String, serde_json::Value>;

/// `Any` contains an arbitrary serialized protocol buffer message along with a
/// URL that describes the type of the serialized message.
///
/// # JSON
///
/// The JSON representation of an `Any` value uses the regular
/// representation of the deserialized, embedded message, with an
/// additional field `@type` which contains the type URL. Example:
///
/// ```norust
///     {
///       "@type": "type.googleapis.com/google.cloud.vision.v1.BatchOperationMetadata",
///       "state": "PROCESSING",
///       "submitTime": "2025-01-01T00:00:00Z"
///     }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Any(Map);

/// Indicates a problem trying to use an [Any].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AnyError {
    /// Problem serializing an object into an [Any].
    #[error("cannot serialize object into an Any, source={0}")]
    Serialization(#[source] BoxedError),

    /// Problem deserializing an object from an [Any].
    #[error("cannot deserialize from an Any, source={0}")]
    Deserialization(#[source] BoxedError),

    /// Mismatched type, the [Any] does not contain the desired type.
    #[error("expected type mismatch in Any deserialization, has={has}, want={want}")]
    TypeMismatch {
        /// The type URL stored in the [Any].
        has: String,
        /// The type URL requested by the caller.
        want: String,
    },
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = AnyError;

impl Any {
    /// Returns the type URL stored in the `@type` field, if any.
    ///
    /// # Example
    /// ```
    /// # use vision_wkt::{Any, Empty};
    /// let any = Any::from_msg(&Empty::default())?;
    /// assert_eq!(any.type_url(), Some("type.googleapis.com/google.protobuf.Empty"));
    /// # Ok::<(), vision_wkt::AnyError>(())
    /// ```
    pub fn type_url(&self) -> Option<&str> {
        self.0.get("@type").and_then(|v| v.as_str())
    }

    /// Creates a new [Any] from any [Message] that serializes to a JSON object.
    ///
    /// # Example
    /// ```
    /// # use vision_wkt::{Any, Empty};
    /// let any = Any::from_msg(&Empty::default())?;
    /// assert!(any.to_msg::<Empty>().is_ok());
    /// # Ok::<(), vision_wkt::AnyError>(())
    /// ```
    pub fn from_msg<T>(message: &T) -> Result<Self, Error>
    where
        T: Message,
    {
        let value = serde_json::to_value(message).map_err(|e| Error::Serialization(e.into()))?;
        let mut map = match value {
            serde_json::Value::Object(map) => map,
            _ => {
                return Err(Error::Serialization(
                    "unexpected JSON type, only objects can be stored in an Any".into(),
                ));
            }
        };
        map.insert(
            "@type".to_string(),
            serde_json::Value::String(T::typename().to_string()),
        );
        Ok(Self(map))
    }

    /// Extracts (if possible) a `T` value from the [Any].
    ///
    /// Fails with [AnyError::TypeMismatch] if the `@type` field does not match
    /// `T::typename()`.
    pub fn to_msg<T>(&self) -> Result<T, Error>
    where
        T: Message,
    {
        let r#type = self.type_url().ok_or_else(|| {
            Error::Deserialization("@type field is missing or is not a string".into())
        })?;
        if r#type != T::typename() {
            return Err(Error::TypeMismatch {
                has: r#type.to_string(),
                want: T::typename().to_string(),
            });
        }
        let mut map = self.0.clone();
        map.remove("@type");
        serde_json::from_value::<T>(serde_json::Value::Object(map))
            .map_err(|e| Error::Deserialization(e.into()))
    }
}

impl serde::ser::Serialize for Any {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for Any {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Map::deserialize(deserializer)?;
        Ok(Any(value))
    }
}
