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

//! Helpers to format and parse resource names.
//!
//! Resource names in this service follow the usual hierarchical pattern:
//!
//! * `projects/{project}/locations/{location}`
//! * `projects/{project}/locations/{location}/products/{product}`
//! * `projects/{project}/locations/{location}/productSets/{product_set}`
//! * `projects/{project}/locations/{location}/products/{product}/referenceImages/{reference_image}`
//!
//! The formatting functions do not validate their arguments.

/// A resource name that does not match the expected pattern.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a resource name matching `{pattern}`, got `{name}`")]
    Mismatch { pattern: &'static str, name: String },
    #[error("the `{segment}` segment is empty in `{name}`")]
    EmptySegment { segment: &'static str, name: String },
}

/// The components of a location resource name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationName {
    pub project: String,
    pub location: String,
}

/// Formats a location resource name.
///
/// # Example
/// ```
/// # use vision_v1::path::location_path;
/// assert_eq!(
///     location_path("my-project", "us-east1"),
///     "projects/my-project/locations/us-east1"
/// );
/// ```
pub fn location_path(project: &str, location: &str) -> String {
    format!("projects/{project}/locations/{location}")
}

/// Formats a product resource name.
pub fn product_path(project: &str, location: &str, product: &str) -> String {
    format!("{}/products/{product}", location_path(project, location))
}

/// Formats a product set resource name.
pub fn product_set_path(project: &str, location: &str, product_set: &str) -> String {
    format!("{}/productSets/{product_set}", location_path(project, location))
}

/// Formats a reference image resource name.
pub fn reference_image_path(
    project: &str,
    location: &str,
    product: &str,
    reference_image: &str,
) -> String {
    format!(
        "{}/referenceImages/{reference_image}",
        product_path(project, location, product)
    )
}

const LOCATION_PATTERN: &str = "projects/{project}/locations/{location}";

/// Parses a location resource name.
///
/// # Example
/// ```
/// # use vision_v1::path::{parse_location_path, LocationName};
/// let name = parse_location_path("projects/my-project/locations/us-east1")?;
/// assert_eq!(name.project, "my-project");
/// assert_eq!(name.location, "us-east1");
/// # Ok::<(), vision_v1::path::ParseError>(())
/// ```
pub fn parse_location_path(name: &str) -> Result<LocationName, ParseError> {
    let mismatch = || ParseError::Mismatch {
        pattern: LOCATION_PATTERN,
        name: name.to_string(),
    };
    let mut parts = name.split('/');
    let (Some("projects"), Some(project), Some("locations"), Some(location), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return Err(mismatch());
    };
    let empty = |segment| ParseError::EmptySegment {
        segment,
        name: name.to_string(),
    };
    if project.is_empty() {
        return Err(empty("project"));
    }
    if location.is_empty() {
        return Err(empty("location"));
    }
    Ok(LocationName {
        project: project.to_string(),
        location: location.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn format() {
        assert_eq!(location_path("p", "l"), "projects/p/locations/l");
        assert_eq!(product_path("p", "l", "x"), "projects/p/locations/l/products/x");
        assert_eq!(
            product_set_path("p", "l", "s"),
            "projects/p/locations/l/productSets/s"
        );
        assert_eq!(
            reference_image_path("p", "l", "x", "i"),
            "projects/p/locations/l/products/x/referenceImages/i"
        );
    }

    #[test]
    fn parse() -> anyhow::Result<()> {
        let path = location_path("my-project", "us-west1");
        let got = parse_location_path(&path)?;
        assert_eq!(
            got,
            LocationName {
                project: "my-project".into(),
                location: "us-west1".into()
            }
        );
        Ok(())
    }

    #[test_case("")]
    #[test_case("projects/p")]
    #[test_case("projects/p/locations")]
    #[test_case("projects/p/zones/l")]
    #[test_case("folders/p/locations/l")]
    #[test_case("projects/p/locations/l/products/x")]
    fn parse_mismatch(input: &str) {
        let err = parse_location_path(input).unwrap_err();
        assert!(matches!(err, ParseError::Mismatch { .. }), "{err:?}");
        assert!(err.to_string().contains(LOCATION_PATTERN), "{err}");
    }

    #[test_case("projects//locations/l", "project")]
    #[test_case("projects/p/locations/", "location")]
    fn parse_empty_segment(input: &str, want: &str) {
        let err = parse_location_path(input).unwrap_err();
        assert!(
            matches!(&err, ParseError::EmptySegment { segment, .. } if *segment == want),
            "{err:?}"
        );
    }
}
