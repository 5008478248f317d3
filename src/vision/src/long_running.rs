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

//! The long-running operations started by the clients in this crate.
//!
//! Each RPC returning an [Operation][lro::model::Operation] has exactly one
//! entry in [LONG_RUNNING]. The entry names the response and metadata types,
//! and the typed decoders used by the operation handles are derived from
//! those types.

use lro::Decoders;

/// Describes the payloads of a long-running RPC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor {
    /// The fully qualified RPC name.
    pub method: &'static str,
    /// The type URL of the response, once the operation succeeds.
    pub response_type: &'static str,
    /// The type URL of the metadata reported while the operation runs.
    pub metadata_type: &'static str,
}

/// The long-running RPCs in this crate.
pub const LONG_RUNNING: &[Descriptor] = &[
    Descriptor {
        method: "google.cloud.vision.v1.ProductSearch.ImportProductSets",
        response_type: "type.googleapis.com/google.cloud.vision.v1.ImportProductSetsResponse",
        metadata_type: "type.googleapis.com/google.cloud.vision.v1.BatchOperationMetadata",
    },
    Descriptor {
        method: "google.cloud.vision.v1.ProductSearch.PurgeProducts",
        response_type: "type.googleapis.com/google.protobuf.Empty",
        metadata_type: "type.googleapis.com/google.cloud.vision.v1.BatchOperationMetadata",
    },
    Descriptor {
        method: "google.cloud.vision.v1.ImageAnnotator.AsyncBatchAnnotateImages",
        response_type: "type.googleapis.com/google.cloud.vision.v1.AsyncBatchAnnotateImagesResponse",
        metadata_type: "type.googleapis.com/google.cloud.vision.v1.OperationMetadata",
    },
    Descriptor {
        method: "google.cloud.vision.v1.ImageAnnotator.AsyncBatchAnnotateFiles",
        response_type: "type.googleapis.com/google.cloud.vision.v1.AsyncBatchAnnotateFilesResponse",
        metadata_type: "type.googleapis.com/google.cloud.vision.v1.OperationMetadata",
    },
];

/// Finds the descriptor for a fully qualified RPC name.
pub fn find(method: &str) -> Option<&'static Descriptor> {
    LONG_RUNNING.iter().find(|d| d.method == method)
}

pub(crate) fn import_product_sets()
-> Decoders<crate::model::ImportProductSetsResponse, crate::model::BatchOperationMetadata> {
    Decoders::new()
}

pub(crate) fn purge_products() -> Decoders<wkt::Empty, crate::model::BatchOperationMetadata> {
    Decoders::new()
}

pub(crate) fn async_batch_annotate_images()
-> Decoders<crate::model::AsyncBatchAnnotateImagesResponse, crate::model::OperationMetadata> {
    Decoders::new()
}

pub(crate) fn async_batch_annotate_files()
-> Decoders<crate::model::AsyncBatchAnnotateFilesResponse, crate::model::OperationMetadata> {
    Decoders::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use std::collections::HashSet;
    use test_case::test_case;
    use wkt::message::Message;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn one_entry_per_method() {
        let methods: HashSet<_> = LONG_RUNNING.iter().map(|d| d.method).collect();
        assert_eq!(methods.len(), LONG_RUNNING.len(), "{LONG_RUNNING:?}");
        assert_eq!(LONG_RUNNING.len(), 4);
    }

    #[test_case("google.cloud.vision.v1.ProductSearch.ImportProductSets", ImportProductSetsResponse::typename(), BatchOperationMetadata::typename())]
    #[test_case("google.cloud.vision.v1.ProductSearch.PurgeProducts", wkt::Empty::typename(), BatchOperationMetadata::typename())]
    #[test_case("google.cloud.vision.v1.ImageAnnotator.AsyncBatchAnnotateImages", AsyncBatchAnnotateImagesResponse::typename(), OperationMetadata::typename())]
    #[test_case("google.cloud.vision.v1.ImageAnnotator.AsyncBatchAnnotateFiles", AsyncBatchAnnotateFilesResponse::typename(), OperationMetadata::typename())]
    fn descriptor_matches_types(method: &str, response: &str, metadata: &str) {
        let got = find(method).unwrap_or_else(|| panic!("missing {method}"));
        assert_eq!(got.response_type, response);
        assert_eq!(got.metadata_type, metadata);
    }

    #[test]
    fn find_unknown() {
        assert_eq!(find("google.cloud.vision.v1.ProductSearch.GetProduct"), None);
    }

    #[test]
    fn decoders() -> TestResult {
        let response = ImportProductSetsResponse::new()
            .set_reference_images([ReferenceImage::new().set_uri("gs://bucket/image.jpg")]);
        let any = wkt::Any::from_msg(&response)?;
        assert_eq!(import_product_sets().decode_response(&any)?, response);

        let metadata = OperationMetadata::new().set_state(operation_metadata::State::Running);
        let any = wkt::Any::from_msg(&metadata)?;
        assert_eq!(async_batch_annotate_files().decode_metadata(&any)?, metadata);

        // A payload of the wrong type does not decode.
        let err = async_batch_annotate_images()
            .decode_metadata(&wkt::Any::from_msg(&BatchOperationMetadata::new())?)
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");

        let any = wkt::Any::from_msg(&wkt::Empty::default())?;
        assert_eq!(purge_products().decode_response(&any)?, wkt::Empty::default());
        Ok(())
    }
}
