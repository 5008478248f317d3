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

//! Verify applications can mock the Vision clients.

extern crate vision_v1 as vision;

#[cfg(test)]
mod tests {
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptionsBuilder;
    use gax::polling_backoff_policy::FixedInterval;
    use gax::polling_policy::{LimitedAttemptCount, LimitedElapsedTime};
    use lro::model::{CancelOperationRequest, GetOperationRequest, Operation};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use vision::client::{ImageAnnotator, ProductSearch};
    use vision::model::*;

    type Result<T> = gax::Result<T>;
    type TestResult = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        ProductSearch {}
        impl vision::stub::ProductSearch for ProductSearch {
            async fn create_product_set(&self, req: CreateProductSetRequest, _options: gax::options::RequestOptions) -> Result<ProductSet>;
            async fn list_product_sets(&self, req: ListProductSetsRequest, _options: gax::options::RequestOptions) -> Result<ListProductSetsResponse>;
            async fn get_product_set(&self, req: GetProductSetRequest, _options: gax::options::RequestOptions) -> Result<ProductSet>;
            async fn update_product_set(&self, req: UpdateProductSetRequest, _options: gax::options::RequestOptions) -> Result<ProductSet>;
            async fn delete_product_set(&self, req: DeleteProductSetRequest, _options: gax::options::RequestOptions) -> Result<()>;
            async fn create_product(&self, req: CreateProductRequest, _options: gax::options::RequestOptions) -> Result<Product>;
            async fn list_products(&self, req: ListProductsRequest, _options: gax::options::RequestOptions) -> Result<ListProductsResponse>;
            async fn get_product(&self, req: GetProductRequest, _options: gax::options::RequestOptions) -> Result<Product>;
            async fn update_product(&self, req: UpdateProductRequest, _options: gax::options::RequestOptions) -> Result<Product>;
            async fn delete_product(&self, req: DeleteProductRequest, _options: gax::options::RequestOptions) -> Result<()>;
            async fn create_reference_image(&self, req: CreateReferenceImageRequest, _options: gax::options::RequestOptions) -> Result<ReferenceImage>;
            async fn delete_reference_image(&self, req: DeleteReferenceImageRequest, _options: gax::options::RequestOptions) -> Result<()>;
            async fn list_reference_images(&self, req: ListReferenceImagesRequest, _options: gax::options::RequestOptions) -> Result<ListReferenceImagesResponse>;
            async fn get_reference_image(&self, req: GetReferenceImageRequest, _options: gax::options::RequestOptions) -> Result<ReferenceImage>;
            async fn add_product_to_product_set(&self, req: AddProductToProductSetRequest, _options: gax::options::RequestOptions) -> Result<()>;
            async fn remove_product_from_product_set(&self, req: RemoveProductFromProductSetRequest, _options: gax::options::RequestOptions) -> Result<()>;
            async fn list_products_in_product_set(&self, req: ListProductsInProductSetRequest, _options: gax::options::RequestOptions) -> Result<ListProductsInProductSetResponse>;
            async fn import_product_sets(&self, req: ImportProductSetsRequest, _options: gax::options::RequestOptions) -> Result<Operation>;
            async fn purge_products(&self, req: PurgeProductsRequest, _options: gax::options::RequestOptions) -> Result<Operation>;
            async fn get_operation(&self, req: GetOperationRequest, _options: gax::options::RequestOptions) -> Result<Operation>;
            async fn cancel_operation(&self, req: CancelOperationRequest, _options: gax::options::RequestOptions) -> Result<()>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        ImageAnnotator {}
        impl vision::stub::ImageAnnotator for ImageAnnotator {
            async fn batch_annotate_images(&self, req: BatchAnnotateImagesRequest, _options: gax::options::RequestOptions) -> Result<BatchAnnotateImagesResponse>;
            async fn batch_annotate_files(&self, req: BatchAnnotateFilesRequest, _options: gax::options::RequestOptions) -> Result<BatchAnnotateFilesResponse>;
            async fn async_batch_annotate_images(&self, req: AsyncBatchAnnotateImagesRequest, _options: gax::options::RequestOptions) -> Result<Operation>;
            async fn async_batch_annotate_files(&self, req: AsyncBatchAnnotateFilesRequest, _options: gax::options::RequestOptions) -> Result<Operation>;
            async fn get_operation(&self, req: GetOperationRequest, _options: gax::options::RequestOptions) -> Result<Operation>;
            async fn cancel_operation(&self, req: CancelOperationRequest, _options: gax::options::RequestOptions) -> Result<()>;
        }
    }

    const PARENT: &str = "projects/test-project/locations/us-east1";

    fn any<T: wkt::message::Message>(msg: &T) -> wkt::Any {
        wkt::Any::from_msg(msg).expect("test message should serialize")
    }

    fn batch_pending(name: &str, state: batch_operation_metadata::State) -> Operation {
        Operation::default()
            .set_name(name)
            .set_metadata(any(&BatchOperationMetadata::new().set_state(state)))
    }

    fn batch_done<T: wkt::message::Message>(name: &str, response: &T) -> Operation {
        Operation::default()
            .set_name(name)
            .set_done(true)
            .set_metadata(any(
                &BatchOperationMetadata::new().set_state(batch_operation_metadata::State::Successful),
            ))
            .set_response(any(response))
    }

    fn not_found(name: &str) -> Error {
        Error::service(
            Status::default()
                .set_code(Code::NotFound)
                .set_message(format!("{name} not found")),
        )
    }

    #[tokio::test]
    async fn product_set_lifecycle() -> TestResult {
        let name = vision::path::product_set_path("test-project", "us-east1", "set-1");
        let mut mock = MockProductSearch::new();
        mock.expect_create_product_set()
            .withf(|r, _| {
                r.parent == PARENT
                    && r.product_set_id == "set-1"
                    && r.product_set.as_ref().map(|s| s.display_name.as_str()) == Some("Shoes")
            })
            .return_once(|r, _| {
                let set = r.product_set.unwrap_or_default();
                Ok(set.set_name(format!("{}/productSets/{}", r.parent, r.product_set_id)))
            });
        mock.expect_get_product_set()
            .withf({
                let name = name.clone();
                move |r, _| r.name == name
            })
            .return_once(|r, _| Ok(ProductSet::new().set_name(r.name).set_display_name("Shoes")));
        mock.expect_update_product_set()
            .withf(|r, _| {
                r.update_mask.as_ref().map(|m| m.paths.clone()) == Some(vec!["display_name".to_string()])
                    && serde_json::to_value(r).ok().and_then(|v| v.get("updateMask").cloned())
                        == Some(serde_json::json!("display_name"))
            })
            .return_once(|r, _| Ok(r.product_set.unwrap_or_default()));
        mock.expect_delete_product_set()
            .withf({
                let name = name.clone();
                move |r, _| r.name == name
            })
            .return_once(|_, _| Ok(()));

        let client = ProductSearch::from_stub(mock);
        let created = client
            .create_product_set()
            .set_parent(PARENT)
            .set_product_set_id("set-1")
            .set_product_set(ProductSet::new().set_display_name("Shoes"))
            .send()
            .await?;
        assert_eq!(created.name, name);

        let got = client.get_product_set().set_name(&name).send().await?;
        assert_eq!(got.display_name, "Shoes");

        let updated = client
            .update_product_set()
            .set_product_set(got.clone().set_display_name("Boots"))
            .set_update_mask(wkt::FieldMask::default().set_paths(["display_name"]))
            .send()
            .await?;
        assert_eq!(updated.display_name, "Boots");

        client.delete_product_set().set_name(&name).send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn products_and_reference_images() -> TestResult {
        let product = vision::path::product_path("test-project", "us-east1", "p-1");
        let image = vision::path::reference_image_path("test-project", "us-east1", "p-1", "img-1");
        let mut mock = MockProductSearch::new();
        mock.expect_create_product()
            .withf(|r, _| r.product_id == "p-1")
            .return_once(|r, _| {
                Ok(r.product
                    .unwrap_or_default()
                    .set_name(format!("{}/products/{}", r.parent, r.product_id)))
            });
        mock.expect_update_product()
            .return_once(|r, _| Ok(r.product.unwrap_or_default()));
        mock.expect_get_product()
            .return_once(|r, _| Err(not_found(&r.name)));
        mock.expect_create_reference_image()
            .withf({
                let product = product.clone();
                move |r, _| r.parent == product && r.reference_image_id == "img-1"
            })
            .return_once(|r, _| {
                Ok(r.reference_image
                    .unwrap_or_default()
                    .set_name(format!("{}/referenceImages/{}", r.parent, r.reference_image_id)))
            });
        mock.expect_get_reference_image()
            .return_once(|r, _| Ok(ReferenceImage::new().set_name(r.name)));
        mock.expect_list_reference_images()
            .return_once(|_, _| {
                Ok(ListReferenceImagesResponse::new()
                    .set_reference_images([ReferenceImage::new().set_uri("gs://bucket/img-1.jpg")]))
            });
        mock.expect_delete_reference_image()
            .times(1)
            .return_once(|_, _| Ok(()));
        mock.expect_delete_product()
            .times(1)
            .return_once(|_, _| Ok(()));

        let client = ProductSearch::from_stub(mock);
        let created = client
            .create_product()
            .set_parent(PARENT)
            .set_product_id("p-1")
            .set_product(
                Product::new()
                    .set_display_name("Red shoe")
                    .set_product_category("apparel-v2"),
            )
            .send()
            .await?;
        assert_eq!(created.name, product);
        assert_eq!(created.product_category, "apparel-v2");

        let updated = client
            .update_product()
            .set_product(created.clone().set_description("A red shoe"))
            .send()
            .await?;
        assert_eq!(updated.description, "A red shoe");

        let err = client.get_product().set_name("missing").send().await.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");

        let img = client
            .create_reference_image()
            .set_parent(&product)
            .set_reference_image_id("img-1")
            .set_reference_image(ReferenceImage::new().set_uri("gs://bucket/img-1.jpg"))
            .send()
            .await?;
        assert_eq!(img.name, image);
        let got = client.get_reference_image().set_name(&image).send().await?;
        assert_eq!(got.name, image);
        let list = client.list_reference_images().set_parent(&product).send().await?;
        assert_eq!(list.reference_images.len(), 1);

        client.delete_reference_image().set_name(&image).send().await?;
        client.delete_product().set_name(&product).send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn product_set_membership() -> TestResult {
        let set = vision::path::product_set_path("test-project", "us-east1", "set-1");
        let product = vision::path::product_path("test-project", "us-east1", "p-1");
        let members = Arc::new(Mutex::new(Vec::<String>::new()));

        let mut mock = MockProductSearch::new();
        let m = members.clone();
        mock.expect_add_product_to_product_set()
            .times(1)
            .returning(move |r, _| {
                m.lock().expect("not poisoned").push(r.product);
                Ok(())
            });
        let m = members.clone();
        mock.expect_list_products_in_product_set()
            .times(2)
            .returning(move |_, _| {
                let products = m
                    .lock()
                    .expect("not poisoned")
                    .iter()
                    .map(|p| Product::new().set_name(p))
                    .collect::<Vec<_>>();
                Ok(ListProductsInProductSetResponse::new().set_products(products))
            });
        let m = members.clone();
        mock.expect_remove_product_from_product_set()
            .times(1)
            .returning(move |r, _| {
                m.lock().expect("not poisoned").retain(|p| *p != r.product);
                Ok(())
            });

        let client = ProductSearch::from_stub(mock);
        client
            .add_product_to_product_set()
            .set_name(&set)
            .set_product(&product)
            .send()
            .await?;
        let list = client.list_products_in_product_set().set_name(&set).send().await?;
        assert_eq!(
            list.products.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec![product.as_str()]
        );
        client
            .remove_product_from_product_set()
            .set_name(&set)
            .set_product(&product)
            .send()
            .await?;
        let list = client.list_products_in_product_set().set_name(&set).send().await?;
        assert!(list.products.is_empty(), "{list:?}");
        Ok(())
    }

    #[tokio::test]
    async fn list_by_item() -> TestResult {
        use futures::TryStreamExt;

        let mut mock = MockProductSearch::new();
        mock.expect_list_products()
            .withf(|r, _| r.page_token.is_empty() && r.page_size == 2)
            .return_once(|_, _| {
                Ok(ListProductsResponse::new()
                    .set_products([Product::new().set_name("p-1"), Product::new().set_name("p-2")])
                    .set_next_page_token("page-2"))
            });
        mock.expect_list_products()
            .withf(|r, _| r.page_token == "page-2")
            .return_once(|_, _| {
                Ok(ListProductsResponse::new().set_products([Product::new().set_name("p-3")]))
            });

        let client = ProductSearch::from_stub(mock);
        let names = client
            .list_products()
            .set_parent(PARENT)
            .set_page_size(2)
            .by_item()
            .map_ok(|p| p.name)
            .try_collect::<Vec<_>>()
            .await?;
        assert_eq!(names, vec!["p-1", "p-2", "p-3"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_by_page() -> TestResult {
        let mut mock = MockProductSearch::new();
        mock.expect_list_product_sets()
            .withf(|r, _| r.page_token.is_empty())
            .return_once(|_, _| {
                Ok(ListProductSetsResponse::new()
                    .set_product_sets([ProductSet::new().set_name("s-1")])
                    .set_next_page_token("page-2"))
            });
        mock.expect_list_product_sets()
            .withf(|r, _| r.page_token == "page-2")
            .return_once(|_, _| Err(not_found("page-2")));

        let client = ProductSearch::from_stub(mock);
        let mut pages = client.list_product_sets().set_parent(PARENT).by_page();
        let first = pages.next().await.transpose()?;
        assert_eq!(first.map(|p| p.product_sets.len()), Some(1));
        let err = pages.next().await.transpose().unwrap_err();
        assert!(err.status().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn import_product_sets_until_done() -> TestResult {
        let response = ImportProductSetsResponse::new()
            .set_reference_images([ReferenceImage::new().set_uri("gs://bucket/img-1.jpg")])
            .set_statuses([Status::default()]);

        let mut mock = MockProductSearch::new();
        mock.expect_import_product_sets()
            .withf(|r, _| {
                r.parent == PARENT
                    && r.input_config
                        .as_ref()
                        .and_then(|c| c.gcs_source.as_ref())
                        .map(|s| s.csv_file_uri.as_str())
                        == Some("gs://bucket/import.csv")
            })
            .return_once(|_, _| Ok(batch_pending("op-1", batch_operation_metadata::State::Processing)));
        let mut seq = mockall::Sequence::new();
        mock.expect_get_operation()
            .withf(|r, _| r.name == "op-1")
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(batch_pending("op-1", batch_operation_metadata::State::Processing)));
        let done = batch_done("op-1", &response);
        mock.expect_get_operation()
            .withf(|r, _| r.name == "op-1")
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_, _| Ok(done));

        let client = ProductSearch::from_stub(mock);
        let got = client
            .import_product_sets()
            .set_parent(PARENT)
            .set_input_config(
                ImportProductSetsInputConfig::new().set_gcs_source(
                    ImportProductSetsGcsSource::new().set_csv_file_uri("gs://bucket/import.csv"),
                ),
            )
            .with_polling_backoff_policy(FixedInterval::new(Duration::from_secs(1)))
            .until_done()
            .await?;
        assert_eq!(got, response);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn import_product_sets_metadata() -> TestResult {
        use batch_operation_metadata::State;

        let mut mock = MockProductSearch::new();
        mock.expect_import_product_sets()
            .return_once(|_, _| Ok(batch_pending("op-1", State::Processing)));
        let mut seq = mockall::Sequence::new();
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(batch_pending("op-1", State::Processing)));
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(batch_done("op-1", &ImportProductSetsResponse::new())));

        let states = Arc::new(Mutex::new(Vec::new()));
        let client = ProductSearch::from_stub(mock);
        let mut handle = client
            .import_product_sets()
            .set_parent(PARENT)
            .with_polling_backoff_policy(FixedInterval::new(Duration::from_secs(1)))
            .start()
            .await?
            .with_metadata_observer({
                let states = states.clone();
                move |m: &BatchOperationMetadata| states.lock().expect("not poisoned").push(m.state)
            });
        assert_eq!(handle.name(), "op-1");
        assert_eq!(handle.metadata()?.map(|m| m.state), Some(State::Processing));
        assert_eq!(handle.state(), lro::OperationState::Pending);

        let response = handle.wait().await?;
        assert_eq!(response, ImportProductSetsResponse::new());
        assert_eq!(handle.state(), lro::OperationState::Succeeded);
        assert_eq!(
            *states.lock().expect("not poisoned"),
            vec![State::Processing, State::Successful]
        );
        Ok(())
    }

    #[tokio::test]
    async fn start_error() -> TestResult {
        let mut mock = MockProductSearch::new();
        mock.expect_purge_products()
            .return_once(|_, _| Err(not_found("set-1")));
        mock.expect_get_operation().never();

        let client = ProductSearch::from_stub(mock);
        let err = client
            .purge_products()
            .set_parent(PARENT)
            .start()
            .await
            .unwrap_err();
        assert!(err.status().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn purge_products_failed() -> TestResult {
        let mut mock = MockProductSearch::new();
        mock.expect_purge_products()
            .withf(|r, _| {
                r.force
                    && r.product_set_purge_config.as_ref().map(|c| c.product_set_id.as_str())
                        == Some("set-1")
            })
            .return_once(|_, _| {
                Ok(Operation::default()
                    .set_name("op-2")
                    .set_done(true)
                    .set_error(
                        Status::default()
                            .set_code(Code::PermissionDenied)
                            .set_message("denied"),
                    ))
            });
        mock.expect_get_operation().never();

        let client = ProductSearch::from_stub(mock);
        let err = client
            .purge_products()
            .set_parent(PARENT)
            .set_force(true)
            .set_product_set_purge_config(ProductSetPurgeConfig::new().set_product_set_id("set-1"))
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_operation(), "{err:?}");
        assert_eq!(
            err.operation_status().map(|s| s.code),
            Some(Code::PermissionDenied)
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn client_polling_policy() -> TestResult {
        let mut mock = MockProductSearch::new();
        mock.expect_purge_products()
            .return_once(|_, _| Ok(batch_pending("op-3", batch_operation_metadata::State::Processing)));
        mock.expect_get_operation()
            .times(2)
            .returning(|_, _| Ok(batch_pending("op-3", batch_operation_metadata::State::Processing)));

        let config = gax::client_config::ClientConfig::default()
            .set_polling_policy(LimitedAttemptCount::new(2))
            .set_polling_backoff_policy(FixedInterval::new(Duration::from_secs(1)));
        let client = ProductSearch::from_stub_with_config(mock, config);
        let err = client
            .purge_products()
            .set_parent(PARENT)
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn request_polling_policy_overrides_client() -> TestResult {
        let mut mock = MockProductSearch::new();
        mock.expect_purge_products()
            .return_once(|_, _| Ok(batch_pending("op-4", batch_operation_metadata::State::Processing)));
        mock.expect_get_operation()
            .returning(|_, _| Ok(batch_pending("op-4", batch_operation_metadata::State::Processing)));

        let config = gax::client_config::ClientConfig::default()
            .set_polling_policy(LimitedAttemptCount::new(100));
        let client = ProductSearch::from_stub_with_config(mock, config);
        let start = tokio::time::Instant::now();
        let err = client
            .purge_products()
            .set_parent(PARENT)
            .with_polling_policy(LimitedElapsedTime::new(Duration::from_secs(5)))
            .with_polling_backoff_policy(FixedInterval::new(Duration::from_secs(2)))
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert_eq!(start.elapsed(), Duration::from_secs(5));
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout_reaches_stub() -> TestResult {
        let mut mock = MockProductSearch::new();
        mock.expect_get_product()
            .withf(|_, o| *o.attempt_timeout() == Some(Duration::from_secs(7)))
            .return_once(|r, _| Ok(Product::new().set_name(r.name)));
        mock.expect_get_product_set()
            .withf(|_, o| *o.attempt_timeout() == Some(Duration::from_secs(3)))
            .return_once(|r, _| Ok(ProductSet::new().set_name(r.name)));

        let config = gax::client_config::ClientConfig::default()
            .set_attempt_timeout(Duration::from_secs(7));
        let client = ProductSearch::from_stub_with_config(mock, config);
        client.get_product().set_name("p-1").send().await?;
        client
            .get_product_set()
            .set_name("s-1")
            .with_attempt_timeout(Duration::from_secs(3))
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn cancel_operation() -> TestResult {
        let mut mock = MockProductSearch::new();
        mock.expect_import_product_sets()
            .return_once(|_, _| Ok(batch_pending("op-5", batch_operation_metadata::State::Processing)));
        mock.expect_cancel_operation()
            .withf(|r, _| r.name == "op-5")
            .times(1)
            .return_once(|_, _| Ok(()));

        let client = ProductSearch::from_stub(mock);
        let handle = client.import_product_sets().set_parent(PARENT).start().await?;
        handle.cancel().await?;
        assert_eq!(handle.state(), lro::OperationState::Pending);
        Ok(())
    }

    #[tokio::test]
    async fn operations_mixin() -> TestResult {
        let mut mock = MockProductSearch::new();
        mock.expect_get_operation()
            .withf(|r, _| r.name == "op-6")
            .return_once(|r, _| Ok(Operation::default().set_name(r.name).set_done(true)));
        mock.expect_cancel_operation()
            .withf(|r, _| r.name == "op-6")
            .return_once(|_, _| Ok(()));

        let client = ProductSearch::from_stub(mock);
        let op = client.get_operation().set_name("op-6").send().await?;
        assert!(op.done, "{op:?}");
        client.cancel_operation().set_name("op-6").send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn batch_annotate_images() -> TestResult {
        let mut mock = MockImageAnnotator::new();
        mock.expect_batch_annotate_images()
            .withf(|r, _| {
                r.requests.len() == 1
                    && r.requests[0].features.first().map(|f| f.r#type)
                        == Some(feature::Type::LabelDetection)
            })
            .return_once(|_, _| {
                Ok(BatchAnnotateImagesResponse::new().set_responses([
                    AnnotateImageResponse::new().set_label_annotations([EntityAnnotation::new()
                        .set_description("shoe")
                        .set_score(0.9_f32)]),
                ]))
            });

        let client = ImageAnnotator::from_stub(mock);
        let response = client
            .batch_annotate_images()
            .set_requests([AnnotateImageRequest::new()
                .set_image(Image::new().set_source(ImageSource::new().set_image_uri("gs://bucket/shoe.jpg")))
                .set_features([Feature::new().set_type(feature::Type::LabelDetection)])])
            .send()
            .await?;
        let labels = response
            .responses
            .iter()
            .flat_map(|r| r.label_annotations.iter())
            .map(|l| l.description.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["shoe"]);
        Ok(())
    }

    #[tokio::test]
    async fn batch_annotate_files() -> TestResult {
        let mut mock = MockImageAnnotator::new();
        mock.expect_batch_annotate_files()
            .withf(|r, _| {
                r.parent == PARENT
                    && r.requests.len() == 1
                    && r.requests[0].pages == vec![1, 2]
                    && r.requests[0]
                        .input_config
                        .as_ref()
                        .map(|c| c.mime_type.as_str())
                        == Some("application/pdf")
            })
            .return_once(|_, _| {
                Ok(BatchAnnotateFilesResponse::new().set_responses([AnnotateFileResponse::new()
                    .set_total_pages(7)
                    .set_responses([
                        AnnotateImageResponse::new(),
                        AnnotateImageResponse::new(),
                    ])]))
            });

        let client = ImageAnnotator::from_stub(mock);
        let response = client
            .batch_annotate_files()
            .set_parent(PARENT)
            .set_requests([AnnotateFileRequest::new()
                .set_input_config(
                    InputConfig::new()
                        .set_gcs_source(GcsSource::new().set_uri("gs://bucket/catalog.pdf"))
                        .set_mime_type("application/pdf"),
                )
                .set_features([Feature::new().set_type(feature::Type::DocumentTextDetection)])
                .set_pages([1, 2])])
            .send()
            .await?;
        assert_eq!(response.responses.len(), 1);
        assert_eq!(response.responses[0].total_pages, 7);
        assert_eq!(response.responses[0].responses.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn batch_annotate_files_error() -> TestResult {
        let mut mock = MockImageAnnotator::new();
        mock.expect_batch_annotate_files()
            .return_once(|_, _| Err(not_found("gs://bucket/missing.pdf")));

        let client = ImageAnnotator::from_stub(mock);
        let err = client
            .batch_annotate_files()
            .set_parent(PARENT)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn image_annotator_cancel_operation() -> TestResult {
        let mut mock = MockImageAnnotator::new();
        mock.expect_cancel_operation()
            .withf(|r, _| r.name == "op-7")
            .times(1)
            .return_once(|_, _| Ok(()));
        mock.expect_cancel_operation()
            .withf(|r, _| r.name == "op-8")
            .times(1)
            .return_once(|r, _| Err(not_found(&r.name)));

        let client = ImageAnnotator::from_stub(mock);
        client.cancel_operation().set_name("op-7").send().await?;
        let err = client
            .cancel_operation()
            .set_name("op-8")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn async_batch_annotate_files() -> TestResult {
        use operation_metadata::State;

        let response = AsyncBatchAnnotateFilesResponse::new().set_responses([
            AsyncAnnotateFileResponse::new().set_output_config(
                OutputConfig::new()
                    .set_gcs_destination(GcsDestination::new().set_uri("gs://bucket/output/")),
            ),
        ]);
        let pending = |state: State| {
            Operation::default()
                .set_name("op-7")
                .set_metadata(any(&OperationMetadata::new().set_state(state)))
        };

        let mut mock = MockImageAnnotator::new();
        mock.expect_async_batch_annotate_files()
            .withf(|r, _| r.requests.len() == 1)
            .return_once(move |_, _| Ok(pending(State::Created)));
        let mut seq = mockall::Sequence::new();
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_, _| Ok(pending(State::Running)));
        let done = Operation::default()
            .set_name("op-7")
            .set_done(true)
            .set_response(any(&response));
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_, _| Ok(done));

        let client = ImageAnnotator::from_stub(mock);
        let got = client
            .async_batch_annotate_files()
            .set_requests([AsyncAnnotateFileRequest::new()
                .set_input_config(
                    InputConfig::new()
                        .set_gcs_source(GcsSource::new().set_uri("gs://bucket/doc.pdf"))
                        .set_mime_type("application/pdf"),
                )
                .set_features([Feature::new().set_type(feature::Type::DocumentTextDetection)])])
            .until_done()
            .await?;
        assert_eq!(got, response);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn async_batch_annotate_images_wrong_payload() -> TestResult {
        let mut mock = MockImageAnnotator::new();
        mock.expect_async_batch_annotate_images().return_once(|_, _| {
            Ok(Operation::default()
                .set_name("op-8")
                .set_done(true)
                .set_response(any(&AsyncBatchAnnotateFilesResponse::new())))
        });

        let client = ImageAnnotator::from_stub(mock);
        let err = client
            .async_batch_annotate_images()
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn shared_operation() -> TestResult {
        let mut mock = MockImageAnnotator::new();
        mock.expect_async_batch_annotate_images().return_once(|_, _| {
            Ok(Operation::default().set_name("op-9").set_metadata(any(
                &OperationMetadata::new().set_state(operation_metadata::State::Running),
            )))
        });
        let response = AsyncBatchAnnotateImagesResponse::new().set_output_config(
            OutputConfig::new().set_gcs_destination(GcsDestination::new().set_uri("gs://bucket/out/")),
        );
        let done = Operation::default()
            .set_name("op-9")
            .set_done(true)
            .set_response(any(&response));
        mock.expect_get_operation()
            .times(1)
            .return_once(move |_, _| Ok(done));

        let client = ImageAnnotator::from_stub(mock);
        let shared = client
            .async_batch_annotate_images()
            .start()
            .await?
            .into_shared();
        let waiters = (0..4)
            .map(|_| {
                let shared = shared.clone();
                tokio::spawn(async move { shared.until_done().await })
            })
            .collect::<Vec<_>>();
        for w in waiters {
            assert_eq!(w.await??, response);
        }
        Ok(())
    }

    #[tokio::test]
    async fn tracing_enabled() -> TestResult {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let mut mock = MockProductSearch::new();
        mock.expect_get_product()
            .times(1)
            .return_once(|r, _| Ok(Product::new().set_name(r.name)));

        let config = gax::client_config::ClientConfig::default().enable_tracing();
        let client = ProductSearch::from_stub_with_config(mock, config);
        let got = client.get_product().set_name("p-1").send().await?;
        assert_eq!(got.name, "p-1");
        Ok(())
    }
}
