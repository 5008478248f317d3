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
#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use gax::client_config::ClientConfig;
use std::sync::Arc;

/// Implements a client for the Cloud Vision API.
///
/// Manages Products and ProductSets of reference images for use in product
/// search. It uses the following resource model:
///
/// - The API has a collection of [ProductSet][crate::model::ProductSet]
///   resources, named `projects/*/locations/*/productSets/*`, which acts as a
///   way to put different products into groups to limit identification.
/// - In parallel, the API has a collection of [Product][crate::model::Product]
///   resources, named `projects/*/locations/*/products/*`.
/// - Each [Product][crate::model::Product] has a collection of
///   [ReferenceImage][crate::model::ReferenceImage] resources, named
///   `projects/*/locations/*/products/*/referenceImages/*`.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use vision_v1::client::ProductSearch;
/// # #[derive(Debug)]
/// # struct MyStub;
/// # impl vision_v1::stub::ProductSearch for MyStub {
/// #     async fn get_product(
/// #         &self,
/// #         req: vision_v1::model::GetProductRequest,
/// #         _options: gax::options::RequestOptions,
/// #     ) -> gax::Result<vision_v1::model::Product> {
/// #         Ok(vision_v1::model::Product::new().set_name(req.name))
/// #     }
/// # }
/// let client = ProductSearch::from_stub(MyStub);
/// let product = client
///     .get_product()
///     .set_name(vision_v1::path::product_path("my-project", "us-east1", "my-product"))
///     .send()
///     .await?;
/// println!("product {product:?}");
/// # gax::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// Clients are created from a [stub][crate::stub::ProductSearch], the transport used
/// to send each request. Use [from_stub_with_config][ProductSearch::from_stub_with_config]
/// to change the default polling policies or to enable tracing.
///
/// # Pooling and Cloning
///
/// `ProductSearch` holds a reference-counted stub, clone the client to share it
/// with other tasks. Cloning does not create a new stub.
#[derive(Clone, Debug)]
pub struct ProductSearch {
    inner: Arc<dyn super::stub::dynamic::ProductSearch>,
    config: Arc<ClientConfig>,
}

impl ProductSearch {
    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ProductSearch + 'static,
    {
        Self::from_stub_with_config(stub, ClientConfig::default())
    }

    /// Creates a new client from the provided stub and configuration.
    ///
    /// If tracing is enabled in `config` each call is wrapped in a tracing
    /// span, and its result is logged.
    pub fn from_stub_with_config<T>(stub: T, config: ClientConfig) -> Self
    where
        T: super::stub::ProductSearch + 'static,
    {
        let inner: Arc<dyn super::stub::dynamic::ProductSearch> = if config.tracing_enabled() {
            Arc::new(super::tracing::ProductSearch::new(stub))
        } else {
            Arc::new(stub)
        };
        Self {
            inner,
            config: Arc::new(config),
        }
    }

    /// Creates and returns a new ProductSet resource.
    ///
    /// Possible errors:
    ///
    /// * Returns INVALID_ARGUMENT if display_name is missing, or is longer than
    ///   4096 characters.
    pub fn create_product_set(&self) -> super::builder::product_search::CreateProductSet {
        super::builder::product_search::CreateProductSet::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Lists ProductSets in an unspecified order.
    ///
    /// Possible errors:
    ///
    /// * Returns INVALID_ARGUMENT if page_size is greater than 100, or less
    ///   than 1.
    pub fn list_product_sets(&self) -> super::builder::product_search::ListProductSets {
        super::builder::product_search::ListProductSets::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Gets information associated with a ProductSet.
    ///
    /// Possible errors:
    ///
    /// * Returns NOT_FOUND if the ProductSet does not exist.
    pub fn get_product_set(&self) -> super::builder::product_search::GetProductSet {
        super::builder::product_search::GetProductSet::new(self.inner.clone(), self.config.clone())
    }

    /// Makes changes to a ProductSet resource.
    /// Only display_name can be updated currently.
    ///
    /// Possible errors:
    ///
    /// * Returns NOT_FOUND if the ProductSet does not exist.
    /// * Returns INVALID_ARGUMENT if display_name is present in update_mask but
    ///   missing from the request or longer than 4096 characters.
    pub fn update_product_set(&self) -> super::builder::product_search::UpdateProductSet {
        super::builder::product_search::UpdateProductSet::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Permanently deletes a ProductSet. Products and ReferenceImages in the
    /// ProductSet are not deleted.
    ///
    /// The actual image files are not deleted from Google Cloud Storage.
    pub fn delete_product_set(&self) -> super::builder::product_search::DeleteProductSet {
        super::builder::product_search::DeleteProductSet::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Creates and returns a new product resource.
    ///
    /// Possible errors:
    ///
    /// * Returns INVALID_ARGUMENT if display_name is missing or longer than 4096
    ///   characters.
    /// * Returns INVALID_ARGUMENT if description is longer than 4096 characters.
    /// * Returns INVALID_ARGUMENT if product_category is missing or invalid.
    pub fn create_product(&self) -> super::builder::product_search::CreateProduct {
        super::builder::product_search::CreateProduct::new(self.inner.clone(), self.config.clone())
    }

    /// Lists products in an unspecified order.
    ///
    /// Possible errors:
    ///
    /// * Returns INVALID_ARGUMENT if page_size is greater than 100 or less than 1.
    pub fn list_products(&self) -> super::builder::product_search::ListProducts {
        super::builder::product_search::ListProducts::new(self.inner.clone(), self.config.clone())
    }

    /// Gets information associated with a Product.
    ///
    /// Possible errors:
    ///
    /// * Returns NOT_FOUND if the Product does not exist.
    pub fn get_product(&self) -> super::builder::product_search::GetProduct {
        super::builder::product_search::GetProduct::new(self.inner.clone(), self.config.clone())
    }

    /// Makes changes to a Product resource.
    /// Only the `display_name`, `description`, and `labels` fields can be updated
    /// right now.
    ///
    /// If labels are updated, the change will not be reflected in queries until
    /// the next index time.
    ///
    /// Possible errors:
    ///
    /// * Returns NOT_FOUND if the Product does not exist.
    /// * Returns INVALID_ARGUMENT if display_name is present in update_mask but is
    ///   missing from the request or longer than 4096 characters.
    pub fn update_product(&self) -> super::builder::product_search::UpdateProduct {
        super::builder::product_search::UpdateProduct::new(self.inner.clone(), self.config.clone())
    }

    /// Permanently deletes a product and its reference images.
    ///
    /// Metadata of the product and all its images will be deleted right away, but
    /// search queries against ProductSets containing the product may still work
    /// until all related caches are refreshed.
    pub fn delete_product(&self) -> super::builder::product_search::DeleteProduct {
        super::builder::product_search::DeleteProduct::new(self.inner.clone(), self.config.clone())
    }

    /// Creates and returns a new ReferenceImage resource.
    ///
    /// The `bounding_poly` field is optional. If `bounding_poly` is not specified,
    /// the system will try to detect regions of interest in the image that are
    /// compatible with the product_category on the parent product.
    ///
    /// Possible errors:
    ///
    /// * Returns INVALID_ARGUMENT if the image_uri is missing or longer than 4096
    ///   characters.
    /// * Returns INVALID_ARGUMENT if the product does not exist.
    pub fn create_reference_image(&self) -> super::builder::product_search::CreateReferenceImage {
        super::builder::product_search::CreateReferenceImage::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Permanently deletes a reference image.
    ///
    /// The image metadata will be deleted right away, but search queries
    /// against ProductSets containing the image may still work until all related
    /// caches are refreshed.
    ///
    /// The actual image files are not deleted from Google Cloud Storage.
    pub fn delete_reference_image(&self) -> super::builder::product_search::DeleteReferenceImage {
        super::builder::product_search::DeleteReferenceImage::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Lists reference images.
    ///
    /// Possible errors:
    ///
    /// * Returns NOT_FOUND if the parent product does not exist.
    /// * Returns INVALID_ARGUMENT if the page_size is greater than 100, or less
    ///   than 1.
    pub fn list_reference_images(&self) -> super::builder::product_search::ListReferenceImages {
        super::builder::product_search::ListReferenceImages::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Gets information associated with a ReferenceImage.
    ///
    /// Possible errors:
    ///
    /// * Returns NOT_FOUND if the specified image does not exist.
    pub fn get_reference_image(&self) -> super::builder::product_search::GetReferenceImage {
        super::builder::product_search::GetReferenceImage::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Adds a Product to the specified ProductSet. If the Product is already
    /// present, no change is made.
    ///
    /// One Product can be added to at most 100 ProductSets.
    ///
    /// Possible errors:
    ///
    /// * Returns NOT_FOUND if the Product or the ProductSet doesn't exist.
    pub fn add_product_to_product_set(
        &self,
    ) -> super::builder::product_search::AddProductToProductSet {
        super::builder::product_search::AddProductToProductSet::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Removes a Product from the specified ProductSet.
    pub fn remove_product_from_product_set(
        &self,
    ) -> super::builder::product_search::RemoveProductFromProductSet {
        super::builder::product_search::RemoveProductFromProductSet::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Lists the Products in a ProductSet, in an unspecified order. If the
    /// ProductSet does not exist, the products field of the response will be
    /// empty.
    ///
    /// Possible errors:
    ///
    /// * Returns INVALID_ARGUMENT if page_size is greater than 100 or less than 1.
    pub fn list_products_in_product_set(
        &self,
    ) -> super::builder::product_search::ListProductsInProductSet {
        super::builder::product_search::ListProductsInProductSet::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Asynchronous API that imports a list of reference images to specified
    /// product sets based on a list of image information.
    ///
    /// The operation metadata is a
    /// [BatchOperationMetadata][crate::model::BatchOperationMetadata], it tracks
    /// the progress of the request. The operation response is an
    /// [ImportProductSetsResponse][crate::model::ImportProductSetsResponse].
    ///
    /// The input source of this method is a csv file on Google Cloud Storage.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use [start()] to get an [OperationHandle][lro::OperationHandle], or
    /// [until_done()] to wait for the result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    /// [start()]: crate::builder::product_search::ImportProductSets::start
    /// [until_done()]: crate::builder::product_search::ImportProductSets::until_done
    pub fn import_product_sets(&self) -> super::builder::product_search::ImportProductSets {
        super::builder::product_search::ImportProductSets::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Asynchronous API to delete all Products in a ProductSet or all Products
    /// that are in no ProductSet.
    ///
    /// If a Product is a member of the specified ProductSet in addition to other
    /// ProductSets, the Product will still be deleted.
    ///
    /// It is recommended to not delete the specified ProductSet until after this
    /// operation has completed. It is also recommended to not add any of the
    /// Products involved in the batch delete to a new ProductSet while this
    /// operation is running because those Products may still end up deleted.
    ///
    /// The operation metadata is a
    /// [BatchOperationMetadata][crate::model::BatchOperationMetadata], it tracks
    /// the progress of the request.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use [start()] to get an [OperationHandle][lro::OperationHandle], or
    /// [until_done()] to wait for the result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    /// [start()]: crate::builder::product_search::PurgeProducts::start
    /// [until_done()]: crate::builder::product_search::PurgeProducts::until_done
    pub fn purge_products(&self) -> super::builder::product_search::PurgeProducts {
        super::builder::product_search::PurgeProducts::new(self.inner.clone(), self.config.clone())
    }

    /// Provides the [Operations][lro::stub::Operations] service functionality in this service.
    ///
    /// Gets the latest state of a long-running operation.
    pub fn get_operation(&self) -> super::builder::product_search::GetOperation {
        super::builder::product_search::GetOperation::new(self.inner.clone(), self.config.clone())
    }

    /// Provides the [Operations][lro::stub::Operations] service functionality in this service.
    ///
    /// Starts asynchronous cancellation on a long-running operation.
    pub fn cancel_operation(&self) -> super::builder::product_search::CancelOperation {
        super::builder::product_search::CancelOperation::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }
}

/// Implements a client for the Cloud Vision API.
///
/// Service that performs Google Cloud Vision API detection tasks over client
/// images, such as face, landmark, logo, label, and text detection. The
/// ImageAnnotator service returns detected entities from the images.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use vision_v1::client::ImageAnnotator;
/// # use vision_v1::model::{AnnotateImageRequest, Feature, Image, ImageSource, feature};
/// # #[derive(Debug)]
/// # struct MyStub;
/// # impl vision_v1::stub::ImageAnnotator for MyStub {
/// #     async fn batch_annotate_images(
/// #         &self,
/// #         _req: vision_v1::model::BatchAnnotateImagesRequest,
/// #         _options: gax::options::RequestOptions,
/// #     ) -> gax::Result<vision_v1::model::BatchAnnotateImagesResponse> {
/// #         Ok(vision_v1::model::BatchAnnotateImagesResponse::new())
/// #     }
/// # }
/// let client = ImageAnnotator::from_stub(MyStub);
/// let request = AnnotateImageRequest::new()
///     .set_image(Image::new().set_source(ImageSource::new().set_image_uri("gs://my-bucket/image.jpg")))
///     .set_features([Feature::new().set_type(feature::Type::LabelDetection)]);
/// let response = client
///     .batch_annotate_images()
///     .set_requests([request])
///     .send()
///     .await?;
/// println!("response {response:?}");
/// # gax::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// Clients are created from a [stub][crate::stub::ImageAnnotator], the transport used
/// to send each request. Use [from_stub_with_config][ImageAnnotator::from_stub_with_config]
/// to change the default polling policies or to enable tracing.
///
/// # Pooling and Cloning
///
/// `ImageAnnotator` holds a reference-counted stub, clone the client to share it
/// with other tasks. Cloning does not create a new stub.
#[derive(Clone, Debug)]
pub struct ImageAnnotator {
    inner: Arc<dyn super::stub::dynamic::ImageAnnotator>,
    config: Arc<ClientConfig>,
}

impl ImageAnnotator {
    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ImageAnnotator + 'static,
    {
        Self::from_stub_with_config(stub, ClientConfig::default())
    }

    /// Creates a new client from the provided stub and configuration.
    ///
    /// If tracing is enabled in `config` each call is wrapped in a tracing
    /// span, and its result is logged.
    pub fn from_stub_with_config<T>(stub: T, config: ClientConfig) -> Self
    where
        T: super::stub::ImageAnnotator + 'static,
    {
        let inner: Arc<dyn super::stub::dynamic::ImageAnnotator> = if config.tracing_enabled() {
            Arc::new(super::tracing::ImageAnnotator::new(stub))
        } else {
            Arc::new(stub)
        };
        Self {
            inner,
            config: Arc::new(config),
        }
    }

    /// Run image detection and annotation for a batch of images.
    pub fn batch_annotate_images(&self) -> super::builder::image_annotator::BatchAnnotateImages {
        super::builder::image_annotator::BatchAnnotateImages::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Service that performs image detection and annotation for a batch of files.
    /// Now only "application/pdf", "image/tiff" and "image/gif" are supported.
    ///
    /// This service will extract at most 5 (customers can specify which 5 in
    /// AnnotateFileRequest.pages) frames (gif) or pages (pdf or tiff) from each
    /// file provided and perform detection and annotation for each image
    /// extracted.
    pub fn batch_annotate_files(&self) -> super::builder::image_annotator::BatchAnnotateFiles {
        super::builder::image_annotator::BatchAnnotateFiles::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Run asynchronous image detection and annotation for a list of images.
    ///
    /// Progress and results can be retrieved through the operation returned by
    /// this method. The operation metadata is an
    /// [OperationMetadata][crate::model::OperationMetadata], the operation
    /// response is an
    /// [AsyncBatchAnnotateImagesResponse][crate::model::AsyncBatchAnnotateImagesResponse].
    ///
    /// This service will write image annotation outputs to json files in the
    /// customer's GCS bucket, each json file containing
    /// BatchAnnotateImagesResponse proto.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use [start()] to get an [OperationHandle][lro::OperationHandle], or
    /// [until_done()] to wait for the result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    /// [start()]: crate::builder::image_annotator::AsyncBatchAnnotateImages::start
    /// [until_done()]: crate::builder::image_annotator::AsyncBatchAnnotateImages::until_done
    pub fn async_batch_annotate_images(
        &self,
    ) -> super::builder::image_annotator::AsyncBatchAnnotateImages {
        super::builder::image_annotator::AsyncBatchAnnotateImages::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Run asynchronous image detection and annotation for a list of generic
    /// files, such as PDF files, which may contain multiple pages and multiple
    /// images per page. Progress and results can be retrieved through the
    /// operation returned by this method. The operation metadata is an
    /// [OperationMetadata][crate::model::OperationMetadata], the operation
    /// response is an
    /// [AsyncBatchAnnotateFilesResponse][crate::model::AsyncBatchAnnotateFilesResponse].
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// Use [start()] to get an [OperationHandle][lro::OperationHandle], or
    /// [until_done()] to wait for the result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    /// [start()]: crate::builder::image_annotator::AsyncBatchAnnotateFiles::start
    /// [until_done()]: crate::builder::image_annotator::AsyncBatchAnnotateFiles::until_done
    pub fn async_batch_annotate_files(
        &self,
    ) -> super::builder::image_annotator::AsyncBatchAnnotateFiles {
        super::builder::image_annotator::AsyncBatchAnnotateFiles::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }

    /// Provides the [Operations][lro::stub::Operations] service functionality in this service.
    ///
    /// Gets the latest state of a long-running operation.
    pub fn get_operation(&self) -> super::builder::image_annotator::GetOperation {
        super::builder::image_annotator::GetOperation::new(self.inner.clone(), self.config.clone())
    }

    /// Provides the [Operations][lro::stub::Operations] service functionality in this service.
    ///
    /// Starts asynchronous cancellation on a long-running operation.
    pub fn cancel_operation(&self) -> super::builder::image_annotator::CancelOperation {
        super::builder::image_annotator::CancelOperation::new(
            self.inner.clone(),
            self.config.clone(),
        )
    }
}
