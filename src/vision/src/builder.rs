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


/// Request builders for [ProductSearch][crate::client::ProductSearch].
pub mod product_search {
    use crate::Result;
    use std::sync::Arc;

    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
        config: Arc<gax::client_config::ClientConfig>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self {
                stub,
                config,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }

        // The per-request options, with any unset option taken from the
        // client configuration.
        fn effective_options(&self) -> gax::options::RequestOptions {
            gax::options::internal::with_client_defaults(self.options.clone(), &self.config)
        }
    }

    /// The request builder for [ProductSearch::create_product_set][crate::client::ProductSearch::create_product_set] calls.
    #[derive(Clone, Debug)]
    pub struct CreateProductSet(RequestBuilder<crate::model::CreateProductSetRequest>);

    impl CreateProductSet {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateProductSetRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ProductSet> {
            let options = self.0.effective_options();
            (*self.0.stub).create_product_set(self.0.request, options).await
        }

        /// Sets the value of [parent][crate::model::CreateProductSetRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [product_set][crate::model::CreateProductSetRequest::product_set].
        pub fn set_product_set<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ProductSet>,
        {
            self.0.request.product_set = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [product_set][crate::model::CreateProductSetRequest::product_set].
        pub fn set_or_clear_product_set<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ProductSet>,
        {
            self.0.request.product_set = v.map(|x| x.into());
            self
        }

        /// Sets the value of [product_set_id][crate::model::CreateProductSetRequest::product_set_id].
        pub fn set_product_set_id<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.product_set_id = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for CreateProductSet {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::list_product_sets][crate::client::ProductSearch::list_product_sets] calls.
    #[derive(Clone, Debug)]
    pub struct ListProductSets(RequestBuilder<crate::model::ListProductSetsRequest>);

    impl ListProductSets {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListProductSetsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListProductSetsResponse> {
            let options = self.0.effective_options();
            (*self.0.stub).list_product_sets(self.0.request, options).await
        }

        /// Streams each page in the collection.
        #[cfg(feature = "unstable-stream")]
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListProductSetsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        #[cfg(feature = "unstable-stream")]
        pub fn by_item(self) -> impl futures::Stream<Item = Result<crate::model::ProductSet>> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListProductSetsRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListProductSetsRequest::page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListProductSetsRequest::page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ListProductSets {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::get_product_set][crate::client::ProductSearch::get_product_set] calls.
    #[derive(Clone, Debug)]
    pub struct GetProductSet(RequestBuilder<crate::model::GetProductSetRequest>);

    impl GetProductSet {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetProductSetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ProductSet> {
            let options = self.0.effective_options();
            (*self.0.stub).get_product_set(self.0.request, options).await
        }

        /// Sets the value of [name][crate::model::GetProductSetRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for GetProductSet {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::update_product_set][crate::client::ProductSearch::update_product_set] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateProductSet(RequestBuilder<crate::model::UpdateProductSetRequest>);

    impl UpdateProductSet {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateProductSetRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ProductSet> {
            let options = self.0.effective_options();
            (*self.0.stub).update_product_set(self.0.request, options).await
        }

        /// Sets the value of [product_set][crate::model::UpdateProductSetRequest::product_set].
        pub fn set_product_set<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ProductSet>,
        {
            self.0.request.product_set = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [product_set][crate::model::UpdateProductSetRequest::product_set].
        pub fn set_or_clear_product_set<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ProductSet>,
        {
            self.0.request.product_set = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateProductSetRequest::update_mask].
        pub fn set_update_mask<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::FieldMask>,
        {
            self.0.request.update_mask = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateProductSetRequest::update_mask].
        pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::FieldMask>,
        {
            self.0.request.update_mask = v.map(|x| x.into());
            self
        }
    }

    impl gax::options::internal::RequestBuilder for UpdateProductSet {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::delete_product_set][crate::client::ProductSearch::delete_product_set] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteProductSet(RequestBuilder<crate::model::DeleteProductSetRequest>);

    impl DeleteProductSet {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteProductSetRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let options = self.0.effective_options();
            (*self.0.stub).delete_product_set(self.0.request, options).await
        }

        /// Sets the value of [name][crate::model::DeleteProductSetRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for DeleteProductSet {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::create_product][crate::client::ProductSearch::create_product] calls.
    #[derive(Clone, Debug)]
    pub struct CreateProduct(RequestBuilder<crate::model::CreateProductRequest>);

    impl CreateProduct {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateProductRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Product> {
            let options = self.0.effective_options();
            (*self.0.stub).create_product(self.0.request, options).await
        }

        /// Sets the value of [parent][crate::model::CreateProductRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [product][crate::model::CreateProductRequest::product].
        pub fn set_product<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Product>,
        {
            self.0.request.product = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [product][crate::model::CreateProductRequest::product].
        pub fn set_or_clear_product<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Product>,
        {
            self.0.request.product = v.map(|x| x.into());
            self
        }

        /// Sets the value of [product_id][crate::model::CreateProductRequest::product_id].
        pub fn set_product_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.product_id = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for CreateProduct {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::list_products][crate::client::ProductSearch::list_products] calls.
    #[derive(Clone, Debug)]
    pub struct ListProducts(RequestBuilder<crate::model::ListProductsRequest>);

    impl ListProducts {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListProductsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListProductsResponse> {
            let options = self.0.effective_options();
            (*self.0.stub).list_products(self.0.request, options).await
        }

        /// Streams each page in the collection.
        #[cfg(feature = "unstable-stream")]
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListProductsResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        #[cfg(feature = "unstable-stream")]
        pub fn by_item(self) -> impl futures::Stream<Item = Result<crate::model::Product>> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListProductsRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListProductsRequest::page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListProductsRequest::page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ListProducts {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::get_product][crate::client::ProductSearch::get_product] calls.
    #[derive(Clone, Debug)]
    pub struct GetProduct(RequestBuilder<crate::model::GetProductRequest>);

    impl GetProduct {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetProductRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Product> {
            let options = self.0.effective_options();
            (*self.0.stub).get_product(self.0.request, options).await
        }

        /// Sets the value of [name][crate::model::GetProductRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for GetProduct {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::update_product][crate::client::ProductSearch::update_product] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateProduct(RequestBuilder<crate::model::UpdateProductRequest>);

    impl UpdateProduct {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateProductRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Product> {
            let options = self.0.effective_options();
            (*self.0.stub).update_product(self.0.request, options).await
        }

        /// Sets the value of [product][crate::model::UpdateProductRequest::product].
        pub fn set_product<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Product>,
        {
            self.0.request.product = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [product][crate::model::UpdateProductRequest::product].
        pub fn set_or_clear_product<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Product>,
        {
            self.0.request.product = v.map(|x| x.into());
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateProductRequest::update_mask].
        pub fn set_update_mask<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::FieldMask>,
        {
            self.0.request.update_mask = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateProductRequest::update_mask].
        pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::FieldMask>,
        {
            self.0.request.update_mask = v.map(|x| x.into());
            self
        }
    }

    impl gax::options::internal::RequestBuilder for UpdateProduct {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::delete_product][crate::client::ProductSearch::delete_product] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteProduct(RequestBuilder<crate::model::DeleteProductRequest>);

    impl DeleteProduct {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteProductRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let options = self.0.effective_options();
            (*self.0.stub).delete_product(self.0.request, options).await
        }

        /// Sets the value of [name][crate::model::DeleteProductRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for DeleteProduct {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::create_reference_image][crate::client::ProductSearch::create_reference_image] calls.
    #[derive(Clone, Debug)]
    pub struct CreateReferenceImage(RequestBuilder<crate::model::CreateReferenceImageRequest>);

    impl CreateReferenceImage {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateReferenceImageRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ReferenceImage> {
            let options = self.0.effective_options();
            (*self.0.stub).create_reference_image(self.0.request, options).await
        }

        /// Sets the value of [parent][crate::model::CreateReferenceImageRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [reference_image][crate::model::CreateReferenceImageRequest::reference_image].
        pub fn set_reference_image<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ReferenceImage>,
        {
            self.0.request.reference_image = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [reference_image][crate::model::CreateReferenceImageRequest::reference_image].
        pub fn set_or_clear_reference_image<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ReferenceImage>,
        {
            self.0.request.reference_image = v.map(|x| x.into());
            self
        }

        /// Sets the value of [reference_image_id][crate::model::CreateReferenceImageRequest::reference_image_id].
        pub fn set_reference_image_id<T: std::convert::Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.reference_image_id = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for CreateReferenceImage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::delete_reference_image][crate::client::ProductSearch::delete_reference_image] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteReferenceImage(RequestBuilder<crate::model::DeleteReferenceImageRequest>);

    impl DeleteReferenceImage {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteReferenceImageRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let options = self.0.effective_options();
            (*self.0.stub).delete_reference_image(self.0.request, options).await
        }

        /// Sets the value of [name][crate::model::DeleteReferenceImageRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for DeleteReferenceImage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::list_reference_images][crate::client::ProductSearch::list_reference_images] calls.
    #[derive(Clone, Debug)]
    pub struct ListReferenceImages(RequestBuilder<crate::model::ListReferenceImagesRequest>);

    impl ListReferenceImages {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListReferenceImagesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListReferenceImagesResponse> {
            let options = self.0.effective_options();
            (*self.0.stub).list_reference_images(self.0.request, options).await
        }

        /// Streams each page in the collection.
        #[cfg(feature = "unstable-stream")]
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::ListReferenceImagesResponse,
            gax::error::Error,
        > {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        #[cfg(feature = "unstable-stream")]
        pub fn by_item(self) -> impl futures::Stream<Item = Result<crate::model::ReferenceImage>> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListReferenceImagesRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListReferenceImagesRequest::page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListReferenceImagesRequest::page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ListReferenceImages {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::get_reference_image][crate::client::ProductSearch::get_reference_image] calls.
    #[derive(Clone, Debug)]
    pub struct GetReferenceImage(RequestBuilder<crate::model::GetReferenceImageRequest>);

    impl GetReferenceImage {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetReferenceImageRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ReferenceImage> {
            let options = self.0.effective_options();
            (*self.0.stub).get_reference_image(self.0.request, options).await
        }

        /// Sets the value of [name][crate::model::GetReferenceImageRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for GetReferenceImage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::add_product_to_product_set][crate::client::ProductSearch::add_product_to_product_set] calls.
    #[derive(Clone, Debug)]
    pub struct AddProductToProductSet(RequestBuilder<crate::model::AddProductToProductSetRequest>);

    impl AddProductToProductSet {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddProductToProductSetRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let options = self.0.effective_options();
            (*self.0.stub).add_product_to_product_set(self.0.request, options).await
        }

        /// Sets the value of [name][crate::model::AddProductToProductSetRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [product][crate::model::AddProductToProductSetRequest::product].
        pub fn set_product<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.product = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for AddProductToProductSet {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::remove_product_from_product_set][crate::client::ProductSearch::remove_product_from_product_set] calls.
    #[derive(Clone, Debug)]
    pub struct RemoveProductFromProductSet(
        RequestBuilder<crate::model::RemoveProductFromProductSetRequest>,
    );

    impl RemoveProductFromProductSet {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemoveProductFromProductSetRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let options = self.0.effective_options();
            (*self.0.stub).remove_product_from_product_set(self.0.request, options).await
        }

        /// Sets the value of [name][crate::model::RemoveProductFromProductSetRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [product][crate::model::RemoveProductFromProductSetRequest::product].
        pub fn set_product<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.product = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for RemoveProductFromProductSet {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::list_products_in_product_set][crate::client::ProductSearch::list_products_in_product_set] calls.
    #[derive(Clone, Debug)]
    pub struct ListProductsInProductSet(
        RequestBuilder<crate::model::ListProductsInProductSetRequest>,
    );

    impl ListProductsInProductSet {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListProductsInProductSetRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListProductsInProductSetResponse> {
            let options = self.0.effective_options();
            (*self.0.stub).list_products_in_product_set(self.0.request, options).await
        }

        /// Streams each page in the collection.
        #[cfg(feature = "unstable-stream")]
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::ListProductsInProductSetResponse,
            gax::error::Error,
        > {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        #[cfg(feature = "unstable-stream")]
        pub fn by_item(self) -> impl futures::Stream<Item = Result<crate::model::Product>> {
            self.by_page().items()
        }

        /// Sets the value of [name][crate::model::ListProductsInProductSetRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListProductsInProductSetRequest::page_size].
        pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListProductsInProductSetRequest::page_token].
        pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ListProductsInProductSet {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::import_product_sets][crate::client::ProductSearch::import_product_sets] calls.
    #[derive(Clone, Debug)]
    pub struct ImportProductSets(RequestBuilder<crate::model::ImportProductSetsRequest>);

    impl ImportProductSets {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ImportProductSetsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// details in [ProductSearch::import_product_sets][crate::client::ProductSearch::import_product_sets].
        pub async fn send(self) -> Result<lro::model::Operation> {
            let options = self.0.effective_options();
            (*self.0.stub).import_product_sets(self.0.request, options).await
        }

        /// Starts the operation and returns a handle to track it.
        ///
        /// The handle polls the operation with the polling policies in the
        /// request options, or the client configuration.
        pub async fn start(
            self,
        ) -> Result<
            lro::OperationHandle<
                crate::model::ImportProductSetsResponse,
                crate::model::BatchOperationMetadata,
            >,
        > {
            let options = self.0.effective_options();
            let stub = self.0.stub.clone();
            let initial = (*stub).import_product_sets(self.0.request, options.clone()).await?;
            let operations = crate::operations::ProductSearchOperations::new(stub);
            Ok(lro::OperationHandle::new(
                initial,
                Arc::new(operations),
                crate::long_running::import_product_sets(),
            )
            .with_request_options(options))
        }

        /// Starts the operation and waits until it completes.
        pub async fn until_done(self) -> Result<crate::model::ImportProductSetsResponse> {
            self.start().await?.wait().await
        }

        /// Sets the value of [parent][crate::model::ImportProductSetsRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [input_config][crate::model::ImportProductSetsRequest::input_config].
        pub fn set_input_config<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ImportProductSetsInputConfig>,
        {
            self.0.request.input_config = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [input_config][crate::model::ImportProductSetsRequest::input_config].
        pub fn set_or_clear_input_config<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ImportProductSetsInputConfig>,
        {
            self.0.request.input_config = v.map(|x| x.into());
            self
        }
    }

    impl gax::options::internal::RequestBuilder for ImportProductSets {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::purge_products][crate::client::ProductSearch::purge_products] calls.
    #[derive(Clone, Debug)]
    pub struct PurgeProducts(RequestBuilder<crate::model::PurgeProductsRequest>);

    impl PurgeProducts {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PurgeProductsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// details in [ProductSearch::purge_products][crate::client::ProductSearch::purge_products].
        pub async fn send(self) -> Result<lro::model::Operation> {
            let options = self.0.effective_options();
            (*self.0.stub).purge_products(self.0.request, options).await
        }

        /// Starts the operation and returns a handle to track it.
        ///
        /// The handle polls the operation with the polling policies in the
        /// request options, or the client configuration.
        pub async fn start(
            self,
        ) -> Result<
            lro::OperationHandle<
                wkt::Empty,
                crate::model::BatchOperationMetadata,
            >,
        > {
            let options = self.0.effective_options();
            let stub = self.0.stub.clone();
            let initial = (*stub).purge_products(self.0.request, options.clone()).await?;
            let operations = crate::operations::ProductSearchOperations::new(stub);
            Ok(lro::OperationHandle::new(
                initial,
                Arc::new(operations),
                crate::long_running::purge_products(),
            )
            .with_request_options(options))
        }

        /// Starts the operation and waits until it completes.
        pub async fn until_done(self) -> Result<wkt::Empty> {
            self.start().await?.wait().await
        }

        /// Sets the value of [parent][crate::model::PurgeProductsRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [product_set_purge_config][crate::model::PurgeProductsRequest::product_set_purge_config].
        pub fn set_product_set_purge_config<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ProductSetPurgeConfig>,
        {
            self.0.request.product_set_purge_config = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [product_set_purge_config][crate::model::PurgeProductsRequest::product_set_purge_config].
        pub fn set_or_clear_product_set_purge_config<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ProductSetPurgeConfig>,
        {
            self.0.request.product_set_purge_config = v.map(|x| x.into());
            self
        }

        /// Sets the value of [delete_orphan_products][crate::model::PurgeProductsRequest::delete_orphan_products].
        pub fn set_delete_orphan_products<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.delete_orphan_products = v.into();
            self
        }

        /// Sets the value of [force][crate::model::PurgeProductsRequest::force].
        pub fn set_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.force = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for PurgeProducts {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::get_operation][crate::client::ProductSearch::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<lro::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<lro::model::GetOperationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<lro::model::Operation> {
            let options = self.0.effective_options();
            (*self.0.stub).get_operation(self.0.request, options).await
        }

        /// Sets the value of [name][lro::model::GetOperationRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::cancel_operation][crate::client::ProductSearch::cancel_operation] calls.
    #[derive(Clone, Debug)]
    pub struct CancelOperation(RequestBuilder<lro::model::CancelOperationRequest>);

    impl CancelOperation {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ProductSearch>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<lro::model::CancelOperationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let options = self.0.effective_options();
            (*self.0.stub).cancel_operation(self.0.request, options).await
        }

        /// Sets the value of [name][lro::model::CancelOperationRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for CancelOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

/// Request builders for [ImageAnnotator][crate::client::ImageAnnotator].
pub mod image_annotator {
    use crate::Result;
    use std::sync::Arc;

    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn crate::stub::dynamic::ImageAnnotator>,
        config: Arc<gax::client_config::ClientConfig>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ImageAnnotator>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self {
                stub,
                config,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }

        // The per-request options, with any unset option taken from the
        // client configuration.
        fn effective_options(&self) -> gax::options::RequestOptions {
            gax::options::internal::with_client_defaults(self.options.clone(), &self.config)
        }
    }

    /// The request builder for [ImageAnnotator::batch_annotate_images][crate::client::ImageAnnotator::batch_annotate_images] calls.
    #[derive(Clone, Debug)]
    pub struct BatchAnnotateImages(RequestBuilder<crate::model::BatchAnnotateImagesRequest>);

    impl BatchAnnotateImages {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ImageAnnotator>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::BatchAnnotateImagesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BatchAnnotateImagesResponse> {
            let options = self.0.effective_options();
            (*self.0.stub).batch_annotate_images(self.0.request, options).await
        }

        /// Sets the value of [requests][crate::model::BatchAnnotateImagesRequest::requests].
        pub fn set_requests<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::AnnotateImageRequest>,
        {
            use std::iter::Iterator;
            self.0.request.requests = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [parent][crate::model::BatchAnnotateImagesRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for BatchAnnotateImages {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ImageAnnotator::batch_annotate_files][crate::client::ImageAnnotator::batch_annotate_files] calls.
    #[derive(Clone, Debug)]
    pub struct BatchAnnotateFiles(RequestBuilder<crate::model::BatchAnnotateFilesRequest>);

    impl BatchAnnotateFiles {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ImageAnnotator>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::BatchAnnotateFilesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BatchAnnotateFilesResponse> {
            let options = self.0.effective_options();
            (*self.0.stub).batch_annotate_files(self.0.request, options).await
        }

        /// Sets the value of [requests][crate::model::BatchAnnotateFilesRequest::requests].
        pub fn set_requests<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::AnnotateFileRequest>,
        {
            use std::iter::Iterator;
            self.0.request.requests = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [parent][crate::model::BatchAnnotateFilesRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for BatchAnnotateFiles {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ImageAnnotator::async_batch_annotate_images][crate::client::ImageAnnotator::async_batch_annotate_images] calls.
    #[derive(Clone, Debug)]
    pub struct AsyncBatchAnnotateImages(
        RequestBuilder<crate::model::AsyncBatchAnnotateImagesRequest>,
    );

    impl AsyncBatchAnnotateImages {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ImageAnnotator>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AsyncBatchAnnotateImagesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// details in [ImageAnnotator::async_batch_annotate_images][crate::client::ImageAnnotator::async_batch_annotate_images].
        pub async fn send(self) -> Result<lro::model::Operation> {
            let options = self.0.effective_options();
            (*self.0.stub).async_batch_annotate_images(self.0.request, options).await
        }

        /// Starts the operation and returns a handle to track it.
        ///
        /// The handle polls the operation with the polling policies in the
        /// request options, or the client configuration.
        pub async fn start(
            self,
        ) -> Result<
            lro::OperationHandle<
                crate::model::AsyncBatchAnnotateImagesResponse,
                crate::model::OperationMetadata,
            >,
        > {
            let options = self.0.effective_options();
            let stub = self.0.stub.clone();
            let initial = (*stub)
                .async_batch_annotate_images(self.0.request, options.clone())
                .await?;
            let operations = crate::operations::ImageAnnotatorOperations::new(stub);
            Ok(lro::OperationHandle::new(
                initial,
                Arc::new(operations),
                crate::long_running::async_batch_annotate_images(),
            )
            .with_request_options(options))
        }

        /// Starts the operation and waits until it completes.
        pub async fn until_done(self) -> Result<crate::model::AsyncBatchAnnotateImagesResponse> {
            self.start().await?.wait().await
        }

        /// Sets the value of [requests][crate::model::AsyncBatchAnnotateImagesRequest::requests].
        pub fn set_requests<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::AnnotateImageRequest>,
        {
            use std::iter::Iterator;
            self.0.request.requests = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [output_config][crate::model::AsyncBatchAnnotateImagesRequest::output_config].
        pub fn set_output_config<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::OutputConfig>,
        {
            self.0.request.output_config = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [output_config][crate::model::AsyncBatchAnnotateImagesRequest::output_config].
        pub fn set_or_clear_output_config<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::OutputConfig>,
        {
            self.0.request.output_config = v.map(|x| x.into());
            self
        }

        /// Sets the value of [parent][crate::model::AsyncBatchAnnotateImagesRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for AsyncBatchAnnotateImages {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ImageAnnotator::async_batch_annotate_files][crate::client::ImageAnnotator::async_batch_annotate_files] calls.
    #[derive(Clone, Debug)]
    pub struct AsyncBatchAnnotateFiles(
        RequestBuilder<crate::model::AsyncBatchAnnotateFilesRequest>,
    );

    impl AsyncBatchAnnotateFiles {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ImageAnnotator>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AsyncBatchAnnotateFilesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// details in [ImageAnnotator::async_batch_annotate_files][crate::client::ImageAnnotator::async_batch_annotate_files].
        pub async fn send(self) -> Result<lro::model::Operation> {
            let options = self.0.effective_options();
            (*self.0.stub).async_batch_annotate_files(self.0.request, options).await
        }

        /// Starts the operation and returns a handle to track it.
        ///
        /// The handle polls the operation with the polling policies in the
        /// request options, or the client configuration.
        pub async fn start(
            self,
        ) -> Result<
            lro::OperationHandle<
                crate::model::AsyncBatchAnnotateFilesResponse,
                crate::model::OperationMetadata,
            >,
        > {
            let options = self.0.effective_options();
            let stub = self.0.stub.clone();
            let initial = (*stub)
                .async_batch_annotate_files(self.0.request, options.clone())
                .await?;
            let operations = crate::operations::ImageAnnotatorOperations::new(stub);
            Ok(lro::OperationHandle::new(
                initial,
                Arc::new(operations),
                crate::long_running::async_batch_annotate_files(),
            )
            .with_request_options(options))
        }

        /// Starts the operation and waits until it completes.
        pub async fn until_done(self) -> Result<crate::model::AsyncBatchAnnotateFilesResponse> {
            self.start().await?.wait().await
        }

        /// Sets the value of [requests][crate::model::AsyncBatchAnnotateFilesRequest::requests].
        pub fn set_requests<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::AsyncAnnotateFileRequest>,
        {
            use std::iter::Iterator;
            self.0.request.requests = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [parent][crate::model::AsyncBatchAnnotateFilesRequest::parent].
        pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for AsyncBatchAnnotateFiles {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ImageAnnotator::get_operation][crate::client::ImageAnnotator::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<lro::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ImageAnnotator>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<lro::model::GetOperationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<lro::model::Operation> {
            let options = self.0.effective_options();
            (*self.0.stub).get_operation(self.0.request, options).await
        }

        /// Sets the value of [name][lro::model::GetOperationRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ImageAnnotator::cancel_operation][crate::client::ImageAnnotator::cancel_operation] calls.
    #[derive(Clone, Debug)]
    pub struct CancelOperation(RequestBuilder<lro::model::CancelOperationRequest>);

    impl CancelOperation {
        pub(crate) fn new(
            stub: Arc<dyn crate::stub::dynamic::ImageAnnotator>,
            config: Arc<gax::client_config::ClientConfig>,
        ) -> Self {
            Self(RequestBuilder::new(stub, config))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<lro::model::CancelOperationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let options = self.0.effective_options();
            (*self.0.stub).cancel_operation(self.0.request, options).await
        }

        /// Sets the value of [name][lro::model::CancelOperationRequest::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    impl gax::options::internal::RequestBuilder for CancelOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
