//! Resource services.
//!
//! A [`Service`] binds one [`Resource`] type to a borrowed
//! [`HttpClient`] and exposes the uniform operation set: create, get, list,
//! update, delete and batch. Services are cheap views created on access by
//! [`RestClient`](crate::clients::RestClient); they hold no state besides the
//! resolved collection path.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::resources::{OrderNote, OrderNoteListParams};
//!
//! let notes = client.order_notes(723);
//! let note = notes
//!     .create(&OrderNote { note: Some("Packed".into()), ..Default::default() })
//!     .await?;
//! let all = notes.list(&OrderNoteListParams::default()).await?;
//! ```

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{Destination, HttpClient, HttpError, HttpMethod, Transport};
use crate::rest::resources::{Customer, CustomerDownload};
use crate::rest::{operation_path, BatchRequest, BatchResponse, Resource, ResourceOperation, ResourceResponse};

/// Operations on one resource collection.
///
/// Every operation makes exactly one logical call through the client's
/// executor and returns the decoded data with its response metadata.
#[derive(Debug)]
pub struct Service<'a, R, T> {
    client: &'a HttpClient<T>,
    collection: String,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource, T: Transport> Service<'a, R, T> {
    /// Creates a service for a top-level resource.
    ///
    /// Nested resources must go through [`nested`](Self::nested); their
    /// collection path has a placeholder only a parent id can fill.
    #[must_use]
    pub(crate) fn new(client: &'a HttpClient<T>) -> Self {
        debug_assert!(
            R::PARENT_ID.is_none(),
            "{} is nested and needs a parent id",
            R::NAME
        );
        Self::with_collection(client, R::collection_path(None))
    }

    /// Creates a service for a resource nested under `parent_id`.
    #[must_use]
    pub(crate) fn nested(client: &'a HttpClient<T>, parent_id: u64) -> Self {
        Self::with_collection(client, R::collection_path(Some(parent_id)))
    }

    fn with_collection(client: &'a HttpClient<T>, collection: String) -> Self {
        Self {
            client,
            collection,
            _resource: PhantomData,
        }
    }

    /// Returns the resolved collection path.
    #[must_use]
    pub fn collection_path(&self) -> &str {
        &self.collection
    }

    /// Returns the path of a single record.
    #[must_use]
    pub fn item_path(&self, id: u64) -> String {
        operation_path(ResourceOperation::Get, &self.collection, Some(id))
    }

    /// Creates a record (POST `{collection}`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn create(&self, record: &R) -> Result<ResourceResponse<R>, HttpError> {
        self.send::<R, (), R>(ResourceOperation::Create, None, None, Some(record))
            .await
    }

    /// Fetches a record by id (GET `{collection}/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails; a missing record is an
    /// [`ApiError`](crate::clients::ApiError) with status 404.
    pub async fn get(&self, id: u64) -> Result<ResourceResponse<R>, HttpError> {
        self.send::<R, (), ()>(ResourceOperation::Get, Some(id), None, None)
            .await
    }

    /// Fetches a record by id with query parameters.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn get_with_params(
        &self,
        id: u64,
        params: &R::GetParams,
    ) -> Result<ResourceResponse<R>, HttpError> {
        self.send::<R, _, ()>(ResourceOperation::Get, Some(id), Some(params), None)
            .await
    }

    /// Lists records matching `params` (GET `{collection}`).
    ///
    /// Page totals are available through
    /// [`ResourceResponse::total`] and [`ResourceResponse::total_pages`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn list(&self, params: &R::ListParams) -> Result<ResourceResponse<Vec<R>>, HttpError> {
        self.send::<Vec<R>, _, ()>(ResourceOperation::List, None, Some(params), None)
            .await
    }

    /// Updates a record (PUT `{collection}/{id}`).
    ///
    /// Only the fields set on `record` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn update(&self, id: u64, record: &R) -> Result<ResourceResponse<R>, HttpError> {
        self.send::<R, (), R>(ResourceOperation::Update, Some(id), None, Some(record))
            .await
    }

    /// Deletes a record (DELETE `{collection}/{id}`).
    ///
    /// Most resources are trashed unless `force` is set in `params`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn delete(
        &self,
        id: u64,
        params: &R::DeleteParams,
    ) -> Result<ResourceResponse<R>, HttpError> {
        self.send::<R, _, ()>(ResourceOperation::Delete, Some(id), Some(params), None)
            .await
    }

    /// Creates, updates and deletes records in one call
    /// (POST `{collection}/batch`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn batch(
        &self,
        request: &BatchRequest<R>,
    ) -> Result<ResourceResponse<BatchResponse<R>>, HttpError> {
        self.send::<BatchResponse<R>, (), _>(ResourceOperation::Batch, None, None, Some(request))
            .await
    }

    async fn send<D, Q, B>(
        &self,
        operation: ResourceOperation,
        id: Option<u64>,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<ResourceResponse<D>, HttpError>
    where
        D: DeserializeOwned + Default,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let path = operation_path(operation, &self.collection, id);
        self.fetch(operation.http_method(), &path, query, body).await
    }

    async fn fetch<D, Q, B>(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<ResourceResponse<D>, HttpError>
    where
        D: DeserializeOwned + Default,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        tracing::trace!(resource = R::NAME, %method, path, "Resource operation");

        let request = self.client.build_request(method, path, query, body)?;
        let mut data = D::default();
        let response = self
            .client
            .execute(&request, Destination::Json(&mut data))
            .await?;

        Ok(ResourceResponse::from_http_response(data, response))
    }
}

impl<T: Transport> Service<'_, Customer, T> {
    /// Lists the downloadable files a customer has access to
    /// (GET `customers/{id}/downloads`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn downloads(
        &self,
        customer_id: u64,
    ) -> Result<ResourceResponse<Vec<CustomerDownload>>, HttpError> {
        let path = format!("{}/downloads", self.item_path(customer_id));
        self.fetch::<Vec<CustomerDownload>, (), ()>(HttpMethod::Get, &path, None, None)
            .await
    }
}
