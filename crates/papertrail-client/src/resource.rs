//! Shared CRUD plumbing for the resource clients
//!
//! Every PaperTrail resource follows the same layout: `POST` and `PUT` on the
//! collection path carry the entity, `GET` and `DELETE` address one item by
//! id. [`ResourceEndpoint`] binds that layout to one collection so each
//! client only states its paths and types.

use papertrail_core::ports::HttpMethod;
use serde::Serialize;
use url::Url;

use crate::base_url::{item_url, join_collection};
use crate::engine::{ApiRequest, HttpServiceEngine, ResponseShape};
use crate::outcome::Outcome;
use crate::ClientError;

#[derive(Debug, Clone)]
pub(crate) struct ResourceEndpoint {
    engine: HttpServiceEngine,
    collection: Url,
}

impl ResourceEndpoint {
    pub(crate) fn new(
        engine: HttpServiceEngine,
        base_url: &Url,
        collection_path: &str,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            engine,
            collection: join_collection(base_url, collection_path)?,
        })
    }

    #[cfg(test)]
    pub(crate) fn collection_url(&self) -> &Url {
        &self.collection
    }

    /// `POST {collection}` with `entity` as the body
    pub(crate) async fn create<B, T>(&self, entity: &B) -> Result<Outcome<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: ResponseShape,
    {
        let request = ApiRequest::new(HttpMethod::Post, self.collection.clone()).json(entity)?;
        self.engine.execute(request).await
    }

    /// `GET {collection}/{id}`
    pub(crate) async fn read<T: ResponseShape>(&self, id: &str) -> Result<Outcome<T>, ClientError> {
        let request = ApiRequest::new(HttpMethod::Get, item_url(&self.collection, id)?);
        self.engine.execute(request).await
    }

    /// `PUT {collection}` with `entity` as the body
    pub(crate) async fn update<B, T>(&self, entity: &B) -> Result<Outcome<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: ResponseShape,
    {
        let request = ApiRequest::new(HttpMethod::Put, self.collection.clone()).json(entity)?;
        self.engine.execute(request).await
    }

    /// `DELETE {collection}/{id}`, expecting no body back
    pub(crate) async fn delete(&self, id: &str) -> Result<Outcome<()>, ClientError> {
        let request = ApiRequest::new(HttpMethod::Delete, item_url(&self.collection, id)?);
        self.engine.execute(request).await
    }
}
