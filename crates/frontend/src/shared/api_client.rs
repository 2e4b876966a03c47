//! Authorized JSON calls against the REST backend.
//!
//! Every call sends `Authorization: Bearer {token}` when a token is present
//! and decodes the `{ status: "success", data }` envelope into typed data or
//! an [`ApiError`].

use contracts::domain::common::Resource;
use contracts::shared::api::{decode_ack, decode_envelope, decode_page, ApiError, PageResult};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::{api_base, build_url};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

/// Query for collections that are only narrowed to a branch
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BranchScopeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_cabang: Option<i64>,
}

/// Query for plain GETs
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct NoQuery {}

pub fn encode_query<Q: Serialize>(query: &Q) -> Result<String, ApiError> {
    serde_qs::to_string(query).map_err(|e| ApiError::Decode(format!("query: {}", e)))
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            base: api_base(),
            token,
        }
    }

    fn url(&self, path: &str, query: &str) -> String {
        build_url(&self.base, path, query)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn read(response: Response) -> Result<(u16, String), ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok((status, body))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<(u16, String), ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<(u16, String), ApiError> {
        let response = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Decode(format!("request body: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    /// GET returning the envelope's `data`
    pub async fn get<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let url = self.url(path, &encode_query(query)?);
        log::debug!("GET {}", url);
        let (status, body) = self.send(Request::get(&url)).await?;
        decode_envelope(status, &body)
    }

    /// GET of a collection, paginated or not
    pub async fn get_page<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<PageResult<T>, ApiError> {
        let url = self.url(path, &encode_query(query)?);
        log::debug!("GET {}", url);
        let (status, body) = self.send(Request::get(&url)).await?;
        decode_page(status, &body)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path, "");
        log::debug!("POST {}", url);
        let (status, text) = self.send_json(Request::post(&url), body).await?;
        decode_envelope(status, &text)
    }

    pub async fn post_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(path, "");
        log::debug!("POST {}", url);
        let (status, text) = self.send_json(Request::post(&url), body).await?;
        decode_ack(status, &text)
    }

    pub async fn put_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(path, "");
        log::debug!("PUT {}", url);
        let (status, text) = self.send_json(Request::put(&url), body).await?;
        decode_ack(status, &text)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path, "");
        log::debug!("DELETE {}", url);
        let (status, text) = self.send(Request::delete(&url)).await?;
        decode_ack(status, &text)
    }

    /// Whole collection of a resource, optionally narrowed to a branch
    pub async fn fetch_all<T: Resource + DeserializeOwned>(
        &self,
        branch: Option<i64>,
    ) -> Result<PageResult<T>, ApiError> {
        self.get_page(&T::collection_path(), &BranchScopeQuery { id_cabang: branch })
            .await
    }

    pub async fn create<T: Resource, F: Serialize>(&self, form: &F) -> Result<(), ApiError> {
        self.post_ack(&T::collection_path(), form).await
    }

    pub async fn update<T: Resource, F: Serialize>(&self, id: i64, form: &F) -> Result<(), ApiError> {
        self.put_ack(&T::item_path(id), form).await
    }

    /// Update when `id` is known, otherwise create
    pub async fn save<T: Resource, F: Serialize>(&self, id: Option<i64>, form: &F) -> Result<(), ApiError> {
        match id {
            Some(id) => self.update::<T, F>(id, form).await,
            None => self.create::<T, F>(form).await,
        }
    }

    pub async fn remove<T: Resource>(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&T::item_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scope_encodes_to_nothing() {
        assert_eq!(encode_query(&BranchScopeQuery::default()).unwrap(), "");
        assert_eq!(
            encode_query(&BranchScopeQuery { id_cabang: Some(3) }).unwrap(),
            "id_cabang=3"
        );
    }

    #[test]
    fn no_query_is_empty() {
        assert_eq!(encode_query(&NoQuery {}).unwrap(), "");
    }
}
