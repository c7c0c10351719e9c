use gloo_net::http::{Request, RequestBuilder, Response};

use super::{catalog_from, reply_from, ActivityApi, Endpoint};
use crate::error::ApiError;
use crate::model::{ActivityCatalog, Reply};

/// `ActivityApi` over `fetch`, rooted at a configurable base URL.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpActivityApi {
    base: String,
}

impl HttpActivityApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn send(&self, endpoint: Endpoint<'_>) -> Result<Response, ApiError> {
        let url = endpoint.url(&self.base);
        let request: RequestBuilder = match endpoint {
            Endpoint::List => Request::get(&url),
            Endpoint::Signup { .. } => Request::post(&url),
            Endpoint::Unregister { .. } => Request::delete(&url),
        };
        Ok(request.send().await?)
    }
}

async fn read_reply(resp: Response) -> Result<Reply, ApiError> {
    let body = resp.text().await?;
    reply_from(resp.status(), resp.ok(), &body)
}

impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let resp = self.send(Endpoint::List).await?;
        let body = resp.text().await?;
        catalog_from(resp.status(), resp.ok(), &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Reply, ApiError> {
        let resp = self.send(Endpoint::Signup { activity, email }).await?;
        read_reply(resp).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Reply, ApiError> {
        let resp = self.send(Endpoint::Unregister { activity, email }).await?;
        read_reply(resp).await
    }
}
