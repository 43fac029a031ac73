//! Stateless HTTP client for the generic resource endpoints. No business
//! logic here; views decide what the errors mean to the user.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::{FormData, RequestCredentials};

use crate::config::CONFIG;
use crate::models::{
    AboutMe, AboutMeUpdateResponse, ItemsResponse, Resource, UpdateMethod,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("Unexpected response format: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    fn collection_url(&self, endpoint: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, endpoint)
    }

    fn item_url(&self, endpoint: &str, id: &str) -> String {
        format!("{}/api/v1/{}/{}", self.base_url, endpoint, id)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&response)?;
        Ok(response)
    }

    async fn parse<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetch the full collection for a resource.
    pub async fn fetch_items<T: Resource>(&self) -> Result<Vec<T>, ApiError> {
        let response = self.send(Request::get(&self.collection_url(T::ENDPOINT))).await?;
        let envelope: ItemsResponse<T> = self.parse(response).await?;
        Ok(envelope.items)
    }

    /// Create or update a JSON resource, depending on whether it has an id.
    pub async fn save<T: Resource>(&self, item: &T) -> Result<(), ApiError> {
        let builder = match item.id() {
            Some(id) => {
                let url = self.item_url(T::ENDPOINT, id);
                match T::UPDATE_METHOD {
                    UpdateMethod::Patch => Request::patch(&url),
                    UpdateMethod::Put => Request::put(&url),
                }
            }
            None => Request::post(&self.collection_url(T::ENDPOINT)),
        };

        let request = builder
            .credentials(RequestCredentials::Include)
            .json(item)
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&response)
    }

    /// Create or update a file-bearing resource via multipart form data.
    /// The browser sets the multipart boundary itself.
    pub async fn save_form<T: Resource>(
        &self,
        id: Option<&str>,
        form: &FormData,
    ) -> Result<(), ApiError> {
        let builder = match id {
            Some(id) => Request::patch(&self.item_url(T::ENDPOINT, id)),
            None => Request::post(&self.collection_url(T::ENDPOINT)),
        };

        let request = builder
            .credentials(RequestCredentials::Include)
            .body(form.clone())
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&response)
    }

    pub async fn delete<T: Resource>(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.item_url(T::ENDPOINT, id))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&response)
    }

    /// The About-Me singleton has no id; a 404 means nothing is stored yet.
    pub async fn fetch_about_me(&self) -> Result<Option<AboutMe>, ApiError> {
        let response = Request::get(&self.collection_url("about-me"))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Ok(None);
        }
        check_status(&response)?;

        let about_me: AboutMe = self.parse(response).await?;
        Ok(Some(about_me))
    }

    pub async fn update_about_me(&self, form: &FormData) -> Result<AboutMe, ApiError> {
        let request = Request::patch(&self.collection_url("about-me"))
            .credentials(RequestCredentials::Include)
            .body(form.clone())
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&response)?;

        let updated: AboutMeUpdateResponse = self.parse(response).await?;
        Ok(updated.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Technology;

    #[test]
    fn urls_are_rooted_at_api_v1() {
        let client = ApiClient {
            base_url: "http://localhost:3000".to_string(),
        };
        assert_eq!(
            client.collection_url(Technology::ENDPOINT),
            "http://localhost:3000/api/v1/technologies"
        );
        assert_eq!(
            client.item_url(Technology::ENDPOINT, "t1"),
            "http://localhost:3000/api/v1/technologies/t1"
        );
    }

    #[test]
    fn status_accessor_only_reports_http_failures() {
        assert_eq!(ApiError::Status(400).status(), Some(400));
        assert_eq!(ApiError::Network("offline".to_string()).status(), None);
        assert_eq!(ApiError::Parse("bad json".to_string()).status(), None);
    }

    #[test]
    fn errors_render_user_readable_text() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP 500");
        assert_eq!(
            ApiError::Network("timed out".to_string()).to_string(),
            "Network error: timed out"
        );
    }
}
