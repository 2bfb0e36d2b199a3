use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::models::{Property, PropertyDraft, PropertyPatch, SavedRecord};
use crate::storage::traits::StoreTrait;

/// Remote record-store backend.
///
/// Talks JSON to a record API exposing `/properties` and `/saved`
/// collections. A 404 on an id-targeted route is the domain miss for that
/// collection; every other failure is reported as a transport error.
pub struct ApiStore {
    client: Client,
    base_url: String,
}

impl ApiStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(EngineError::transport)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = response.error_for_status().map_err(EngineError::transport)?;
        response.json().await.map_err(EngineError::transport)
    }
}

#[async_trait]
impl StoreTrait for ApiStore {
    async fn fetch_properties(&self) -> Result<Vec<Property>> {
        let url = self.url("properties");
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(EngineError::transport)?;
        Self::decode(response).await
    }

    async fn fetch_property_by_id(&self, id: u32) -> Result<Property> {
        let url = self.url(&format!("properties/{id}"));
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(EngineError::transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(EngineError::PropertyNotFound { id });
        }
        Self::decode(response).await
    }

    async fn create_property(&self, draft: PropertyDraft) -> Result<Property> {
        let url = self.url("properties");
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(&draft)
            .send()
            .await
            .map_err(EngineError::transport)?;
        Self::decode(response).await
    }

    async fn update_property(&self, id: u32, patch: PropertyPatch) -> Result<Property> {
        let url = self.url(&format!("properties/{id}"));
        debug!("PATCH {}", url);
        let response = self
            .client
            .patch(&url)
            .json(&patch)
            .send()
            .await
            .map_err(EngineError::transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(EngineError::PropertyNotFound { id });
        }
        Self::decode(response).await
    }

    async fn delete_property(&self, id: u32) -> Result<Property> {
        let url = self.url(&format!("properties/{id}"));
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(EngineError::transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(EngineError::PropertyNotFound { id });
        }
        Self::decode(response).await
    }

    async fn fetch_saved_records(&self) -> Result<Vec<SavedRecord>> {
        let url = self.url("saved");
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(EngineError::transport)?;
        Self::decode(response).await
    }

    async fn create_saved_record(&self, property_id: u32) -> Result<SavedRecord> {
        let url = self.url("saved");
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "propertyId": property_id }))
            .send()
            .await
            .map_err(EngineError::transport)?;
        Self::decode(response).await
    }

    async fn delete_saved_record(&self, id: u32) -> Result<()> {
        let url = self.url(&format!("saved/{id}"));
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(EngineError::transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(EngineError::SavedRecordNotFound { id });
        }
        response.error_for_status().map_err(EngineError::transport)?;
        Ok(())
    }

    async fn update_saved_record(&self, id: u32, notes: &str) -> Result<SavedRecord> {
        let url = self.url(&format!("saved/{id}"));
        debug!("PATCH {}", url);
        let response = self
            .client
            .patch(&url)
            .json(&json!({ "notes": notes }))
            .send()
            .await
            .map_err(EngineError::transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(EngineError::SavedRecordNotFound { id });
        }
        Self::decode(response).await
    }
}
