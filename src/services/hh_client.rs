use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::dto::hh_dto::{SearchPage, VacancyDetail};
use crate::error::{Error, Result};

/// Source of vacancy listings and details.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VacancySource: Send + Sync {
    async fn search_page(&self, text: &str, page: u32, per_page: u32) -> Result<SearchPage>;

    async fn vacancy_detail(&self, id: &str) -> Result<VacancyDetail>;
}

/// HTTP client for the hh.ru public vacancies API.
#[derive(Clone)]
pub struct HhClient {
    client: Client,
    base_url: Url,
}

impl HhClient {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.hh_user_agent.clone())
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self::new(client, config.hh_api_base_url.clone()))
    }

    /// Appends path segments to the base URL. Each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("API base URL {} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl VacancySource for HhClient {
    async fn search_page(&self, text: &str, page: u32, per_page: u32) -> Result<SearchPage> {
        let mut url = self.endpoint(&["vacancies"])?;
        url.query_pairs_mut()
            .append_pair("text", text)
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());
        tracing::debug!(%url, "Requesting search page");
        self.get_json(url).await
    }

    async fn vacancy_detail(&self, id: &str) -> Result<VacancyDetail> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(Error::MalformedRecord(format!("invalid vacancy id '{}'", id)));
        }
        let url = self.endpoint(&["vacancies", id])?;
        tracing::debug!(%url, "Requesting vacancy detail");
        self.get_json(url).await
    }
}
