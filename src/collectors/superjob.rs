use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::collectors::{
    ListingPage, ListingSource, PAGE_SIZE, Vacancy, decode_vacancies, read_json,
};
use crate::error::AppError;

const SOURCE_NAME: &str = "superjob";
const CURRENCY: &str = "rub";
const API_KEY_HEADER: &str = "X-Api-App-Id";
/// Moscow.
const TOWN: u32 = 4;

#[derive(Debug, Deserialize)]
pub struct SjVacancy {
    pub payment_from: Option<i64>,
    pub payment_to: Option<i64>,
    pub currency: Option<String>,
}

impl Vacancy for SjVacancy {
    /// SuperJob uses 0 as a placeholder for an unspecified bound.
    fn predict_rub_salary(&self) -> Option<i64> {
        if self.currency.as_deref() != Some(CURRENCY) {
            return None;
        }
        let specified = |bound: Option<i64>| bound.filter(|v| *v != 0);
        crate::salary::estimate(specified(self.payment_from), specified(self.payment_to))
    }
}

#[derive(Debug, Deserialize)]
pub struct SjSearchResponse {
    pub total: Option<u64>,
    pub more: Option<bool>,
    #[serde(default)]
    pub objects: Vec<serde_json::Value>,
}

impl SjSearchResponse {
    /// `more` is a plain flag; null or missing ends pagination.
    pub fn into_page(self) -> ListingPage<SjVacancy> {
        ListingPage {
            found: self.total,
            has_next: self.more.unwrap_or(false),
            vacancies: decode_vacancies(SOURCE_NAME, self.objects),
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    keyword: &'a str,
    town: u32,
    count: u32,
    page: u32,
}

pub struct SuperJob {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl SuperJob {
    pub fn new(client: reqwest::Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    fn request(&self, language: &str, page: u32) -> reqwest::RequestBuilder {
        self.client
            .get(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&SearchParams {
                keyword: language,
                town: TOWN,
                count: PAGE_SIZE,
                page,
            })
    }
}

#[async_trait]
impl ListingSource for SuperJob {
    type Vacancy = SjVacancy;

    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_page(
        &self,
        language: &str,
        page: u32,
    ) -> Result<ListingPage<SjVacancy>, AppError> {
        tracing::debug!("Requesting {SOURCE_NAME} page {page} for '{language}'");

        let resp = self
            .request(language, page)
            .send()
            .await
            .map_err(|error| AppError::Request {
                source_name: SOURCE_NAME,
                error,
            })?;

        let body: SjSearchResponse = read_json(SOURCE_NAME, resp).await?;
        Ok(body.into_page())
    }
}
