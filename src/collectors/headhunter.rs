use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::collectors::{
    ListingPage, ListingSource, PAGE_SIZE, Vacancy, decode_vacancies, read_json,
};
use crate::error::AppError;

const SOURCE_NAME: &str = "headhunter";
const CURRENCY: &str = "RUR";
const SEARCH_PREFIX: &str = "программист";
/// Moscow.
const AREA: u32 = 1;
const DATE_FROM: &str = "2025-10-27";

#[derive(Debug, Deserialize)]
pub struct HhSalary {
    pub currency: Option<String>,
    pub from: Option<i64>,
    pub to: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct HhVacancy {
    pub salary: Option<HhSalary>,
}

impl Vacancy for HhVacancy {
    fn predict_rub_salary(&self) -> Option<i64> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(CURRENCY) {
            return None;
        }
        crate::salary::estimate(salary.from, salary.to)
    }
}

#[derive(Debug, Deserialize)]
pub struct HhSearchResponse {
    pub found: Option<u64>,
    pub pages: Option<u32>,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

impl HhSearchResponse {
    /// `pages` is the total page count; a missing count ends pagination.
    pub fn into_page(self, page: u32) -> ListingPage<HhVacancy> {
        ListingPage {
            found: self.found,
            has_next: self.pages.is_some_and(|pages| page + 1 < pages),
            vacancies: decode_vacancies(SOURCE_NAME, self.items),
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    text: &'a str,
    area: u32,
    date_from: &'a str,
    per_page: u32,
    page: u32,
}

pub struct HeadHunter {
    client: reqwest::Client,
    url: String,
}

impl HeadHunter {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    fn request(&self, language: &str, page: u32) -> reqwest::RequestBuilder {
        self.client.get(&self.url).query(&SearchParams {
            text: &search_text(language),
            area: AREA,
            date_from: DATE_FROM,
            per_page: PAGE_SIZE,
            page,
        })
    }
}

pub fn search_text(language: &str) -> String {
    format!("{SEARCH_PREFIX} {language}")
}

#[async_trait]
impl ListingSource for HeadHunter {
    type Vacancy = HhVacancy;

    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_page(
        &self,
        language: &str,
        page: u32,
    ) -> Result<ListingPage<HhVacancy>, AppError> {
        tracing::debug!("Requesting {SOURCE_NAME} page {page} for '{language}'");

        let resp = self
            .request(language, page)
            .send()
            .await
            .map_err(|error| AppError::Request {
                source_name: SOURCE_NAME,
                error,
            })?;

        let body: HhSearchResponse = read_json(SOURCE_NAME, resp).await?;
        Ok(body.into_page(page))
    }
}
