// Listing sources and the shared pagination/aggregation loop.

pub mod headhunter;
pub mod runner;
pub mod superjob;

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

pub const PAGE_SIZE: u32 = 100;

const USER_AGENT: &str = "salary-stats/0.1 (vacancy statistics)";

/// A vacancy record that may carry enough salary data to estimate a figure
/// in the local currency.
pub trait Vacancy {
    fn predict_rub_salary(&self) -> Option<i64>;
}

/// One decoded page of search results.
#[derive(Debug)]
pub struct ListingPage<V> {
    /// Total matches reported by the source, if it reported any.
    pub found: Option<u64>,
    /// Whether another page should be requested after this one.
    pub has_next: bool,
    pub vacancies: Vec<V>,
}

/// Trait that every listing source implements.
/// Each source knows how to request one page of results for a language and
/// how to translate its own pagination signal into `has_next`.
#[async_trait]
pub trait ListingSource: Send + Sync {
    type Vacancy: Vacancy + Send;

    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    async fn fetch_page(
        &self,
        language: &str,
        page: u32,
    ) -> Result<ListingPage<Self::Vacancy>, AppError>;
}

pub fn http_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(AppError::Client)
}

/// Decode each vacancy on its own so one malformed record does not sink the
/// rest of the page.
fn decode_vacancies<V: DeserializeOwned>(source_name: &str, raw: Vec<Value>) -> Vec<V> {
    raw.into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(vacancy) => Some(vacancy),
            Err(e) => {
                tracing::debug!("Skipping malformed {source_name} vacancy: {e}");
                None
            }
        })
        .collect()
}

/// Fail on non-success statuses, then decode the JSON body.
async fn read_json<T: DeserializeOwned>(
    source_name: &'static str,
    resp: Response,
) -> Result<T, AppError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(AppError::Status {
            source_name,
            status,
        });
    }

    resp.json()
        .await
        .map_err(|error| AppError::Decode { source_name, error })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_user_agent() {
        assert!(http_client().is_ok());
    }
}
