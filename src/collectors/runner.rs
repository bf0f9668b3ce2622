use crate::collectors::{ListingSource, Vacancy};
use crate::error::AppError;
use crate::models::stats::{LanguageStats, StatsTable};

/// Build the statistics table for every language, one source at a time.
/// The first failing request aborts the whole table.
pub async fn collect_stats<S: ListingSource>(
    source: &S,
    languages: &[&str],
) -> Result<StatsTable, AppError> {
    let mut rows = Vec::with_capacity(languages.len());
    for language in languages {
        let stats = collect_language(source, language).await?;
        tracing::info!(
            "{}: {language}: {} found, {} processed, average {}",
            source.name(),
            stats.vacancies_found,
            stats.vacancies_processed,
            stats.average_salary
        );
        rows.push((language.to_string(), stats));
    }
    Ok(rows.into_iter().collect())
}

/// Page through every search result for one language, estimating a salary
/// for each vacancy.
pub async fn collect_language<S: ListingSource>(
    source: &S,
    language: &str,
) -> Result<LanguageStats, AppError> {
    let mut salaries = Vec::new();
    let mut found = None;
    let mut page = 0;

    loop {
        let listing = source.fetch_page(language, page).await?;
        found = listing.found.or(found);
        salaries.extend(listing.vacancies.iter().filter_map(|v| v.predict_rub_salary()));

        if !listing.has_next {
            break;
        }
        page += 1;
    }

    let found = found.unwrap_or_else(|| {
        tracing::warn!("{} reported no total for '{language}'", source.name());
        0
    });
    Ok(LanguageStats::from_salaries(found, &salaries))
}
