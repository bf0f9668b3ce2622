/// Aggregate figures for one language on one listing source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageStats {
    /// Total matches reported by the source. May exceed the number of
    /// vacancies actually paged through on this run.
    pub vacancies_found: u64,
    /// Vacancies with an estimable salary.
    pub vacancies_processed: u64,
    /// Truncated mean of the estimated salaries, 0 when none were estimable.
    pub average_salary: i64,
}

impl LanguageStats {
    pub fn from_salaries(vacancies_found: u64, salaries: &[i64]) -> Self {
        let vacancies_processed = salaries.len() as u64;
        let average_salary = if salaries.is_empty() {
            0
        } else {
            let total: i128 = salaries.iter().map(|&s| i128::from(s)).sum();
            (total as f64 / salaries.len() as f64) as i64
        };

        Self {
            vacancies_found,
            vacancies_processed,
            average_salary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    pub language: String,
    pub stats: LanguageStats,
}

/// Per-language statistics for a single source, in the order the languages
/// were requested.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsTable {
    rows: Vec<LanguageRow>,
}

impl StatsTable {
    pub fn rows(&self) -> &[LanguageRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
impl StatsTable {
    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.rows
            .iter()
            .find(|row| row.language == language)
            .map(|row| &row.stats)
    }
}

impl FromIterator<(String, LanguageStats)> for StatsTable {
    fn from_iter<I: IntoIterator<Item = (String, LanguageStats)>>(iter: I) -> Self {
        let rows = iter
            .into_iter()
            .map(|(language, stats)| LanguageRow { language, stats })
            .collect();
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_truncates() {
        let stats = LanguageStats::from_salaries(10, &[100, 200, 300]);
        assert_eq!(stats.vacancies_found, 10);
        assert_eq!(stats.vacancies_processed, 3);
        assert_eq!(stats.average_salary, 200);

        let stats = LanguageStats::from_salaries(2, &[100, 101]);
        assert_eq!(stats.average_salary, 100);
    }

    #[test]
    fn large_salaries_do_not_overflow_the_sum() {
        let stats = LanguageStats::from_salaries(2, &[i64::MAX, i64::MAX]);
        assert_eq!(stats.vacancies_processed, 2);
        assert_eq!(stats.average_salary, i64::MAX);
    }

    #[test]
    fn empty_salaries_average_to_zero() {
        let stats = LanguageStats::from_salaries(7, &[]);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, 0);
    }

    #[test]
    fn table_keeps_insertion_order() {
        let table: StatsTable = ["Ruby", "C", "Go"]
            .into_iter()
            .map(|lang| (lang.to_string(), LanguageStats::default()))
            .collect();

        let languages: Vec<&str> = table.rows().iter().map(|r| r.language.as_str()).collect();
        assert_eq!(languages, ["Ruby", "C", "Go"]);
        assert!(table.get("C").is_some());
        assert!(table.get("Rust").is_none());
    }
}
