use crate::models::stats::StatsTable;

const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Header row followed by one row per language, all cells as strings.
pub fn table_rows(stats: &StatsTable) -> Vec<[String; 4]> {
    let mut rows = Vec::with_capacity(stats.len() + 1);
    rows.push(HEADER.map(String::from));
    for row in stats.rows() {
        rows.push([
            row.language.clone(),
            row.stats.vacancies_found.to_string(),
            row.stats.vacancies_processed.to_string(),
            row.stats.average_salary.to_string(),
        ]);
    }
    rows
}

/// Render an ASCII grid with the title set into the top border:
///
/// ```text
/// +T------+-----+
/// | Lang  | ... |
/// +-------+-----+
/// | X     | ... |
/// +-------+-----+
/// ```
pub fn render_table(stats: &StatsTable, title: &str) -> String {
    let rows = table_rows(stats);

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut out = String::new();

    let title_len = title.chars().count();
    if title_len + 2 <= border.chars().count() {
        // Replace the leading dashes after the corner with the title.
        out.push('+');
        out.push_str(title);
        out.extend(border.chars().skip(1 + title_len));
    } else {
        out.push_str(title);
        out.push('\n');
        out.push_str(&border);
    }
    out.push('\n');

    for (i, row) in rows.iter().enumerate() {
        out.push('|');
        for (cell, width) in row.iter().zip(widths) {
            let pad = width - cell.chars().count();
            out.push(' ');
            out.push_str(cell);
            out.extend(std::iter::repeat_n(' ', pad + 1));
            out.push('|');
        }
        out.push('\n');
        if i == 0 {
            out.push_str(&border);
            out.push('\n');
        }
    }
    out.push_str(&border);

    out
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat_n('-', width + 2));
        line.push('+');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stats::LanguageStats;

    fn single_entry() -> StatsTable {
        [(
            "X".to_string(),
            LanguageStats {
                vacancies_found: 5,
                vacancies_processed: 1,
                average_salary: 110_000,
            },
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn rows_are_header_then_data() {
        let rows = table_rows(&single_entry());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], HEADER.map(String::from));
        assert_eq!(rows[1], ["X", "5", "1", "110000"].map(String::from));
    }

    #[test]
    fn rendered_table_shows_title_and_row() {
        let out = render_table(&single_entry(), "T");
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("+T-"));
        assert!(lines[1].contains("Язык программирования"));
        let data = lines[3];
        let cells: Vec<&str> = data.trim_matches('|').split('|').map(str::trim).collect();
        assert_eq!(cells, ["X", "5", "1", "110000"]);
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn lines_have_equal_width() {
        let out = render_table(&single_entry(), "HeadHunter Moscow");
        let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn empty_table_renders_header_only() {
        let out = render_table(&StatsTable::default(), "Empty");
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn overlong_title_goes_above_the_grid() {
        let title = "x".repeat(200);
        let out = render_table(&single_entry(), &title);
        assert_eq!(out.lines().next(), Some(title.as_str()));
    }
}
