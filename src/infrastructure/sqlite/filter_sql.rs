use crate::domain::values::filter::RecordFilter;
use rusqlite::types::ToSql;

/// Escapes LIKE metacharacters so a search term matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Appends the WHERE conditions for `filter` to `sql`, pushing the
/// matching parameter values onto `params`.
///
/// The substring predicate applies to each of `text_cols`; when the
/// search term parses as an integer it is OR-combined with exact
/// equality on `id_col`. The date predicate closes over `created_at`
/// with the filter's inclusive UTC bounds.
pub fn push_filter_clauses(
    sql: &mut String,
    params: &mut Vec<Box<dyn ToSql>>,
    filter: &RecordFilter,
    text_cols: &[&str],
    id_col: &str,
) {
    if let Some(search) = filter.search() {
        let pattern = format!("%{}%", escape_like(search));
        let mut parts: Vec<String> = Vec::new();
        for col in text_cols {
            params.push(Box::new(pattern.clone()));
            parts.push(format!("{col} LIKE ?{} ESCAPE '\\'", params.len()));
        }
        if let Some(id) = filter.id_match() {
            params.push(Box::new(id));
            parts.push(format!("{id_col} = ?{}", params.len()));
        }
        sql.push_str(&format!(" AND ({})", parts.join(" OR ")));
    }
    if let Some((start, end)) = filter.range() {
        params.push(Box::new(start.to_rfc3339()));
        sql.push_str(&format!(" AND created_at >= ?{}", params.len()));
        params.push(Box::new(end.to_rfc3339()));
        sql.push_str(&format!(" AND created_at <= ?{}", params.len()));
    }
}
