use crate::lines::{LineTable, Match};

/// Search state a caller keeps between find requests.
///
/// Holds the last query so a "find next" or a reopened prompt can reuse it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindSession {
    last_query: Option<String>,
}

impl FindSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `query` already remembered.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            last_query: Some(query.into()),
        }
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Remembers `query` and returns its first match in the document.
    pub fn find(&mut self, table: &LineTable, query: &str) -> Option<Match> {
        self.last_query = Some(query.to_string());
        table.find(query, 0)
    }

    /// Next match of the remembered query after `offset`, wrapping to the
    /// start of the document once.
    pub fn find_next(&self, table: &LineTable, offset: usize) -> Option<Match> {
        let query = self.last_query.as_deref()?;
        table
            .find(query, offset.saturating_add(1))
            .or_else(|| table.find(query, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::LineTerminator;

    fn table() -> LineTable {
        LineTable::new(
            vec![
                r#"{"id":1,"label":"range"}"#.to_string(),
                r#"{"id":2,"label":"document"}"#.to_string(),
                r#"{"id":3,"label":"range"}"#.to_string(),
            ],
            LineTerminator::Lf,
        )
    }

    #[test]
    fn test_find_remembers_query() {
        let table = table();
        let mut session = FindSession::new();
        assert_eq!(session.last_query(), None);

        let first = session.find(&table, "range").unwrap();
        assert_eq!(first.line, 0);
        assert_eq!(session.last_query(), Some("range"));
    }

    #[test]
    fn test_find_next_advances_and_wraps() {
        let table = table();
        let mut session = FindSession::new();

        let first = session.find(&table, "range").unwrap();
        let second = session.find_next(&table, first.offset).unwrap();
        assert_eq!(second.line, 2);

        let wrapped = session.find_next(&table, second.offset).unwrap();
        assert_eq!(wrapped, first);
    }

    #[test]
    fn test_find_next_without_query() {
        assert_eq!(FindSession::new().find_next(&table(), 0), None);
    }

    #[test]
    fn test_prefilled_query() {
        let session = FindSession::with_query("document");
        let found = session.find_next(&table(), 0).unwrap();
        assert_eq!(found.line, 1);
    }

    #[test]
    fn test_miss_still_remembers_query() {
        let mut session = FindSession::new();
        assert_eq!(session.find(&table(), "moniker"), None);
        assert_eq!(session.last_query(), Some("moniker"));
    }
}
