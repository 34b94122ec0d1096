use crate::model::*;

/// Parse one line of the query source.
///
/// Blank lines and lines with `#` in the first column yield `Ok(None)`.
/// Otherwise the first three whitespace-separated tokens are command,
/// resource id and date; anything after the date is ignored.
pub fn parse_line(line: &str) -> Result<Option<Query>, QueryError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = trimmed.split_whitespace();
    let token = tokens.next().unwrap_or_default();
    let command =
        Command::from_token(token).ok_or_else(|| QueryError::UnknownCommand(token.to_string()))?;
    let resource_id = tokens.next().ok_or(QueryError::MissingField("resource id"))?;
    let date = tokens.next().ok_or(QueryError::MissingField("date"))?;

    Ok(Some(Query::new(command, resource_id, date)))
}

/// Parse the whole query source. The first bad line aborts with its
/// 1-based line number.
pub fn parse_queries(text: &str) -> Result<Vec<Query>, QueryError> {
    let mut queries = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(query)) => queries.push(query),
            Ok(None) => {}
            Err(e) => {
                return Err(QueryError::AtLine {
                    line: idx + 1,
                    source: Box::new(e),
                });
            }
        }
    }
    Ok(queries)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    UnknownCommand(String),
    MissingField(&'static str),
    AtLine { line: usize, source: Box<QueryError> },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::UnknownCommand(cmd) => {
                let supported: Vec<String> =
                    Command::SUPPORTED.iter().map(|c| format!("'{c}'")).collect();
                write!(
                    f,
                    "command '{cmd}' is not supported; supported commands: {}",
                    supported.join(", ")
                )
            }
            QueryError::MissingField(field) => write!(f, "missing {field}"),
            QueryError::AtLine { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::AtLine { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl QueryError {
    /// The error without line-number wrapping.
    pub fn root(&self) -> &QueryError {
        match self {
            QueryError::AtLine { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_each_command() {
        let cases = [
            ("book V1 2024-01-01", Command::Book),
            ("is_booked V1 2024-01-01", Command::IsBooked),
            ("is_all_booked V1 2024-01-01", Command::IsAllBooked),
            ("is_available V1 2024-01-01", Command::IsAvailable),
        ];
        for (line, expected) in cases {
            let q = parse_line(line).unwrap().unwrap();
            assert_eq!(q, Query::new(expected, "V1", "2024-01-01"));
        }
    }

    #[test]
    fn blank_and_comment_lines_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \t").unwrap(), None);
        assert_eq!(parse_line("# book V1 2024-01-01").unwrap(), None);
        assert_eq!(parse_line("#").unwrap(), None);
    }

    #[test]
    fn indented_hash_is_not_a_comment() {
        assert_eq!(
            parse_line("   # book V1 2024-01-01").unwrap_err(),
            QueryError::UnknownCommand("#".into())
        );
        let err = parse_queries("book V1 2024-01-01\n\t#note V1 2024-01-01\n").unwrap_err();
        assert!(matches!(err, QueryError::AtLine { line: 2, .. }));
        assert_eq!(err.root(), &QueryError::UnknownCommand("#note".into()));
    }

    #[test]
    fn extra_whitespace_tolerated() {
        let q = parse_line("  book\tV1    2024-01-01  ").unwrap().unwrap();
        assert_eq!(q, Query::new(Command::Book, "V1", "2024-01-01"));
    }

    #[test]
    fn trailing_tokens_ignored() {
        let q = parse_line("book V1 2024-01-01 please").unwrap().unwrap();
        assert_eq!(q.date, "2024-01-01");
    }

    #[test]
    fn unknown_command_rejected() {
        let err = parse_line("cancel V1 2024-01-01").unwrap_err();
        assert_eq!(err, QueryError::UnknownCommand("cancel".into()));
        let msg = err.to_string();
        assert!(msg.contains("'cancel'"));
        assert!(msg.contains("'is_all_booked'"));
    }

    #[test]
    fn commands_are_case_sensitive() {
        assert!(matches!(parse_line("BOOK V1 2024-01-01"), Err(QueryError::UnknownCommand(_))));
    }

    #[test]
    fn missing_fields_rejected() {
        assert_eq!(parse_line("book").unwrap_err(), QueryError::MissingField("resource id"));
        assert_eq!(parse_line("book V1").unwrap_err(), QueryError::MissingField("date"));
    }

    #[test]
    fn long_ids_parse() {
        let id = "V".repeat(5_000);
        let q = parse_line(&format!("is_available {id} 2024-01-01")).unwrap().unwrap();
        assert_eq!(q, Query::new(Command::IsAvailable, id, "2024-01-01"));
    }

    #[test]
    fn parse_queries_keeps_order_and_skips_noise() {
        let text = "# header\nbook V1 2024-01-01\n\nis_booked V1 2024-01-01\n   \nis_available B1 2024-01-02\n";
        let queries = parse_queries(text).unwrap();
        assert_eq!(
            queries,
            vec![
                Query::new(Command::Book, "V1", "2024-01-01"),
                Query::new(Command::IsBooked, "V1", "2024-01-01"),
                Query::new(Command::IsAvailable, "B1", "2024-01-02"),
            ]
        );
    }

    #[test]
    fn parse_queries_handles_crlf() {
        let queries = parse_queries("book V1 2024-01-01\r\nis_booked V1 2024-01-01\r\n").unwrap();
        assert_eq!(queries[1], Query::new(Command::IsBooked, "V1", "2024-01-01"));
    }

    #[test]
    fn parse_queries_reports_line_number() {
        let text = "book V1 2024-01-01\n# ok\nreserve V1 2024-01-01\n";
        let err = parse_queries(text).unwrap_err();
        match &err {
            QueryError::AtLine { line, .. } => assert_eq!(*line, 3),
            other => panic!("expected AtLine, got {other:?}"),
        }
        assert_eq!(err.root(), &QueryError::UnknownCommand("reserve".into()));
        assert!(err.to_string().starts_with("line 3: command 'reserve'"));
    }

    #[test]
    fn empty_source_is_empty_batch() {
        assert!(parse_queries("").unwrap().is_empty());
    }
}
