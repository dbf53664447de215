//! Readers for [SPARQL query results](https://www.w3.org/TR/sparql11-results-json/) documents.
//!
//! Parsing is done by [`sparesults`], this module only collects the solutions into an in-memory [`ResultTable`].
//!
//! ```
//! use oxont::results::{QueryResult, ResultsFormat, read_results};
//!
//! let json = br#"{"head":{"vars":["s"]},"results":{"bindings":[{"s":{"type":"uri","value":"http://example.com/a"}}]}}"#;
//! let QueryResult::Solutions(table) = read_results(json.as_slice(), ResultsFormat::Json)? else {
//!     unreachable!()
//! };
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.variables()[0].as_str(), "s");
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

use oxrdf::{Term, Variable};
use sparesults::{
    QueryResultsFormat, QueryResultsParseError, QueryResultsParser, QuerySolution,
    ReaderQueryResultsParserOutput,
};
use std::fmt;
use std::io::Read;
use std::sync::Arc;
use tracing::debug;

/// A SPARQL query results serialization format.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum ResultsFormat {
    /// [SPARQL Query Results CSV Format](https://www.w3.org/TR/sparql11-results-csv-tsv/)
    Csv,
    /// [SPARQL Query Results TSV Format](https://www.w3.org/TR/sparql11-results-csv-tsv/)
    Tsv,
    /// [SPARQL Query Results JSON Format](https://www.w3.org/TR/sparql11-results-json/)
    Json,
    /// [SPARQL Query Results XML Format](https://www.w3.org/TR/rdf-sparql-XMLres/)
    Xml,
}

impl ResultsFormat {
    /// Looks for a known format from a file extension like `srj` or `tsv`.
    ///
    /// ```
    /// use oxont::results::ResultsFormat;
    ///
    /// assert_eq!(ResultsFormat::from_extension("srj"), Some(ResultsFormat::Json));
    /// assert_eq!(ResultsFormat::from_extension("TSV"), Some(ResultsFormat::Tsv));
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        QueryResultsFormat::from_extension(&extension.to_ascii_lowercase()).and_then(Self::known)
    }

    /// Looks for a known format from a media type like `application/sparql-results+xml`.
    ///
    /// Media type parameters like `charset` are ignored.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        QueryResultsFormat::from_media_type(media_type).and_then(Self::known)
    }

    /// The format name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Tsv => "TSV",
            Self::Json => "JSON",
            Self::Xml => "XML",
        }
    }

    fn known(format: QueryResultsFormat) -> Option<Self> {
        match format {
            QueryResultsFormat::Csv => Some(Self::Csv),
            QueryResultsFormat::Tsv => Some(Self::Tsv),
            QueryResultsFormat::Json => Some(Self::Json),
            QueryResultsFormat::Xml => Some(Self::Xml),
            _ => None,
        }
    }
}

impl From<ResultsFormat> for QueryResultsFormat {
    #[inline]
    fn from(format: ResultsFormat) -> Self {
        match format {
            ResultsFormat::Csv => Self::Csv,
            ResultsFormat::Tsv => Self::Tsv,
            ResultsFormat::Json => Self::Json,
            ResultsFormat::Xml => Self::Xml,
        }
    }
}

impl fmt::Display for ResultsFormat {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned while reading query results.
#[derive(Debug, thiserror::Error)]
pub enum ResultsError {
    /// The document is not valid.
    #[error(transparent)]
    Parse(#[from] QueryResultsParseError),
    /// The format can't be read back.
    #[error("The {0} query results format can't be read because it does not keep term kinds")]
    UnsupportedFormat(ResultsFormat),
}

/// The content of a query results document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// Result of an `ASK` query.
    Boolean(bool),
    /// Solutions of a `SELECT` query.
    Solutions(ResultTable),
}

/// In-memory table of query solutions.
///
/// It can be iterated any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    variables: Arc<[Variable]>,
    rows: Vec<Vec<Option<Term>>>,
}

impl ResultTable {
    /// Builds a table from its variables and rows, each row giving one optional value per variable.
    pub fn new(
        variables: impl Into<Arc<[Variable]>>,
        rows: impl IntoIterator<Item = Vec<Option<Term>>>,
    ) -> Self {
        Self {
            variables: variables.into(),
            rows: rows.into_iter().collect(),
        }
    }

    /// The table columns.
    #[inline]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The rows, each row value being in the same position as its variable.
    #[inline]
    pub fn rows(&self) -> &[Vec<Option<Term>>] {
        &self.rows
    }

    /// The values of the `variable` column, `None` if the variable is not a column.
    pub fn column(&self, variable: &str) -> Option<Vec<Option<&Term>>> {
        let index = self
            .variables
            .iter()
            .position(|v| v.as_str() == variable)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).and_then(Option::as_ref))
                .collect(),
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates on the rows as [`QuerySolution`]s.
    pub fn solutions(&self) -> impl Iterator<Item = QuerySolution> + '_ {
        self.rows
            .iter()
            .map(|row| QuerySolution::from((Arc::clone(&self.variables), row.clone())))
    }
}

/// Reads a whole query results document.
///
/// CSV documents are rejected with [`ResultsError::UnsupportedFormat`]: they do not tell IRIs, blank nodes and literals apart.
pub fn read_results(reader: impl Read, format: ResultsFormat) -> Result<QueryResult, ResultsError> {
    if format == ResultsFormat::Csv {
        return Err(ResultsError::UnsupportedFormat(format));
    }
    match QueryResultsParser::from_format(format.into()).for_reader(reader)? {
        ReaderQueryResultsParserOutput::Boolean(value) => Ok(QueryResult::Boolean(value)),
        ReaderQueryResultsParserOutput::Solutions(solutions) => {
            let variables: Arc<[Variable]> = solutions.variables().into();
            let rows = solutions
                .map(|solution| Ok(solution?.values().to_vec()))
                .collect::<Result<Vec<_>, QueryResultsParseError>>()?;
            debug!(rows = rows.len(), format = %format, "Read query results");
            Ok(QueryResult::Solutions(ResultTable { variables, rows }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{Literal, NamedNode};

    fn table(result: QueryResult) -> ResultTable {
        match result {
            QueryResult::Solutions(table) => table,
            QueryResult::Boolean(_) => panic!("expected solutions"),
        }
    }

    #[test]
    fn formats() {
        assert_eq!(ResultsFormat::from_extension("srx"), Some(ResultsFormat::Xml));
        assert_eq!(ResultsFormat::from_extension("csv"), Some(ResultsFormat::Csv));
        assert_eq!(ResultsFormat::from_extension("ttl"), None);
        assert_eq!(
            ResultsFormat::from_media_type("application/sparql-results+json"),
            Some(ResultsFormat::Json)
        );
        assert_eq!(
            ResultsFormat::from_media_type("text/tab-separated-values; charset=utf-8"),
            Some(ResultsFormat::Tsv)
        );
    }

    #[test]
    fn json_solutions() -> Result<(), ResultsError> {
        let doc = r#"{
            "head": {"vars": ["s", "label"]},
            "results": {"bindings": [
                {"s": {"type": "uri", "value": "http://example.com/a"}, "label": {"type": "literal", "value": "a", "xml:lang": "en"}},
                {"s": {"type": "uri", "value": "http://example.com/b"}}
            ]}
        }"#;
        let table = table(read_results(doc.as_bytes(), ResultsFormat::Json)?);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.column("s"),
            Some(vec![
                Some(&NamedNode::new_unchecked("http://example.com/a").into()),
                Some(&NamedNode::new_unchecked("http://example.com/b").into()),
            ])
        );
        assert_eq!(
            table.column("label"),
            Some(vec![
                Some(&Literal::new_language_tagged_literal_unchecked("a", "en").into()),
                None
            ])
        );
        assert_eq!(table.column("o"), None);
        // Tables can be walked several times.
        assert_eq!(table.solutions().count(), 2);
        let first = table.solutions().next().map(|s| s.get("s").cloned());
        assert_eq!(
            first,
            Some(Some(NamedNode::new_unchecked("http://example.com/a").into()))
        );
        Ok(())
    }

    #[test]
    fn tsv_and_xml() -> Result<(), ResultsError> {
        let tsv = "?s\t?n\n<http://example.com/a>\t1\n";
        let table = table(read_results(tsv.as_bytes(), ResultsFormat::Tsv)?);
        assert_eq!(table.variables().len(), 2);
        assert_eq!(table.rows()[0][1], Some(Literal::from(1).into()));

        let xml = r#"<?xml version="1.0"?>
<sparql xmlns="http://www.w3.org/2005/sparql-results#">
  <head/>
  <boolean>true</boolean>
</sparql>"#;
        assert_eq!(
            read_results(xml.as_bytes(), ResultsFormat::Xml)?,
            QueryResult::Boolean(true)
        );
        Ok(())
    }

    #[test]
    fn csv_is_unsupported() {
        assert!(matches!(
            read_results("s\nhttp://example.com/a\n".as_bytes(), ResultsFormat::Csv),
            Err(ResultsError::UnsupportedFormat(ResultsFormat::Csv))
        ));
    }

    #[test]
    fn syntax_errors() {
        assert!(matches!(
            read_results("{".as_bytes(), ResultsFormat::Json),
            Err(ResultsError::Parse(_))
        ));
    }

    #[test]
    fn built_table() {
        let s = Variable::new_unchecked("s");
        let table = ResultTable::new(vec![s], [vec![None], vec![Some(Literal::from("x").into())]]);
        assert!(!table.is_empty());
        assert_eq!(table.column("s").map(|c| c.len()), Some(2));
    }
}
