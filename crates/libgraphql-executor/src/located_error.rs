/// A line/column position within a GraphQL document, as reported alongside
/// errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}
impl std::convert::From<graphql_parser::Pos> for SourcePosition {
    fn from(pos: graphql_parser::Pos) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
        }
    }
}

/// An error entry as it appears in an [`ExecutionResult`](crate::ExecutionResult):
/// a message plus the document positions (and response path) it relates to.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize, thiserror::Error)]
#[error("{message}")]
pub struct LocatedError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SourcePosition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
}
impl LocatedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: vec![],
        }
    }

    pub fn with_locations(
        mut self,
        locations: impl IntoIterator<Item = SourcePosition>,
    ) -> Self {
        self.locations = locations.into_iter().collect();
        self
    }

    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }
}
