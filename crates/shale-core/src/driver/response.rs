/// Result of executing a single statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    /// Number of rows impacted by the statement. DDL usually reports zero.
    pub rows_affected: u64,
}

impl Response {
    pub fn count(rows_affected: u64) -> Self {
        Self { rows_affected }
    }
}
