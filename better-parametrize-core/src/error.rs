pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Occurs when the value passed as a schema does not expose an ordered
    /// field list. The message is fixed so callers can match on it.
    #[error("schema must expose an ordered field list")]
    Schema,
    /// Occurs when a testcase does not provide a field declared by its
    /// schema. `case` is the zero-based position of the offending testcase.
    #[error("testcase #{case} is missing the declared field \"{field}\"")]
    FieldMissing { case: usize, field: String },
}
