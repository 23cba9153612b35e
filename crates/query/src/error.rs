use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The call carried no arguments at all, so there is no data to query.
    #[error("collect expects at least a data argument")]
    MissingData,
}
