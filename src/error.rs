use thiserror::Error;

pub type TrellisResult<T> = Result<T, TrellisError>;

#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("duplicate mandatory trellis entry: `{first}` and `{second}`")]
    DuplicateMandatoryTrellis { first: String, second: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
