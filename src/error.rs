use thiserror::Error;

pub type Result<T> = std::result::Result<T, BotornotError>;

#[derive(Debug, Error)]
pub enum BotornotError {
    #[error("scoring model returned unparseable probability: `{raw}`")]
    MalformedScore { raw: String },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("empty credential pool")]
    EmptyPool,
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}
