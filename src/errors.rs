use thiserror::Error;

#[derive(Error, Debug)]
pub enum TracerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid scenario: {0}")]
    InvalidConfig(String),

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    #[error("step too large at t = {time}: |B| dt = {phase} exceeds {limit}")]
    StepTooLarge { time: f64, phase: f64, limit: f64 },

    #[error("state became non-finite at t = {time}")]
    NonFinite { time: f64 },
}

pub type TracerResult<T> = Result<T, TracerError>;
