use thiserror::Error;

/// Error type for the metrics engine
///
/// `NoData` and `UndefinedTrend` are recoverable markers rather than
/// failures: an aggregate that requires at least one record was asked to
/// summarize zero records, or a trend baseline was exactly zero. The
/// orchestrator converts both into absent fields so the corresponding
/// insight is simply omitted. The remaining variants only occur on the
/// export path.
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("no records in the selected window")]
    NoData,

    #[error("trend is undefined: baseline window mean is zero")]
    UndefinedTrend,

    #[error("unknown province: {0}")]
    UnknownProvince(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MetricsError {
    /// Check whether this error is an absent-value marker that downstream
    /// consumers recover from by omitting the affected result
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoData | Self::UndefinedTrend)
    }
}

/// Result type alias for the metrics engine
pub type Result<T> = std::result::Result<T, MetricsError>;
