use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    Validation(String),

    #[error("{operation} is not supported in {agg_type} (see {reference})")]
    UnsupportedOperation {
        /// Wire name of the rejected parameter, e.g. `field`.
        operation: &'static str,
        /// Type tag of the aggregation that rejected it, e.g. `sampler`.
        agg_type: &'static str,
        /// Documentation URL explaining the restriction.
        reference: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
