use snafu::Snafu;

use super::StoreId;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LaybuyError {
    #[snafu(display("laybuy is not configured for store {store_id:?}: merchant id or api key is missing"))]
    NotConfigured { store_id: Option<StoreId> },
    #[snafu(display("unable to process refund"))]
    RefundFailed,
    #[snafu(display("{message}"))]
    Transport {
        message: String,
        source: reqwest::Error,
    },
    #[snafu(display("{message}"))]
    Decode {
        message: String,
        source: serde_json::Error,
    },
    #[snafu(display("laybuy response is not a json object"))]
    NotAnObject,
    #[snafu(display("invalid path segment {segment:?}"))]
    InvalidPathSegment { segment: String },
    #[snafu(display("{message}"))]
    Unexpected {
        message: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
