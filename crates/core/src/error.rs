use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid {field} url `{raw}`: {reason}")]
    InvalidUrl {
        field: &'static str,
        raw: String,
        reason: String,
    },
    #[error("unknown promotion variant `{0}` (expected `landing` or `donate`)")]
    UnknownPromoVariant(String),
}
