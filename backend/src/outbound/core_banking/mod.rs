//! Core banking system outbound adapters.

mod http_source;

pub use http_source::{CoreBankingHttpSource, CoreBankingSourceBuildError};
