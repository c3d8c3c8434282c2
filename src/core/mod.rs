pub mod etl;
pub mod fetch;
pub mod http;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod resolve;

pub use crate::domain::model::{InstitutionReport, RawBlockList, ResolvedDomain, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
