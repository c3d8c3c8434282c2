pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::registry::Registry;
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::core::etl::EtlEngine;
pub use crate::core::http::{HttpClient, RetryPolicy};
pub use crate::core::pipeline::BlocklistPipeline;
pub use crate::utils::error::{EtlError, Result};
