use crate::domain::model::{Institution, ParsePolicy};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Ordered table of institutions whose block lists are audited. Fixed
/// for the lifetime of a run; changing it means changing configuration,
/// not runtime state.
#[derive(Debug, Clone, Deserialize)]
pub struct Registry {
    institutions: Vec<Institution>,
}

impl Registry {
    pub fn new(institutions: Vec<Institution>) -> Self {
        Self { institutions }
    }

    /// The built-in table of Lithuanian regulators.
    pub fn builtin() -> Self {
        Self::new(vec![
            Institution {
                name: "Lietuvos bankas".to_string(),
                source_url: "https://www.lb.lt/illegalwww?export=csv".to_string(),
                block_ips: vec!["193.219.8.149".to_string()],
                parsing_policy: ParsePolicy::CsvUrlColumn,
            },
            Institution {
                name: "LPT".to_string(),
                source_url: "https://lpt.lrv.lt/uploads/lpt/documents/files/neleg.txt"
                    .to_string(),
                block_ips: vec!["62.77.154.37".to_string()],
                parsing_policy: ParsePolicy::PlainLines,
            },
            Institution {
                name: "RTK".to_string(),
                source_url: "https://www.rtk.lt/uploads/documents/files/atviri-duomenys/neteisetos-veiklos-vykdytojai/svetaines_pazeidziancios_autoriu_teises_20211222.txt".to_string(),
                block_ips: vec!["88.119.87.40".to_string(), "92.61.36.174".to_string()],
                parsing_policy: ParsePolicy::PlainLines,
            },
            Institution {
                name: "VVTAT".to_string(),
                source_url: "https://www.vvtat.lt/data/public/uploads/2020/10/blokuojami-tinklapiai.txt".to_string(),
                block_ips: vec!["193.219.10.98".to_string()],
                parsing_policy: ParsePolicy::PlainLines,
            },
        ])
    }

    /// Load the table from a TOML document with an `[[institutions]]`
    /// array of tables. `parsing_policy` defaults to `plain_lines`.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        toml::from_str(&content).map_err(|e| EtlError::ConfigError {
            message: format!("cannot parse registry file {}: {}", path.display(), e),
        })
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }
}

impl Validate for Registry {
    fn validate(&self) -> Result<()> {
        if self.institutions.is_empty() {
            return Err(EtlError::ValidationError {
                message: "registry has no institutions".to_string(),
            });
        }

        for institution in &self.institutions {
            validate_non_empty_string("institutions.name", &institution.name)?;
            validate_url("institutions.source_url", &institution.source_url)?;
        }

        Ok(())
    }
}
