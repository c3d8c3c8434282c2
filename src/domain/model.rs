use serde::{Deserialize, Serialize};

/// How an institution's published payload is turned into domain names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    #[default]
    PlainLines,
    CsvUrlColumn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    pub source_url: String,
    pub block_ips: Vec<String>,
    // Configuration detail, not part of the report contract.
    #[serde(default, skip_serializing)]
    pub parsing_policy: ParsePolicy,
}

/// One institution's payload as fetched, before parsing.
#[derive(Debug, Clone)]
pub struct RawBlockList {
    pub institution: Institution,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedDomain {
    pub domain: String,
    pub status: u32,
    pub ips: Vec<String>,
}

impl ResolvedDomain {
    pub fn record_exists(&self) -> bool {
        !self.ips.is_empty()
    }
}

/// Resolution results for one institution, in source-payload order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionReport {
    pub institution: Institution,
    pub resolved_domains: Vec<ResolvedDomain>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub reports: Vec<InstitutionReport>,
}
