use crate::domain::model::{Institution, ParsePolicy};
use crate::utils::error::{EtlError, Result};
use url::Url;

/// Extract candidate domains from an institution's raw payload.
///
/// Order is preserved and duplicates pass through unchanged; this stage
/// does not deduplicate.
pub fn parse(institution: &Institution, raw_text: &str) -> Result<Vec<String>> {
    match institution.parsing_policy {
        ParsePolicy::PlainLines => Ok(parse_plain_lines(raw_text)),
        ParsePolicy::CsvUrlColumn => parse_csv_url_column(institution, raw_text),
    }
}

fn parse_plain_lines(raw_text: &str) -> Vec<String> {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Semicolon-delimited CSV whose first column holds full URLs. The first
/// row is a header and is skipped regardless of content. A row whose
/// first field is not a parseable URL fails the run rather than being
/// silently dropped.
fn parse_csv_url_column(institution: &Institution, raw_text: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(raw_text.as_bytes());

    let mut domains = Vec::new();

    for record in reader.records() {
        let record = record?;
        let field = record.get(0).map(str::trim).unwrap_or("");

        let url = Url::parse(field).map_err(|e| EtlError::ParseError {
            institution: institution.name.clone(),
            value: field.to_string(),
            reason: format!("not a valid URL: {}", e),
        })?;

        let host = url.host_str().ok_or_else(|| EtlError::ParseError {
            institution: institution.name.clone(),
            value: field.to_string(),
            reason: "URL has no host component".to_string(),
        })?;

        let domain = host.strip_prefix("www.").unwrap_or(host);
        if !domain.is_empty() {
            domains.push(domain.to_string());
        }
    }

    Ok(domains)
}
