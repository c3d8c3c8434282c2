use crate::domain::model::InstitutionReport;
use crate::utils::error::{EtlError, Result};
use serde::Serialize;

/// Run Report as human-readable JSON with 4-space indentation.
pub fn to_pretty_json(reports: &[InstitutionReport]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

    reports.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Run Report with no whitespace between tokens.
pub fn to_compact_json(reports: &[InstitutionReport]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(reports)?)
}

/// Flat CSV across all institutions: one row per resolved domain with
/// `record_exists` encoded as 0/1, rows in registry order then source
/// order.
pub fn to_csv(reports: &[InstitutionReport]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["domain", "record_exists", "institution"])?;

    for report in reports {
        for resolved in &report.resolved_domains {
            writer.write_record([
                resolved.domain.as_str(),
                if resolved.record_exists() { "1" } else { "0" },
                report.institution.name.as_str(),
            ])?;
        }
    }

    writer.flush()?;
    writer.into_inner().map_err(|e| {
        EtlError::IoError(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })
}
