use crate::checker::FileReport;
use crate::error::Result;

use super::OutputFormatter;

/// Machine-readable JSON output over the report structs.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let json = serde_json::to_string_pretty(reports)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
