//! Output formatting for the CLI.

use crate::error::Result;
use crate::models::{MessageRecord, ProbeReport};

const BANNER: &str = "=== Database Test Results ===";
const RULE: &str = "=============================";

fn format_created_at(record: &MessageRecord) -> String {
    match record.created_at {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        None => "(unknown)".to_string(),
    }
}

/// Render the report as the plain-text listing.
pub fn format_report(report: &ProbeReport) -> String {
    let mut lines = vec![
        BANNER.to_string(),
        format!("Found {} messages:", report.messages.len()),
    ];

    for (index, record) in report.messages.iter().enumerate() {
        lines.push(format!("{}. {record}", index + 1));
        lines.push(format!("   Created at: {}", format_created_at(record)));
    }

    lines.push(RULE.to_string());
    lines.push(format!("Total messages in database: {}", report.total));
    lines.push("Database test completed successfully!".to_string());
    lines.join("\n")
}

/// Render the report as pretty JSON.
pub fn format_report_json(report: &ProbeReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_report() -> ProbeReport {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_milli_opt(12, 30, 0, 250)
            .unwrap();
        ProbeReport {
            messages: vec![
                MessageRecord {
                    id: 1,
                    message: "Hello from PostgreSQL!".to_string(),
                    created_at: Some(ts),
                },
                MessageRecord {
                    id: 2,
                    message: "CI/CD test is working".to_string(),
                    created_at: None,
                },
            ],
            total: 2,
            inserted: 2,
        }
    }

    #[test]
    fn test_format_report_lists_each_record() {
        let text = format_report(&sample_report());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=== Database Test Results ===");
        assert_eq!(lines[1], "Found 2 messages:");
        assert_eq!(lines[2], "1. [ID: 1] Hello from PostgreSQL!");
        assert_eq!(lines[3], "   Created at: 2024-05-01 12:30:00.250");
        assert_eq!(lines[4], "2. [ID: 2] CI/CD test is working");
        assert_eq!(lines[5], "   Created at: (unknown)");
        assert!(text.ends_with("Database test completed successfully!"));
    }

    #[test]
    fn test_format_report_empty() {
        let report = ProbeReport {
            messages: vec![],
            total: 0,
            inserted: 0,
        };
        let text = format_report(&report);
        assert!(text.contains("Found 0 messages:"));
        assert!(text.contains("Total messages in database: 0"));
    }

    #[test]
    fn test_format_report_json() {
        let json = format_report_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 2);
        assert_eq!(value["messages"][0]["message"], "Hello from PostgreSQL!");
        assert_eq!(value["messages"][0]["created_at"], "2024-05-01T12:30:00.250");
        assert!(value["messages"][1]["created_at"].is_null());
    }
}
