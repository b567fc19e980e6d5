use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// One line of the append-only shipping audit trail. Written for every
/// pipeline outcome so an operator can reconstruct what was sent to the
/// carrier without database access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub timestamp: String,
    pub event_type: String,
    pub order_number: String,
    pub waybill: Option<String>,
    pub label_url: Option<String>,
    pub error: Option<String>,
}

impl AuditEvent {
    pub fn new(event_type: &str, order_number: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            event_type: event_type.to_string(),
            order_number: order_number.to_string(),
            waybill: None,
            label_url: None,
            error: None,
        }
    }

    pub fn with_waybill(mut self, waybill: String) -> Self {
        self.waybill = Some(waybill);
        self
    }

    pub fn with_label_url(mut self, label_url: Option<String>) -> Self {
        self.label_url = label_url;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }
}

fn audit_log_path() -> PathBuf {
    PathBuf::from("shipping_audit.jsonl")
}

pub fn write_audit_event(event: &AuditEvent) -> Result<()> {
    let path = audit_log_path();
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    let json = serde_json::to_string(event)?;
    writeln!(file, "{}", json)?;
    tracing::debug!(event_type=%event.event_type, order=%event.order_number, "Audit event written");
    Ok(())
}
