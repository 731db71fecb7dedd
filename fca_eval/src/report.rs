//! # Audit Report Envelope
//!
//! Outcome containers the rule-runner fills as it walks a rule set.
//! Designed for serialization to JSON and ingestion by SIEM/reporting
//! backends. Checks carrying an operator `control` annotation are
//! bucketed separately and never counted as failures.

use crate::verdict::Verdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one evaluated check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Check identifier from the rule document (e.g. a CIS tag).
    pub audit_id: String,

    /// Human-readable check description, if the document carries one.
    pub description: Option<String>,

    pub verdict: Verdict,

    /// Expected value echoed from the rule spec.
    pub expected: Option<serde_json::Value>,

    /// Observed value the check evaluated.
    pub found: Option<serde_json::Value>,
}

impl CheckOutcome {
    pub fn new(audit_id: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            audit_id: audit_id.into(),
            description: None,
            verdict,
            expected: None,
            found: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_expected(mut self, expected: serde_json::Value) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn with_found(mut self, found: serde_json::Value) -> Self {
        self.found = Some(found);
        self
    }
}

/// Overall audit status derived from the bucket counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    /// Every evaluated check passed.
    Compliant,

    /// At least one check failed.
    NonCompliant,

    /// Some checks could not be evaluated.
    Partial,
}

/// Report for one rule-set run against one host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Host identifier the rule set ran against.
    pub host_id: String,

    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    pub success: Vec<CheckOutcome>,
    pub failure: Vec<CheckOutcome>,
    pub controlled: Vec<CheckOutcome>,
    pub undefined: Vec<CheckOutcome>,

    pub status: AuditStatus,
}

impl AuditReport {
    pub fn new(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
            started_at: Utc::now(),
            finished_at: None,
            success: Vec::new(),
            failure: Vec::new(),
            controlled: Vec::new(),
            undefined: Vec::new(),
            status: AuditStatus::Compliant,
        }
    }

    /// Route an outcome into the bucket its verdict selects.
    pub fn record(&mut self, outcome: CheckOutcome) {
        match outcome.verdict {
            Verdict::Pass => self.success.push(outcome),
            Verdict::Fail(_) => self.failure.push(outcome),
            Verdict::Undefined(_) => self.undefined.push(outcome),
        }
    }

    /// Record a check an operator has marked as controlled (accepted
    /// risk); it is excluded from the compliance computation.
    pub fn record_controlled(&mut self, outcome: CheckOutcome) {
        self.controlled.push(outcome);
    }

    pub fn total_evaluated(&self) -> usize {
        self.success.len() + self.failure.len() + self.undefined.len()
    }

    pub fn pass_percentage(&self) -> f32 {
        let total = self.total_evaluated();
        if total == 0 {
            return 0.0;
        }
        (self.success.len() as f32 / total as f32) * 100.0
    }

    /// Stamp the end time and derive the overall status.
    pub fn finalize(&mut self) {
        self.finished_at = Some(Utc::now());

        self.status = if !self.undefined.is_empty() {
            AuditStatus::Partial
        } else if self.failure.is_empty() {
            AuditStatus::Compliant
        } else {
            AuditStatus::NonCompliant
        };
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
