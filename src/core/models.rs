// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

// --- Backend Payload ---

/// The verdict record returned by the scanning backend.
///
/// Every field defaults when absent so a partial body still renders:
/// counters fall back to 0 and strings to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScanResult {
    pub filename: String,
    pub verdict: String,
    pub malicious: u64,
    pub suspicious: u64,
    pub harmless: u64,
    pub undetected: u64,
    pub ai_explanation: String,
    /// Analysis status reported by the backend (e.g. "completed").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ScanResult {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_counts(self.malicious, self.suspicious)
    }

    /// The detection counters in display order.
    pub fn detection_stats(&self) -> [(DetectionStat, u64); 4] {
        [
            (DetectionStat::Malicious, self.malicious),
            (DetectionStat::Suspicious, self.suspicious),
            (DetectionStat::Harmless, self.harmless),
            (DetectionStat::Undetected, self.undetected),
        ]
    }
}

// --- Severity ---

/// Three-level risk shown on the badge. The string form is the CSS
/// modifier emitted next to `risk-badge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Malicious detections take precedence over suspicious ones.
    pub fn from_counts(malicious: u64, suspicious: u64) -> Self {
        if malicious > 0 {
            RiskLevel::High
        } else if suspicious > 0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Style class of a history row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumIter)]
pub enum HistoryClass {
    #[strum(serialize = "history-safe")]
    Safe,
    #[strum(serialize = "history-warning")]
    Warning,
    #[strum(serialize = "history-danger")]
    Danger,
}

impl From<RiskLevel> for HistoryClass {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::High => HistoryClass::Danger,
            RiskLevel::Medium => HistoryClass::Warning,
            RiskLevel::Low => HistoryClass::Safe,
        }
    }
}

/// One of the four labelled counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter)]
pub enum DetectionStat {
    #[strum(serialize = "malicious")]
    Malicious,
    #[strum(serialize = "suspicious")]
    Suspicious,
    #[strum(serialize = "harmless")]
    Harmless,
    #[strum(serialize = "undetected")]
    Undetected,
}

impl DetectionStat {
    pub fn label(self) -> &'static str {
        match self {
            DetectionStat::Malicious => "Malicious",
            DetectionStat::Suspicious => "Suspicious",
            DetectionStat::Harmless => "Harmless",
            DetectionStat::Undetected => "Undetected",
        }
    }
}

// --- History ---

/// A finished scan as remembered by the session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub filename: String,
    pub verdict: String,
    pub class: HistoryClass,
    pub scanned_at: DateTime<Utc>,
}

impl From<&ScanResult> for HistoryEntry {
    fn from(result: &ScanResult) -> Self {
        Self {
            filename: result.filename.clone(),
            verdict: result.verdict.clone(),
            class: result.risk_level().into(),
            scanned_at: Utc::now(),
        }
    }
}

// --- Explanation ---

/// A paragraph of the explanation: the first line is the title, the
/// remaining lines joined by single spaces form the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationBlock {
    pub title: String,
    pub body: String,
}

// --- UI Phase ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum UiPhase {
    #[default]
    Idle,
    Scanning,
    /// Idle again, with a rendered result on screen.
    Result,
    /// Idle again, with an error block on screen.
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn result(malicious: u64, suspicious: u64) -> ScanResult {
        ScanResult { malicious, suspicious, ..ScanResult::default() }
    }

    #[test]
    fn risk_precedence_checks_malicious_first() {
        assert_eq!(result(1, 5).risk_level(), RiskLevel::High);
        assert_eq!(result(0, 2).risk_level(), RiskLevel::Medium);
        assert_eq!(result(0, 0).risk_level(), RiskLevel::Low);
    }

    #[test]
    fn history_class_follows_risk_level() {
        for (m, s, expected) in [
            (3, 1, HistoryClass::Danger),
            (0, 1, HistoryClass::Warning),
            (0, 0, HistoryClass::Safe),
        ] {
            let entry = HistoryEntry::from(&result(m, s));
            assert_eq!(entry.class, expected);
        }
    }

    #[test]
    fn css_modifiers_match_stylesheet_hooks() {
        let levels: Vec<String> = RiskLevel::iter().map(|l| l.to_string()).collect();
        assert_eq!(levels, ["low", "medium", "high"]);
        let classes: Vec<String> = HistoryClass::iter().map(|c| c.as_ref().to_string()).collect();
        assert_eq!(classes, ["history-safe", "history-warning", "history-danger"]);
        let stats: Vec<String> = DetectionStat::iter().map(|s| s.as_ref().to_string()).collect();
        assert_eq!(stats, ["malicious", "suspicious", "harmless", "undetected"]);
    }

    #[test]
    fn partial_payload_uses_defaults() {
        let parsed: ScanResult =
            serde_json::from_str(r#"{"filename":"a.exe","malicious":2,"status":"completed"}"#)
                .expect("valid json");
        assert_eq!(parsed.filename, "a.exe");
        assert_eq!(parsed.malicious, 2);
        assert_eq!(parsed.harmless, 0);
        assert!(parsed.ai_explanation.is_empty());
        assert_eq!(parsed.status.as_deref(), Some("completed"));
    }
}
