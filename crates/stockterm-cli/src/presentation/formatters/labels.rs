use stockterm_types::finite;

use crate::presentation::view_models::{ScoreTier, Tone, WarningBadge};

/// Altman Z band: `>= 3` LOW, `>= 1.8` MED, else HIGH.
pub fn risk_label(altman_z: Option<f64>) -> (&'static str, Tone) {
    match finite(altman_z) {
        Some(z) if z >= 3.0 => ("LOW", Tone::Positive),
        Some(z) if z >= 1.8 => ("MED", Tone::Caution),
        Some(_) => ("HIGH", Tone::Negative),
        None => ("-", Tone::Neutral),
    }
}

pub fn trend_label(trend: Option<&str>) -> (&'static str, Tone) {
    match trend {
        Some("ACCUMULATION") => ("ACC ↑", Tone::Positive),
        Some("DISTRIBUTION") => ("DIST ↓", Tone::Negative),
        _ => ("-", Tone::Neutral),
    }
}

pub fn score_tier(score: Option<f64>) -> ScoreTier {
    match finite(score) {
        Some(s) if s >= 80.0 => ScoreTier::High,
        Some(s) if s >= 50.0 => ScoreTier::Mid,
        Some(_) => ScoreTier::Low,
        None => ScoreTier::Unscored,
    }
}

pub fn action_tone(action: Option<&str>) -> Tone {
    match action {
        Some("BUY") => Tone::Positive,
        Some("HOLD") => Tone::Caution,
        Some("AVOID") => Tone::Negative,
        _ => Tone::Neutral,
    }
}

/// Positive when strictly above `threshold`.
pub fn tone_above(value: Option<f64>, threshold: f64) -> Tone {
    match finite(value) {
        Some(v) if v > threshold => Tone::Positive,
        _ => Tone::Neutral,
    }
}

/// `tone` when strictly above `threshold`, else neutral.
pub fn flag_above(value: Option<f64>, threshold: f64, tone: Tone) -> Tone {
    match finite(value) {
        Some(v) if v > threshold => tone,
        _ => Tone::Neutral,
    }
}

/// `tone` when strictly below `threshold`, else neutral.
pub fn flag_below(value: Option<f64>, threshold: f64, tone: Tone) -> Tone {
    match finite(value) {
        Some(v) if v < threshold => tone,
        _ => Tone::Neutral,
    }
}

pub fn warning_label(badge: &WarningBadge) -> String {
    match badge {
        WarningBadge::LowFreeFloat { free_float } => {
            format!("⚠ LOW FF ({:.1}%)", free_float * 100.0)
        }
        WarningBadge::Controlled => "🧱 CTRL".to_string(),
        WarningBadge::CashGenerative => "💰 CASH".to_string(),
        WarningBadge::DistressRisk => "❌ RISK".to_string(),
    }
}

pub fn warning_tone(badge: &WarningBadge) -> Tone {
    match badge {
        WarningBadge::LowFreeFloat { .. } => Tone::Caution,
        WarningBadge::Controlled => Tone::Accent,
        WarningBadge::CashGenerative => Tone::Positive,
        WarningBadge::DistressRisk => Tone::Negative,
    }
}
