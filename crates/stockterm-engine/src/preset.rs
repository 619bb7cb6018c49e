use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use stockterm_types::StockRecord;

use crate::predicates::{above, at_least, below, below_field};

/// Named analyst heuristics. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    StrongBuy,
    Value,
    Income,
    LowRisk,
    Controlled,
    Illiquid,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::StrongBuy,
        Preset::Value,
        Preset::Income,
        Preset::LowRisk,
        Preset::Controlled,
        Preset::Illiquid,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Preset::StrongBuy => "strong-buy",
            Preset::Value => "value",
            Preset::Income => "income",
            Preset::LowRisk => "low-risk",
            Preset::Controlled => "controlled",
            Preset::Illiquid => "illiquid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Preset::StrongBuy => "Strong Buy",
            Preset::Value => "Value",
            Preset::Income => "Income",
            Preset::LowRisk => "Low Risk",
            Preset::Controlled => "Controlled",
            Preset::Illiquid => "Illiquid",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::StrongBuy => "score ≥ 80",
            Preset::Value => "PBV < Fair",
            Preset::Income => "Div > 5%",
            Preset::LowRisk => "Z > 3",
            Preset::Controlled => "Top3 > 75%",
            Preset::Illiquid => "FF < 15%",
        }
    }

    /// Evaluate the rule. A missing referenced field fails the preset.
    pub fn matches(&self, record: &StockRecord) -> bool {
        match self {
            Preset::StrongBuy => at_least(record.score, 80.0),
            Preset::Value => below_field(record.pbv, record.fair_pbv),
            Preset::Income => above(record.dividend_yield, 0.05),
            Preset::LowRisk => above(record.altman_z, 3.0),
            Preset::Controlled => above(record.shareholder_top3_pct, 0.75),
            Preset::Illiquid => below(record.free_float, 0.15),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        Preset::ALL
            .into_iter()
            .find(|p| p.id() == needle)
            .ok_or_else(|| {
                let ids: Vec<&str> = Preset::ALL.iter().map(|p| p.id()).collect();
                format!("unknown preset '{}' (expected one of: {})", s, ids.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_buy_boundary() {
        let mut r = StockRecord::new("A");
        r.score = Some(80.0);
        assert!(Preset::StrongBuy.matches(&r));
        r.score = Some(79.9);
        assert!(!Preset::StrongBuy.matches(&r));
        r.score = None;
        assert!(!Preset::StrongBuy.matches(&r));
    }

    #[test]
    fn test_value_excludes_missing_fair_pbv() {
        let mut r = StockRecord::new("A");
        r.pbv = Some(0.8);
        assert!(!Preset::Value.matches(&r));
        r.fair_pbv = Some(1.2);
        assert!(Preset::Value.matches(&r));
        r.pbv = None;
        assert!(!Preset::Value.matches(&r));
    }

    #[test]
    fn test_strict_thresholds() {
        let mut r = StockRecord::new("A");
        r.dividend_yield = Some(0.05);
        r.altman_z = Some(3.0);
        r.shareholder_top3_pct = Some(0.75);
        r.free_float = Some(0.15);
        for preset in [Preset::Income, Preset::LowRisk, Preset::Controlled, Preset::Illiquid] {
            assert!(!preset.matches(&r), "{} should be strict", preset);
        }

        r.dividend_yield = Some(0.051);
        r.altman_z = Some(3.01);
        r.shareholder_top3_pct = Some(0.76);
        r.free_float = Some(0.149);
        for preset in [Preset::Income, Preset::LowRisk, Preset::Controlled, Preset::Illiquid] {
            assert!(preset.matches(&r), "{} should match", preset);
        }
    }

    #[test]
    fn test_ids_parse_back() {
        for preset in Preset::ALL {
            assert_eq!(preset.id().parse::<Preset>().unwrap(), preset);
        }
        assert_eq!("LOW_RISK".parse::<Preset>().unwrap(), Preset::LowRisk);
        assert!("growth".parse::<Preset>().unwrap_err().contains("strong-buy"));
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Preset::StrongBuy).unwrap();
        assert_eq!(json, "\"strong-buy\"");
    }
}
