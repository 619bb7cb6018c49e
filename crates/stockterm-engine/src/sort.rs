use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use stockterm_types::{finite, StockRecord};

/// Whitelisted sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Score,
    Pbv,
    PeTtm,
    Roe,
    FcfTtm,
    MarketCap,
    FreeFloat,
    DividendYield,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::Score,
        SortField::Pbv,
        SortField::PeTtm,
        SortField::Roe,
        SortField::FcfTtm,
        SortField::MarketCap,
        SortField::FreeFloat,
        SortField::DividendYield,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SortField::Score => "score",
            SortField::Pbv => "pbv",
            SortField::PeTtm => "pe_ttm",
            SortField::Roe => "roe",
            SortField::FcfTtm => "fcf_ttm",
            SortField::MarketCap => "market_cap",
            SortField::FreeFloat => "free_float",
            SortField::DividendYield => "dividend_yield",
        }
    }

    /// Table column header this field sorts.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Score => "SCR",
            SortField::Pbv => "PBV",
            SortField::PeTtm => "PE",
            SortField::Roe => "ROE",
            SortField::FcfTtm => "FCF",
            SortField::MarketCap => "MCAP",
            SortField::FreeFloat => "FF%",
            SortField::DividendYield => "DY%",
        }
    }

    pub fn extract(&self, record: &StockRecord) -> Option<f64> {
        let value = match self {
            SortField::Score => record.score,
            SortField::Pbv => record.pbv,
            SortField::PeTtm => record.pe_ttm,
            SortField::Roe => record.roe,
            SortField::FcfTtm => record.fcf_ttm,
            SortField::MarketCap => record.market_cap,
            SortField::FreeFloat => record.free_float,
            SortField::DividendYield => record.dividend_yield,
        };
        finite(value)
    }

    /// Sort key: missing values rank as 0.
    fn key(&self, record: &StockRecord) -> f64 {
        self.extract(record).unwrap_or(0.0)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('-', "_");
        SortField::ALL
            .into_iter()
            .find(|f| f.id() == needle)
            .ok_or_else(|| {
                let ids: Vec<&str> = SortField::ALL.iter().map(|f| f.id()).collect();
                format!("unknown sort field '{}' (expected one of: {})", s, ids.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{}' (expected asc or desc)", other)),
        }
    }
}

/// Active sort column and direction; `field: None` keeps snapshot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Same field flips direction, a new field starts descending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.flip();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Desc;
        }
    }

    pub fn compare(&self, a: &StockRecord, b: &StockRecord) -> Ordering {
        let Some(field) = self.field else {
            return Ordering::Equal;
        };
        let (ka, kb) = (field.key(a), field.key(b));
        match self.direction {
            SortDirection::Asc => ka.partial_cmp(&kb).unwrap_or(Ordering::Equal),
            SortDirection::Desc => kb.partial_cmp(&ka).unwrap_or(Ordering::Equal),
        }
    }

    /// Stable in-place sort; ties keep their incoming order.
    pub fn sort(&self, records: &mut [&StockRecord]) {
        if self.field.is_some() {
            records.sort_by(|a, b| self.compare(a, b));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(code: &str, score: Option<f64>) -> StockRecord {
        let mut r = StockRecord::new(code);
        r.score = score;
        r
    }

    fn codes(records: &[&StockRecord]) -> Vec<String> {
        records.iter().map(|r| r.code.to_string()).collect()
    }

    #[test]
    fn test_toggle_flips_then_resets() {
        let mut sort = SortState::default();
        sort.toggle(SortField::Score);
        assert_eq!(sort, SortState::by(SortField::Score, SortDirection::Desc));
        sort.toggle(SortField::Score);
        assert_eq!(sort.direction, SortDirection::Asc);
        sort.toggle(SortField::Pbv);
        assert_eq!(sort, SortState::by(SortField::Pbv, SortDirection::Desc));
    }

    #[test]
    fn test_missing_sorts_as_zero() {
        let a = scored("A", Some(-5.0));
        let b = scored("B", None);
        let c = scored("C", Some(5.0));
        let mut rows = vec![&a, &b, &c];

        SortState::by(SortField::Score, SortDirection::Desc).sort(&mut rows);
        assert_eq!(codes(&rows), vec!["C", "B", "A"]);

        SortState::by(SortField::Score, SortDirection::Asc).sort(&mut rows);
        assert_eq!(codes(&rows), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_ties_keep_incoming_order() {
        let a = scored("A", Some(50.0));
        let b = scored("B", None);
        let c = scored("C", Some(50.0));
        let d = scored("D", Some(0.0));
        let mut rows = vec![&a, &b, &c, &d];

        SortState::by(SortField::Score, SortDirection::Desc).sort(&mut rows);
        assert_eq!(codes(&rows), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_no_field_keeps_order() {
        let a = scored("A", Some(1.0));
        let b = scored("B", Some(2.0));
        let mut rows = vec![&a, &b];
        SortState::default().sort(&mut rows);
        assert_eq!(codes(&rows), vec!["A", "B"]);
    }

    #[test]
    fn test_field_ids_parse() {
        for field in SortField::ALL {
            assert_eq!(field.id().parse::<SortField>().unwrap(), field);
        }
        assert_eq!("market-cap".parse::<SortField>().unwrap(), SortField::MarketCap);
        assert!("price".parse::<SortField>().is_err());
        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
    }
}
