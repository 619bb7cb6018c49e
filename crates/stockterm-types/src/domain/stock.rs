use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Ticker code; the identity of a record within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct StockCode(String);

impl StockCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StockCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StockCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StockCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for StockCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Analyst recommendation attached to each record upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Hold,
    Avoid,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Buy, Action::Hold, Action::Avoid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Hold => "HOLD",
            Action::Avoid => "AVOID",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Action::Buy),
            "HOLD" => Ok(Action::Hold),
            "AVOID" => Ok(Action::Avoid),
            _ => Err(Error::InvalidValue {
                kind: "action",
                value: s.to_string(),
            }),
        }
    }
}

/// One holder in the ordered shareholder list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Shareholder {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub percentage: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub badges: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

/// Periodic shareholder-count observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShareholderTrend {
    #[serde(default, deserialize_with = "null_as_default")]
    pub shareholder_date: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_share: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub change: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub change_formatted: String,
}

/// IPO underwriter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Broker {
    pub broker_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub broker_name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// One stock in one snapshot, with its upstream-computed fundamentals.
///
/// Every numeric field is optional: `None` means the upstream process had no
/// value, which is never the same as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StockRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(rename = "stock_code")]
    pub code: StockCode,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub sub_sector: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub indexes: Vec<String>,
    pub tag: Option<String>,
    pub group: Option<String>,

    // Market data
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(rename = "previous")]
    #[serde(default, deserialize_with = "lenient_number")]
    pub previous_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub change: Option<f64>,
    pub icon_url: Option<String>,

    // Trading flags
    #[serde(default, deserialize_with = "null_as_default")]
    pub corp_action_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trading_limit: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub margin_trading: bool,
    #[serde(default, deserialize_with = "lenient_number")]
    pub tradeable: Option<f64>,

    // IPO
    #[serde(default, deserialize_with = "lenient_number")]
    pub ipo_amount: Option<f64>,
    pub ipo_board: Option<String>,
    pub ipo_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ipo_price: Option<f64>,
    pub ipo_registrar: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ipo_shares: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ipo_underwriters: Vec<Broker>,
    pub ipo_administrative_bureau: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ipo_free_float: Option<f64>,

    // Ownership
    #[serde(default, deserialize_with = "lenient_number")]
    pub shareholder_top1_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub shareholder_top3_pct: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_controlling_shareholder: bool,
    #[serde(default, deserialize_with = "lenient_number")]
    pub shareholder_count: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shareholders: Vec<Shareholder>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shareholder_trends: Vec<ShareholderTrend>,
    pub shareholder_trend_latest: Option<String>,

    // Valuation
    #[serde(default, deserialize_with = "lenient_number")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub free_float: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pe_ttm: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pbv: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ps: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ev_ebitda: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub earnings_yield: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub fair_pbv: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub intrinsic_price: Option<f64>,

    // Quality
    #[serde(default, deserialize_with = "lenient_number")]
    pub roe: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub roa: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub roic: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub net_margin: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub operating_margin: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub book_value_per_share: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub eps_ttm: Option<f64>,

    // Cash flow
    #[serde(default, deserialize_with = "lenient_number")]
    pub fcf_ttm: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub fcf_per_share: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub operating_cashflow: Option<f64>,

    // Growth
    #[serde(default, deserialize_with = "lenient_number")]
    pub revenue_yoy: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub net_income_yoy: Option<f64>,

    // Risk
    #[serde(default, deserialize_with = "lenient_number")]
    pub debt_to_equity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub interest_coverage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub current_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quick_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub altman_z: Option<f64>,

    // Dividend
    #[serde(default, deserialize_with = "lenient_number")]
    pub dividend_yield: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub payout_ratio: Option<f64>,

    // Verdict
    #[serde(default, deserialize_with = "lenient_action")]
    pub action: Option<Action>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub score: Option<f64>,
}

impl StockRecord {
    pub fn new(code: impl Into<StockCode>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn sector(&self) -> &str {
        self.sector.as_deref().unwrap_or("")
    }

    pub fn sub_sector(&self) -> &str {
        self.sub_sector.as_deref().unwrap_or("")
    }

    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or("")
    }

    pub fn group(&self) -> &str {
        self.group.as_deref().unwrap_or("")
    }

    /// Absolute price change: the stored `change`, else `price - previous`.
    pub fn price_change(&self) -> Option<f64> {
        finite(self.change).or_else(|| match (finite(self.price), finite(self.previous_price)) {
            (Some(price), Some(previous)) => Some(price - previous),
            _ => None,
        })
    }

    /// Decode a single record from its JSON document.
    pub fn from_json(payload: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Drop NaN and infinities so they behave like a missing value.
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Unknown recommendation strings decode as "no action" instead of failing the record.
fn lenient_action<'de, D>(deserializer: D) -> Result<Option<Action>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

// Numbers pass through, numeric strings are parsed; anything else is a missing value.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
