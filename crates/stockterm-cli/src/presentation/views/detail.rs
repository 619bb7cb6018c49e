use std::fmt;

use crate::presentation::formatters::labels::{action_tone, warning_label, warning_tone};
use crate::presentation::formatters::{format_change, format_percent_detail, format_price};
use crate::presentation::view_models::{CreateView, StockDetailViewModel, Tone};

use super::{ViewContext, metric_text};

const LABEL_WIDTH: usize = 20;

impl CreateView for StockDetailViewModel {
    fn create_view<'a>(&'a self, ctx: &'a ViewContext) -> Box<dyn fmt::Display + 'a> {
        Box::new(StockDetailView { data: self, ctx })
    }
}

struct StockDetailView<'a> {
    data: &'a StockDetailViewModel,
    ctx: &'a ViewContext,
}

impl<'a> fmt::Display for StockDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        let ctx = self.ctx;

        writeln!(f, "{}  {}", ctx.bold(&data.code), data.name)?;
        writeln!(
            f,
            "{} | {}  ({})",
            dash(&data.sector),
            dash(&data.sub_sector),
            dash(&data.date)
        )?;

        let change_tone = match data.change {
            Some(c) if c > 0.0 => Tone::Positive,
            Some(c) if c < 0.0 => Tone::Negative,
            _ => Tone::Neutral,
        };
        let score = data
            .score
            .map(|s| format!("{:.0}", s))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            f,
            "Price {}  {}   Score {}   Action {}",
            format_price(data.price, &ctx.display),
            ctx.paint(&format_change(data.change, data.change_pct, &ctx.display), change_tone),
            ctx.paint(&score, data.score_tier.tone()),
            ctx.paint(
                data.action.as_deref().unwrap_or("-"),
                action_tone(data.action.as_deref())
            ),
        )?;

        if !data.warnings.is_empty() {
            let badges: Vec<String> = data
                .warnings
                .iter()
                .map(|w| ctx.paint(&warning_label(w), warning_tone(w)))
                .collect();
            writeln!(f, "{}", badges.join("  "))?;
        }

        for section in &data.sections {
            writeln!(f)?;
            writeln!(f, "{}", ctx.bold(section.title))?;
            for row in &section.rows {
                writeln!(
                    f,
                    "  {:<width$} {}",
                    row.label,
                    ctx.paint(&metric_text(&row.value, &ctx.display), row.tone),
                    width = LABEL_WIDTH
                )?;
            }
        }

        if !data.top_shareholders.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", ctx.bold("Top Shareholders"))?;
            for (i, holder) in data.top_shareholders.iter().enumerate() {
                write!(
                    f,
                    "  {}. {} {}",
                    i + 1,
                    holder.name,
                    format_percent_detail(holder.percentage)
                )?;
                if !holder.badges.is_empty() {
                    write!(f, " [{}]", holder.badges.join(", "))?;
                }
                writeln!(f)?;
            }
        }

        if !data.indexes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", ctx.bold("Indexes"))?;
            writeln!(f, "  {}", data.indexes.join(", "))?;
        }

        if !data.underwriters.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", ctx.bold("IPO Underwriters"))?;
            for broker in &data.underwriters {
                match &broker.id {
                    Some(id) => writeln!(f, "  {} ({})", broker.name, id)?,
                    None => writeln!(f, "  {}", broker.name)?,
                }
            }
        }

        Ok(())
    }
}

fn dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
