use stockterm_types::{StockCode, StockRecord};

use crate::filter::FilterState;
use crate::predicates::{action_in, member_of, score_within, text_matches};
use crate::sort::SortState;

/// Run the screening steps over `records` and return the ordered subset.
///
/// Steps, in order: search text, sector, sub-sector, action, tag, preset,
/// score range (only when narrowed), then a stable sort. Pure and total.
pub fn apply<'a>(
    records: &'a [StockRecord],
    filter: &FilterState,
    sort: SortState,
) -> Vec<&'a StockRecord> {
    let mut out: Vec<&StockRecord> = records.iter().filter(|r| passes(r, filter)).collect();
    sort.sort(&mut out);
    out
}

fn passes(record: &StockRecord, filter: &FilterState) -> bool {
    text_matches(record, &filter.search)
        && member_of(record.sector(), &filter.sectors)
        && member_of(record.sub_sector(), &filter.sub_sectors)
        && action_in(record.action, &filter.actions)
        && member_of(record.tag(), &filter.tags)
        && filter.preset.is_none_or(|p| p.matches(record))
        && (filter.score_range.is_default() || score_within(record, &filter.score_range))
}

/// The derived ordered view: positions into the snapshot's record slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenView {
    positions: Vec<usize>,
}

impl ScreenView {
    pub fn derive(records: &[StockRecord], filter: &FilterState, sort: SortState) -> Self {
        let mut positions: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| passes(r, filter))
            .map(|(i, _)| i)
            .collect();
        if sort.field.is_some() {
            positions.sort_by(|&a, &b| sort.compare(&records[a], &records[b]));
        }

        tracing::debug!(
            total = records.len(),
            matched = positions.len(),
            sort = ?sort.field,
            "view recomputed"
        );

        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Record at view index `index`.
    pub fn get<'a>(&self, records: &'a [StockRecord], index: usize) -> Option<&'a StockRecord> {
        self.positions.get(index).and_then(|&p| records.get(p))
    }

    pub fn records<'a>(
        &'a self,
        records: &'a [StockRecord],
    ) -> impl Iterator<Item = &'a StockRecord> + 'a {
        self.positions.iter().filter_map(move |&p| records.get(p))
    }

    /// View index of the record with `code`, if it is in the view.
    pub fn position_of(&self, records: &[StockRecord], code: &StockCode) -> Option<usize> {
        self.positions
            .iter()
            .position(|&p| records.get(p).is_some_and(|r| &r.code == code))
    }

    pub fn codes(&self, records: &[StockRecord]) -> Vec<StockCode> {
        self.records(records).map(|r| r.code.clone()).collect()
    }
}
