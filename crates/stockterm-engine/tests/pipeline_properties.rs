use proptest::prelude::*;
use stockterm_engine::*;
use stockterm_types::{Action, StockRecord};

const SECTORS: [&str; 3] = ["Energy", "Financials", "Technology"];

fn arb_record(index: usize) -> impl Strategy<Value = StockRecord> {
    (
        proptest::option::of(0.0f64..100.0),
        proptest::option::of(-2.0f64..8.0),
        0usize..3,
        proptest::option::of(0usize..3),
    )
        .prop_map(move |(score, pbv, sector, action)| {
            let mut r = StockRecord::new(format!("S{:04}", index));
            r.score = score;
            r.pbv = pbv;
            r.sector = Some(SECTORS[sector].to_string());
            r.action = action.map(|a| Action::ALL[a]);
            r
        })
}

fn arb_records() -> impl Strategy<Value = Vec<StockRecord>> {
    (0usize..40).prop_flat_map(|n| (0..n).map(arb_record).collect::<Vec<_>>())
}

fn arb_filter() -> impl Strategy<Value = FilterState> {
    (
        proptest::option::of(0usize..3),
        proptest::option::of(0usize..3),
        proptest::option::of(0usize..6),
    )
        .prop_map(|(sector, action, preset)| {
            let mut filter = FilterState::new();
            if let Some(s) = sector {
                filter = filter.with_sector(SECTORS[s]);
            }
            if let Some(a) = action {
                filter = filter.with_action(Action::ALL[a]);
            }
            if let Some(p) = preset {
                filter = filter.with_preset(Preset::ALL[p]);
            }
            filter
        })
}

fn arb_sort() -> impl Strategy<Value = SortState> {
    (proptest::option::of(0usize..8), any::<bool>()).prop_map(|(field, asc)| SortState {
        field: field.map(|f| SortField::ALL[f]),
        direction: if asc { SortDirection::Asc } else { SortDirection::Desc },
    })
}

proptest! {
    #[test]
    fn output_is_subset_and_deterministic(
        records in arb_records(),
        filter in arb_filter(),
        sort in arb_sort(),
    ) {
        let first = derive_view(&records, &filter, sort);
        let second = derive_view(&records, &filter, sort);
        prop_assert_eq!(&first, &second);

        let mut seen = std::collections::HashSet::new();
        for &p in first.positions() {
            prop_assert!(p < records.len());
            prop_assert!(seen.insert(p));
        }
    }

    #[test]
    fn ties_keep_snapshot_order(
        records in arb_records(),
        filter in arb_filter(),
        sort in arb_sort(),
    ) {
        let view = derive_view(&records, &filter, sort);
        for pair in view.positions().windows(2) {
            let (a, b) = (&records[pair[0]], &records[pair[1]]);
            if sort.compare(a, b) == std::cmp::Ordering::Equal {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn resorting_is_idempotent(records in arb_records(), sort in arb_sort()) {
        let mut once = apply(&records, &FilterState::new(), sort);
        let snapshot: Vec<_> = once.iter().map(|r| r.code.clone()).collect();
        sort.sort(&mut once);
        let again: Vec<_> = once.iter().map(|r| r.code.clone()).collect();
        prop_assert_eq!(snapshot, again);
    }

    #[test]
    fn selection_stays_in_bounds(
        records in arb_records(),
        filter in arb_filter(),
        moves in proptest::collection::vec(-3isize..=3, 0..50),
    ) {
        let full = derive_view(&records, &FilterState::new(), SortState::default());
        let mut selection = Selection::None;
        selection.sync(&full, &records);
        for delta in &moves {
            selection.move_by(&full, &records, *delta);
        }

        let narrowed = derive_view(&records, &filter, SortState::default());
        selection.sync(&narrowed, &records);
        match selection.index() {
            Some(i) => prop_assert!(i < narrowed.len()),
            None => prop_assert!(narrowed.is_empty()),
        }
    }

    #[test]
    fn window_range_stays_in_bounds(
        len in 0usize..20_000,
        extent in 1usize..64,
        viewport in 0usize..2_000,
        offset in 0usize..2_000_000,
        overscan in 0usize..50,
    ) {
        let mut window = RenderWindow::new(extent, overscan);
        window.set_len(len);
        window.set_viewport(viewport);
        window.set_scroll_offset(offset);
        match window.range() {
            Some(range) => {
                prop_assert!(range.lo <= range.hi);
                prop_assert!(range.hi < len);
            }
            None => prop_assert_eq!(len, 0),
        }
    }
}

#[test]
fn buy_filter_score_desc_reference_case() {
    let records: Vec<StockRecord> = [(90.0, Action::Buy), (70.0, Action::Hold), (85.0, Action::Buy)]
        .into_iter()
        .enumerate()
        .map(|(i, (score, action))| {
            let mut r = StockRecord::new(format!("R{}", i));
            r.score = Some(score);
            r.action = Some(action);
            r
        })
        .collect();

    let filter = FilterState::new().with_action(Action::Buy);
    let view = derive_view(&records, &filter, SortState::by(SortField::Score, SortDirection::Desc));
    let scores: Vec<f64> = view.records(&records).filter_map(|r| r.score).collect();
    assert_eq!(scores, vec![90.0, 85.0]);
}

#[test]
fn absent_sector_gives_empty_view_and_no_selection() {
    let mut r = StockRecord::new("ONE");
    r.sector = Some("Energy".to_string());
    let records = vec![r];

    let view = derive_view(&records, &FilterState::new().with_sector("Mining"), SortState::default());
    let mut selection = Selection::None;
    selection.sync(&view, &records);
    assert!(view.is_empty());
    assert_eq!(selection, Selection::None);
}
