use std::collections::BTreeSet;

use super::model::LoanDataset;

// ---------------------------------------------------------------------------
// Filter predicate: which servicers are selected
// ---------------------------------------------------------------------------

/// The set of currently selected servicers. An empty set means "nothing
/// selected" and hides every record; it is not an error state.
pub type FilterState = BTreeSet<String>;

/// Initialise a [`FilterState`] with all servicers selected.
pub fn init_filter_state(dataset: &LoanDataset) -> FilterState {
    dataset.servicers.iter().cloned().collect()
}

/// Return indices of records whose servicer is in `selected`.
///
/// The result preserves the dataset's original record order. An empty
/// selection yields an empty result.
pub fn filter_by_servicer(dataset: &LoanDataset, selected: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selected.contains(&rec.servicer))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::loan_portfolio;

    fn selection(names: &[&str]) -> FilterState {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn all_selected_returns_every_record_in_order() {
        let ds = loan_portfolio();
        let indices = filter_by_servicer(&ds, &init_filter_state(&ds));
        assert_eq!(indices, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn empty_selection_returns_nothing() {
        let ds = loan_portfolio();
        assert!(filter_by_servicer(&ds, &FilterState::new()).is_empty());
    }

    #[test]
    fn single_servicer_subset() {
        let ds = loan_portfolio();
        let indices = filter_by_servicer(&ds, &selection(&["Nelnet"]));
        assert_eq!(indices, [1, 5]);
        for &i in &indices {
            assert_eq!(ds.records[i].servicer, "Nelnet");
        }
    }

    #[test]
    fn every_subset_matches_membership_and_order() {
        let ds = loan_portfolio();
        let names = ds.servicers.clone();
        // All 16 subsets of the four servicers.
        for mask in 0u32..16 {
            let chosen: FilterState = names
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, n)| n.clone())
                .collect();
            let indices = filter_by_servicer(&ds, &chosen);
            let expected: Vec<usize> = ds
                .records
                .iter()
                .enumerate()
                .filter(|(_, r)| chosen.contains(&r.servicer))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(indices, expected, "subset mask {mask}");
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn unknown_servicer_matches_nothing() {
        let ds = loan_portfolio();
        assert!(filter_by_servicer(&ds, &selection(&["Sallie Mae"])).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = loan_portfolio();
        let sel = selection(&["SLMA", "ACS"]);
        assert_eq!(
            filter_by_servicer(&ds, &sel),
            filter_by_servicer(&ds, &sel)
        );
    }
}
