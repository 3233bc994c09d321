use crate::models::Provider;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Columns the admin table can be sorted by
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    Category,
    Rating,
    CompletedJobs,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

type Comparator = fn(&Provider, &Provider) -> Ordering;

const COMPARATORS: [(SortField, Comparator); 4] = [
    (SortField::Name, |a, b| locale_cmp(&a.name, &b.name)),
    (SortField::Category, |a, b| locale_cmp(&a.category, &b.category)),
    (SortField::Rating, |a, b| a.rating.total_cmp(&b.rating)),
    (SortField::CompletedJobs, |a, b| a.completed_jobs.cmp(&b.completed_jobs)),
];

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Name,
        SortField::Category,
        SortField::Rating,
        SortField::CompletedJobs,
    ];

    /// Entries in `COMPARATORS` are laid out in declaration order
    fn comparator(self) -> Comparator {
        COMPARATORS[self as usize].1
    }
}

/// Case-insensitive ordering first; on a case-only difference lowercase sorts
/// ahead of uppercase.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Sorted copy of `providers`. Equal keys keep their input order in both
/// directions.
pub fn sort_providers(providers: &[Provider], field: SortField, order: SortOrder) -> Vec<Provider> {
    let cmp = field.comparator();
    let mut sorted = providers.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by(cmp),
        SortOrder::Desc => sorted.sort_by(|a, b| cmp(b, a)),
    }
    sorted
}

/// Active column and direction of the admin table
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortState {
    /// Clicking the active column flips direction; any other column starts
    /// ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.order = self.order.flipped();
        } else {
            self.field = field;
            self.order = SortOrder::Asc;
        }
    }

    pub fn apply(&self, providers: &[Provider]) -> Vec<Provider> {
        sort_providers(providers, self.field, self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn row(id: u32, name: &str, category: &str, rating: f64, jobs: u32) -> Provider {
        let mut p = Catalog::seeded().providers()[0].clone();
        p.id = id;
        p.name = name.to_string();
        p.category = category.to_string();
        p.rating = rating;
        p.completed_jobs = jobs;
        p
    }

    fn sample() -> Vec<Provider> {
        vec![
            row(1, "bravo", "plumber", 4.5, 120),
            row(2, "Alpha", "electrician", 4.9, 80),
            row(3, "charlie", "baker", 4.5, 300),
            row(4, "alpha", "plumber", 4.1, 80),
        ]
    }

    fn ids(providers: &[Provider]) -> Vec<u32> {
        providers.iter().map(|p| p.id).collect()
    }

    #[test]
    fn names_sort_case_insensitively() {
        let sorted = sort_providers(&sample(), SortField::Name, SortOrder::Asc);
        assert_eq!(ids(&sorted), vec![4, 2, 1, 3]);
    }

    #[test]
    fn numeric_fields_sort_by_magnitude() {
        let sorted = sort_providers(&sample(), SortField::CompletedJobs, SortOrder::Desc);
        assert_eq!(ids(&sorted), vec![3, 1, 2, 4]);

        let sorted = sort_providers(&sample(), SortField::Rating, SortOrder::Asc);
        assert_eq!(ids(&sorted), vec![4, 1, 3, 2]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let asc = sort_providers(&sample(), SortField::Rating, SortOrder::Asc);
        let desc = sort_providers(&sample(), SortField::Rating, SortOrder::Desc);
        // 1 and 3 share a rating
        assert_eq!(ids(&asc), vec![4, 1, 3, 2]);
        assert_eq!(ids(&desc), vec![2, 1, 3, 4]);

        let by_category = sort_providers(&sample(), SortField::Category, SortOrder::Asc);
        assert_eq!(ids(&by_category), vec![3, 2, 1, 4]);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = sample();
        let before = ids(&input);
        let _ = sort_providers(&input, SortField::Name, SortOrder::Desc);
        assert_eq!(ids(&input), before);
    }

    #[test]
    fn descending_reverses_ascending_without_ties() {
        let input = sample();
        let asc = sort_providers(&input, SortField::Name, SortOrder::Asc);
        let mut desc = ids(&sort_providers(&asc, SortField::Name, SortOrder::Desc));
        desc.reverse();
        assert_eq!(desc, ids(&asc));
    }

    #[test]
    fn every_field_has_its_own_comparator() {
        assert_eq!(COMPARATORS.len(), SortField::ALL.len());
        for field in SortField::ALL {
            assert_eq!(COMPARATORS[field as usize].0, field);
            let sorted = sort_providers(&sample(), field, SortOrder::Asc);
            assert_ne!(ids(&sorted), ids(&sample()), "{field:?} left the input order");
        }
    }

    #[test]
    fn toggling_flips_then_restores() {
        let mut state = SortState::default();
        assert_eq!(state, SortState { field: SortField::Name, order: SortOrder::Asc });
        let original = ids(&state.apply(&sample()));

        state.toggle(SortField::Name);
        assert_eq!(state.order, SortOrder::Desc);
        state.toggle(SortField::Name);
        assert_eq!(state.order, SortOrder::Asc);
        assert_eq!(ids(&state.apply(&sample())), original);

        state.toggle(SortField::Rating);
        assert_eq!(state, SortState { field: SortField::Rating, order: SortOrder::Asc });
    }
}
