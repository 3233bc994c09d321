pub mod filter;
pub mod sort;

pub use filter::{filter_providers, FilterCriteria, PriceRange};
pub use sort::{sort_providers, SortField, SortOrder, SortState};
