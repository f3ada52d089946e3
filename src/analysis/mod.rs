mod aggregation;
mod filters;
mod listing;

pub use aggregation::{aggregate, Aggregates};
pub use filters::{filter, DateRange, Filters};
pub use listing::{paginate, sort, Page, SortDirection, SortKey, Sorting};
