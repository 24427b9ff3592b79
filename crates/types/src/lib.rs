//! Public representations of the book catalog.
//!
//! These types are what the aggregation layer hands to the request layer and
//! what ends up serialized on the wire. They carry no behavior beyond
//! pagination arithmetic and the parsing of sort/filter parameters.

pub mod models;
pub mod paging;
pub mod query;

pub use models::{PublicAuthor, PublicBook};
pub use paging::{MAX_PAGE_SIZE, PageRequest, PageRequestError, PagedResult};
pub use query::{AuthorSort, BookFilter, BookSort, SortOrder};
