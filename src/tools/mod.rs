// ABOUTME: Concrete tool implementations over the content store.
// ABOUTME: Content search and course outline lookup.

mod outline;
mod search;

pub use outline::*;
pub use search::*;
