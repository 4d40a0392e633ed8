//! Content model.
//!
//! Posts, sponsored placements, and navigation categories, plus the static
//! sample data the app renders.  Everything here is immutable once built;
//! the feed and rotation logic only borrow it.
//!
//! ## For contributors — adding content
//!
//! 1. Add entries to the relevant function in [`sample`].
//! 2. Keep `id`s unique within a list; they double as render keys.
//! 3. If you add a navigation category, make sure [`sample::catalog`] has at
//!    least one post in it or its page will show the empty state.

mod ad;
mod category;
mod post;
pub mod sample;

pub use ad::Ad;
pub use category::{filter_by_category, format_category_name, Category};
pub use post::{Author, PopularPost, Post};
