//! Category navigation and filtering.
//!
//! Category pages are addressed by a lower-case slug (`/category/food`) and
//! titled with the slug's first letter capitalised.  Matching posts to a
//! category ignores ASCII case, so "UX Design" and "ux design" are the same
//! category.

use super::Post;

/// An entry in the navigation bar.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category {
    /// Display name, e.g. "Technology".
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Lower-cased name used in routes and on the command line.
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }

    /// Route of this category's page.
    pub fn path(&self) -> String {
        format!("/category/{}", self.slug())
    }
}

/// Turn a route slug into a page title: first character upper-cased, the
/// rest left as-is.
pub fn format_category_name(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Posts whose category equals `name` once both are lower-cased.
///
/// Order follows `posts`; the input slice is never touched.
pub fn filter_by_category<'a>(posts: &'a [Post], name: &str) -> Vec<&'a Post> {
    let name = name.to_lowercase();
    posts
        .iter()
        .filter(|post| post.category.to_lowercase() == name)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
