//! Blog post types.
//!
//! `Post` is the unit the hero carousel, the feed, and category pages all
//! render.  Dates and read times are display strings; nothing in the app
//! sorts or computes on them.

/// The person credited on a post card.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    pub name: String,
    /// Avatar image reference (URL).
    pub avatar: String,
}

impl Author {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

/// A single blog post.
///
/// Immutable once constructed: every view borrows it, and the feed
/// interleaver only ever hands out references.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Post {
    /// Unique identifier, also used to build render keys.
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Category label as displayed (e.g. "Technology").
    pub category: String,
    /// Cover image reference (URL).
    pub image: String,
    pub author: Author,
    /// Publish date, preformatted for display (e.g. "May 15, 2023").
    pub date: String,
    /// Read-time label (e.g. "5 min read").
    pub read_time: String,
}

impl Post {
    /// Character shown in place of the author's avatar.
    ///
    /// Falls back to `'?'` for an author with an empty name.
    pub fn initial(&self) -> char {
        self.author.name.chars().next().unwrap_or('?')
    }
}

/// A sidebar entry in the "Popular Posts" card.
#[cfg(test)]
impl Post {
    /// Bare post for unit tests: only the fields the logic looks at are set.
    pub(crate) fn stub(id: &str, category: &str, author: &str) -> Self {
        Self {
            id: id.to_string(),
            title: format!("Post {id}"),
            excerpt: String::new(),
            category: category.to_string(),
            image: String::new(),
            author: Author::new(author, ""),
            date: String::new(),
            read_time: String::new(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PopularPost {
    pub id: String,
    pub title: String,
    pub image: String,
    pub date: String,
    pub views: u32,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_post(id: &str, author: &str) -> Post {
        Post::stub(id, "Technology", author)
    }

    #[test]
    fn initial_is_first_letter_of_author() {
        assert_eq!(make_post("1", "Alex Johnson").initial(), 'A');
        assert_eq!(make_post("2", "émile").initial(), 'é');
    }

    #[test]
    fn initial_falls_back_for_empty_author() {
        assert_eq!(make_post("1", "").initial(), '?');
    }
}
