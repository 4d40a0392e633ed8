//! Feed interleaving.
//!
//! Merges the post list with the sponsored placements: one ad after every
//! `interval`-th post until the ads run out.  The result borrows from its
//! inputs and is rebuilt on every render; there is no cursor carried between
//! calls, so the same inputs always give the same feed.

use std::num::NonZeroUsize;

use crate::content::{Ad, Post};
use crate::error::ConfigError;

/// Posts between sponsored placements when nothing else is configured.
pub const DEFAULT_AD_INTERVAL: usize = 3;

/// One entry of the merged feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayItem<'a> {
    Post(&'a Post),
    Ad(&'a Ad),
}

impl DisplayItem<'_> {
    /// Stable key for the entry, unique across both variants.
    pub fn key(&self) -> String {
        match self {
            DisplayItem::Post(post) => format!("post-{}", post.id),
            DisplayItem::Ad(ad) => format!("ad-{}", ad.id),
        }
    }

    pub fn is_sponsored(&self) -> bool {
        matches!(self, DisplayItem::Ad(_))
    }
}

/// Merge `posts` and `ads`, inserting the next unused ad after every
/// `interval`-th post.
///
/// Once the ads are exhausted the remaining posts follow without any.  The
/// output has `posts.len() + min(posts.len() / interval, ads.len())` entries.
/// A zero `interval` is rejected.
pub fn interleave<'a, P>(
    posts: P,
    ads: &'a [Ad],
    interval: usize,
) -> Result<Vec<DisplayItem<'a>>, ConfigError>
where
    P: IntoIterator<Item = &'a Post>,
    P::IntoIter: ExactSizeIterator,
{
    let interval = NonZeroUsize::new(interval).ok_or(ConfigError::NonPositiveInterval)?;
    Ok(interleave_every(posts, ads, interval))
}

/// [`interleave`] for an interval that is already known to be nonzero.
pub fn interleave_every<'a, P>(
    posts: P,
    ads: &'a [Ad],
    interval: NonZeroUsize,
) -> Vec<DisplayItem<'a>>
where
    P: IntoIterator<Item = &'a Post>,
    P::IntoIter: ExactSizeIterator,
{
    let interval = interval.get();
    let posts = posts.into_iter();
    let slots = (posts.len() / interval).min(ads.len());
    let mut items = Vec::with_capacity(posts.len() + slots);
    let mut next_ads = ads.iter();

    for (position, post) in posts.enumerate() {
        items.push(DisplayItem::Post(post));
        if (position + 1) % interval == 0 {
            if let Some(ad) = next_ads.next() {
                items.push(DisplayItem::Ad(ad));
            }
        }
    }

    items
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
