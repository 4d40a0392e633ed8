/// A sponsored placement.
///
/// Shown both as a card in the feed and as the hero overlay.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ad {
    pub id: String,
    /// Creative image reference (URL).
    pub image: String,
    /// Outbound link the placement points at.
    pub link: String,
    /// Sponsor name shown on the placement.
    pub sponsor: String,
}

impl Ad {
    pub fn new(
        id: impl Into<String>,
        image: impl Into<String>,
        link: impl Into<String>,
        sponsor: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            link: link.into(),
            sponsor: sponsor.into(),
        }
    }
}
