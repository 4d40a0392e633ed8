use thiserror::Error;

/// Rejected configuration.  Raised at construction time; nothing is ever
/// clamped into range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("ad interval must be at least 1")]
    NonPositiveInterval,
    #[error("{name} must be greater than zero")]
    NonPositivePeriod { name: &'static str },
    #[error("rotation needs at least one slide")]
    NoSlides,
}

/// A manual navigation request that does not name a valid slide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("slide {index} is out of range (have {count})")]
    SlideOutOfRange { index: usize, count: usize },
}
