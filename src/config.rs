//! Command-line and environment configuration.
//!
//! Every option is optional.  Values are validated once, when [`Settings`]
//! is built; a zero interval or period is an error, never silently raised
//! to a minimum.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;
use crate::feed::DEFAULT_AD_INTERVAL;

pub const DEFAULT_SLIDE_PERIOD: Duration = Duration::from_millis(5000);
pub const DEFAULT_AD_PERIOD: Duration = Duration::from_millis(15000);

const DEFAULT_AD_EVERY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_AD_INTERVAL) {
    Some(n) => n,
    None => panic!("default ad interval must be nonzero"),
};

#[derive(Parser, Debug)]
#[command(name = "blogdeck", version, about = "Browse the blog front page in your terminal")]
pub struct Args {
    /// Posts between sponsored placements in the feed.
    #[arg(long, env = "BLOGDECK_AD_INTERVAL", default_value_t = DEFAULT_AD_INTERVAL)]
    pub ad_interval: usize,

    /// Milliseconds between automatic slide changes.
    #[arg(long, env = "BLOGDECK_SLIDE_PERIOD_MS", default_value_t = DEFAULT_SLIDE_PERIOD.as_millis() as u64)]
    pub slide_period_ms: u64,

    /// Milliseconds between sponsored-overlay toggles in the hero.
    #[arg(long, env = "BLOGDECK_AD_PERIOD_MS", default_value_t = DEFAULT_AD_PERIOD.as_millis() as u64)]
    pub ad_period_ms: u64,

    /// Open a category page instead of the home feed (e.g. `food`).
    #[arg(long, env = "BLOGDECK_CATEGORY")]
    pub category: Option<String>,

    /// Write logs to this file.  Nothing is logged without it since the UI
    /// owns the terminal.
    #[arg(long, env = "BLOGDECK_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Validated tunables for the feed and the carousel.
///
/// Fields are private: the only ways to get one are [`Settings::default`] and
/// the validating constructors, so a held `Settings` is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    ad_interval: NonZeroUsize,
    slide_period: Duration,
    ad_period: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ad_interval: DEFAULT_AD_EVERY,
            slide_period: DEFAULT_SLIDE_PERIOD,
            ad_period: DEFAULT_AD_PERIOD,
        }
    }
}

impl Settings {
    pub fn new(
        ad_interval: usize,
        slide_period: Duration,
        ad_period: Duration,
    ) -> Result<Self, ConfigError> {
        let ad_interval = NonZeroUsize::new(ad_interval).ok_or(ConfigError::NonPositiveInterval)?;
        if slide_period.is_zero() {
            return Err(ConfigError::NonPositivePeriod {
                name: "slide period",
            });
        }
        if ad_period.is_zero() {
            return Err(ConfigError::NonPositivePeriod { name: "ad period" });
        }
        Ok(Self {
            ad_interval,
            slide_period,
            ad_period,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        Self::new(
            args.ad_interval,
            Duration::from_millis(args.slide_period_ms),
            Duration::from_millis(args.ad_period_ms),
        )
    }

    /// Posts between sponsored placements in the feed.
    pub fn ad_interval(&self) -> NonZeroUsize {
        self.ad_interval
    }

    pub fn slide_period(&self) -> Duration {
        self.slide_period
    }

    pub fn ad_period(&self) -> Duration {
        self.ad_period
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse `argv` with the `BLOGDECK_*` variables cleared so an exported
    /// value in the developer's shell can't leak into the result.
    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        for var in [
            "BLOGDECK_AD_INTERVAL",
            "BLOGDECK_SLIDE_PERIOD_MS",
            "BLOGDECK_AD_PERIOD_MS",
            "BLOGDECK_CATEGORY",
            "BLOGDECK_LOG_FILE",
        ] {
            std::env::remove_var(var);
        }
        Args::try_parse_from(argv)
    }

    #[test]
    fn defaults_match_documented_values() {
        let s = Settings::default();
        assert_eq!(s.ad_interval().get(), 3);
        assert_eq!(s.slide_period(), Duration::from_millis(5000));
        assert_eq!(s.ad_period(), Duration::from_millis(15000));
    }

    #[test]
    fn args_without_flags_give_defaults() {
        let args = parse(&["blogdeck"]).unwrap();
        assert_eq!(Settings::from_args(&args).unwrap(), Settings::default());
        assert!(args.category.is_none());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn args_override_values() {
        let args = parse(&[
            "blogdeck",
            "--ad-interval",
            "4",
            "--slide-period-ms",
            "2000",
            "--ad-period-ms",
            "9000",
            "--category",
            "food",
        ])
        .unwrap();
        let s = Settings::from_args(&args).unwrap();
        assert_eq!(s.ad_interval().get(), 4);
        assert_eq!(s.slide_period(), Duration::from_millis(2000));
        assert_eq!(s.ad_period(), Duration::from_millis(9000));
        assert_eq!(args.category.as_deref(), Some("food"));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let args = parse(&["blogdeck", "--ad-interval", "0"]).unwrap();
        assert_eq!(
            Settings::from_args(&args),
            Err(ConfigError::NonPositiveInterval)
        );
    }

    #[test]
    fn zero_periods_are_rejected() {
        let one = Duration::from_millis(1);
        assert_eq!(
            Settings::new(3, Duration::ZERO, one),
            Err(ConfigError::NonPositivePeriod {
                name: "slide period"
            })
        );
        assert_eq!(
            Settings::new(3, one, Duration::ZERO),
            Err(ConfigError::NonPositivePeriod { name: "ad period" })
        );
    }

    #[test]
    fn negative_values_fail_to_parse() {
        assert!(parse(&["blogdeck", "--slide-period-ms", "-5"]).is_err());
    }
}
