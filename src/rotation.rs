//! Hero carousel rotation.
//!
//! [`Rotation`] holds only the list lengths; the moving parts live in a
//! [`RotationState`] value that every transition takes and returns.  The
//! controller never owns a timer: the host feeds it [`RotationMsg::SlideTick`]
//! and [`RotationMsg::AdTick`] from whatever scheduler it runs (see
//! [`crate::timers`]) alongside the user's navigation messages.
//!
//! Two independent cycles share the state:
//!
//! * the slide cycle (`slide_index`, `auto_advance`), driven by the slide
//!   timer and by manual navigation;
//! * the ad cycle (`ad_index`, `showing_ad`), driven by the overlay timer.
//!
//! No transition of one cycle reads or writes the other's fields, so slide
//! and ad ticks can be applied in either order with the same result.
//!
//! Manual navigation switches autoplay off for good; only a fresh state from
//! [`Rotation::initial`] turns it back on.

use crate::content::{Ad, Post};
use crate::error::{ConfigError, NavigationError};

/// Snapshot of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    pub slide_index: usize,
    pub ad_index: usize,
    /// `true` while the sponsored overlay replaces the slide.
    pub showing_ad: bool,
    /// `false` once the user has navigated manually.
    pub auto_advance: bool,
}

/// Inputs to [`Rotation::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMsg {
    /// Slide timer fired.
    SlideTick,
    /// Overlay timer fired.
    AdTick,
    Next,
    Previous,
    JumpTo(usize),
}

impl RotationMsg {
    /// Whether this message comes from the user rather than a timer.
    pub fn is_manual(&self) -> bool {
        matches!(
            self,
            RotationMsg::Next | RotationMsg::Previous | RotationMsg::JumpTo(_)
        )
    }
}

/// Transition functions over [`RotationState`] for fixed list lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    slide_count: usize,
    ad_count: usize,
}

impl Rotation {
    /// Build a controller for `slide_count` slides and `ad_count` ads.
    ///
    /// At least one slide is required.  Zero ads is allowed: the overlay
    /// still toggles but the ad index stays put.
    pub fn new(slide_count: usize, ad_count: usize) -> Result<Self, ConfigError> {
        if slide_count == 0 {
            return Err(ConfigError::NoSlides);
        }
        Ok(Self {
            slide_count,
            ad_count,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn ad_count(&self) -> usize {
        self.ad_count
    }

    pub fn initial(&self) -> RotationState {
        RotationState {
            slide_index: 0,
            ad_index: 0,
            showing_ad: false,
            auto_advance: true,
        }
    }

    /// A controller for new list lengths.  Pair with [`Rotation::rewrap`] to
    /// carry an existing state across.
    pub fn resize(&self, slide_count: usize, ad_count: usize) -> Result<Self, ConfigError> {
        Self::new(slide_count, ad_count)
    }

    /// Bring `state`'s indices back into range for this controller.
    pub fn rewrap(&self, state: RotationState) -> RotationState {
        RotationState {
            slide_index: state.slide_index % self.slide_count,
            ad_index: match self.ad_count {
                0 => 0,
                n => state.ad_index % n,
            },
            ..state
        }
    }

    // -- slide cycle ---------------------------------------------------------

    /// User clicked "next".
    pub fn advance_slide(&self, state: RotationState) -> RotationState {
        RotationState {
            slide_index: (state.slide_index + 1) % self.slide_count,
            auto_advance: false,
            ..state
        }
    }

    /// User clicked "previous".
    pub fn retreat_slide(&self, state: RotationState) -> RotationState {
        RotationState {
            slide_index: (state.slide_index + self.slide_count - 1) % self.slide_count,
            auto_advance: false,
            ..state
        }
    }

    /// User picked a slide directly.
    ///
    /// An index outside `0..slide_count` is rejected and `state` is left
    /// exactly as it was, autoplay included.
    pub fn jump_to_slide(
        &self,
        state: RotationState,
        index: usize,
    ) -> Result<RotationState, NavigationError> {
        if index >= self.slide_count {
            return Err(NavigationError::SlideOutOfRange {
                index,
                count: self.slide_count,
            });
        }
        Ok(RotationState {
            slide_index: index,
            auto_advance: false,
            ..state
        })
    }

    /// Slide timer fired.  Moves forward without touching autoplay; a tick
    /// that arrives after autoplay was switched off is ignored.
    pub fn tick_slide(&self, state: RotationState) -> RotationState {
        if !state.auto_advance {
            return state;
        }
        RotationState {
            slide_index: (state.slide_index + 1) % self.slide_count,
            ..state
        }
    }

    // -- ad cycle ------------------------------------------------------------

    /// Overlay timer fired.  Showing the overlay also moves to the next ad;
    /// hiding it leaves the ad index alone.
    pub fn toggle_ad_overlay(&self, state: RotationState) -> RotationState {
        let toggled = RotationState {
            showing_ad: !state.showing_ad,
            ..state
        };
        if toggled.showing_ad {
            self.advance_ad(toggled)
        } else {
            toggled
        }
    }

    /// Next ad, wrapping.  No-op without ads.
    pub fn advance_ad(&self, state: RotationState) -> RotationState {
        if self.ad_count == 0 {
            return state;
        }
        RotationState {
            ad_index: (state.ad_index + 1) % self.ad_count,
            ..state
        }
    }

    // -- dispatch ------------------------------------------------------------

    pub fn update(
        &self,
        state: RotationState,
        msg: RotationMsg,
    ) -> Result<RotationState, NavigationError> {
        Ok(match msg {
            RotationMsg::SlideTick => self.tick_slide(state),
            RotationMsg::AdTick => self.toggle_ad_overlay(state),
            RotationMsg::Next => self.advance_slide(state),
            RotationMsg::Previous => self.retreat_slide(state),
            RotationMsg::JumpTo(index) => self.jump_to_slide(state, index)?,
        })
    }

    // -- read access ---------------------------------------------------------

    /// The slide `state` points at.  `slides` must have `slide_count` entries.
    pub fn current_slide<'a>(
        &self,
        state: &RotationState,
        slides: &'a [Post],
    ) -> Option<&'a Post> {
        slides.get(state.slide_index)
    }

    /// The ad to render, if the overlay is up and there is one to show.
    pub fn current_ad<'a>(&self, state: &RotationState, ads: &'a [Ad]) -> Option<&'a Ad> {
        if !state.showing_ad {
            return None;
        }
        ads.get(state.ad_index)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation() -> Rotation {
        Rotation::new(5, 3).unwrap()
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn initial_state_autoplays_from_zero() {
        let s = rotation().initial();
        assert_eq!(s.slide_index, 0);
        assert_eq!(s.ad_index, 0);
        assert!(!s.showing_ad);
        assert!(s.auto_advance);
    }

    #[test]
    fn no_slides_is_rejected() {
        assert_eq!(Rotation::new(0, 3), Err(ConfigError::NoSlides));
    }

    // -- manual navigation ---------------------------------------------------

    #[test]
    fn advance_and_retreat() {
        let r = rotation();
        let mut s = r.initial();
        for _ in 0..3 {
            s = r.advance_slide(s);
        }
        assert_eq!(s.slide_index, 3);
        s = r.retreat_slide(s);
        assert_eq!(s.slide_index, 2);
        assert!(!s.auto_advance);
    }

    #[test]
    fn advance_wraps_to_zero() {
        let r = rotation();
        let s = RotationState {
            slide_index: 4,
            ..r.initial()
        };
        assert_eq!(r.advance_slide(s).slide_index, 0);
    }

    #[test]
    fn retreat_wraps_to_last() {
        let r = rotation();
        assert_eq!(r.retreat_slide(r.initial()).slide_index, 4);
    }

    #[test]
    fn every_manual_move_disables_autoplay() {
        let r = rotation();
        let s = r.initial();
        assert!(!r.advance_slide(s).auto_advance);
        assert!(!r.retreat_slide(s).auto_advance);
        assert!(!r.jump_to_slide(s, 2).unwrap().auto_advance);
    }

    #[test]
    fn jump_sets_index() {
        let r = rotation();
        assert_eq!(r.jump_to_slide(r.initial(), 3).unwrap().slide_index, 3);
    }

    #[test]
    fn jump_out_of_range_is_rejected_without_side_effects() {
        let r = rotation();
        let s = r.initial();
        assert_eq!(
            r.jump_to_slide(s, 5),
            Err(NavigationError::SlideOutOfRange { index: 5, count: 5 })
        );
        // Through the reducer a rejected jump yields no new state at all.
        let after = r.update(s, RotationMsg::JumpTo(5)).unwrap_or(s);
        assert_eq!(after, s);
        assert!(after.auto_advance);
    }

    #[test]
    fn single_slide_cycles_on_itself() {
        let r = Rotation::new(1, 0).unwrap();
        let s = r.initial();
        assert_eq!(r.advance_slide(s).slide_index, 0);
        assert_eq!(r.retreat_slide(s).slide_index, 0);
        assert_eq!(r.tick_slide(s).slide_index, 0);
    }

    // -- timer ticks ---------------------------------------------------------

    #[test]
    fn tick_advances_and_keeps_autoplay() {
        let r = rotation();
        let s = r.tick_slide(r.initial());
        assert_eq!(s.slide_index, 1);
        assert!(s.auto_advance);
    }

    #[test]
    fn tick_after_manual_navigation_is_ignored() {
        let r = rotation();
        let manual = r.advance_slide(r.initial());
        assert_eq!(r.tick_slide(manual), manual);
    }

    // -- ad overlay ----------------------------------------------------------

    #[test]
    fn toggle_on_advances_ad_toggle_off_does_not() {
        let r = rotation();
        let on = r.toggle_ad_overlay(r.initial());
        assert!(on.showing_ad);
        assert_eq!(on.ad_index, 1);

        let off = r.toggle_ad_overlay(on);
        assert!(!off.showing_ad);
        assert_eq!(off.ad_index, 1);
    }

    #[test]
    fn ad_index_wraps() {
        let r = rotation();
        let s = RotationState {
            ad_index: 2,
            ..r.initial()
        };
        assert_eq!(r.advance_ad(s).ad_index, 0);
    }

    #[test]
    fn no_ads_still_toggles_but_never_moves_index() {
        let r = Rotation::new(5, 0).unwrap();
        let on = r.toggle_ad_overlay(r.initial());
        assert!(on.showing_ad);
        assert_eq!(on.ad_index, 0);
        assert_eq!(r.current_ad(&on, &[]), None);
    }

    #[test]
    fn ad_ticks_leave_slide_cycle_alone() {
        let r = rotation();
        let manual = r.jump_to_slide(r.initial(), 3).unwrap();
        let toggled = r.toggle_ad_overlay(manual);
        assert_eq!(toggled.slide_index, 3);
        assert!(!toggled.auto_advance);
    }

    // -- dispatch ------------------------------------------------------------

    #[test]
    fn slide_and_ad_ticks_commute() {
        let r = rotation();
        let starts = [
            r.initial(),
            RotationState {
                slide_index: 4,
                ad_index: 2,
                showing_ad: true,
                auto_advance: true,
            },
            r.advance_slide(r.initial()),
        ];
        for s in starts {
            let a = r.update(s, RotationMsg::SlideTick).unwrap();
            let a = r.update(a, RotationMsg::AdTick).unwrap();
            let b = r.update(s, RotationMsg::AdTick).unwrap();
            let b = r.update(b, RotationMsg::SlideTick).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn update_dispatches_messages() {
        let r = rotation();
        let s = r.initial();
        assert_eq!(r.update(s, RotationMsg::Next).unwrap(), r.advance_slide(s));
        assert_eq!(r.update(s, RotationMsg::Previous).unwrap(), r.retreat_slide(s));
        assert_eq!(r.update(s, RotationMsg::SlideTick).unwrap(), r.tick_slide(s));
        assert_eq!(r.update(s, RotationMsg::AdTick).unwrap(), r.toggle_ad_overlay(s));
        assert_eq!(
            r.update(s, RotationMsg::JumpTo(2)).unwrap(),
            r.jump_to_slide(s, 2).unwrap()
        );
        assert!(r.update(s, RotationMsg::JumpTo(9)).is_err());
    }

    #[test]
    fn manual_messages_are_flagged() {
        assert!(RotationMsg::Next.is_manual());
        assert!(RotationMsg::JumpTo(0).is_manual());
        assert!(!RotationMsg::SlideTick.is_manual());
        assert!(!RotationMsg::AdTick.is_manual());
    }

    // -- configuration change ------------------------------------------------

    #[test]
    fn rewrap_after_shrinking_lists() {
        let r = rotation();
        let s = RotationState {
            slide_index: 4,
            ad_index: 2,
            showing_ad: true,
            auto_advance: false,
        };
        let smaller = r.resize(3, 2).unwrap();
        let w = smaller.rewrap(s);
        assert_eq!(w.slide_index, 1);
        assert_eq!(w.ad_index, 0);
        assert!(w.showing_ad);
        assert!(!w.auto_advance);
    }

    #[test]
    fn rewrap_with_no_ads_resets_ad_index() {
        let r = rotation();
        let s = RotationState {
            ad_index: 2,
            ..r.initial()
        };
        assert_eq!(r.resize(5, 0).unwrap().rewrap(s).ad_index, 0);
    }

    #[test]
    fn resize_to_no_slides_is_rejected() {
        assert_eq!(rotation().resize(0, 1), Err(ConfigError::NoSlides));
    }

    // -- read access ---------------------------------------------------------

    #[test]
    fn current_ad_only_while_overlay_shown() {
        let r = rotation();
        let ads = vec![
            Ad::new("a1", "", "", "One"),
            Ad::new("a2", "", "", "Two"),
            Ad::new("a3", "", "", "Three"),
        ];
        let s = r.initial();
        assert_eq!(r.current_ad(&s, &ads), None);
        let on = r.toggle_ad_overlay(s);
        assert_eq!(r.current_ad(&on, &ads).map(|a| a.id.as_str()), Some("a2"));
    }
}
