use ratatui::widgets::ListState;

use crate::config::Settings;
use crate::content::{
    filter_by_category, format_category_name, sample, Ad, Category, PopularPost, Post,
};
use crate::error::ConfigError;
use crate::feed::{interleave_every, DisplayItem};
use crate::rotation::{Rotation, RotationMsg, RotationState};
use crate::timers::Schedule;

/// What the host loop has to do after an input or message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Autoplay just ended; cancel the slide timer.
    StopAutoplay,
    /// List lengths or rotation state were replaced; respawn both timers.
    RestartTimers,
}

pub struct App {
    pub settings: Settings,
    /// Hero carousel slides.
    pub slides: Vec<Post>,
    /// Sponsored placements, shared by the hero overlay and the feed.
    pub ads: Vec<Ad>,
    /// Home page feed.
    pub posts: Vec<Post>,
    /// Posts available to category pages.
    pub catalog: Vec<Post>,
    pub categories: Vec<Category>,
    pub popular: Vec<PopularPost>,
    pub rotation: Rotation,
    pub rotation_state: RotationState,
    /// Active category slug; `None` is the home page.
    pub category: Option<String>,
    /// Feed selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last status message.
    pub status: String,
}

impl App {
    /// App over the built-in sample content.
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        Self::with_content(settings, sample::hero_slides(), sample::ads(), sample::feed_posts())
    }

    pub fn with_content(
        settings: Settings,
        slides: Vec<Post>,
        ads: Vec<Ad>,
        posts: Vec<Post>,
    ) -> Result<Self, ConfigError> {
        let rotation = Rotation::new(slides.len(), ads.len())?;
        Ok(Self {
            settings,
            slides,
            ads,
            posts,
            catalog: sample::catalog(),
            categories: sample::categories(),
            popular: sample::popular_posts(),
            rotation_state: rotation.initial(),
            rotation,
            category: None,
            list_state: ListState::default(),
            quit: false,
            status: "Welcome".into(),
        })
    }

    // -- rotation ------------------------------------------------------------

    /// Feed a timer tick or navigation request through the rotation.
    ///
    /// A rejected jump leaves the carousel untouched and is reported in the
    /// status bar.
    pub fn apply(&mut self, msg: RotationMsg) -> Effect {
        let was_autoplaying = self.rotation_state.auto_advance;
        match self.rotation.update(self.rotation_state, msg) {
            Ok(next) => {
                self.rotation_state = next;
                if msg.is_manual() {
                    tracing::debug!(?msg, slide = next.slide_index, "manual navigation");
                }
                if was_autoplaying && !next.auto_advance {
                    self.status = "Autoplay paused".into();
                    return Effect::StopAutoplay;
                }
                Effect::None
            }
            Err(e) => {
                tracing::warn!(%e, "navigation rejected");
                self.status = format!("Error: {e}");
                Effect::None
            }
        }
    }

    /// Start the carousel over from the first slide with autoplay on.
    pub fn reset_rotation(&mut self) -> Effect {
        self.rotation_state = self.rotation.initial();
        self.status = "Rotation restarted".into();
        tracing::info!("rotation reset");
        Effect::RestartTimers
    }

    /// Swap in new hero content.  Indices are wrapped into the new lengths and
    /// both timers must be restarted.
    pub fn replace_hero(
        &mut self,
        slides: Vec<Post>,
        ads: Vec<Ad>,
    ) -> Result<Effect, ConfigError> {
        let rotation = self.rotation.resize(slides.len(), ads.len())?;
        self.rotation_state = rotation.rewrap(self.rotation_state);
        self.rotation = rotation;
        self.slides = slides;
        self.ads = ads;
        tracing::info!(
            slides = self.rotation.slide_count(),
            ads = self.rotation.ad_count(),
            "hero content replaced"
        );
        Ok(Effect::RestartTimers)
    }

    /// Timer periods for the current settings; the slide timer only runs
    /// while the carousel is autoplaying.
    pub fn schedule(&self) -> Schedule {
        Schedule::new(&self.settings, self.rotation_state.auto_advance)
    }

    pub fn current_slide(&self) -> Option<&Post> {
        self.rotation.current_slide(&self.rotation_state, &self.slides)
    }

    /// The hero ad, if the overlay is up.
    pub fn current_ad(&self) -> Option<&Ad> {
        self.rotation.current_ad(&self.rotation_state, &self.ads)
    }

    // -- feed ----------------------------------------------------------------

    /// Posts for the current page: the home feed, or the catalog filtered by
    /// the active category.
    pub fn page_posts(&self) -> Vec<&Post> {
        match &self.category {
            None => self.posts.iter().collect(),
            Some(slug) => filter_by_category(&self.catalog, slug),
        }
    }

    /// The merged feed for the current page.
    pub fn feed(&self) -> Vec<DisplayItem<'_>> {
        let posts = self.page_posts();
        interleave_every(posts.iter().copied(), &self.ads, self.settings.ad_interval())
    }

    /// Title of the current category page.
    pub fn category_title(&self) -> Option<String> {
        self.category.as_deref().map(format_category_name)
    }

    pub fn set_category(&mut self, slug: Option<String>) {
        let slug = slug.map(|s| s.to_lowercase());
        tracing::info!(category = ?slug, "category changed");
        self.status = match &slug {
            Some(s) => format!("Category: {}", format_category_name(s)),
            None => "Home".into(),
        };
        self.category = slug;
        self.list_state = ListState::default();
    }

    /// Home, then each navigation category in order, then home again.
    pub fn next_category(&mut self) {
        let position = self
            .category
            .as_ref()
            .and_then(|slug| self.categories.iter().position(|c| &c.slug() == slug));
        let next = match position {
            None => self.categories.first(),
            Some(i) => self.categories.get(i + 1),
        }
        .map(Category::slug);
        self.set_category(next);
    }

    // -- feed navigation -----------------------------------------------------

    fn feed_len(&self) -> usize {
        self.feed().len()
    }

    pub fn select_next(&mut self) {
        let len = self.feed_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.feed_len() == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if self.feed_len() > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.feed_len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }
}
