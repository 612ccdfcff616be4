//! Services resolvers consult besides their input: date formatting, the current
//! route and the wall clock. The catalog captures them when it is installed.

use crate::error::{MapperError, MapperResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use parking_lot::RwLock;
use shutter_domain::config::{AppConfig, MappingConfig, SiteConfig};
use shutter_domain::navigation::RouteState;
use std::fmt::{self, Write};
use std::sync::Arc;

/// Turns an API timestamp into display text.
pub trait DateFormatter: fmt::Debug + Send + Sync {
    fn format(&self, timestamp: &str) -> MapperResult<String>;
}

/// Read access to the current navigation state.
pub trait Navigation: fmt::Debug + Send + Sync {
    fn current(&self) -> RouteState;
}

pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Formats timestamps with `chrono` patterns.
///
/// Input is parsed with the source pattern first, then as RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronoDateFormatter {
    input: String,
    output: String,
}

impl ChronoDateFormatter {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self { input: input.into(), output: output.into() }
    }

    #[must_use]
    pub fn from_config(config: &MappingConfig) -> Self {
        Self::new(&config.source_date_format, &config.display_date_format)
    }

    fn parse(&self, timestamp: &str) -> MapperResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(timestamp, &self.input)
            .or_else(|_| DateTime::parse_from_rfc3339(timestamp).map(|dt| dt.naive_local()))
            .map_err(|e| MapperError::Collaborator {
                message: format!("unrecognised timestamp '{timestamp}': {e}").into(),
                context: None,
            })
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format(&self, timestamp: &str) -> MapperResult<String> {
        let parsed = self.parse(timestamp)?;
        let mut rendered = String::new();
        // `to_string` would panic on an invalid pattern.
        write!(rendered, "{}", parsed.format(&self.output)).map_err(|_| {
            MapperError::collaborator(format!("invalid display pattern '{}'", self.output))
        })?;
        Ok(rendered)
    }
}

/// Route state shared between the host (writer) and resolvers (readers).
#[derive(Debug, Clone, Default)]
pub struct SharedNavigation {
    state: Arc<RwLock<RouteState>>,
}

impl SharedNavigation {
    #[must_use]
    pub fn new(state: RouteState) -> Self {
        Self { state: Arc::new(RwLock::new(state)) }
    }

    /// Publishes a new route; resolvers see it on their next call.
    pub fn replace(&self, state: RouteState) {
        *self.state.write() = state;
    }
}

impl Navigation for SharedNavigation {
    fn current(&self) -> RouteState {
        self.state.read().clone()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Everything the resolver catalog needs from the outside world.
#[derive(Debug, Clone)]
pub struct Collaborators {
    dates: Arc<dyn DateFormatter>,
    navigation: Arc<dyn Navigation>,
    clock: Arc<dyn Clock>,
    mapping: MappingConfig,
    site: SiteConfig,
}

impl Collaborators {
    pub fn builder() -> CollaboratorsBuilder {
        CollaboratorsBuilder::default()
    }

    #[must_use]
    pub fn dates(&self) -> &Arc<dyn DateFormatter> {
        &self.dates
    }

    #[must_use]
    pub fn navigation(&self) -> &Arc<dyn Navigation> {
        &self.navigation
    }

    #[must_use]
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    #[must_use]
    pub const fn mapping(&self) -> &MappingConfig {
        &self.mapping
    }

    #[must_use]
    pub const fn site(&self) -> &SiteConfig {
        &self.site
    }
}

#[derive(Debug, Default)]
#[must_use = "The builder does nothing until .build() is called."]
pub struct CollaboratorsBuilder {
    dates: Option<Arc<dyn DateFormatter>>,
    navigation: Option<Arc<dyn Navigation>>,
    clock: Option<Arc<dyn Clock>>,
    mapping: MappingConfig,
    site: SiteConfig,
}

impl CollaboratorsBuilder {
    pub fn config(mut self, config: &AppConfig) -> Self {
        self.mapping = config.mapping.clone();
        self.site = config.site.clone();
        self
    }

    pub fn mapping(mut self, mapping: MappingConfig) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    pub fn dates(mut self, dates: impl DateFormatter + 'static) -> Self {
        self.dates = Some(Arc::new(dates));
        self
    }

    pub fn navigation(mut self, navigation: impl Navigation + 'static) -> Self {
        self.navigation = Some(Arc::new(navigation));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Fills unset collaborators with [`ChronoDateFormatter`] (from the mapping config),
    /// an empty [`SharedNavigation`] and the [`SystemClock`].
    pub fn build(self) -> Collaborators {
        let dates = self
            .dates
            .unwrap_or_else(|| Arc::new(ChronoDateFormatter::from_config(&self.mapping)));

        Collaborators {
            dates,
            navigation: self.navigation.unwrap_or_else(|| Arc::new(SharedNavigation::default())),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            mapping: self.mapping,
            site: self.site,
        }
    }
}
