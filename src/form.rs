//! The link form.
//!
//! [`FormState`] holds what the operator has picked so far and turns it into
//! one [`GeneratedLink`] per selected source. Fields that belong to a
//! destination are cleared whenever the destination or the link family
//! changes, and setters refuse fields the current destination does not take.

use std::{fmt, str::FromStr};

use log::{debug, warn};

use crate::{
    app_link::{AppLinkRequest, build_app_link},
    bot_link::{build_bot_link, build_telegram_link},
    bots::{BOTS, Bot, EVENTS_BOT, PARTNER_BOT, Scenario, find_bot},
    destinations::{APP_DESTINATIONS, AppDestination, InnerPage, find_app_destination},
    error::{Field, FormError, Result},
    sources::{Source, find_source, resolve_source},
    validate::{TagRule, WEBINAR_TAGS, hyphenate, is_valid_tag},
};

/// The kind of link being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkFamily {
    /// Deep link into the mobile application.
    App,
    /// Start link for the webinar bot.
    WebinarBot,
    /// Start link for the partner bot.
    PartnerBot,
    /// Start link for a bot and scenario picked by the operator.
    TelegramBot,
}

impl LinkFamily {
    pub const ALL: [Self; 4] = [
        Self::App,
        Self::WebinarBot,
        Self::PartnerBot,
        Self::TelegramBot,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::WebinarBot => "webinar-bot",
            Self::PartnerBot => "partner-bot",
            Self::TelegramBot => "telegram-bot",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::App => "Ссылка в приложение",
            Self::WebinarBot => "Бот вебинаров",
            Self::PartnerBot => "ЛК партнёра",
            Self::TelegramBot => "Telegram-бот",
        }
    }

    /// How tags are checked for this family.
    #[must_use]
    pub fn tag_rule(self) -> TagRule {
        match self {
            Self::WebinarBot => TagRule::OneOf(WEBINAR_TAGS),
            Self::App | Self::PartnerBot | Self::TelegramBot => TagRule::Pattern,
        }
    }

    /// The bot whose scenarios serve as destinations for this family.
    #[must_use]
    pub fn bot(self) -> Option<&'static Bot> {
        match self {
            Self::WebinarBot => Some(&EVENTS_BOT),
            Self::PartnerBot => Some(&PARTNER_BOT),
            Self::App | Self::TelegramBot => None,
        }
    }

    /// Destination ids offered for this family, in display order.
    #[must_use]
    pub fn destination_ids(self) -> Vec<(&'static str, &'static str)> {
        match self {
            Self::App => APP_DESTINATIONS.iter().map(|d| (d.id, d.label)).collect(),
            Self::WebinarBot | Self::PartnerBot => self
                .bot()
                .map(|b| b.scenarios.iter().map(|s| (s.id, s.label)).collect())
                .unwrap_or_default(),
            Self::TelegramBot => BOTS.iter().map(|b| (b.id, b.label)).collect(),
        }
    }
}

impl fmt::Display for LinkFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkFamily {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown link family '{s}'"))
    }
}

/// Stages of the form, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    LinkType,
    Destination,
    Tagging,
    Results,
}

/// One link per selected source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLink {
    pub source_value: &'static str,
    pub source_label: &'static str,
    pub url: String,
}

/// The selected destination, resolved against the family's table.
#[derive(Debug, Clone, Copy)]
enum Target {
    App(&'static AppDestination),
    Scenario(&'static Bot, &'static Scenario),
    Bot(&'static Bot),
}

impl Target {
    fn resolve(family: LinkFamily, id: &str) -> Result<Self> {
        let target = match family {
            LinkFamily::App => find_app_destination(id).map(Self::App),
            LinkFamily::WebinarBot | LinkFamily::PartnerBot => family
                .bot()
                .and_then(|bot| bot.scenario(id).map(|s| Self::Scenario(bot, s))),
            LinkFamily::TelegramBot => find_bot(id).map(Self::Bot),
        };
        target.ok_or_else(|| FormError::UnknownDestination(id.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    family: Option<LinkFamily>,
    destination: Option<&'static str>,
    destination_id: Option<String>,
    sub_page: Option<InnerPage>,
    idea_name: Option<String>,
    scenario: Option<&'static Scenario>,
    tag: String,
    feature: Option<String>,
    sources: Vec<&'static str>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn family(&self) -> Option<LinkFamily> {
        self.family
    }

    #[must_use]
    pub fn destination(&self) -> Option<&'static str> {
        self.destination
    }

    #[must_use]
    pub fn destination_id(&self) -> Option<&str> {
        self.destination_id.as_deref()
    }

    #[must_use]
    pub fn sub_page(&self) -> Option<InnerPage> {
        self.sub_page
    }

    #[must_use]
    pub fn idea_name(&self) -> Option<&str> {
        self.idea_name.as_deref()
    }

    /// The scenario picked for a generic Telegram link.
    #[must_use]
    pub fn scenario(&self) -> Option<&'static Scenario> {
        self.scenario
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    /// Selected source values in the order they were picked.
    #[must_use]
    pub fn sources(&self) -> &[&'static str] {
        &self.sources
    }

    /// Switch link family, dropping the destination and its fields.
    pub fn select_link_family(&mut self, family: LinkFamily) {
        debug!("link family set to {family}");
        self.family = Some(family);
        self.destination = None;
        self.clear_destination_fields();
        if family != LinkFamily::App {
            self.feature = None;
        }
    }

    /// Select a destination of the current family.
    ///
    /// For generic Telegram links the destination is the bot, and its first
    /// scenario becomes the selected one.
    ///
    /// # Errors
    /// Fails without a link family or when `id` is not offered by it.
    pub fn select_destination(&mut self, id: &str) -> Result<()> {
        let family = self.family.ok_or(FormError::MissingLinkFamily)?;
        let (id, scenario) = match Target::resolve(family, id)? {
            Target::App(d) => (d.id, None),
            Target::Scenario(_, s) => (s.id, None),
            Target::Bot(b) => (b.id, b.default_scenario()),
        };
        if self.destination != Some(id) {
            debug!("destination changed to {id}, clearing destination fields");
        }
        self.destination = Some(id);
        self.clear_destination_fields();
        self.scenario = scenario;
        Ok(())
    }

    /// Pick a scenario of the selected bot for a generic Telegram link.
    ///
    /// # Errors
    /// Fails when no bot is selected or the bot has no such scenario.
    pub fn select_scenario(&mut self, id: &str) -> Result<()> {
        let Target::Bot(bot) = self.target()? else {
            return Err(self.not_applicable(Field::Scenario));
        };
        let scenario = bot.scenario(id).ok_or_else(|| FormError::UnknownScenario {
            bot: bot.id.to_string(),
            scenario: id.to_string(),
        })?;
        if !scenario.needs_idea_name {
            self.idea_name = None;
        }
        self.scenario = Some(scenario);
        Ok(())
    }

    /// Set the page id of a destination that needs one.
    ///
    /// # Errors
    /// Fails when the destination takes no id.
    pub fn set_destination_id(&mut self, id: &str) -> Result<()> {
        match self.target()? {
            Target::App(d) if d.needs_id => {
                self.destination_id = Some(id.trim().to_string());
                Ok(())
            }
            _ => Err(self.not_applicable(Field::DestinationId)),
        }
    }

    /// Set or clear the tab of a destination with sub-pages.
    ///
    /// # Errors
    /// Fails when the destination has no sub-pages.
    pub fn set_sub_page(&mut self, page: Option<InnerPage>) -> Result<()> {
        match self.target()? {
            Target::App(d) if d.has_sub_pages => {
                self.sub_page = page;
                Ok(())
            }
            _ => Err(self.not_applicable(Field::SubPage)),
        }
    }

    /// Set the idea name, hyphenating whitespace as it is stored.
    ///
    /// # Errors
    /// Fails when the current scenario takes no idea name, or when the
    /// hyphenated name has characters outside `[A-Za-z0-9_-]`.
    pub fn set_idea_name(&mut self, name: &str) -> Result<()> {
        let scenario = match self.target()? {
            Target::Scenario(_, s) => Some(s),
            Target::Bot(_) => self.scenario,
            Target::App(_) => None,
        };
        if !scenario.is_some_and(|s| s.needs_idea_name) {
            return Err(self.not_applicable(Field::IdeaName));
        }
        let idea = hyphenate(name.trim());
        if !idea.is_empty() && !is_valid_tag(&idea) {
            return Err(FormError::InvalidIdeaName(idea));
        }
        self.idea_name = Some(idea);
        Ok(())
    }

    pub fn set_tag(&mut self, tag: &str) {
        self.tag = tag.to_string();
    }

    /// Set or clear the secondary tag of an application link.
    ///
    /// # Errors
    /// Fails for families other than [`LinkFamily::App`].
    pub fn set_feature(&mut self, feature: Option<&str>) -> Result<()> {
        if self.family != Some(LinkFamily::App) {
            return Err(FormError::NotApplicable {
                field: Field::Feature,
                destination: self.family.map(LinkFamily::as_str).unwrap_or_default().to_string(),
            });
        }
        self.feature = feature
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string);
        Ok(())
    }

    /// Add or remove a source, given by value or base URL.
    ///
    /// Returns whether the source is selected afterwards.
    ///
    /// # Errors
    /// Fails for sources missing from the table.
    pub fn toggle_source(&mut self, key: &str) -> Result<bool> {
        let source = lookup_source(key)?;
        if let Some(pos) = self.sources.iter().position(|v| *v == source.value) {
            self.sources.remove(pos);
            Ok(false)
        } else {
            self.sources.push(source.value);
            Ok(true)
        }
    }

    /// Add a source unless it is already selected.
    ///
    /// # Errors
    /// Fails for sources missing from the table.
    pub fn select_source(&mut self, key: &str) -> Result<()> {
        let source = lookup_source(key)?;
        if !self.sources.contains(&source.value) {
            self.sources.push(source.value);
        }
        Ok(())
    }

    /// The message to show under the tag field, if any.
    #[must_use]
    pub fn tag_error(&self) -> Option<FormError> {
        let rule = self.family.map_or(TagRule::Pattern, LinkFamily::tag_rule);
        rule.check(&self.tag).err()
    }

    /// Whether the operator may move past `step`.
    #[must_use]
    pub fn can_proceed(&self, step: Step) -> bool {
        match step {
            Step::LinkType => self.family.is_some(),
            Step::Destination => self.destination.is_some(),
            Step::Tagging => !self.tag.trim().is_empty() && !self.sources.is_empty(),
            Step::Results => true,
        }
    }

    /// Check every field that gates generation.
    ///
    /// # Errors
    /// Returns the first problem found, in form order.
    pub fn validate(&self) -> Result<()> {
        self.target()?;
        if let Some(err) = self.tag_error() {
            return Err(err);
        }
        if let Some(feature) = self.feature.as_deref()
            && !is_valid_tag(feature)
        {
            return Err(FormError::InvalidFeature(feature.to_string()));
        }
        if self.sources.is_empty() {
            return Err(FormError::NoSources);
        }
        Ok(())
    }

    /// Build one link per selected source, in selection order.
    ///
    /// # Errors
    /// Fails when validation fails or a source lacks the data its link needs.
    pub fn generate(&self) -> Result<Vec<GeneratedLink>> {
        self.validate()?;
        let target = self.target()?;
        self.sources
            .iter()
            .map(|value| {
                let source = lookup_source(value)?;
                let url = self.build_url(target, source)?;
                Ok(GeneratedLink {
                    source_value: source.value,
                    source_label: source.label,
                    url,
                })
            })
            .collect()
    }

    /// Return to the empty form.
    pub fn reset(&mut self) {
        debug!("form reset");
        *self = Self::default();
    }

    fn build_url(&self, target: Target, source: &Source) -> Result<String> {
        match target {
            Target::App(destination) => build_app_link(&AppLinkRequest {
                base_url: source.base_url,
                campaign: &self.tag,
                feature: self.feature.as_deref(),
                destination,
                page_id: self.destination_id.as_deref(),
                inner_page: self.sub_page,
            }),
            Target::Scenario(bot, scenario) => Ok(build_bot_link(
                bot,
                scenario,
                &self.tag,
                self.idea_name.as_deref(),
            )),
            Target::Bot(bot) => Ok(build_telegram_link(
                bot,
                self.scenario,
                &self.tag,
                self.idea_name.as_deref(),
            )),
        }
    }

    fn target(&self) -> Result<Target> {
        let family = self.family.ok_or(FormError::MissingLinkFamily)?;
        let id = self.destination.ok_or(FormError::MissingDestination)?;
        Target::resolve(family, id)
    }

    fn not_applicable(&self, field: Field) -> FormError {
        FormError::NotApplicable {
            field,
            destination: self.destination.unwrap_or_default().to_string(),
        }
    }

    fn clear_destination_fields(&mut self) {
        self.destination_id = None;
        self.sub_page = None;
        self.idea_name = None;
        self.scenario = None;
    }
}

fn lookup_source(key: &str) -> Result<&'static Source> {
    resolve_source(key)
        .or_else(|| find_source(key.trim()))
        .ok_or_else(|| {
            warn!("rejected unknown source {key}");
            FormError::UnknownSource(key.to_string())
        })
}
