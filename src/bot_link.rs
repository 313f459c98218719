//! Telegram bot links.
//!
//! A bot link is the bot address with a `start` payload. The payload opens
//! with the scenario prefix; idea scenarios append the hyphenated idea name.

use crate::{
    bots::{Bot, Scenario},
    validate::hyphenate,
};

/// Build `https://t.me/<bot>?start=<prefix><tag>[_<idea>]`.
///
/// The idea name is only appended for scenarios that take one and only when
/// it is non-empty after hyphenation.
#[must_use]
pub fn build_bot_link(
    bot: &Bot,
    scenario: &Scenario,
    tag: &str,
    idea_name: Option<&str>,
) -> String {
    let mut payload = format!("{}{tag}", scenario.prefix);
    push_idea(&mut payload, scenario, idea_name);
    start_url(bot, &payload)
}

/// Build a link for a bot picked by the operator.
///
/// Bots without scenarios take the raw tag; every other bot gets the same
/// payload as [`build_bot_link`].
#[must_use]
pub fn build_telegram_link(
    bot: &Bot,
    scenario: Option<&Scenario>,
    tag: &str,
    idea_name: Option<&str>,
) -> String {
    match scenario {
        Some(scenario) => build_bot_link(bot, scenario, tag, idea_name),
        None => start_url(bot, tag),
    }
}

fn push_idea(payload: &mut String, scenario: &Scenario, idea_name: Option<&str>) {
    if !scenario.needs_idea_name {
        return;
    }
    let idea = idea_name.map(|n| hyphenate(n.trim())).unwrap_or_default();
    if !idea.is_empty() {
        payload.push('_');
        payload.push_str(&idea);
    }
}

fn start_url(bot: &Bot, payload: &str) -> String {
    format!("{}?start={payload}", bot.url())
}
