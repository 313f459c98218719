//! Library for building tracking links.
//!
//! Links are either deep links into the mobile application, carrying campaign
//! parameters, or Telegram bot links whose `start` payload selects a bot
//! scenario. [`FormState`] collects the operator's choices and produces one
//! link per traffic source.

#[macro_use]
mod macros;

pub mod app_link;
pub mod bot_link;
pub mod bots;
pub mod destinations;
pub mod error;
pub mod form;
pub mod output;
pub mod sources;
pub mod validate;

pub use app_link::{AppLinkRequest, build_app_link};
pub use bot_link::{build_bot_link, build_telegram_link};
pub use bots::{Bot, Scenario, find_bot};
pub use destinations::{AppDestination, InnerPage, find_app_destination};
pub use error::{Field, FormError};
pub use form::{FormState, GeneratedLink, LinkFamily, Step};
pub use output::{copy_all_text, render_destinations, render_scenarios, render_sources, url_lines};
pub use sources::{Source, SourceGroup, find_source, resolve_source};
pub use validate::{TagRule, hyphenate, is_valid_tag};
