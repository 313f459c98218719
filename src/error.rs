//! Errors raised while filling in the link form.
//!
//! Every error maps onto the form field that caused it so a front end can
//! report the problem next to that field.

use thiserror::Error;

/// Form field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LinkFamily,
    Destination,
    DestinationId,
    SubPage,
    IdeaName,
    Scenario,
    Tag,
    Feature,
    Sources,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("no link family selected")]
    MissingLinkFamily,

    #[error("no destination selected")]
    MissingDestination,

    #[error("tag is required")]
    MissingTag,

    #[error("tag '{0}' may only contain Latin letters, digits, hyphens and underscores")]
    InvalidTag(String),

    #[error("tag '{tag}' is not allowed for this link family; use one of: {allowed}")]
    TagNotAllowed { tag: String, allowed: String },

    #[error("feature '{0}' may only contain Latin letters, digits, hyphens and underscores")]
    InvalidFeature(String),

    #[error("page id '{0}' may only contain Latin letters, digits, hyphens and underscores")]
    InvalidDestinationId(String),

    #[error("idea name '{0}' may only contain Latin letters, digits, hyphens and underscores")]
    InvalidIdeaName(String),

    #[error("select at least one source")]
    NoSources,

    #[error("unknown source '{0}'")]
    UnknownSource(String),

    #[error("unknown destination '{0}'")]
    UnknownDestination(String),

    #[error("unknown sub-page '{0}'")]
    UnknownSubPage(String),

    #[error("unknown scenario '{scenario}' for bot '{bot}'")]
    UnknownScenario { bot: String, scenario: String },

    #[error("{field:?} does not apply to destination '{destination}'")]
    NotApplicable { field: Field, destination: String },
}

impl FormError {
    /// The field a front end should highlight for this error.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::MissingLinkFamily => Field::LinkFamily,
            Self::MissingDestination | Self::UnknownDestination(_) => Field::Destination,
            Self::MissingTag | Self::InvalidTag(_) | Self::TagNotAllowed { .. } => Field::Tag,
            Self::InvalidFeature(_) => Field::Feature,
            Self::InvalidDestinationId(_) => Field::DestinationId,
            Self::UnknownSubPage(_) => Field::SubPage,
            Self::InvalidIdeaName(_) => Field::IdeaName,
            Self::UnknownScenario { .. } => Field::Scenario,
            Self::NotApplicable { field, .. } => *field,
            Self::NoSources | Self::UnknownSource(_) => Field::Sources,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
