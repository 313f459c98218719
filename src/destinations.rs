//! Screens inside the application that a deep link can open.

use std::{fmt, str::FromStr};

use crate::error::FormError;

/// Tabs of an investment or portfolio screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InnerPage {
    Updates,
    Rounds,
    Documents,
}

impl InnerPage {
    pub const ALL: [Self; 3] = [Self::Updates, Self::Rounds, Self::Documents];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Updates => "updates",
            Self::Rounds => "rounds",
            Self::Documents => "documents",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Updates => "Обновления",
            Self::Rounds => "Раунды",
            Self::Documents => "Документы",
        }
    }
}

impl fmt::Display for InnerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InnerPage {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FormError::UnknownSubPage(s.to_string()))
    }
}

/// An application screen reachable through a deep link.
///
/// `page_type` is `None` for the home screen, which takes no routing
/// parameters at all.
#[derive(Debug, PartialEq, Eq)]
pub struct AppDestination {
    pub id: &'static str,
    pub label: &'static str,
    pub page_type: Option<&'static str>,
    pub needs_id: bool,
    pub has_sub_pages: bool,
}

const fn dest(
    id: &'static str,
    label: &'static str,
    page_type: Option<&'static str>,
    needs_id: bool,
    has_sub_pages: bool,
) -> AppDestination {
    AppDestination {
        id,
        label,
        page_type,
        needs_id,
        has_sub_pages,
    }
}

pub static APP_DESTINATIONS: &[AppDestination] = &[
    dest("home", "Главная", None, false, false),
    dest("portfolio", "Портфель", Some("portfolio"), false, true),
    dest("idea_detail", "Карточка идеи", Some("idea"), true, false),
    dest(
        "investment_detail",
        "Карточка инвестиции",
        Some("order"),
        true,
        true,
    ),
    dest("news_list", "Лента новостей", Some("news"), false, false),
    dest("news_detail", "Новость", Some("news"), true, false),
    dest("ai_chat", "AI-ассистент", Some("assistant"), false, false),
    dest("profile", "Профиль", Some("profile"), false, false),
    dest("referral", "Реферальная программа", Some("referral"), false, false),
    dest(
        "axevil_investments",
        "Инвестиции Axevil",
        Some("axevil-investments"),
        false,
        false,
    ),
];

/// Look up an application destination by id.
#[must_use]
pub fn find_app_destination(id: &str) -> Option<&'static AppDestination> {
    APP_DESTINATIONS.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inner_pages() {
        assert_eq!("rounds".parse::<InnerPage>(), Ok(InnerPage::Rounds));
        assert_eq!(
            "Rounds".parse::<InnerPage>(),
            Err(FormError::UnknownSubPage("Rounds".into()))
        );
    }

    #[test]
    fn investment_detail_takes_id_and_tabs() {
        let d = find_app_destination("investment_detail").expect("destination exists");
        assert_eq!(d.page_type, Some("order"));
        assert!(d.needs_id && d.has_sub_pages);
    }

    #[test]
    fn home_has_no_page_type() {
        let d = find_app_destination("home").expect("destination exists");
        assert!(d.page_type.is_none());
        assert!(find_app_destination("nowhere").is_none());
    }
}
