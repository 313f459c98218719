//! Traffic sources a link can be published to.
//!
//! Each source owns the application base URL used for deep links. Sources that
//! map onto the webinar tag vocabulary also carry that tag as their bot
//! parameter.

/// A single placement such as a channel or a mailing list.
#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    pub value: &'static str,
    pub label: &'static str,
    pub base_url: &'static str,
    pub bot_param: Option<&'static str>,
}

/// Sources shown together under one heading.
#[derive(Debug)]
pub struct SourceGroup {
    pub label: &'static str,
    pub icon: &'static str,
    pub sources: &'static [Source],
}

const fn source(
    value: &'static str,
    label: &'static str,
    base_url: &'static str,
    bot_param: Option<&'static str>,
) -> Source {
    Source {
        value,
        label,
        base_url,
        bot_param,
    }
}

pub static SOURCE_GROUPS: &[SourceGroup] = &[
    SourceGroup {
        label: "Telegram",
        icon: "telegram",
        sources: &[
            source(
                "tgac",
                "Венчурная Прожарка",
                "https://axevil.app.link/tgac",
                Some("tgmain"),
            ),
            source(
                "tgp",
                "Партнёрский канал",
                "https://axevil.app.link/tgp",
                Some("tgpartners"),
            ),
            source("tgmb", "Бот Клаудия", "https://axevil.app.link/tgmb", None),
            source(
                "tgwb",
                "Бот для вебинаров",
                "https://axevil.app.link/tgwb",
                None,
            ),
            source(
                "tgx",
                "Внешняя реклама в TG",
                "https://axevil.app.link/tgx",
                None,
            ),
        ],
    },
    SourceGroup {
        label: "YouTube",
        icon: "youtube",
        sources: &[
            source(
                "yt",
                "Ютуб-канал Axevil",
                "https://axevil.app.link/yt",
                Some("ytmain"),
            ),
            source(
                "ytx",
                "Внешняя реклама на Youtube",
                "https://axevil.app.link/ytx",
                None,
            ),
        ],
    },
    SourceGroup {
        label: "Instagram",
        icon: "instagram",
        sources: &[
            source(
                "igac",
                "Инстаграм Axevil",
                "https://axevil.app.link/igac",
                Some("igmain"),
            ),
            source("igex", "Внешняя реклама", "https://axevil.app.link/igex", None),
        ],
    },
    SourceGroup {
        label: "Остальное",
        icon: "link",
        sources: &[
            source("ntn", "Notion", "https://axevil.app.link/ntn", None),
            source(
                "web",
                "Сайт",
                "https://axevil.app.link/web",
                Some("website"),
            ),
            source(
                "eml",
                "Email-рассылка",
                "https://axevil.app.link/eml",
                Some("email"),
            ),
            source("pres", "PDF материалы", "https://axevil.app.link/pres", None),
            source(
                "event",
                "Офлайн-мероприятия",
                "https://axevil.app.link/event",
                None,
            ),
            source("art", "PR-публикации", "https://axevil.app.link/art", None),
            source("ai", "Для Саши", "https://axevil.app.link/ai", None),
            source("tc", "Для Тараса", "https://axevil.app.link/tc", None),
        ],
    },
];

/// Iterate over every source in display order.
pub fn all_sources() -> impl Iterator<Item = &'static Source> {
    SOURCE_GROUPS.iter().flat_map(|g| g.sources.iter())
}

/// Look up a source by its value.
#[must_use]
pub fn find_source(value: &str) -> Option<&'static Source> {
    all_sources().find(|s| s.value == value)
}

/// Look up a source by its application base URL.
#[must_use]
pub fn find_source_by_url(url: &str) -> Option<&'static Source> {
    let url = url.trim_end_matches('/');
    all_sources().find(|s| s.base_url == url)
}

/// Resolve either a source value or a base URL.
#[must_use]
pub fn resolve_source(key: &str) -> Option<&'static Source> {
    find_source(key).or_else(|| find_source_by_url(key))
}
