//! Telegram bots and the scenarios each of them can start.
//!
//! A scenario is a prefix placed in front of the `start` payload. The first
//! scenario in a bot's table is its default.

/// A conversational flow of a bot.
#[derive(Debug, PartialEq, Eq)]
pub struct Scenario {
    pub id: &'static str,
    pub label: &'static str,
    pub prefix: &'static str,
    pub needs_idea_name: bool,
}

const fn scenario(id: &'static str, label: &'static str, prefix: &'static str) -> Scenario {
    Scenario {
        id,
        label,
        prefix,
        needs_idea_name: false,
    }
}

const fn idea_scenario(id: &'static str, label: &'static str, prefix: &'static str) -> Scenario {
    Scenario {
        id,
        label,
        prefix,
        needs_idea_name: true,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Bot {
    pub id: &'static str,
    pub label: &'static str,
    pub address: &'static str,
    pub scenarios: &'static [Scenario],
}

impl Bot {
    /// The scenario a freshly selected bot starts with.
    #[must_use]
    pub fn default_scenario(&self) -> Option<&'static Scenario> {
        self.scenarios.first()
    }

    #[must_use]
    pub fn scenario(&self, id: &str) -> Option<&'static Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// `https://t.me/<address>`
    #[must_use]
    pub fn url(&self) -> String {
        format!("https://t.me/{}", self.address)
    }
}

pub static EVENTS_BOT: Bot = Bot {
    id: "events",
    label: "Бот вебинаров",
    address: "axevil_events_bot",
    scenarios: &[
        scenario("invite", "Приглашение на вебинар", "web_"),
        scenario("application", "Заявка на инвестицию", "commit_"),
    ],
};

pub static PARTNER_BOT: Bot = Bot {
    id: "partner",
    label: "ЛК партнёра",
    address: "axevil_partner_bot",
    scenarios: &[
        scenario("home", "Главная ЛК", "partnerinfo_"),
        scenario("webinars", "Вебинары", "getinvite_"),
        scenario("report", "Отчёт", "partnerinfo_"),
        scenario("ideas_list", "Список идей", "getpitch_"),
        idea_scenario("idea_pitch", "Питч идеи", "getpitch_"),
        idea_scenario("idea_materials", "Материалы идеи", "getpitch_"),
        idea_scenario("idea_booking", "Бронирование идеи", "getpitch_"),
        scenario("knowledge", "База знаний", "partnerinfo_"),
        scenario("registration", "Регистрация партнёра", "newpartner_"),
        scenario("application", "Заявка на инвестицию", "commit_"),
    ],
};

/// Takes the raw tag as its payload.
pub static CLAUDIA_BOT: Bot = Bot {
    id: "claudia",
    label: "Бот Клаудия",
    address: "axevil_claudia_bot",
    scenarios: &[],
};

pub static BOTS: [&Bot; 3] = [&EVENTS_BOT, &PARTNER_BOT, &CLAUDIA_BOT];

#[must_use]
pub fn find_bot(id: &str) -> Option<&'static Bot> {
    BOTS.into_iter().find(|b| b.id == id)
}
