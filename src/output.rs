//! Terminal rendering of generated links and lookup tables.
//!
//! Labels are Cyrillic, so column padding is measured in display width rather
//! than bytes.

use unicode_width::UnicodeWidthStr;

use crate::{
    bots::BOTS,
    destinations::{APP_DESTINATIONS, InnerPage},
    form::{GeneratedLink, LinkFamily},
    sources::SOURCE_GROUPS,
};

/// Text copied by "copy all": `label\nurl` blocks separated by a blank line.
#[must_use]
pub fn copy_all_text(links: &[GeneratedLink]) -> String {
    links
        .iter()
        .map(|l| format!("{}\n{}", l.source_label, l.url))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One URL per line.
#[must_use]
pub fn url_lines(links: &[GeneratedLink]) -> Vec<String> {
    links.iter().map(|l| l.url.clone()).collect()
}

/// List every source with its group, base URL and bot parameter.
#[must_use]
pub fn render_sources() -> Vec<String> {
    let mut out = Vec::new();
    for group in SOURCE_GROUPS {
        out.push(format!("{}:", group.label));
        let rows = group
            .sources
            .iter()
            .map(|s| {
                vec![
                    s.value.to_string(),
                    s.label.to_string(),
                    s.base_url.to_string(),
                    s.bot_param.unwrap_or("-").to_string(),
                ]
            })
            .collect::<Vec<_>>();
        out.extend(align_rows(&rows).into_iter().map(|r| format!("  {r}")));
    }
    out
}

/// List the destinations a family offers.
///
/// Flags mark what else the destination asks for: `id`, `tabs` or `idea`.
#[must_use]
pub fn render_destinations(family: LinkFamily) -> Vec<String> {
    let rows: Vec<Vec<String>> = match family {
        LinkFamily::App => APP_DESTINATIONS
            .iter()
            .map(|d| {
                let mut flags = Vec::new();
                if d.needs_id {
                    flags.push("id");
                }
                if d.has_sub_pages {
                    flags.push("tabs");
                }
                vec![
                    d.id.to_string(),
                    d.label.to_string(),
                    d.page_type.unwrap_or("-").to_string(),
                    flags.join(","),
                ]
            })
            .collect(),
        LinkFamily::WebinarBot | LinkFamily::PartnerBot => family
            .bot()
            .map(|bot| {
                bot.scenarios
                    .iter()
                    .map(|s| {
                        vec![
                            s.id.to_string(),
                            s.label.to_string(),
                            s.prefix.to_string(),
                            if s.needs_idea_name { "idea" } else { "" }.to_string(),
                        ]
                    })
                    .collect()
            })
            .unwrap_or_default(),
        LinkFamily::TelegramBot => BOTS
            .iter()
            .map(|b| {
                vec![
                    b.id.to_string(),
                    b.label.to_string(),
                    b.url(),
                    b.scenarios.len().to_string(),
                ]
            })
            .collect(),
    };
    let mut out = align_rows(&rows);
    if family == LinkFamily::App {
        let tabs = InnerPage::ALL.map(InnerPage::as_str).join(", ");
        out.push(format!("tabs: {tabs}"));
    }
    out
}

/// List every bot with its scenarios.
#[must_use]
pub fn render_scenarios() -> Vec<String> {
    let mut out = Vec::new();
    for bot in BOTS {
        out.push(format!("{} ({}):", bot.id, bot.url()));
        if bot.scenarios.is_empty() {
            out.push("  (raw tag)".to_string());
            continue;
        }
        let rows = bot
            .scenarios
            .iter()
            .map(|s| vec![s.id.to_string(), s.prefix.to_string(), s.label.to_string()])
            .collect::<Vec<_>>();
        out.extend(align_rows(&rows).into_iter().map(|r| format!("  {r}")));
    }
    out
}

/// Pad every column but the last to the widest cell in it.
fn align_rows(rows: &[Vec<String>]) -> Vec<String> {
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; cols];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }
    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                line.push_str(cell);
                if i + 1 < row.len() {
                    let pad = widths[i] - UnicodeWidthStr::width(cell.as_str());
                    line.push_str(&" ".repeat(pad));
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}
