use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use utmlink::{
    FormState, InnerPage, LinkFamily, copy_all_text, render_destinations, render_scenarios,
    render_sources, url_lines,
};

#[derive(Parser)]
#[command(version, about = "Build tracking links for the app and Telegram bots")]
struct Cli {
    /// Print a lookup table instead of building links
    #[arg(long = "list", value_enum)]
    list: Option<Listing>,
    /// Link family: app, webinar-bot, partner-bot or telegram-bot
    #[arg(short = 'f', long = "family", required_unless_present = "list")]
    family: Option<LinkFamily>,
    #[command(flatten)]
    fields: Fields,
    /// Output layout
    #[arg(long = "format", value_enum, env = "UTMLINK_FORMAT", default_value_t = Format::Urls)]
    format: Format,
}

#[derive(clap::Args)]
struct Fields {
    /// Destination id; for telegram-bot links, the bot id
    #[arg(short = 'd', long = "destination")]
    destination: Option<String>,
    /// Page id for destinations that need one
    #[arg(long = "id")]
    id: Option<String>,
    /// Tab to open: updates, rounds or documents
    #[arg(long = "sub-page")]
    sub_page: Option<InnerPage>,
    /// Idea name; whitespace becomes hyphens
    #[arg(long = "idea-name")]
    idea_name: Option<String>,
    /// Bot scenario for telegram-bot links
    #[arg(long = "scenario")]
    scenario: Option<String>,
    /// Tracking tag
    #[arg(short = 't', long = "tag")]
    tag: Option<String>,
    /// Secondary tag for app links
    #[arg(long = "feature")]
    feature: Option<String>,
    /// Source values or base URLs
    #[arg(short = 's', long = "source", value_delimiter = ',')]
    sources: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Listing {
    Sources,
    Destinations,
    Scenarios,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One URL per line
    Urls,
    /// Source label above each URL, blank line between links
    Labelled,
}

fn fill_form(family: LinkFamily, fields: &Fields) -> anyhow::Result<FormState> {
    let mut form = FormState::new();
    form.select_link_family(family);
    let destination = fields
        .destination
        .as_deref()
        .context("--destination is required when building links")?;
    form.select_destination(destination)?;
    if let Some(scenario) = &fields.scenario {
        form.select_scenario(scenario)?;
    }
    if let Some(id) = &fields.id {
        form.set_destination_id(id)?;
    }
    if fields.sub_page.is_some() {
        form.set_sub_page(fields.sub_page)?;
    }
    if let Some(name) = &fields.idea_name {
        form.set_idea_name(name)?;
    }
    if fields.feature.is_some() {
        form.set_feature(fields.feature.as_deref())?;
    }
    form.set_tag(fields.tag.as_deref().unwrap_or_default());
    for source in &fields.sources {
        form.select_source(source)?;
    }
    Ok(form)
}

fn print_listing(listing: Listing, family: Option<LinkFamily>) -> anyhow::Result<()> {
    let lines = match listing {
        Listing::Sources => render_sources(),
        Listing::Scenarios => render_scenarios(),
        Listing::Destinations => {
            let Some(family) = family else {
                bail!("--list destinations needs --family");
            };
            render_destinations(family)
        }
    };
    println!("{}", lines.join("\n"));
    Ok(())
}

/// Entry point for the command-line link builder.
///
/// Fills a [`FormState`] from the arguments exactly as the interactive form
/// would, then prints one link per source.
///
/// # Examples
///
/// ```sh
/// # Deep link into an idea card for the Instagram account
/// utmlink -f app -d idea_detail --id 42 -t post_100823 -s igac
///
/// # Partner bot pitch for an idea
/// utmlink -f partner-bot -d idea_pitch --idea-name "Scale AI" -t tgmain -s tgp
///
/// # Show which destinations the app family offers
/// utmlink --list destinations -f app
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(listing) = cli.list {
        return print_listing(listing, cli.family);
    }
    let family = cli.family.context("--family is required")?;
    let form = fill_form(family, &cli.fields)?;
    let links = form.generate()?;
    info!("generated {} link(s) for {family}", links.len());
    for link in &links {
        debug!("{} -> {}", link.source_value, link.url);
    }

    match cli.format {
        Format::Urls => println!("{}", url_lines(&links).join("\n")),
        Format::Labelled => println!("{}", copy_all_text(&links)),
    }
    Ok(())
}
