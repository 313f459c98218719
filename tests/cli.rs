//! Integration tests for the `utmlink` command-line interface.
//!
//! This module validates:
//! - Building links from flags for every link family
//! - The labelled "copy all" output layout
//! - Table listings
//! - Error reporting for invalid input

#[macro_use]
mod prelude;
use prelude::*;

fn utmlink() -> Command {
    let mut cmd =
        Command::cargo_bin("utmlink").expect("Failed to create cargo command for utmlink");
    cmd.env_remove("UTMLINK_FORMAT");
    cmd
}

/// Verifies that the `--version` flag prints the crate version and exits.
#[test]
fn test_cli_version_flag() {
    utmlink()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("utmlink {}\n", env!("CARGO_PKG_VERSION")));
}

/// The family is mandatory unless a table is being listed.
#[test]
fn test_cli_requires_family() {
    utmlink().args(["-t", "promo"]).assert().failure();
}

#[test]
fn test_cli_app_link() {
    utmlink()
        .args([
            "-f",
            "app",
            "-d",
            "idea_detail",
            "--id",
            "42",
            "-t",
            "post_100823",
            "-s",
            "igac",
        ])
        .assert()
        .success()
        .stdout("https://axevil.app.link/igac?~campaign=post_100823&page_type=idea&page_id=42\n");
}

#[test]
fn test_cli_partner_idea_pitch() {
    utmlink()
        .args([
            "--family",
            "partner-bot",
            "--destination",
            "idea_pitch",
            "--idea-name",
            "Scale AI",
            "--tag",
            "tgmain",
            "--source",
            "tgp",
        ])
        .assert()
        .success()
        .stdout("https://t.me/axevil_partner_bot?start=getpitch_tgmain_Scale-AI\n");
}

/// Sources may be comma separated and are printed in the order given.
#[test]
fn test_cli_labelled_format() {
    let output = run_cli_with_args(&[
        "-f",
        "app",
        "-d",
        "portfolio",
        "--sub-page",
        "rounds",
        "-t",
        "promo",
        "-s",
        "eml,tgac",
        "--format",
        "labelled",
    ]);
    assert!(output.status.success());
    insta::assert_snapshot!(String::from_utf8_lossy(&output.stdout), @r"
    Email-рассылка
    https://axevil.app.link/eml?~campaign=promo&page_type=portfolio&initial_inner_page=rounds

    Венчурная Прожарка
    https://axevil.app.link/tgac?~campaign=promo&page_type=portfolio&initial_inner_page=rounds
    ");
}

#[test]
fn test_cli_format_from_env() {
    Command::cargo_bin("utmlink")
        .expect("Failed to create cargo command for utmlink")
        .env("UTMLINK_FORMAT", "labelled")
        .args(["-f", "webinar-bot", "-d", "invite", "-t", "email", "-s", "eml"])
        .assert()
        .success()
        .stdout("Email-рассылка\nhttps://t.me/axevil_events_bot?start=web_email\n");
}

#[test]
fn test_cli_telegram_bot_scenario() {
    utmlink()
        .args([
            "-f",
            "telegram-bot",
            "-d",
            "events",
            "--scenario",
            "application",
            "-t",
            "march",
            "-s",
            "yt",
        ])
        .assert()
        .success()
        .stdout("https://t.me/axevil_events_bot?start=commit_march\n");
}

#[test]
fn test_cli_rejects_bad_tag() {
    utmlink()
        .args(["-f", "app", "-d", "home", "-t", "bad tag", "-s", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "tag 'bad tag' may only contain Latin letters, digits, hyphens and underscores",
        ));
}

#[test]
fn test_cli_rejects_unknown_webinar_tag() {
    utmlink()
        .args(["-f", "webinar-bot", "-d", "invite", "-t", "promo", "-s", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("use one of: tgmain, tgpartners"));
}

#[test]
fn test_cli_rejects_unsafe_idea_name() {
    utmlink()
        .args([
            "-f",
            "partner-bot",
            "-d",
            "idea_pitch",
            "--idea-name",
            "A&B #1",
            "-t",
            "tgmain",
            "-s",
            "tgp",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("idea name 'A&B-#1' may only contain"));
}

#[test]
fn test_cli_rejects_unknown_source() {
    utmlink()
        .args(["-f", "app", "-d", "home", "-t", "promo", "-s", "vk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown source 'vk'"));
}

#[test]
fn test_cli_rejects_inapplicable_field() {
    utmlink()
        .args(["-f", "app", "-d", "home", "--id", "42", "-t", "promo", "-s", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not apply to destination 'home'"));
}

#[test]
fn test_cli_requires_source() {
    utmlink()
        .args(["-f", "app", "-d", "home", "-t", "promo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("select at least one source"));
}

#[test]
fn test_cli_lists_webinar_destinations() {
    let output = run_cli_with_args(&["--list", "destinations", "-f", "webinar-bot"]);
    assert!(output.status.success());
    insta::assert_snapshot!(String::from_utf8_lossy(&output.stdout), @r"
    invite       Приглашение на вебинар  web_
    application  Заявка на инвестицию    commit_
    ");
}

#[test]
fn test_cli_list_destinations_needs_family() {
    utmlink()
        .args(["--list", "destinations"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs --family"));
}

#[test]
fn test_cli_lists_sources() {
    let output = run_cli_with_args(&["--list", "sources"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Telegram:\n"));
    assert!(stdout.contains("  igac  Инстаграм Axevil  https://axevil.app.link/igac  igmain"));
    assert!(stdout.contains("https://axevil.app.link/tc"));
}
