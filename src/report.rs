use colored::Colorize;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::sources::{dedup_sources, EmailSourceMap};
use crate::Args;

/// Platform-generated privacy addresses; filtered out unless `--masked`.
const MASKED_SUFFIX: &str = "@users.noreply.github.com";

/// Drop masked noreply addresses unless the caller asked for them.
pub fn filter_masked(emails: &mut EmailSourceMap, include_masked: bool) {
    if !include_masked {
        emails.retain(|email, _| !email.ends_with(MASKED_SUFFIX));
    }
}

/// Keep only emails with at least one source attributed to the target
/// account itself, dropping cross-commits by other users.
pub fn filter_user(emails: &mut EmailSourceMap, username: &str) {
    let needle = format!("User: {username}");
    emails.retain(|_, sources| sources.iter().any(|s| s.contains(&needle)));
}

/// A zero-result sourced report ends at the hint pointing at `--masked`:
/// nothing further is printed and no output file gets written.
pub fn stops_at_masked_hint(emails: &EmailSourceMap, args: &Args) -> bool {
    args.sources && !args.masked && emails.is_empty()
}

/// Print the colored console report.
pub fn print_report(emails: &EmailSourceMap, args: &Args) {
    if !args.sources {
        for (email, _) in emails.iter() {
            println!("{}", format!("Email: {email}").cyan());
        }
        return;
    }

    let count = emails.len();
    let plural = if count != 1 { "s" } else { "" };
    println!(
        "{}",
        format!(
            "Found {count} email{plural} for GitHub user: {}",
            args.username
        )
        .green()
    );

    if stops_at_masked_hint(emails, args) {
        println!(
            "{}",
            "Use --masked to show any hidden emails (@users.noreply.github.com emails)\n".yellow()
        );
        return;
    }

    for (email, sources) in emails.iter() {
        println!("{}", format!("Email: {email}").cyan());
        println!("Sources:");
        for source in dedup_sources(sources) {
            println!("{}", format!("  - {source}").magenta());
        }
        println!();
    }
}

/// Write the same report to a file, free of color codes.
pub fn write_report(
    path: &Path,
    emails: &EmailSourceMap,
    show_sources: bool,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(render_plain(emails, show_sources).as_bytes())?;
    info!("Wrote report to '{}'", path.display());
    Ok(())
}

fn render_plain(emails: &EmailSourceMap, show_sources: bool) -> String {
    let mut out = String::new();
    for (email, sources) in emails.iter() {
        out.push_str(&format!("Email: {email}\n"));
        if show_sources {
            out.push_str("Sources:\n");
            for source in dedup_sources(sources) {
                out.push_str(&format!("  - {source}\n"));
            }
            out.push('\n');
        }
    }
    out
}
