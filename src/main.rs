use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;
use tracing::{error, info};

use github_email_finder::{report, Args, EmailFinder};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Initialize the tracing logger
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.user && !args.sources {
        println!(
            "{}",
            "Error: -u/--user requires -s/--sources to be enabled".red()
        );
        return Ok(ExitCode::FAILURE);
    }

    let finder = EmailFinder::new(&args.username)?;

    let lookup = match finder.lookup().await {
        Ok(lookup) => lookup,
        Err(e) => {
            error!("lookup failed: {}", e);
            println!("{}", e.to_string().red());
            return Ok(ExitCode::FAILURE);
        }
    };

    info!(
        "Traversal for '{}' took {:.2}s",
        args.username,
        lookup.elapsed.as_secs_f64()
    );

    let mut emails = lookup.emails;
    report::filter_masked(&mut emails, args.masked);
    if args.user {
        report::filter_user(&mut emails, &args.username);
    }

    report::print_report(&emails, &args);

    if report::stops_at_masked_hint(&emails, &args) {
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(path) = &args.output {
        report::write_report(path, &emails, args.sources)?;
    }

    Ok(ExitCode::SUCCESS)
}
