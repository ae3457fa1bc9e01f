use clap::Parser;

/// Find email addresses tied to a GitHub account by scanning its public
/// commit history, with a fallback to the public events feed.
#[derive(Parser)]
#[clap(
    author,
    version,
    about,
    long_about = "Find the email address(es) of a GitHub user by walking the commit histories of their non-fork repositories, falling back to their public push events when the repositories reveal nothing."
)]
pub struct Args {
    /// GitHub username to search for.
    pub username: String,

    /// Show masked emails as well (@users.noreply.github.com emails).
    #[clap(short, long)]
    pub masked: bool,

    /// Show the sources each email was found in.
    #[clap(short, long)]
    pub sources: bool,

    /// Only show emails linked directly to the specified account
    /// (no cross-commits). Requires --sources.
    #[clap(short, long)]
    pub user: bool,

    /// Output the report to a file.
    #[clap(short, long, value_name = "PATH")]
    pub output: Option<std::path::PathBuf>,
}
