//! # GitHub Email Finder
//!
//! A Rust library for discovering email addresses associated with a GitHub
//! account by scanning the commit histories of its non-fork repositories,
//! with a fallback to the public events feed.
//!
//! ## Main Components
//!
//! - [`EmailFinder`]: drives the lookup against a target username
//! - [`EmailSourceMap`]: every discovered email with the sources it was seen in
//! - [`Args`]: command line argument structure
//!
//! ## Example
//!
//! ```no_run
//! use github_email_finder::EmailFinder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let finder = EmailFinder::new("octocat")?;
//!     let lookup = finder.lookup().await?;
//!
//!     for (email, _sources) in lookup.emails.iter() {
//!         println!("{email}");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod args;
mod email_finder;
mod extract;
pub mod report;
mod sources;

// Re-export main components for documentation and external use
pub use crate::args::Args;
pub use crate::email_finder::{EmailFinder, Lookup, LookupError};
pub use crate::sources::{dedup_sources, EmailSourceMap};
