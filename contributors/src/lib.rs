//! Contributors list generation
//!
//! # Overview
//!
//! Projects often ship a `CONTRIBUTORS` (or `AUTHORS`) file listing everyone who ever committed to the repository.
//! Library builds that list from the raw author log of a version-control system, one `Name <email>` pair per commit.
//! The same person usually shows up many times in such a log, sometimes under different identities, so the list is normalized first:
//! exact duplicates are collapsed, bot accounts are dropped, GitHub noreply aliases (`id+login@users.noreply.github.com`) are folded into the login they belong to,
//! and finally every email and every display name is kept only once.
//! The surviving contributors are sorted by the configured policy and rendered below an optional block of `# ` comments.

#[cfg(feature = "api")]
pub mod api;
#[cfg(feature = "api")]
pub mod config;
#[cfg(feature = "generator")]
pub mod normalizer;

#[cfg(feature = "generator")]
pub use normalizer::{normalize, ContributorsGenerator};
