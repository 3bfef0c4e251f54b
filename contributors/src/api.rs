use async_trait::async_trait;
use derive_more::Constructor;
use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Log source could not be run or reported error output.
    #[error("{0}")]
    SourceFetch(String),
    #[error("Unknown sorting type: {0}")]
    UnknownSortPolicy(String),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub const NOREPLY_DOMAIN: &str = "@users.noreply.github.com";
pub const BOT_SUFFIX: &str = "[bot]";

/// Single `Name <email>` author entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Constructor)]
pub struct ContributorRecord {
    pub name: String,
    pub email: String,
}

impl ContributorRecord {
    /// Parses a trimmed log line of the form `Name <email>`.
    ///
    /// Name is everything before the first ` <`, email everything up to the closing `>`.
    /// A line starting with `<` is an author with an empty name.
    pub fn parse(line: &str) -> Option<ContributorRecord> {
        let (name, rest) = match line.strip_prefix('<') {
            Some(rest) => ("", rest),
            None => line.split_once(" <")?,
        };
        let email = rest.strip_suffix('>')?;
        if email.contains(['<', '>']) {
            return None;
        }
        Some(ContributorRecord::new(name.to_string(), email.to_string()))
    }

    pub fn is_bot(&self) -> bool {
        self.name.ends_with(BOT_SUFFIX)
    }

    pub fn has_noreply_email(&self) -> bool {
        self.email.ends_with(NOREPLY_DOMAIN)
    }

    /// Login embedded in a `id+login@users.noreply.github.com` address.
    pub fn noreply_login(&self) -> Option<&str> {
        if !self.has_noreply_email() {
            return None;
        }
        let (_, tail) = self.email.split_once('+')?;
        tail.split(['+', '@']).next()
    }
}

impl Display for ContributorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            return f.write_fmt(format_args!("<{}>", self.email));
        }
        f.write_fmt(format_args!("{} <{}>", self.name, self.email))
    }
}

/// Supplier of the raw author log, one `Name <email>` line per commit, most recent first.
#[async_trait]
pub trait LogSource: Send + Sync {
    async fn author_log(&self) -> Result<String>;
}

#[test]
fn parse_record_test() {
    let record = ContributorRecord::parse("Jane Doe <jane@example.com>");
    assert_eq!(
        record,
        Some(ContributorRecord::new("Jane Doe".to_string(), "jane@example.com".to_string()))
    );
    assert_eq!(record.unwrap().to_string(), "Jane Doe <jane@example.com>");
}

#[test]
fn parse_malformed_record_test() {
    assert_eq!(ContributorRecord::parse(""), None);
    assert_eq!(ContributorRecord::parse("no email here"), None);
    assert_eq!(ContributorRecord::parse("name <unterminated@example.com"), None);
    assert_eq!(ContributorRecord::parse("name <a<b@example.com>"), None);
}

#[test]
fn noreply_login_test() {
    let aliased = ContributorRecord::parse("The Octocat <583231+octocat@users.noreply.github.com>").unwrap();
    assert_eq!(aliased.noreply_login(), Some("octocat"));

    let plain = ContributorRecord::parse("octocat <octocat@users.noreply.github.com>").unwrap();
    assert_eq!(plain.noreply_login(), None);

    let public = ContributorRecord::parse("octocat <1+octocat@example.com>").unwrap();
    assert_eq!(public.noreply_login(), None);

    let suffixed = ContributorRecord::parse("The Octocat <1+octocat+x@users.noreply.github.com>").unwrap();
    assert_eq!(suffixed.noreply_login(), Some("octocat"));
}

#[test]
fn parse_empty_name_test() {
    let record = ContributorRecord::parse("<anon@example.com>");
    assert_eq!(record, Some(ContributorRecord::new(String::new(), "anon@example.com".to_string())));
    assert_eq!(record.unwrap().to_string(), "<anon@example.com>");
}

#[test]
fn bot_test() {
    assert!(ContributorRecord::parse("dependabot[bot] <49699333+dependabot[bot]@users.noreply.github.com>")
        .unwrap()
        .is_bot());
    assert!(!ContributorRecord::parse("[bot] fan <fan@example.com>").unwrap().is_bot());
}
