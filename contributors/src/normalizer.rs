use crate::api::{ContributorRecord, Error, LogSource, Result};
use crate::config::{Comments, Config, NamedSort, Sort};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::hash::Hash;

pub struct ContributorsGenerator<SOURCE>
where
    SOURCE: LogSource,
{
    source: SOURCE,
}

impl<SOURCE> ContributorsGenerator<SOURCE>
where
    SOURCE: LogSource,
{
    pub fn new(source: SOURCE) -> Self {
        ContributorsGenerator { source }
    }

    /// Fetches the author log, renders the contributors list and, if configured, overwrites `config.file_name` with it.
    pub async fn generate(&self, config: &Config) -> Result<String> {
        let log = self.source.author_log().await?;
        let contributors = normalize(&log, config);
        if config.write {
            std::fs::write(&config.file_name, &contributors).map_err(|source| Error::Write {
                path: config.file_name.clone(),
                source,
            })?;
            info!("Contributors written to {}", config.file_name.display());
        }
        Ok(contributors)
    }
}

/// Runs the whole pipeline over a raw author log.
pub fn normalize(log: &str, config: &Config) -> String {
    let records = parse_log(log);
    let records = without_bots(records, config.include_bots);
    let records = without_noreply_aliases(records);
    let records = unique_by(records, |record| record.email.clone());
    let records = unique_names(records);
    debug!("{} contributors after deduplication", records.len());
    let records = sorted(records, &config.sort);
    render(&records, &config.comments)
}

/// Parses `Name <email>` lines, dropping exact duplicates but keeping log order.
pub fn parse_log(log: &str) -> Vec<ContributorRecord> {
    let lines = log.split('\n').map(str::trim).filter(|line| !line.is_empty());
    unique_by(lines.collect::<Vec<_>>(), |line| *line)
        .into_iter()
        .filter_map(|line| {
            let record = ContributorRecord::parse(line);
            if record.is_none() {
                warn!("Skipping malformed author line: {}", line);
            }
            record
        })
        .collect()
}

pub fn without_bots(records: Vec<ContributorRecord>, include_bots: bool) -> Vec<ContributorRecord> {
    if include_bots {
        return records;
    }
    records.into_iter().filter(|record| !record.is_bot()).collect()
}

/// Drops `id+login@users.noreply.github.com` entries whose login is already listed under another email.
///
/// A login is known when it is a space-free display name that never appears paired with a noreply email.
/// Noreply emails without a `+` are always kept.
pub fn without_noreply_aliases(records: Vec<ContributorRecord>) -> Vec<ContributorRecord> {
    let noreply_names: HashSet<&str> = records
        .iter()
        .filter(|record| record.has_noreply_email())
        .map(|record| record.name.as_str())
        .collect();
    let known_logins: HashSet<String> = records
        .iter()
        .map(|record| record.name.as_str())
        .filter(|name| !name.is_empty() && !name.contains(' ') && !noreply_names.contains(name))
        .map(String::from)
        .collect();
    records
        .into_iter()
        .filter(|record| match record.noreply_login() {
            Some(login) if known_logins.contains(login) => {
                debug!("Dropping noreply alias {} of {}", record, login);
                false
            }
            _ => true,
        })
        .collect()
}

/// Keeps the first element for each key, preserving order.
pub fn unique_by<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

/// Keeps the first record of each display name. Authors without a name are told apart by email only.
pub fn unique_names(records: Vec<ContributorRecord>) -> Vec<ContributorRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| record.name.is_empty() || seen.insert(record.name.clone()))
        .collect()
}

pub fn sorted(mut records: Vec<ContributorRecord>, sort: &Sort) -> Vec<ContributorRecord> {
    match sort {
        Sort::Named(NamedSort::Abc) => records.sort_by_cached_key(ToString::to_string),
        Sort::Named(NamedSort::Cba) => {
            records.sort_by_cached_key(ToString::to_string);
            records.reverse();
        }
        Sort::Named(NamedSort::Recent) => {}
        Sort::Named(NamedSort::Oldest) => records.reverse(),
        Sort::Custom(comparator) => records.sort_by(|a, b| comparator(&a.to_string(), &b.to_string())),
    }
    records
}

/// Renders the comment block followed by one contributor per line, always ending with a single newline.
pub fn render(records: &[ContributorRecord], comments: &Comments) -> String {
    let mut header = comments
        .lines()
        .iter()
        .map(|comment| format!("# {}", comment))
        .collect::<Vec<_>>()
        .join("\n");
    match comments.len() {
        0 => {}
        1 => header.push('\n'),
        _ => header.push_str("\n\n"),
    }
    let body = records.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n");
    if body.is_empty() {
        header.truncate(header.trim_end().len());
    }
    format!("{}{}\n", header, body)
}

/// Tests
