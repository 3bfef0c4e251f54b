use crate::api::{Error, Result};
use derive_more::From;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

pub const DEFAULT_FILE_NAME: &str = "CONTRIBUTORS";

/// Built-in orderings of the rendered `Name <email>` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum NamedSort {
    /// Ascending
    #[default]
    Abc,
    /// Descending
    Cba,
    /// Log order, most recent commit first
    Recent,
    /// Reversed log order
    Oldest,
}

pub type Comparator = Arc<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

#[derive(Clone)]
pub enum Sort {
    Named(NamedSort),
    /// Caller supplied comparator over rendered lines.
    Custom(Comparator),
}

impl Sort {
    /// Wraps a comparator over rendered `Name <email>` lines.
    ///
    /// # Panics
    /// The comparator must be a total order. Sorting with an inconsistent one may panic.
    pub fn custom<F>(comparator: F) -> Sort
    where
        F: 'static + Fn(&str, &str) -> Ordering + Send + Sync,
    {
        Sort::Custom(Arc::new(comparator))
    }
}

impl Default for Sort {
    fn default() -> Self {
        Sort::Named(NamedSort::default())
    }
}

impl Debug for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sort::Named(named) => f.debug_tuple("Named").field(named).finish(),
            Sort::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<NamedSort> for Sort {
    fn from(named: NamedSort) -> Self {
        Sort::Named(named)
    }
}

impl FromStr for NamedSort {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        NamedSort::iter()
            .find(|named| named.to_string() == value)
            .ok_or_else(|| Error::UnknownSortPolicy(value.to_string()))
    }
}

impl FromStr for Sort {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        value.parse::<NamedSort>().map(Sort::Named)
    }
}

/// Comment lines rendered above the contributors, each prefixed with `# `.
#[derive(Debug, Clone, Default, PartialEq, Eq, From)]
pub struct Comments(Vec<String>);

impl Comments {
    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Comments {
    fn from(comment: &str) -> Self {
        Comments(vec![comment.to_string()])
    }
}

impl From<String> for Comments {
    fn from(comment: String) -> Self {
        Comments(vec![comment])
    }
}

impl From<Vec<&str>> for Comments {
    fn from(comments: Vec<&str>) -> Self {
        Comments(comments.into_iter().map(String::from).collect())
    }
}

impl<T: Into<Comments>> From<Option<T>> for Comments {
    fn from(comments: Option<T>) -> Self {
        comments.map(Into::into).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub write: bool,
    pub include_bots: bool,
    pub comments: Comments,
    pub file_name: PathBuf,
    pub sort: Sort,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            write: false,
            include_bots: false,
            comments: Comments::default(),
            file_name: PathBuf::from(DEFAULT_FILE_NAME),
            sort: Sort::default(),
        }
    }
}

impl Config {
    pub fn with_write(mut self, write: bool) -> Config {
        self.write = write;
        self
    }

    pub fn with_bots(mut self, include_bots: bool) -> Config {
        self.include_bots = include_bots;
        self
    }

    pub fn with_comments(mut self, comments: impl Into<Comments>) -> Config {
        self.comments = comments.into();
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Config {
        self.file_name = file_name.into();
        self
    }

    pub fn with_sort(mut self, sort: impl Into<Sort>) -> Config {
        self.sort = sort.into();
        self
    }
}
