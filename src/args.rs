use clap::Parser;
use contributors::config::{Config, NamedSort};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Write the output to the file
    #[clap(short, long)]
    pub write: bool,

    /// The filename to write the output to
    #[clap(short, long, env = "CONTRIBUTORS_FILE", default_value = "CONTRIBUTORS", parse(try_from_str=non_empty))]
    pub file: String,

    /// Include bot accounts
    #[clap(short, long)]
    pub bots: bool,

    /// Contributors order: abc, cba, recent or oldest
    #[clap(short, long, env = "CONTRIBUTORS_SORT", default_value = "abc")]
    pub sort: NamedSort,

    /// Repository working directory
    #[clap(short, long, env = "CONTRIBUTORS_PATH", default_value = ".", parse(from_os_str))]
    pub path: PathBuf,

    /// Comment lines placed at the top of the output
    pub comments: Vec<String>,
}

fn non_empty(value: &str) -> clap::Result<String, String> {
    if value.trim().is_empty() {
        return Err("file name can not be empty.".to_string());
    }
    Ok(value.to_string())
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config::default()
            .with_write(args.write)
            .with_bots(args.bots)
            .with_comments(args.comments)
            .with_file_name(args.file)
            .with_sort(args.sort)
    }
}
