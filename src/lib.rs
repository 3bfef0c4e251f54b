mod args;

pub use args::Args;
use contributors::api::{LogSource, Result};
use contributors::config::Config;
use contributors::ContributorsGenerator;
use git_client::GitLogSourceBuilder;
use log::debug;

/// Generates the contributors list of the git repository at `args.path`.
pub async fn generate_contributors(args: Args) -> Result<String> {
    let source = GitLogSourceBuilder::default().with_work_dir(&args.path).build();
    generate_with_source(source, args).await
}

pub async fn generate_with_source<SOURCE: LogSource>(source: SOURCE, args: Args) -> Result<String> {
    let config = Config::from(args);
    debug!("Generating contributors with {:?}", config);
    ContributorsGenerator::new(source).generate(&config).await
}
