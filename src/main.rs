use clap::Parser;
use contributors::api::Error;
use contributors_gen_app::Args;

/// Prints or writes the CONTRIBUTORS file of a git repository

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();
    let write = args.write;

    let contributors = contributors_gen_app::generate_contributors(args).await?;

    if !write {
        print!("{}", contributors);
    }

    Ok(())
}
