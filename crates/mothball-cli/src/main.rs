//! Mothball - archive settled project folders to an Archiware P5 server.

use clap::Parser;
use mothball_cli::{logging, run, Cli, Profile, Settings};
use mothball_p5::NsdchatExecutor;

fn main() {
    if let Err(e) = try_main() {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn try_main() -> mothball_cli::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let profile = Profile::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, profile)?;

    let executor = NsdchatExecutor::new(&settings.nsdchat, &settings.endpoint);
    run::execute(&settings, executor)?;
    Ok(())
}
