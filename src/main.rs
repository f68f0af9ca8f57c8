use clap::Parser;
use clinical_labels::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run(&cli, &mut std::io::stdout().lock())
}
