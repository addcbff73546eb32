//! WSD CLI - Command line tool for preparing station chart payloads.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wsd-cli",
    version,
    about = "Weather Station Dashboard chart preparation toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wsd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wsd_cmd::run(cli.command)
}
