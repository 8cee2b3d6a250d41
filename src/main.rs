use clap::Parser;

use greeting_card::{app, cli::Args, logging};

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = Args::parse();
    app::run(args)
}
