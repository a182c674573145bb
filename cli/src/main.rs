mod commands;
mod shell;
mod terminal;

use commands::CommandLine;
use libra_common::config::Config;
use libra_core::Library;
use terminal::{logging, print};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.no_color)?;

    let cfg: Config = commands.to_config();
    debug!(?cfg, "starting");

    print::banner(cfg.no_banner, cfg.quiet);

    let mut library = Library::new(cfg.clone());
    shell::run(&mut library, &cfg)?;

    print::end_of_program();
    Ok(())
}
