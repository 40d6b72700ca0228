mod commands;
mod terminal;

use commands::{CommandLine, generate};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = commands.to_config();

    print::header("building endpoint report");
    generate::generate(&cfg, commands.stdout)
}
