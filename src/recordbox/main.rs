use clap::Parser;
use recordbox::config::Invocation;
use recordbox::dispatch;
use recordbox::error::Result;
use recordbox::logging::init_logging;

mod args;
use args::{normalize_flags, Cli};

fn main() {
    let cli = Cli::parse_from(normalize_flags(std::env::args_os()));
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let invocation = Invocation::from_raw(cli.raw_args())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch::run(&invocation, &mut out)
}
