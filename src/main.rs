//! `adjuclock` - adjudication deadlines and announcements

use clap::Parser;

use adjuclock::cli::args::Cli;
use adjuclock::cli::commands;
use adjuclock::error::ExitCode;
use adjuclock::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
