use clap::Parser;
use item_prep::app;
use item_prep::config::{Cli, Command};
use item_prep::utils::logger;

fn main() {
    let cli = Cli::parse();

    let verbose = match &cli.command {
        Command::Convert(args) => args.verbose,
        Command::Reindex(args) => args.verbose,
    };

    // 初始化日誌
    logger::init_cli_logger(verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let lines = match &cli.command {
        Command::Convert(args) => app::run_convert(args),
        Command::Reindex(args) => app::run_reindex(args),
    };

    // Failures are reported on stdout; the exit code stays 0.
    for line in lines {
        println!("{}", line);
    }
}
