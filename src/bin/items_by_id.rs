use clap::Parser;
use item_prep::app;
use item_prep::config::ReindexCli;
use item_prep::utils::logger;

fn main() {
    let cli = ReindexCli::parse();

    logger::init_cli_logger(cli.args.verbose);
    tracing::debug!("CLI config: {:?}", cli.args);

    for line in app::run_reindex(&cli.args) {
        println!("{}", line);
    }
}
