mod cli;
mod config;
mod download;
mod error;
mod run;
mod scrape;
#[cfg(test)]
mod test_helpers;

use clap::Parser;
use cli::Cli;
use log::error;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        // --help and --version
        Err(err) => err.exit(),
    };
    init_logger();

    if let Err(err) = cli.execute() {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logger() {
    use env_logger::Env;

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();
}
