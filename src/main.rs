use adb_android::cli::Cli;
use adb_android::client::Adb;
use adb_android::config::AdbConfig;
use adb_android::output::OutputFormatter;
use adb_android::runner::CommandRunner;
use clap::Parser;
use log::debug;
use std::process;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = match &cli.config {
        Some(path) => match AdbConfig::try_load_from_path(path) {
            Ok(config) => config.with_env_overrides(),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
        None => AdbConfig::load(),
    };
    debug!("Using adb at {}", config.prefix);

    let formatter = OutputFormatter::new(cli.output.into()).with_color(!cli.no_color);
    let runner = CommandRunner::new(Adb::new(config), formatter, cli.serial.clone());

    match runner.run(cli.command()) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
