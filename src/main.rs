use anyhow::Result;
use clap::Parser;
use std::io::Write;
use timestamp::cli::Cli;
use timestamp::config::Config;
use timestamp::formatter::print_output;
use timestamp::logger;
use timestamp::options::OutputMode;
use timestamp::parser::parse_input;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.generate_config {
        return Config::generate_default_config(path);
    }

    let config = cli.load_config()?;
    logger::init(&config.logging.level, cli.verbose, config.log_file().as_deref())?;
    log::debug!("CLI args: {:?}", cli);

    let options = cli.convert_options(&config)?;
    let input = cli.time.as_deref().unwrap_or_default();

    // Unparseable input is fatal: nothing goes to stdout
    let outcome = match parse_input(input, options.default_zone()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    outcome.log_warning();

    let mut out = std::io::stdout().lock();
    if let Err(e) = print_output(&mut out, &outcome.instant, &options) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    if options.mode != OutputMode::Report {
        writeln!(out)?;
    }

    Ok(())
}
