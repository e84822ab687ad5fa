use clap::Parser;
use roster_demo::utils::logger;
use roster_demo::{CliConfig, RosterDemo};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting roster-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let demo = RosterDemo::new(config);

    let stdout = std::io::stdout();
    let stdin = std::io::stdin();

    match demo.run(&mut stdout.lock(), &mut stdin.lock()) {
        Ok(()) => {
            tracing::info!("✅ Roster demo completed");
        }
        Err(e) => {
            tracing::error!("❌ Roster demo failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
