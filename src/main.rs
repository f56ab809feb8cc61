use clap::Parser;

use mailsweep::cli::Cli;
use mailsweep::run;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Cli::parse().into_config();
    if let Err(e) = run(&config).await {
        eprintln!("mailsweep: {}", e);
        std::process::exit(1);
    }
}
