//! Print what a BluOS player is doing, once per second
//!
//! Usage:
//!   cargo run -p bluesound-api --example status_monitor -- <ip> [seconds]
//!
//! Set `BLUESOUND_LOG_MODE=development` to see the poller's own log output.

use bluesound_api::logging::init_logging_from_env;
use bluesound_api::Controller;
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <ip> [seconds]", args[0]);
        std::process::exit(1);
    }

    init_logging_from_env()?;

    let seconds: u64 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(10);
    let controller = Controller::new(&args[1])?;

    println!("Connecting to {}", controller.base_url());
    controller.start().await?;

    let sync = controller.sync_status();
    println!("{} ({} {}), firmware {}", sync.name, sync.brand, sync.model_name, controller.version().await);

    for _ in 0..seconds {
        let status = controller.status();
        println!(
            "[{:>7}] {} - {} ({}s / {}s, volume {})",
            status.state,
            status.artist,
            status.display_title(),
            status.secs,
            status.total_length,
            status.volume
        );
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    let stats = controller.poller_stats();
    println!("{} polls, {} failures", stats.polls, stats.failures);

    controller.close().await?;
    Ok(())
}
