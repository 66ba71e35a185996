// Rust Date Picker
// Main entry point

mod cli;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Date Picker");

    cli::Cli::run()
}
