mod platform;

use extractor_logging::LogDestination;

fn main() -> std::io::Result<()> {
    // The TUI owns the terminal, so logs go to ./extractor.log.
    extractor_logging::initialize(LogDestination::File);

    let config = platform::AppConfig::load();
    platform::run_app(config)
}
