fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    setup_logging();
    promptkit::app::cli::run();
}
