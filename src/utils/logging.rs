use tracing::Level;

// unknown levels fall back to info
pub(crate) fn parse_level(level: &str) -> Level {
    level.trim().parse::<Level>().unwrap_or(Level::INFO)
}

// setup_tracing installs a json subscriber, lambda mode drops colors and
// timestamps since CloudWatch adds its own ingestion time.
pub fn setup_tracing(level: &str, lambda: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .with_target(false)
        .with_ansi(false)
        .json();
    if lambda {
        builder.without_time().init();
    } else {
        builder.init();
    }
}
