use tracing::level_filters::LevelFilter;
use tracing::warn;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "DICE_GAME_LOG";

/// Resolve the log level from the environment, then `configured`, then `info`.
pub fn resolve_level(env: Option<&str>, configured: &str) -> LevelFilter {
    env.and_then(|v| v.trim().parse().ok())
        .or_else(|| configured.trim().parse().ok())
        .unwrap_or(LevelFilter::INFO)
}

/// Install the global `fmt` subscriber. Later calls are no-ops.
pub fn init(configured: &str) {
    let env = std::env::var(LOG_ENV).ok();
    let level = resolve_level(env.as_deref(), configured);
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        warn!("tracing subscriber already installed");
    }
}
