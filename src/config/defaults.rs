//! Default configuration values

/// Map catalog file, relative to the working directory
pub const MAP_FILE: &str = "all_maps.json";

/// Play log file, relative to the working directory
pub const PLAY_LOG_FILE: &str = "play_log.txt";

/// Settings file name inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Timestamp format written to the play log (always UTC)
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M Z";
