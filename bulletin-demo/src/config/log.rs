use env_logger::Env;

const DEFAULT_FILTER: &str = "info";

pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use log::{Level, LevelFilter, Metadata};

    use super::init;

    fn enabled_at(level: Level) -> bool {
        log::logger().enabled(&Metadata::builder().level(level).target("bulletin").build())
    }

    #[test]
    fn test_init_uses_info_by_default() {
        // Given
        assert_eq!(LevelFilter::Off, log::max_level(), "No logger yet");

        // When
        temp_env::with_var_unset("RUST_LOG", init);

        // Then
        assert_eq!(LevelFilter::Info, log::max_level());
        assert!(enabled_at(Level::Info), "Info records should be kept");
        assert!(!enabled_at(Level::Debug), "Debug records should be filtered");
    }
}
