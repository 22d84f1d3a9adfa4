//! Environment-driven configuration (server builds only).

#![allow(clippy::unwrap_used)]

#[cfg(feature = "ssr")]
mod ssr_tests {
    use app::config::AppConfig;
    use serial_test::serial;
    use std::net::SocketAddr;
    use temp_env::with_vars;

    const KEYS: [&str; 4] = ["BIND_ADDRESS", "SITE_ROOT", "GOOGLE_MAPS_API_KEY", "APP_ENV"];

    /// Every known key, unset unless overridden.
    fn env_with(
        overrides: &[(&'static str, &'static str)],
    ) -> Vec<(&'static str, Option<&'static str>)> {
        KEYS.iter()
            .map(|key| {
                let value = overrides.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
                (*key, value)
            })
            .collect()
    }

    #[test]
    #[serial]
    fn test_defaults() {
        with_vars(env_with(&[]), || {
            let config = AppConfig::from_env().unwrap();
            assert_eq!(config, AppConfig::default());
            assert_eq!(
                config.bind_address,
                "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
            );
            assert_eq!(config.site_root, "target/site");
            assert!(config.maps_api_key.is_none());
            assert!(!config.log_area_report);
        });
    }

    #[test]
    #[serial]
    fn test_all_values_set() {
        with_vars(
            env_with(&[
                ("BIND_ADDRESS", "0.0.0.0:8080"),
                ("SITE_ROOT", "/srv/site"),
                ("GOOGLE_MAPS_API_KEY", "abc"),
                ("APP_ENV", "development"),
            ]),
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(config.bind_address.port(), 8080);
                assert_eq!(config.site_root, "/srv/site");
                assert_eq!(config.maps_api_key.as_deref(), Some("abc"));
                assert!(config.log_area_report);
            },
        );
    }

    #[test]
    #[serial]
    fn test_empty_api_key_is_unset() {
        with_vars(env_with(&[("GOOGLE_MAPS_API_KEY", "")]), || {
            assert!(AppConfig::from_env().unwrap().maps_api_key.is_none());
        });
    }

    #[test]
    #[serial]
    fn test_invalid_bind_address() {
        with_vars(env_with(&[("BIND_ADDRESS", "not-an-address")]), || {
            let err = AppConfig::from_env().unwrap_err();
            assert_eq!(err.to_string(), "Configuration error: Invalid BIND_ADDRESS");
        });
    }

    #[test]
    #[serial]
    fn test_invalid_app_env() {
        with_vars(env_with(&[("APP_ENV", "staging")]), || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("Invalid APP_ENV: staging"));
        });
    }
}
