#[cfg(test)]
pub mod test {
    use crate::constraint::{IntRange, OneOf, Regex, Required};
    use crate::{config_schema, config_section};

    config_section! {
        #[derive(Debug, Clone, PartialEq)]
        pub struct Network {
            #[comment = "Port the server listens on."]
            #[check(IntRange::new(1, 65535))]
            pub port: i64 = 8080,

            /// Hostname or address to bind.
            #[comment = "Address to bind.\nUse 0.0.0.0 for all interfaces."]
            #[check(Required)]
            pub host: String = "localhost".into(),

            pub peers: Vec<String> = vec!["alpha".into(), "beta".into()],

            #[comment = "Connection attempts before giving up."]
            #[check(IntRange::new(1, 10))]
            pub retries: u32 = 3,
        }
    }

    config_section! {
        #[derive(Debug, Clone, PartialEq)]
        pub struct Storage {
            #[check(Required, Regex::new("^[a-z0-9_./-]+$"))]
            pub path: String = "data".into(),

            #[comment = "Cache size in megabytes."]
            #[check(Required, IntRange::new(1, 4096))]
            pub cache_mb: i64 = 64,

            pub compress: bool = true,

            #[check(OneOf::new(["fast", "safe"]))]
            pub mode: String = "safe".into(),
        }
    }

    config_schema! {
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct AppConfig {
            #[comment = "Network settings."]
            pub network: Network,
            pub storage: Storage,
        }
    }

    config_section! {
        #[derive(Debug, Clone, PartialEq)]
        pub struct Tuning {
            #[comment = "Fraction of the cache kept warm."]
            pub warm_ratio: f64 = 0.75,

            pub backoff_secs: f64 = 1.5,

            pub adaptive: bool = false,
        }
    }

    config_schema! {
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct TunedConfig {
            pub tuning: Tuning,
        }
    }

    /// The document `AppConfig::default()` renders to, minus comments.
    pub const DEFAULT_DOCUMENT: &str = r#"
[network]
port = 8080
host = "localhost"
peers = ["alpha", "beta"]
retries = 3

[storage]
path = "data"
cache_mb = 64
compress = true
mode = "safe"
"#;

    #[test]
    fn fixture_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.network.port, 8080);
        assert_eq!(config.network.retries, 3);
        assert_eq!(config.storage.path, "data");
        assert_eq!(config.storage.cache_mb, 64);
        assert!(config.storage.compress);

        let tuned = TunedConfig::default();
        assert_eq!(tuned.tuning.warm_ratio, 0.75);
        assert!(!tuned.tuning.adaptive);
    }
}
