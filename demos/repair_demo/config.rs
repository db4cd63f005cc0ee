//! Configuration schema for the repair demo.
//!
//! Two sections, each mixing scalar and list fields, commented fields and
//! constrained fields, so every kind of outcome entry can be provoked by
//! editing the generated file by hand.

use sectfig::constraint::{IntRange, OneOf, Regex, Required};
use sectfig::{config_schema, config_section};

config_section! {
    /// Server settings, stored under `[server]`.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        #[comment = "Hostname to bind to."]
        #[check(Required)]
        pub host: String = "127.0.0.1".into(),

        #[comment = "Port number."]
        #[check(IntRange::new(1, 65535))]
        pub port: u16 = 3000,

        #[comment = "Maximum number of allowed connections."]
        #[check(IntRange::new(1, 10_000))]
        pub max_connections: u32 = 100,

        #[comment = "Origins allowed to call the API.\nEach entry is a bare hostname."]
        #[check(Regex::new(r"^[a-z0-9.-]+$"))]
        pub allowed_origins: Vec<String> = vec!["localhost".into()],
    }
}

config_section! {
    /// Display settings, stored under `[display]`.
    #[derive(Debug, Clone)]
    pub struct DisplayConfig {
        #[comment = "Terminal color for output."]
        #[check(OneOf::new(["red", "green", "yellow", "blue", "magenta", "cyan", "white"]))]
        pub color: String = "yellow".into(),

        pub verbose: bool = false,
    }
}

config_schema! {
    #[derive(Debug, Clone, Default)]
    pub struct DemoConfig {
        #[comment = "Server settings."]
        pub server: ServerConfig,

        #[comment = "Display and output formatting."]
        pub display: DisplayConfig,
    }
}
