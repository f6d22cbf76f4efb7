pub mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Debug, Clone)]
    pub struct Config {
        #[serde(default = "default_database_url")]
        pub database_url: String,
        #[serde(default = "default_port")]
        pub port: u16,
        /// Origin of the front end allowed to call the API.
        #[serde(default = "default_cors_origin")]
        pub cors_origin: String,
    }

    impl Config {
        /// Loads configuration from environment variables.
        pub fn from_env() -> anyhow::Result<Self> {
            let settings = config::Config::builder()
                .add_source(config::Environment::default())
                .build()?;

            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                database_url: default_database_url(),
                port: default_port(),
                cors_origin: default_cors_origin(),
            }
        }
    }

    fn default_database_url() -> String {
        "sqlite://checkmark.db?mode=rwc".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_cors_origin() -> String {
        "http://localhost:3000".to_string()
    }

}
pub mod checkmark;
pub mod entities;
pub mod web;
