/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Default GraphQL endpoint of the simulation backend
    pub const GRAPHQL_ENDPOINT: &'static str = "http://localhost:8000/graphql";

    /// localStorage key for the last selected region code
    pub const REGION_STORAGE_KEY: &'static str = "region";
}
