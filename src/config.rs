use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // API key for the HERE search and routing services
    #[serde(default)]
    pub here_api_key: String,

    #[serde(default = "default_discover_base_url")]
    pub discover_base_url: String,

    #[serde(default = "default_router_base_url")]
    pub router_base_url: String,

    // Free-text query sent to the search service
    #[serde(default = "default_search_query")]
    pub search_query: String,

    // How many results to request from the search service
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    // Display options reported to the browser client. The deployed
    // variants of this page differed only in these knobs.
    #[serde(default = "default_map_style")]
    pub map_style: String,

    #[serde(default)]
    pub show_traffic: bool,

    #[serde(default = "default_true")]
    pub show_instructions: bool,

    #[serde(default = "default_map_center_lat")]
    pub map_center_lat: f64,

    #[serde(default = "default_map_center_lng")]
    pub map_center_lng: f64,

    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            here_api_key: String::new(), // Must be provided via environment
            discover_base_url: default_discover_base_url(),
            router_base_url: default_router_base_url(),
            search_query: default_search_query(),
            search_limit: default_search_limit(),
            http_timeout_secs: default_http_timeout_secs(),
            map_style: default_map_style(),
            show_traffic: false,
            show_instructions: true,
            map_center_lat: default_map_center_lat(),
            map_center_lng: default_map_center_lng(),
            map_zoom: default_map_zoom(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_discover_base_url() -> String {
    "https://discover.search.hereapi.com".to_string()
}

fn default_router_base_url() -> String {
    "https://router.hereapi.com".to_string()
}

fn default_search_query() -> String {
    "petrol pump".to_string()
}

fn default_search_limit() -> usize {
    3
}

fn default_http_timeout_secs() -> u64 {
    15
}

fn default_map_style() -> String {
    "vector".to_string()
}

fn default_true() -> bool {
    true
}

fn default_map_center_lat() -> f64 {
    37.376
}

fn default_map_center_lng() -> f64 {
    -122.034
}

fn default_map_zoom() -> u8 {
    15
}
