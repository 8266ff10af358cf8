use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
pub const PRODUCTS_PATH: &str = "products";

/// Request timeout applied by the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of leading products exposed before the first reveal.
pub const INITIAL_VISIBLE_COUNT: usize = 7;
/// Products added to the window on each reveal.
pub const REVEAL_STEP: usize = 10;
/// Distance from the end, in viewport lengths, that counts as "end reached".
pub const END_REACHED_THRESHOLD: f64 = 0.2;

/// Join a base URL and a relative path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
