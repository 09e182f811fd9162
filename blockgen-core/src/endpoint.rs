//! Simulator endpoint defaults and URL construction

/// Base URL of a simulator running on the local machine
pub const DEFAULT_SIMULATOR_URL: &str = "http://localhost:8085";

/// Path of the generate-blocks endpoint, followed by `/{count}`
pub const GENERATE_BLOCKS_PATH: &str = "/simulator/generate-blocks";

/// Number of blocks requested per poll cycle
pub const DEFAULT_BLOCKS_PER_CYCLE: u32 = 1;

/// Builds the generate-blocks URL for `count` blocks
///
/// A trailing slash on `base_url` is ignored.
pub fn generate_blocks_url(base_url: &str, count: u32) -> String {
    format!(
        "{}{}/{}",
        base_url.trim_end_matches('/'),
        GENERATE_BLOCKS_PATH,
        count
    )
}
