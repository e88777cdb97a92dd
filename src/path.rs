//! Route to output path mapping

use std::path::PathBuf;

/// Calculates relative path depth for a page route.
///
/// Every route is written as `<route>/index.html`, so the depth is the
/// number of non-empty route segments.
///
/// # Arguments
///
/// * `route`: Site route such as `/`, `/cv/` or `/writing/hello/`
///
/// # Returns
///
/// Number of `../` hops from the page back to the site root
pub fn calculate_depth(route: &str) -> usize {
    route.split('/').filter(|s| !s.is_empty()).count()
}

/// Output file for a route, relative to the output directory.
pub fn route_file(route: &str) -> PathBuf {
    let mut path: PathBuf = route.split('/').filter(|s| !s.is_empty()).collect();
    path.push("index.html");
    path
}
