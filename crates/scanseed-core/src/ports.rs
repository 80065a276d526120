//! Port allow-list parsing.
//!
//! The allow-list comes from a comma-separated string (`"80,443,8080"`).
//! An empty string means "no filtering", which is kept distinct from an empty
//! set ("filter everything") by returning `Option`.

use std::collections::HashSet;

/// Parses a comma-separated port list into an allow-list.
///
/// Returns `None` for an empty (or all-whitespace) string. Tokens that do not
/// parse as a port number are skipped, not reported.
pub fn parse_port_list(ports: &str) -> Option<HashSet<u16>> {
    if ports.trim().is_empty() {
        return None;
    }

    let mut allowed = HashSet::new();
    for token in ports.split(',') {
        let token = token.trim();
        match token.parse::<u16>() {
            Ok(port) => {
                allowed.insert(port);
            }
            Err(_) => tracing::debug!("ignoring invalid port token {:?}", token),
        }
    }
    Some(allowed)
}
