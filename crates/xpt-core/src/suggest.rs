// Player name suggestions: case-insensitive substring matching over the
// loaded player list.

/// Maximum number of suggestions shown under the name field.
pub const MAX_SUGGESTIONS: usize = 10;

/// Queries must be longer than this many characters to produce suggestions.
pub const MIN_QUERY_CHARS: usize = 1;

/// Return up to [`MAX_SUGGESTIONS`] players whose names contain `query`,
/// ignoring case and keeping the order of `players`.
///
/// Queries of one character or less yield nothing.
pub fn suggestions(query: &str, players: &[String]) -> Vec<String> {
    if query.chars().count() <= MIN_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    players
        .iter()
        .filter(|p| p.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
