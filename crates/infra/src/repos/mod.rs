pub mod matches;
pub mod players;
pub mod teams;

pub use matches::{CreateMatch, MatchFilter, UpdateMatch};
pub use players::{CreatePlayer, PlayerFilter, UpdatePlayer};
pub use teams::{TeamFilter, UpdateTeam};

/// Lowercased `%term%` pattern for `LIKE ... ESCAPE '\'`, with wildcards in the
/// term matched literally.
pub(crate) fn contains_pattern(search: &str) -> String {
    let mut pattern = String::from("%");
    for c in search.trim().to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
