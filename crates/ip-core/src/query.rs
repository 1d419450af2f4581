use crate::constants::OR_SEPARATOR;
use crate::encoder::KeySet;

/// Build a `tsquery` expression from the keys of one search phrase.
///
/// Keys are ordered least-specific first (`tertiary, secondary, primary`)
/// and adjacent duplicates are collapsed. When all three survive, the result
/// is `tertiary | secondary`: the primary key is left out so the query
/// favours recall. Otherwise the least specific key alone is returned.
///
/// An empty primary key yields an empty expression, which callers must treat
/// as "match nothing".
pub fn build_query(keys: &KeySet) -> String {
    if keys.is_empty() {
        return String::new();
    }

    let mut ordered = vec![
        keys.tertiary.as_str(),
        keys.secondary.as_str(),
        keys.primary.as_str(),
    ];
    ordered.dedup();

    if ordered.len() == 3 {
        return format!("{}{OR_SEPARATOR}{}", keys.tertiary, keys.secondary);
    }

    ordered[0].to_string()
}
