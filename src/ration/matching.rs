use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a name to count as a suggestion.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Candidates similar to `query`, best first.
pub fn similar_names<'a>(query: &str, candidates: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, f64)> {
    let query = query.to_lowercase();
    let mut matches: Vec<(&str, f64)> = candidates
        .into_iter()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > SIMILARITY_THRESHOLD)
        .collect();

    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    matches
}

/// The single most similar candidate, if any is close enough.
pub fn closest_name<'a>(query: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    similar_names(query, candidates).first().map(|(name, _)| *name)
}
