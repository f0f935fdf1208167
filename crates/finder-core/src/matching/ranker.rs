use super::Match;

/// Sort matches by descending weight.
///
/// The sort is stable: matches with equal weight keep the order in which the
/// scanner visited them.
pub fn rank<T>(mut matches: Vec<Match<T>>) -> Vec<Match<T>> {
    matches.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    matches
}
