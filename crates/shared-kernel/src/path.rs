/// Joins segments with `/` regardless of platform, skipping empty ones.
///
/// Manifest paths are consumed by a website, so they never use `\`.
pub fn logical_join<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments
        .into_iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
