//! Poster image references.

/// Image shown when the catalog has no poster for a movie.
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/50?text=No+Image";

/// Resolves the poster URL for a movie.
///
/// Present paths are appended to `image_base` verbatim (TMDB paths already
/// start with `/`); absent or blank paths fall back to
/// [`PLACEHOLDER_POSTER_URL`]. Reachability is not checked.
#[must_use]
pub fn poster_url(image_base: &str, poster_path: Option<&str>) -> String {
    match poster_path.map(str::trim).filter(|path| !path.is_empty()) {
        Some(path) => format!("{}{path}", image_base.trim_end_matches('/')),
        None => PLACEHOLDER_POSTER_URL.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{PLACEHOLDER_POSTER_URL, poster_url};

    const BASE: &str = "https://image.tmdb.org/t/p/w200";

    #[test]
    fn present_path_is_appended_to_base() {
        assert_eq!(
            poster_url(BASE, Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w200/abc.jpg"
        );
    }

    #[rstest]
    #[case::absent(None)]
    #[case::blank(Some(""))]
    fn missing_path_uses_placeholder(#[case] path: Option<&str>) {
        assert_eq!(poster_url(BASE, path), PLACEHOLDER_POSTER_URL);
    }
}
