//! Movie card list component.
//!
//! Each visible movie renders as a small card: the removal control and
//! title on the first line, then the star rating and poster reference. The
//! focused card also shows a one-line overview.

use crate::catalog::poster_url;
use crate::tui::state::MovieEntry;

use super::removal_control::RemovalControl;
use super::star_rating::StarRating;
use super::text_fit::{fit_to_width, single_line};

/// Message shown when no movies are visible.
pub const EMPTY_LIST_MESSAGE: &str = "No movies available.";

const DETAIL_INDENT: &str = "    ";

/// Context for rendering the movie list.
#[derive(Debug, Clone, Copy)]
pub struct MovieListViewContext<'a> {
    /// Visible movies in sampled order.
    pub entries: &'a [MovieEntry],
    /// Index of the focused card.
    pub cursor: usize,
    /// Control variant drawn on each card.
    pub control: RemovalControl,
    /// Base URL for poster images.
    pub image_base: &'a str,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Renders the card list.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovieListComponent;

impl MovieListComponent {
    /// Renders every card, or the empty-list message.
    #[must_use]
    pub fn view(ctx: &MovieListViewContext<'_>) -> String {
        if ctx.entries.is_empty() {
            return format!("  {EMPTY_LIST_MESSAGE}\n");
        }

        let mut output = String::new();
        for (index, entry) in ctx.entries.iter().enumerate() {
            let is_selected = index == ctx.cursor;
            Self::push_card(&mut output, ctx, entry, is_selected);
        }
        output
    }

    fn push_card(
        output: &mut String,
        ctx: &MovieListViewContext<'_>,
        entry: &MovieEntry,
        is_selected: bool,
    ) {
        let movie = &entry.movie;
        let prefix = if is_selected { ">" } else { " " };
        let status = if entry.removing { "  (removing)" } else { "" };
        let heading = format!(
            "{prefix} {} {}{status}",
            ctx.control.render(entry.removing),
            movie.display_title()
        );
        push_line(output, &heading, ctx.max_width);

        let rating = StarRating::from_rating(movie.vote_average);
        push_line(output, &format!("{DETAIL_INDENT}{rating}"), ctx.max_width);

        let poster = poster_url(ctx.image_base, movie.poster_path.as_deref());
        push_line(
            output,
            &format!("{DETAIL_INDENT}poster: {poster}"),
            ctx.max_width,
        );

        if is_selected && let Some(overview) = movie.overview.as_deref() {
            let text = format!("{DETAIL_INDENT}{}", single_line(overview));
            push_line(output, &text, ctx.max_width);
        }
    }
}

fn push_line(output: &mut String, line: &str, max_width: usize) {
    output.push_str(&fit_to_width(line, max_width));
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{EMPTY_LIST_MESSAGE, MovieListComponent, MovieListViewContext};
    use crate::catalog::PLACEHOLDER_POSTER_URL;
    use crate::catalog::models::test_support::movie;
    use crate::tui::components::RemovalControl;
    use crate::tui::state::MovieEntry;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w200";

    #[fixture]
    fn entries() -> Vec<MovieEntry> {
        let mut no_poster = movie(2, "Solaris", 8.1);
        no_poster.poster_path = None;
        no_poster.overview = Some("A psychologist is sent\nto a station.".to_owned());
        let mut first = movie(1, "Alien", 8.4);
        first.overview = Some("In space no one can hear you scream.".to_owned());
        vec![MovieEntry::new(first), MovieEntry::new(no_poster)]
    }

    fn context(
        entries: &[MovieEntry],
        cursor: usize,
        control: RemovalControl,
    ) -> MovieListViewContext<'_> {
        MovieListViewContext {
            entries,
            cursor,
            control,
            image_base: IMAGE_BASE,
            max_width: 120,
        }
    }

    #[test]
    fn empty_list_shows_message() {
        let output = MovieListComponent::view(&context(&[], 0, RemovalControl::Button));

        assert!(output.contains(EMPTY_LIST_MESSAGE));
    }

    #[rstest]
    fn card_shows_title_rating_and_poster(entries: Vec<MovieEntry>) {
        let output = MovieListComponent::view(&context(&entries, 0, RemovalControl::Button));

        assert!(output.contains("> [Delete] Alien"));
        assert!(output.contains("  [Delete] Solaris"));
        assert!(output.contains("★★★★☆ (8.4/10)"));
        assert!(output.contains("poster: https://image.tmdb.org/t/p/w200/poster-1.jpg"));
        assert!(output.contains(&format!("poster: {PLACEHOLDER_POSTER_URL}")));
    }

    #[rstest]
    fn only_selected_card_shows_overview(entries: Vec<MovieEntry>) {
        let output = MovieListComponent::view(&context(&entries, 1, RemovalControl::Button));

        assert!(output.contains("A psychologist is sent to a station."));
        assert!(!output.contains("no one can hear you scream"));
    }

    #[rstest]
    fn removing_card_is_marked(mut entries: Vec<MovieEntry>) {
        if let Some(entry) = entries.first_mut() {
            entry.removing = true;
        }
        let output = MovieListComponent::view(&context(&entries, 0, RemovalControl::Checkbox));

        assert!(output.contains("> [x] Alien  (removing)"));
        assert!(output.contains("  [ ] Solaris\n"));
    }

    #[rstest]
    fn long_lines_are_fitted_to_width(entries: Vec<MovieEntry>) {
        let mut ctx = context(&entries, 0, RemovalControl::Button);
        ctx.max_width = 20;
        let output = MovieListComponent::view(&ctx);

        assert!(
            output
                .lines()
                .all(|line| unicode_width::UnicodeWidthStr::width(line) <= 20)
        );
    }
}
