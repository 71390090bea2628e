//! Title search filter
//!
//! The displayed list is always derived from the last-fetched page;
//! nothing here mutates state.

use marquee_core::MovieSummary;

/// Case-insensitive substring match against a movie title.
pub fn title_matches(title: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&query.to_lowercase())
}

/// The subset of `movies` whose titles contain `query`,
/// case-insensitively, in page order.
pub fn filter_titles<'a>(movies: &'a [MovieSummary], query: &str) -> Vec<&'a MovieSummary> {
    movies
        .iter()
        .filter(|movie| title_matches(&movie.title, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn movie(id: i64, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            poster: String::new(),
            year: "2020".to_string(),
            country: String::new(),
            imdb_rating: 7.0,
            genres: Vec::new(),
        }
    }

    #[test]
    fn empty_query_keeps_everything() {
        let movies = vec![movie(1, "Alpha"), movie(2, "Beta")];
        assert_eq!(filter_titles(&movies, "").len(), 2);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let movies = vec![movie(1, "Alpha"), movie(2, "Beta")];

        let hits = filter_titles(&movies, "alp");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Alpha");

        let hits = filter_titles(&movies, "BETA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Beta");
    }

    #[test]
    fn no_match_yields_empty() {
        let movies = vec![movie(1, "Alpha"), movie(2, "Beta")];
        assert!(filter_titles(&movies, "gamma").is_empty());
    }

    #[test]
    fn preserves_page_order() {
        let movies = vec![
            movie(3, "The Matrix"),
            movie(1, "Matrix Reloaded"),
            movie(2, "Inception"),
        ];
        let hits = filter_titles(&movies, "matrix");
        assert_eq!(hits[0].id, 3);
        assert_eq!(hits[1].id, 1);
    }

    proptest! {
        /// Filtering an already-filtered result by the same query is a
        /// fixed point.
        #[test]
        fn filtering_is_idempotent(titles in prop::collection::vec("[a-zA-Z ]{0,12}", 0..20),
                                   query in "[a-zA-Z]{0,6}") {
            let movies: Vec<MovieSummary> = titles
                .iter()
                .enumerate()
                .map(|(i, t)| movie(i as i64, t))
                .collect();

            let once: Vec<MovieSummary> =
                filter_titles(&movies, &query).into_iter().cloned().collect();
            let twice = filter_titles(&once, &query);

            prop_assert_eq!(once.len(), twice.len());
            for (a, b) in once.iter().zip(twice.iter()) {
                prop_assert_eq!(a.id, b.id);
            }
        }

        /// Every survivor actually contains the query, and every
        /// non-survivor does not.
        #[test]
        fn filter_is_an_exact_subset(titles in prop::collection::vec("[a-zA-Z ]{0,12}", 0..20),
                                     query in "[a-zA-Z]{1,6}") {
            let movies: Vec<MovieSummary> = titles
                .iter()
                .enumerate()
                .map(|(i, t)| movie(i as i64, t))
                .collect();

            let kept: Vec<i64> = filter_titles(&movies, &query).iter().map(|m| m.id).collect();
            for m in &movies {
                let matches = m.title.to_lowercase().contains(&query.to_lowercase());
                prop_assert_eq!(kept.contains(&m.id), matches);
            }
        }
    }
}
