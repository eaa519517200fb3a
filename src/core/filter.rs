//! Search filtering over the in-memory collection.

use crate::api::Movie;

/// True if `term_lower` occurs in the title, director, actors or description.
/// `term_lower` must already be lowercased.
fn matches(movie: &Movie, term_lower: &str) -> bool {
    let fields = [
        Some(movie.title.as_str()),
        movie.director.as_deref(),
        movie.actors.as_deref(),
        movie.description.as_deref(),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(term_lower))
}

/// Returns the movies matching `term` case-insensitively, in their original order.
/// An empty term matches everything.
pub fn filter_movies<'a>(movies: &'a [Movie], term: &str) -> Vec<&'a Movie> {
    if term.is_empty() {
        return movies.iter().collect();
    }
    let term_lower = term.to_lowercase();
    movies.iter().filter(|m| matches(m, &term_lower)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MovieId;

    fn movie(id: i64, title: &str, director: Option<&str>, actors: Option<&str>, description: Option<&str>) -> Movie {
        Movie {
            id: MovieId(id),
            title: title.to_string(),
            year: 2000,
            director: director.map(str::to_string),
            description: description.map(str::to_string),
            actors: actors.map(str::to_string),
        }
    }

    fn sample() -> Vec<Movie> {
        vec![
            movie(1, "The Matrix", Some("Lana Wachowski"), Some("Keanu Reeves, Carrie-Anne Moss"), None),
            movie(2, "Heat", Some("Michael Mann"), Some("Al Pacino, Robert De Niro"), Some("A heist in LA")),
            movie(3, "Alien", Some("Ridley Scott"), None, Some("In space no one can hear you scream")),
        ]
    }

    fn ids(movies: &[&Movie]) -> Vec<i64> {
        movies.iter().map(|m| m.id.0).collect()
    }

    #[test]
    fn test_empty_term_returns_everything() {
        let movies = sample();
        assert_eq!(ids(&filter_movies(&movies, "")), vec![1, 2, 3]);
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let movies = sample();
        assert_eq!(ids(&filter_movies(&movies, "mATRIX")), vec![1]);
    }

    #[test]
    fn test_matches_each_searchable_field() {
        let movies = sample();
        assert_eq!(ids(&filter_movies(&movies, "mann")), vec![2]);
        assert_eq!(ids(&filter_movies(&movies, "keanu")), vec![1]);
        assert_eq!(ids(&filter_movies(&movies, "SCREAM")), vec![3]);
    }

    #[test]
    fn test_substring_across_several_movies_keeps_order() {
        let movies = sample();
        // "e" appears everywhere
        assert_eq!(ids(&filter_movies(&movies, "e")), vec![1, 2, 3]);
        // "an" hits Lana, Mann and "can"
        assert_eq!(ids(&filter_movies(&movies, "an")), vec![1, 2, 3]);
    }

    #[test]
    fn test_year_is_not_searched() {
        let movies = sample();
        assert!(filter_movies(&movies, "2000").is_empty());
    }

    #[test]
    fn test_no_match() {
        let movies = sample();
        assert!(filter_movies(&movies, "zzz").is_empty());
    }

    #[test]
    fn test_missing_optional_fields_never_match() {
        let movies = vec![movie(5, "Up", None, None, None)];
        assert!(filter_movies(&movies, "pixar").is_empty());
        assert_eq!(ids(&filter_movies(&movies, "u")), vec![5]);
    }
}
