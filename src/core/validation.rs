//! Client-side checks applied to the movie form before anything is sent.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::api::{Movie, MovieDraft};

pub const MIN_TITLE_CHARS: usize = 3;
pub const YEAR_RANGE: RangeInclusive<i32> = 1800..=2100;

/// Raw text of the form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub title: String,
    pub year: String,
    pub director: String,
    pub actors: String,
    pub description: String,
}

impl FormInput {
    /// Pre-fills the form from an existing record (edit mode).
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year.to_string(),
            director: movie.director.clone().unwrap_or_default(),
            actors: movie.actors.clone().unwrap_or_default(),
            description: movie.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title must contain at least 3 characters")]
    TitleTooShort,
    #[error("Year must be a valid number between 1800 and 2100")]
    InvalidYear,
}

/// Validates and normalizes the form into a draft: text fields trimmed,
/// empty optionals dropped, year parsed to an integer.
pub fn validate(input: &FormInput) -> Result<MovieDraft, ValidationError> {
    let title = input.title.trim();
    if title.chars().count() < MIN_TITLE_CHARS {
        return Err(ValidationError::TitleTooShort);
    }

    let year = parse_year(&input.year).ok_or(ValidationError::InvalidYear)?;

    Ok(MovieDraft {
        title: title.to_string(),
        year,
        director: optional(&input.director),
        description: optional(&input.description),
        actors: optional(&input.actors),
    })
}

/// Accepts any finite number inside the range, then drops the fraction.
fn parse_year(raw: &str) -> Option<i32> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let (lo, hi) = (*YEAR_RANGE.start() as f64, *YEAR_RANGE.end() as f64);
    if value < lo || value > hi {
        return None;
    }
    Some(value.trunc() as i32)
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, year: &str) -> FormInput {
        FormInput {
            title: title.to_string(),
            year: year.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_short_title_rejected() {
        assert_eq!(validate(&input("Up", "2009")), Err(ValidationError::TitleTooShort));
        assert_eq!(validate(&input("  Up   ", "2009")), Err(ValidationError::TitleTooShort));
        assert_eq!(validate(&input("", "2009")), Err(ValidationError::TitleTooShort));
    }

    #[test]
    fn test_title_length_counts_chars_not_bytes() {
        assert_eq!(validate(&input("Ål", "2009")), Err(ValidationError::TitleTooShort));
        assert!(validate(&input("Åmø", "2009")).is_ok());
    }

    #[test]
    fn test_bad_years_rejected() {
        for year in ["", "   ", "abc", "1799", "2101", "NaN", "inf", "12a"] {
            assert_eq!(
                validate(&input("Alien", year)),
                Err(ValidationError::InvalidYear),
                "year {year:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        assert_eq!(validate(&input("Alien", "1800")).unwrap().year, 1800);
        assert_eq!(validate(&input("Alien", "2100")).unwrap().year, 2100);
    }

    #[test]
    fn test_fractional_year_is_truncated() {
        assert_eq!(validate(&input("Alien", "1979.6")).unwrap().year, 1979);
        assert_eq!(validate(&input("Alien", "2100.5")), Err(ValidationError::InvalidYear));
    }

    #[test]
    fn test_title_checked_before_year() {
        assert_eq!(validate(&input("Up", "abc")), Err(ValidationError::TitleTooShort));
    }

    #[test]
    fn test_fields_are_trimmed_and_empties_dropped() {
        let form = FormInput {
            title: "  The Matrix ".to_string(),
            year: " 1999 ".to_string(),
            director: " Lana Wachowski ".to_string(),
            actors: "   ".to_string(),
            description: "\nRed pill\n".to_string(),
        };
        let draft = validate(&form).unwrap();
        assert_eq!(draft.title, "The Matrix");
        assert_eq!(draft.year, 1999);
        assert_eq!(draft.director.as_deref(), Some("Lana Wachowski"));
        assert_eq!(draft.actors, None);
        assert_eq!(draft.description.as_deref(), Some("Red pill"));
    }

    #[test]
    fn test_from_movie_prefills_every_field() {
        let movie = Movie {
            id: crate::api::MovieId(2),
            title: "Heat".to_string(),
            year: 1995,
            director: Some("Michael Mann".to_string()),
            description: None,
            actors: Some("Al Pacino".to_string()),
        };
        let form = FormInput::from_movie(&movie);
        assert_eq!(form.title, "Heat");
        assert_eq!(form.year, "1995");
        assert_eq!(form.director, "Michael Mann");
        assert_eq!(form.description, "");
        assert_eq!(validate(&form).unwrap().into_movie(movie.id), movie);
    }
}
