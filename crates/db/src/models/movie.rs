//! Movie entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use dsmovie_core::score::round_score;
use dsmovie_core::types::DbId;
use dsmovie_core::validation::not_blank;

/// A movie row joined with its genre name.
///
/// `score` is the running average of user scores and `count` the number of
/// scores behind it. Both are kept at full precision here.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub score: f64,
    pub count: i32,
    pub image: String,
    pub genre_id: DbId,
    pub genre_name: String,
}

impl Movie {
    /// Overwrite the client-editable fields with `input`. The id is kept.
    pub fn apply(&mut self, input: &MovieInput) {
        self.title = input.title.clone();
        self.score = input.score;
        self.count = input.count;
        self.image = input.image.clone();
        self.genre_id = input.genre_id;
    }
}

/// Client payload for inserting or replacing a movie.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct MovieInput {
    #[validate(
        custom(function = "not_blank"),
        length(min = 5, max = 80, message = "Title must be between 5 and 80 characters")
    )]
    pub title: String,

    #[validate(range(min = 0.0, message = "Score should be greater than or equal to zero"))]
    #[serde(default)]
    pub score: f64,

    #[validate(range(min = 0, message = "Count should be greater than or equal to zero"))]
    #[serde(default)]
    pub count: i32,

    #[validate(
        custom(function = "not_blank"),
        url(message = "Field must be a valid url")
    )]
    pub image: String,

    pub genre_id: DbId,
}

/// Movie representation used in listings and write responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    pub id: DbId,
    pub title: String,
    pub score: f64,
    pub count: i32,
    pub image: String,
    pub genre_id: DbId,
}

impl From<Movie> for MovieSummary {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            score: round_score(movie.score),
            count: movie.count,
            image: movie.image,
            genre_id: movie.genre_id,
        }
    }
}

/// Movie representation with the genre resolved to its display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    pub id: DbId,
    pub title: String,
    pub score: f64,
    pub count: i32,
    pub image: String,
    pub genre: String,
}

impl From<Movie> for MovieDetail {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            score: round_score(movie.score),
            count: movie.count,
            image: movie.image,
            genre: movie.genre_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> MovieInput {
        MovieInput {
            title: "The Witcher".to_string(),
            score: 4.5,
            count: 2,
            image: "https://www.themoviedb.org/t/p/w533_and_h300_bestv2/jBJWaqoSCiARWtfV0GlqHrcdidd.jpg"
                .to_string(),
            genre_id: 1,
        }
    }

    fn movie() -> Movie {
        Movie {
            id: 1,
            title: "The Witcher".to_string(),
            score: 4.375,
            count: 8,
            image: "https://img.example.com/witcher.jpg".to_string(),
            genre_id: 1,
            genre_name: "Fantasy".to_string(),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn short_title_is_rejected() {
        let input = MovieInput {
            title: "Up".to_string(),
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn long_title_is_rejected() {
        let input = MovieInput {
            title: "x".repeat(81),
            ..valid_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn blank_title_is_rejected() {
        let input = MovieInput {
            title: "       ".to_string(),
            ..valid_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn negative_score_and_count_are_rejected() {
        let input = MovieInput {
            score: -0.5,
            count: -1,
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("score"));
        assert!(fields.contains_key("count"));
    }

    #[test]
    fn malformed_image_url_is_rejected() {
        let input = MovieInput {
            image: "not a url".to_string(),
            ..valid_input()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("image"));
    }

    #[test]
    fn apply_keeps_id_and_replaces_fields() {
        let mut m = movie();
        m.apply(&valid_input());
        assert_eq!(m.id, 1);
        assert_eq!(m.score, 4.5);
        assert_eq!(m.count, 2);
        assert!(m.image.starts_with("https://www.themoviedb.org"));
    }

    #[test]
    fn summary_rounds_score() {
        let summary = MovieSummary::from(movie());
        assert_eq!(summary.score, 4.38);
        assert_eq!(summary.genre_id, 1);
    }

    #[test]
    fn detail_carries_genre_name() {
        let detail = MovieDetail::from(movie());
        assert_eq!(detail.genre, "Fantasy");
        assert_eq!(detail.score, 4.38);
    }
}
