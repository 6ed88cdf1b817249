use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cinecat_core::{Entity, EntityId};

/// Movie identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub EntityId);

impl MovieId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for MovieId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: Movie.
///
/// The identifier is fixed at construction. The four descriptive fields are
/// freely writable and never checked (`rating` has no defined range).
///
/// `==` compares every field (a `NaN` rating is never equal, even to a clone);
/// use [`Entity::same_identity`] to ask whether two values are the same movie.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    id: MovieId,
    title: String,
    director: String,
    release_date: DateTime<Utc>,
    rating: f64,
}

impl Movie {
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        director: impl Into<String>,
        release_date: DateTime<Utc>,
        rating: f64,
    ) -> Self {
        let movie = Self {
            id,
            title: title.into(),
            director: director.into(),
            release_date,
            rating,
        };
        tracing::trace!(movie_id = %movie.id, "movie constructed");
        movie
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn set_director(&mut self, director: impl Into<String>) {
        self.director = director.into();
    }

    pub fn release_date(&self) -> DateTime<Utc> {
        self.release_date
    }

    pub fn set_release_date(&mut self, release_date: DateTime<Utc>) {
        self.release_date = release_date;
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.rating = rating;
    }
}

impl Entity for Movie {
    type Id = MovieId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
