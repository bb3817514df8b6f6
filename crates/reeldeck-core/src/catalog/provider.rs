use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::{Movie, NavEntry, PlayedMovie};
use super::sample;
use crate::{Error, Result};

/// Everything the home screen renders: featured movies, the
/// continue-watching row, cast avatars and the bottom-bar destinations.
///
/// The UI never fabricates content; it renders whatever catalog it is
/// handed, whether the built-in sample or one loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub played_movies: Vec<PlayedMovie>,
    #[serde(default)]
    pub cast_avatars: Vec<String>,
    #[serde(default = "sample::nav_entries")]
    pub nav_entries: Vec<NavEntry>,
}

impl Catalog {
    /// The built-in demo catalog.
    pub fn sample() -> Self {
        Self {
            movies: sample::movies(),
            played_movies: sample::played_movies(),
            cast_avatars: sample::cast_avatars(),
            nav_entries: sample::nav_entries(),
        }
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        debug!(
            "Loaded catalog from {}: {} movies, {} in progress",
            path.display(),
            catalog.movies.len(),
            catalog.played_movies.len()
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string and validate it.
    pub fn from_json(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        if self.nav_entries.is_empty() {
            return Err(Error::Catalog(
                "catalog must define at least one navigation entry".to_string(),
            ));
        }
        for (i, movie) in self.movies.iter().enumerate() {
            if movie.title.trim().is_empty() {
                return Err(Error::Catalog(format!("movie {i} has an empty title")));
            }
        }
        for (i, played) in self.played_movies.iter().enumerate() {
            if played.title.trim().is_empty() {
                return Err(Error::Catalog(format!(
                    "played movie {i} has an empty title"
                )));
            }
        }
        Ok(())
    }

    /// One "+NN Casts" count per featured movie, rolled once at startup
    /// so the overlay is stable for the life of the session.
    pub fn roll_extra_casts(&self) -> Vec<u8> {
        let mut rng = rand::thread_rng();
        self.movies.iter().map(|_| rng.gen_range(0..100)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.movies.len(), 4);
        assert_eq!(catalog.played_movies.len(), 2);
        assert_eq!(catalog.cast_avatars.len(), 3);
        assert_eq!(catalog.nav_entries.len(), 4);
        assert_eq!(catalog.movies[0].title, "The Matrix Resurrections");
        assert_eq!(catalog.nav_entries[0].title, "Explore");
    }

    #[test]
    fn test_from_json_minimal() {
        let json = r#"{
            "movies": [
                {"title": "Dune", "subtitle": "Denis Villeneuve", "rate": "4.3", "image_url": "https://example.com/dune.jpg"}
            ],
            "played_movies": []
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.movies.len(), 1);
        // Nav entries fall back to the built-in four.
        assert_eq!(catalog.nav_entries.len(), 4);
        assert!(catalog.cast_avatars.is_empty());
    }

    #[test]
    fn test_from_json_rejects_empty_title() {
        let json = r#"{
            "movies": [
                {"title": "  ", "subtitle": "x", "rate": "1.0", "image_url": ""}
            ],
            "played_movies": []
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn test_from_json_rejects_bad_syntax() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_extra_casts_in_range() {
        let catalog = Catalog::sample();
        let casts = catalog.roll_extra_casts();
        assert_eq!(casts.len(), catalog.movies.len());
        assert!(casts.iter().all(|&n| n < 100));
    }
}
