use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{Movie, MovieDraft},
    store::MovieStore,
};

/// Process-local backend: a plain vector behind an async lock.
#[derive(Default)]
pub struct MemoryStore {
    movies: RwLock<Vec<Movie>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(movies: &[Movie]) -> i32 {
    movies.iter().map(|m| m.id).max().unwrap_or(0) + 1
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Movie>> {
        Ok(self.movies.read().await.clone())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Movie>> {
        Ok(self.movies.read().await.iter().find(|m| m.id == id).cloned())
    }

    async fn filter_by_category(&self, category: &str) -> AppResult<Vec<Movie>> {
        Ok(self
            .movies
            .read()
            .await
            .iter()
            .filter(|m| m.category == category)
            .cloned()
            .collect())
    }

    async fn create(&self, draft: MovieDraft) -> AppResult<Movie> {
        let mut movies = self.movies.write().await;
        let movie = Movie {
            id: next_id(&movies),
            title: draft.title,
            overview: draft.overview,
            year: draft.year,
            rating: draft.rating,
            category: draft.category,
        };
        movies.push(movie.clone());
        Ok(movie)
    }

    async fn update(&self, id: i32, draft: MovieDraft) -> AppResult<Option<Movie>> {
        let mut movies = self.movies.write().await;
        let Some(movie) = movies.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        movie.title = draft.title;
        movie.overview = draft.overview;
        movie.year = draft.year;
        movie.rating = draft.rating;
        movie.category = draft.category;
        Ok(Some(movie.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut movies = self.movies.write().await;
        let before = movies.len();
        movies.retain(|m| m.id != id);
        Ok(movies.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, category: &str) -> MovieDraft {
        MovieDraft {
            id: None,
            title: title.to_string(),
            overview: "An overview long enough to pass".to_string(),
            year: 2010,
            rating: 8.8,
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_record() {
        let store = MemoryStore::new();
        let created = store.create(draft("Inception", "Sci-Fi")).await.unwrap();
        let fetched = store.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Inception");
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially() {
        let store = MemoryStore::new();
        let first = store.create(draft("Inception", "Sci-Fi")).await.unwrap();
        let second = store.create(draft("Memento", "Thriller")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn absent_id_signals_not_found_everywhere() {
        let store = MemoryStore::new();
        assert!(store.get(99).await.unwrap().is_none());
        assert!(store.update(99, draft("Inception", "Sci-Fi")).await.unwrap().is_none());
        assert!(!store.delete(99).await.unwrap());
    }

    #[tokio::test]
    async fn filter_returns_exactly_the_matching_subset() {
        let store = MemoryStore::new();
        store.create(draft("Inception", "Sci-Fi")).await.unwrap();
        store.create(draft("Memento", "Thriller")).await.unwrap();
        store.create(draft("Interstellar", "Sci-Fi")).await.unwrap();

        let scifi = store.filter_by_category("Sci-Fi").await.unwrap();
        assert_eq!(scifi.len(), 2);
        assert!(scifi.iter().all(|m| m.category == "Sci-Fi"));

        // exact match is case-sensitive
        assert!(store.filter_by_category("sci-fi").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() {
        let store = MemoryStore::new();
        let created = store.create(draft("Inception", "Sci-Fi")).await.unwrap();

        let updated =
            store.update(created.id, draft("Tenet movie", "Action")).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Tenet movie");

        let fetched = store.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn delete_then_get_signals_not_found() {
        let store = MemoryStore::new();
        let created = store.create(draft("Inception", "Sci-Fi")).await.unwrap();
        assert!(store.delete(created.id).await.unwrap());
        assert!(store.get(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.create(draft("Inception", "Sci-Fi")).await.unwrap();
        store.create(draft("Memento", "Thriller")).await.unwrap();

        let titles: Vec<_> =
            store.list().await.unwrap().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Inception", "Memento"]);
    }
}
