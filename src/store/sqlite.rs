use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    entities::movie,
    error::AppResult,
    models::{Movie, MovieDraft},
    store::MovieStore,
};

/// Relational backend: one sea-orm query per call against the `movies`
/// table, auto-commit semantics.
pub struct SqliteStore {
    db: DatabaseConnection,
}

impl SqliteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<movie::Model> for Movie {
    fn from(row: movie::Model) -> Self {
        Self {
            id: row.id,
            title: row.title,
            overview: row.overview,
            year: row.year,
            rating: row.rating,
            category: row.category,
        }
    }
}

#[async_trait]
impl MovieStore for SqliteStore {
    async fn list(&self) -> AppResult<Vec<Movie>> {
        let rows = movie::Entity::find()
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Movie>> {
        let row = movie::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Movie::from))
    }

    async fn filter_by_category(&self, category: &str) -> AppResult<Vec<Movie>> {
        let rows = movie::Entity::find()
            .filter(movie::Column::Category.eq(category))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn create(&self, draft: MovieDraft) -> AppResult<Movie> {
        let row = movie::ActiveModel {
            title: Set(draft.title),
            overview: Set(draft.overview),
            year: Set(draft.year),
            rating: Set(draft.rating),
            category: Set(draft.category),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(row.into())
    }

    async fn update(&self, id: i32, draft: MovieDraft) -> AppResult<Option<Movie>> {
        let Some(row) = movie::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: movie::ActiveModel = row.into();
        active.title = Set(draft.title);
        active.overview = Set(draft.overview);
        active.year = Set(draft.year);
        active.rating = Set(draft.rating);
        active.category = Set(draft.category);

        let row = active.update(&self.db).await?;
        Ok(Some(row.into()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
