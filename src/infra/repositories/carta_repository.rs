//! Carta repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::carta::{self, ActiveModel, Entity as CartaEntity};
use crate::domain::{Carta, CartaInput};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Carta repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CartaRepository: Send + Sync {
    /// All cartas, table order
    async fn list(&self) -> AppResult<Vec<Carta>>;

    /// Find carta by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Carta>>;

    /// Photo uniqueness check, optionally excluding one record's own row
    async fn photo_taken(&self, photo: &str, exclude: Option<Uuid>) -> AppResult<bool>;

    /// Name uniqueness check, optionally excluding one record's own row
    async fn nombre_taken(&self, nombre: &str, exclude: Option<Uuid>) -> AppResult<bool>;

    /// Insert a new carta from validated fields
    async fn create(&self, input: CartaInput) -> AppResult<Carta>;

    /// Overwrite an existing carta's fields
    async fn update(&self, id: Uuid, input: CartaInput) -> AppResult<()>;

    /// Delete a carta
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Just the photo references, for the landing page aggregate
    async fn photos(&self) -> AppResult<Vec<String>>;
}

/// Concrete implementation of CartaRepository
pub struct CartaStore {
    db: DatabaseConnection,
}

impl CartaStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartaRepository for CartaStore {
    async fn list(&self) -> AppResult<Vec<Carta>> {
        let models = CartaEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Carta::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Carta>> {
        let result = CartaEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Carta::from))
    }

    async fn photo_taken(&self, photo: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let mut query = CartaEntity::find().filter(carta::Column::Photo.eq(photo));
        if let Some(id) = exclude {
            query = query.filter(carta::Column::Id.ne(id));
        }

        let count = query.count(&self.db).await.map_err(AppError::from)?;
        Ok(count > 0)
    }

    async fn nombre_taken(&self, nombre: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let mut query = CartaEntity::find().filter(carta::Column::Nombre.eq(nombre));
        if let Some(id) = exclude {
            query = query.filter(carta::Column::Id.ne(id));
        }

        let count = query.count(&self.db).await.map_err(AppError::from)?;
        Ok(count > 0)
    }

    async fn create(&self, input: CartaInput) -> AppResult<Carta> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            photo: Set(input.photo),
            nombre: Set(input.nombre),
            role: Set(input.role),
            coste_elixir: Set(input.coste_elixir),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Carta::from(model))
    }

    async fn update(&self, id: Uuid, input: CartaInput) -> AppResult<()> {
        let carta = CartaEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = carta.into();
        active.photo = Set(input.photo);
        active.nombre = Set(input.nombre);
        active.role = Set(input.role);
        active.coste_elixir = Set(input.coste_elixir);
        active.updated_at = Set(chrono::Utc::now());

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = CartaEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn photos(&self) -> AppResult<Vec<String>> {
        let photos: Vec<String> = CartaEntity::find()
            .select_only()
            .column(carta::Column::Photo)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(photos)
    }
}
