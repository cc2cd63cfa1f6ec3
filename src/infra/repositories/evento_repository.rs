//! Evento repository implementation, including the subscription pivot.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::evento::{self, ActiveModel, Entity as EventoEntity};
use super::entities::evento_user::{self, Entity as EventoUserEntity};
use crate::domain::{Evento, EventoInput};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Evento repository trait for dependency injection.
///
/// Pivot operations (`is_subscribed`/`attach`/`detach`) are raw row
/// manipulations; the idempotency policy lives in the service layer.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventoRepository: Send + Sync {
    /// All eventos, table order
    async fn list(&self) -> AppResult<Vec<Evento>>;

    /// Find evento by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Evento>>;

    /// Eventos created by a user
    async fn by_creator(&self, user_id: Uuid) -> AppResult<Vec<Evento>>;

    /// Eventos a user is subscribed to (via the pivot)
    async fn subscribed_to(&self, user_id: Uuid) -> AppResult<Vec<Evento>>;

    /// Name uniqueness check, optionally excluding one record's own row
    async fn nombre_taken(&self, nombre: &str, exclude: Option<Uuid>) -> AppResult<bool>;

    /// Insert a new evento owned by `user_id`
    async fn create(&self, user_id: Uuid, input: EventoInput) -> AppResult<Evento>;

    /// Overwrite an existing evento's fields
    async fn update(&self, id: Uuid, input: EventoInput) -> AppResult<()>;

    /// Delete an evento
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Pivot membership check
    async fn is_subscribed(&self, evento_id: Uuid, user_id: Uuid) -> AppResult<bool>;

    /// Insert a pivot row
    async fn attach(&self, evento_id: Uuid, user_id: Uuid) -> AppResult<()>;

    /// Remove a pivot row
    async fn detach(&self, evento_id: Uuid, user_id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of EventoRepository
pub struct EventoStore {
    db: DatabaseConnection,
}

impl EventoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventoRepository for EventoStore {
    async fn list(&self) -> AppResult<Vec<Evento>> {
        let models = EventoEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Evento::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Evento>> {
        let result = EventoEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Evento::from))
    }

    async fn by_creator(&self, user_id: Uuid) -> AppResult<Vec<Evento>> {
        let models = EventoEntity::find()
            .filter(evento::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Evento::from).collect())
    }

    async fn subscribed_to(&self, user_id: Uuid) -> AppResult<Vec<Evento>> {
        let evento_ids: Vec<Uuid> = EventoUserEntity::find()
            .filter(evento_user::Column::UserId.eq(user_id))
            .select_only()
            .column(evento_user::Column::EventoId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        if evento_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = EventoEntity::find()
            .filter(evento::Column::Id.is_in(evento_ids))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Evento::from).collect())
    }

    async fn nombre_taken(&self, nombre: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let mut query = EventoEntity::find().filter(evento::Column::Nombre.eq(nombre));
        if let Some(id) = exclude {
            query = query.filter(evento::Column::Id.ne(id));
        }

        let count = query.count(&self.db).await.map_err(AppError::from)?;
        Ok(count > 0)
    }

    async fn create(&self, user_id: Uuid, input: EventoInput) -> AppResult<Evento> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            nombre: Set(input.nombre),
            tipo: Set(input.tipo),
            fecha_inicio: Set(input.fecha_inicio),
            duracion: Set(input.duracion),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Evento::from(model))
    }

    async fn update(&self, id: Uuid, input: EventoInput) -> AppResult<()> {
        let evento = EventoEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = evento.into();
        active.nombre = Set(input.nombre);
        active.tipo = Set(input.tipo);
        active.fecha_inicio = Set(input.fecha_inicio);
        active.duracion = Set(input.duracion);
        active.updated_at = Set(chrono::Utc::now());

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = EventoEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn is_subscribed(&self, evento_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let row = EventoUserEntity::find_by_id((evento_id, user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(row.is_some())
    }

    async fn attach(&self, evento_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let active_model = evento_user::ActiveModel {
            evento_id: Set(evento_id),
            user_id: Set(user_id),
        };

        active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn detach(&self, evento_id: Uuid, user_id: Uuid) -> AppResult<()> {
        EventoUserEntity::delete_by_id((evento_id, user_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
