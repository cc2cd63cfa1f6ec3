//! Evento service.
//!
//! Start dates arrive as `dd/mm/yyyy HH:MM` strings and are parsed here, so
//! repositories only ever see validated timestamps. Subscription rules are
//! idempotency checks over the pivot.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{parse_fecha_inicio, Evento, EventoInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::repositories::EventoRepository;

/// Unparsed event fields as they arrive from a request.
#[derive(Debug, Clone)]
pub struct EventoDraft {
    pub nombre: String,
    pub tipo: String,
    /// Wire format `dd/mm/yyyy HH:MM`
    pub fecha_inicio: String,
    pub duracion: String,
}

impl EventoDraft {
    /// Parse the start date, producing the field-level error the frontend
    /// shows under the date input.
    fn into_input(self) -> AppResult<EventoInput> {
        let fecha_inicio = parse_fecha_inicio(&self.fecha_inicio).ok_or_else(|| {
            AppError::field(
                "fecha_inicio",
                "El formato de la fecha de inicio debe ser dd/mm/yyyy HH:mm.",
            )
        })?;

        Ok(EventoInput {
            nombre: self.nombre,
            tipo: self.tipo,
            fecha_inicio,
            duracion: self.duracion,
        })
    }
}

/// Evento service trait for dependency injection.
#[async_trait]
pub trait EventoService: Send + Sync {
    /// All eventos
    async fn list(&self) -> AppResult<Vec<Evento>>;

    /// Eventos created by a user
    async fn created_by(&self, user_id: Uuid) -> AppResult<Vec<Evento>>;

    /// Eventos a user is subscribed to
    async fn subscribed(&self, user_id: Uuid) -> AppResult<Vec<Evento>>;

    /// Get evento by ID
    async fn get(&self, id: Uuid) -> AppResult<Evento>;

    /// Create an evento; the creator is subscribed to it automatically
    async fn create(&self, user_id: Uuid, draft: EventoDraft) -> AppResult<Evento>;

    /// Update an evento's fields
    async fn update(&self, id: Uuid, draft: EventoDraft) -> AppResult<()>;

    /// Delete an evento and its subscriptions
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Subscribe a user to an evento
    async fn subscribe(&self, evento_id: Uuid, user_id: Uuid) -> AppResult<()>;

    /// Remove a user's subscription to an evento
    async fn unsubscribe(&self, evento_id: Uuid, user_id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of EventoService.
pub struct EventoManager {
    eventos: Arc<dyn EventoRepository>,
}

impl EventoManager {
    pub fn new(eventos: Arc<dyn EventoRepository>) -> Self {
        Self { eventos }
    }
}

#[async_trait]
impl EventoService for EventoManager {
    async fn list(&self) -> AppResult<Vec<Evento>> {
        self.eventos.list().await
    }

    async fn created_by(&self, user_id: Uuid) -> AppResult<Vec<Evento>> {
        self.eventos.by_creator(user_id).await
    }

    async fn subscribed(&self, user_id: Uuid) -> AppResult<Vec<Evento>> {
        self.eventos.subscribed_to(user_id).await
    }

    async fn get(&self, id: Uuid) -> AppResult<Evento> {
        self.eventos.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, user_id: Uuid, draft: EventoDraft) -> AppResult<Evento> {
        if self.eventos.nombre_taken(&draft.nombre, None).await? {
            return Err(AppError::field("nombre", "El nombre ya está en uso"));
        }

        let input = draft.into_input()?;
        let evento = self.eventos.create(user_id, input).await?;
        self.eventos.attach(evento.id, user_id).await?;

        Ok(evento)
    }

    // Renaming an evento to a taken name is allowed here on purpose; only
    // creation enforces uniqueness, matching the frontend's edit form.
    async fn update(&self, id: Uuid, draft: EventoDraft) -> AppResult<()> {
        self.eventos.find_by_id(id).await?.ok_or_not_found()?;
        let input = draft.into_input()?;
        self.eventos.update(id, input).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.eventos.delete(id).await
    }

    async fn subscribe(&self, evento_id: Uuid, user_id: Uuid) -> AppResult<()> {
        self.eventos.find_by_id(evento_id).await?.ok_or_not_found()?;

        if self.eventos.is_subscribed(evento_id, user_id).await? {
            return Err(AppError::failure("Ya estás inscrito en este evento."));
        }

        self.eventos.attach(evento_id, user_id).await
    }

    async fn unsubscribe(&self, evento_id: Uuid, user_id: Uuid) -> AppResult<()> {
        self.eventos.find_by_id(evento_id).await?.ok_or_not_found()?;

        if !self.eventos.is_subscribed(evento_id, user_id).await? {
            return Err(AppError::failure("No estás inscrito en este evento."));
        }

        self.eventos.detach(evento_id, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockEventoRepository;
    use chrono::Utc;

    fn evento(nombre: &str, user_id: Uuid) -> Evento {
        Evento {
            id: Uuid::new_v4(),
            user_id,
            nombre: nombre.into(),
            tipo: "torneo".into(),
            fecha_inicio: Utc::now().naive_utc(),
            duracion: "2 horas".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn draft(nombre: &str, fecha: &str) -> EventoDraft {
        EventoDraft {
            nombre: nombre.into(),
            tipo: "torneo".into(),
            fecha_inicio: fecha.into(),
            duracion: "2 horas".into(),
        }
    }

    #[tokio::test]
    async fn create_rejects_bad_date_format() {
        let mut eventos = MockEventoRepository::new();
        eventos.expect_nombre_taken().returning(|_, _| Ok(false));
        eventos.expect_create().never();

        let service = EventoManager::new(Arc::new(eventos));
        let result = service
            .create(Uuid::new_v4(), draft("Torneo", "2024-05-01 18:00"))
            .await;

        match result {
            Err(AppError::Validation(errors)) => {
                assert_eq!(
                    errors.get("fecha_inicio").unwrap(),
                    &vec![
                        "El formato de la fecha de inicio debe ser dd/mm/yyyy HH:mm.".to_string()
                    ]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_subscribes_the_creator() {
        let creator = Uuid::new_v4();

        let mut eventos = MockEventoRepository::new();
        eventos.expect_nombre_taken().returning(|_, _| Ok(false));
        eventos
            .expect_create()
            .returning(|user_id, input| {
                let mut e = evento(&input.nombre, user_id);
                e.fecha_inicio = input.fecha_inicio;
                Ok(e)
            });
        eventos
            .expect_attach()
            .withf(move |_, user_id| *user_id == creator)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = EventoManager::new(Arc::new(eventos));
        let created = service
            .create(creator, draft("Torneo", "01/05/2024 18:00"))
            .await
            .unwrap();

        assert_eq!(created.user_id, creator);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_nombre() {
        let mut eventos = MockEventoRepository::new();
        eventos.expect_nombre_taken().returning(|_, _| Ok(true));
        eventos.expect_create().never();

        let service = EventoManager::new(Arc::new(eventos));
        let result = service
            .create(Uuid::new_v4(), draft("Torneo", "01/05/2024 18:00"))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn double_subscribe_is_a_handled_failure() {
        let e = evento("Torneo", Uuid::new_v4());
        let mut eventos = MockEventoRepository::new();
        eventos
            .expect_find_by_id()
            .returning(move |_| Ok(Some(e.clone())));
        eventos.expect_is_subscribed().returning(|_, _| Ok(true));
        eventos.expect_attach().never();

        let service = EventoManager::new(Arc::new(eventos));
        let result = service.subscribe(Uuid::new_v4(), Uuid::new_v4()).await;

        match result {
            Err(AppError::Failure(msg)) => {
                assert_eq!(msg, "Ya estás inscrito en este evento.");
            }
            other => panic!("expected handled failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unsubscribe_without_subscription_is_a_handled_failure() {
        let e = evento("Torneo", Uuid::new_v4());
        let mut eventos = MockEventoRepository::new();
        eventos
            .expect_find_by_id()
            .returning(move |_| Ok(Some(e.clone())));
        eventos.expect_is_subscribed().returning(|_, _| Ok(false));
        eventos.expect_detach().never();

        let service = EventoManager::new(Arc::new(eventos));
        let result = service.unsubscribe(Uuid::new_v4(), Uuid::new_v4()).await;

        match result {
            Err(AppError::Failure(msg)) => {
                assert_eq!(msg, "No estás inscrito en este evento.");
            }
            other => panic!("expected handled failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn subscribe_to_missing_evento_is_not_found() {
        let mut eventos = MockEventoRepository::new();
        eventos.expect_find_by_id().returning(|_| Ok(None));

        let service = EventoManager::new(Arc::new(eventos));
        let result = service.subscribe(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn update_does_not_enforce_nombre_uniqueness() {
        let e = evento("Torneo", Uuid::new_v4());
        let id = e.id;

        let mut eventos = MockEventoRepository::new();
        eventos
            .expect_find_by_id()
            .returning(move |_| Ok(Some(e.clone())));
        eventos.expect_nombre_taken().never();
        eventos.expect_update().returning(|_, _| Ok(()));

        let service = EventoManager::new(Arc::new(eventos));
        service
            .update(id, draft("Copa del clan", "02/06/2024 10:00"))
            .await
            .unwrap();
    }
}
