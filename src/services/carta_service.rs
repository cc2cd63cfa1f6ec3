//! Carta catalog service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Carta, CartaInput};
use crate::errors::{AppResult, FieldErrors, OptionExt};
use crate::infra::repositories::CartaRepository;

/// Carta service trait for dependency injection.
#[async_trait]
pub trait CartaService: Send + Sync {
    /// All cartas in the catalog
    async fn list(&self) -> AppResult<Vec<Carta>>;

    /// Get carta by ID
    async fn get(&self, id: Uuid) -> AppResult<Carta>;

    /// Create a carta; photo and nombre are unique across the catalog
    async fn create(&self, input: CartaInput) -> AppResult<Carta>;

    /// Update a carta; the photo must actually change
    async fn update(&self, id: Uuid, input: CartaInput) -> AppResult<()>;

    /// Delete a carta
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Photo references only, for the landing page aggregate
    async fn photos(&self) -> AppResult<Vec<String>>;
}

/// Concrete implementation of CartaService.
pub struct CartaManager {
    cartas: Arc<dyn CartaRepository>,
}

impl CartaManager {
    pub fn new(cartas: Arc<dyn CartaRepository>) -> Self {
        Self { cartas }
    }
}

#[async_trait]
impl CartaService for CartaManager {
    async fn list(&self) -> AppResult<Vec<Carta>> {
        self.cartas.list().await
    }

    async fn get(&self, id: Uuid) -> AppResult<Carta> {
        self.cartas.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, input: CartaInput) -> AppResult<Carta> {
        let mut errors = FieldErrors::new();
        if self.cartas.photo_taken(&input.photo, None).await? {
            errors.add("photo", "La nueva imagen debe ser diferente a la actual.");
        }
        if self.cartas.nombre_taken(&input.nombre, None).await? {
            errors.add("nombre", "El nombre ya está en uso");
        }
        errors.into_result()?;

        self.cartas.create(input).await
    }

    async fn update(&self, id: Uuid, input: CartaInput) -> AppResult<()> {
        self.cartas.find_by_id(id).await?.ok_or_not_found()?;

        let mut errors = FieldErrors::new();
        if self.cartas.photo_taken(&input.photo, Some(id)).await? {
            errors.add("photo", "La nueva imagen debe ser diferente a la actual.");
        }
        if self.cartas.nombre_taken(&input.nombre, Some(id)).await? {
            errors.add("nombre", "El nombre ya está en uso");
        }
        errors.into_result()?;

        self.cartas.update(id, input).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.cartas.delete(id).await
    }

    async fn photos(&self) -> AppResult<Vec<String>> {
        self.cartas.photos().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::repositories::MockCartaRepository;
    use chrono::Utc;

    fn carta(nombre: &str, photo: &str) -> Carta {
        Carta {
            id: Uuid::new_v4(),
            photo: photo.into(),
            nombre: nombre.into(),
            role: "tropa".into(),
            coste_elixir: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn input(nombre: &str, photo: &str) -> CartaInput {
        CartaInput {
            photo: photo.into(),
            nombre: nombre.into(),
            role: "tropa".into(),
            coste_elixir: 3,
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_photo_and_nombre() {
        let mut cartas = MockCartaRepository::new();
        cartas.expect_photo_taken().returning(|_, _| Ok(true));
        cartas.expect_nombre_taken().returning(|_, _| Ok(true));
        cartas.expect_create().never();

        let service = CartaManager::new(Arc::new(cartas));
        let result = service.create(input("Caballero", "caballero.png")).await;

        match result {
            Err(AppError::Validation(errors)) => {
                assert_eq!(
                    errors.get("photo").unwrap(),
                    &vec!["La nueva imagen debe ser diferente a la actual.".to_string()]
                );
                assert!(errors.get("nombre").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_inserts_when_unique() {
        let mut cartas = MockCartaRepository::new();
        cartas.expect_photo_taken().returning(|_, _| Ok(false));
        cartas.expect_nombre_taken().returning(|_, _| Ok(false));
        cartas
            .expect_create()
            .returning(|input| Ok(carta(&input.nombre, &input.photo)));

        let service = CartaManager::new(Arc::new(cartas));
        let created = service.create(input("Bruja", "bruja.png")).await.unwrap();
        assert_eq!(created.nombre, "Bruja");
    }

    #[tokio::test]
    async fn update_excludes_own_row_from_uniqueness() {
        let existing = carta("Caballero", "caballero.png");
        let id = existing.id;

        let mut cartas = MockCartaRepository::new();
        cartas
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        cartas
            .expect_photo_taken()
            .withf(move |_, exclude| *exclude == Some(id))
            .returning(|_, _| Ok(false));
        cartas
            .expect_nombre_taken()
            .withf(move |_, exclude| *exclude == Some(id))
            .returning(|_, _| Ok(false));
        cartas.expect_update().returning(|_, _| Ok(()));

        let service = CartaManager::new(Arc::new(cartas));
        service
            .update(id, input("Caballero", "caballero_v2.png"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_of_missing_carta_is_not_found() {
        let mut cartas = MockCartaRepository::new();
        cartas.expect_find_by_id().returning(|_| Ok(None));

        let service = CartaManager::new(Arc::new(cartas));
        let result = service.update(Uuid::new_v4(), input("Bruja", "bruja.png")).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
