//! Application state - dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, CartaService, EventoService, MemberService, Services, UserService,
};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub carta_service: Arc<dyn CartaService>,
    pub evento_service: Arc<dyn EventoService>,
    pub member_service: Arc<dyn MemberService>,
    /// Absent when the state is built for tests without a live database.
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Build state on top of a live database connection.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let services = Services::from_connection(database.get_connection(), config);
        Self::new(services, Some(database))
    }

    /// Build state from already-wired services.
    pub fn new(services: Services, database: Option<Arc<Database>>) -> Self {
        Self {
            auth_service: services.auth,
            user_service: services.users,
            carta_service: services.cartas,
            evento_service: services.eventos,
            member_service: services.members,
            database,
        }
    }
}
