//! Service container wiring repositories into services.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CartaManager, CartaService, EventoManager, EventoService,
    MemberManager, MemberService, UserManager, UserService,
};
use crate::config::Config;
use crate::infra::repositories::{CartaStore, EventoStore, MemberStore, UserStore};

/// All application services behind their traits, cheap to clone.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
    pub cartas: Arc<dyn CartaService>,
    pub eventos: Arc<dyn EventoService>,
    pub members: Arc<dyn MemberService>,
}

impl Services {
    /// Wire every service on top of a live database connection.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let carta_repo = Arc::new(CartaStore::new(db.clone()));
        let evento_repo = Arc::new(EventoStore::new(db.clone()));
        let member_repo = Arc::new(MemberStore::new(db));

        Self {
            auth: Arc::new(Authenticator::new(user_repo.clone(), config)),
            users: Arc::new(UserManager::new(user_repo.clone())),
            cartas: Arc::new(CartaManager::new(carta_repo)),
            eventos: Arc::new(EventoManager::new(evento_repo)),
            members: Arc::new(MemberManager::new(member_repo, user_repo)),
        }
    }
}
