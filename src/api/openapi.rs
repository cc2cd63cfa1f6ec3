//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, carta_handler, evento_handler, member_handler, user_handler, welcome_handler,
};
use crate::domain::{CartaResource, EventoResource, MemberResource, UserResource, UserRole};
use crate::services::TokenResponse;

/// OpenAPI documentation for the community API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clash Community API",
        version = "0.1.0",
        description = "Card-game community backend: rankings, card catalog, events and team profiles",
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        welcome_handler::welcome,
        // Authentication
        auth_handler::register,
        auth_handler::login,
        auth_handler::perfil,
        // Rankings and users
        user_handler::rankings,
        user_handler::search_ranking,
        user_handler::list_players,
        user_handler::search_player,
        user_handler::update_name,
        user_handler::update_email,
        user_handler::delete_account,
        user_handler::update_account,
        user_handler::delete_user,
        // Eventos
        evento_handler::index,
        evento_handler::mine,
        evento_handler::subscribed,
        evento_handler::create,
        evento_handler::edit,
        evento_handler::update,
        evento_handler::remove,
        evento_handler::subscribe,
        evento_handler::unsubscribe,
        // Cartas
        carta_handler::index,
        carta_handler::create,
        carta_handler::edit,
        carta_handler::update,
        carta_handler::remove,
        // Miembros
        member_handler::index,
        member_handler::update,
        member_handler::remove,
    ),
    components(
        schemas(
            // Domain projections
            UserRole,
            UserResource,
            CartaResource,
            EventoResource,
            MemberResource,
            welcome_handler::WelcomePayload,
            member_handler::MiembrosPayload,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::RegisterPayload,
            TokenResponse,
            // Request bodies
            user_handler::SearchRequest,
            user_handler::UpdateNameRequest,
            user_handler::UpdateEmailRequest,
            user_handler::UpdateAccountRequest,
            carta_handler::CartaRequest,
            evento_handler::EventoRequest,
            member_handler::MemberRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Welcome", description = "Landing page aggregate"),
        (name = "Auth", description = "Registration, login and profile"),
        (name = "Rankings", description = "Public player rankings"),
        (name = "Usuarios", description = "Account and admin user management"),
        (name = "Eventos", description = "Events and subscriptions"),
        (name = "Cartas", description = "Card catalog management"),
        (name = "Miembros", description = "Team member profiles")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
