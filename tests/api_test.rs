//! Integration tests for API endpoints.
//!
//! The router is exercised end to end with mock services, so envelope
//! shapes, status codes and middleware behavior are tested without a
//! database connection.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use clash_community_api::api::{create_router, AppState};
use clash_community_api::domain::{
    Carta, CartaInput, Evento, Member, MemberInput, User, UserRole,
};
use clash_community_api::errors::{AppError, AppResult};
use clash_community_api::services::{
    AuthService, CartaService, Claims, EventoDraft, EventoService, MemberService, Services,
    TokenResponse, UserService,
};

const USER_ID: Uuid = Uuid::from_u128(1);
const ADMIN_ID: Uuid = Uuid::from_u128(2);
const GHOST_ID: Uuid = Uuid::from_u128(3);
const EVENTO_ID: Uuid = Uuid::from_u128(10);

fn player(id: Uuid, name: &str, role: UserRole) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        password_hash: "hashed".to_string(),
        role,
        partidas_jugadas: 12,
        partidas_ganadas: 7,
        partidas_empatadas: 1,
        partidas_perdidas: 4,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// Maps the three test tokens onto fixed accounts. The ghost token is a
// structurally valid token whose account no longer exists.
struct StubAuthService;

#[async_trait]
impl AuthService for StubAuthService {
    async fn register(
        &self,
        name: String,
        email: String,
        _password: String,
    ) -> AppResult<(User, TokenResponse)> {
        let mut user = player(Uuid::new_v4(), &name, UserRole::User);
        user.email = email;
        Ok((
            user,
            TokenResponse {
                access_token: "stub-token".to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 86400,
            },
        ))
    }

    async fn login(&self, _email: String, _password: String) -> AppResult<TokenResponse> {
        Ok(TokenResponse {
            access_token: "stub-token".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 86400,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let (sub, role) = match token {
            "user-token" => (USER_ID, "user"),
            "admin-token" => (ADMIN_ID, "admin"),
            "ghost-token" => (GHOST_ID, "user"),
            _ => return Err(AppError::Unauthorized),
        };

        Ok(Claims {
            sub,
            email: "token@example.com".to_string(),
            role: role.to_string(),
            exp: Utc::now().timestamp() + 3600,
            iat: Utc::now().timestamp(),
        })
    }
}

struct StubUserService;

#[async_trait]
impl UserService for StubUserService {
    async fn ranking(&self) -> AppResult<Vec<User>> {
        Ok(vec![
            player(USER_ID, "ElPrimo", UserRole::User),
            player(Uuid::from_u128(4), "Sultan", UserRole::User),
        ])
    }

    async fn search_by_name(&self, name: &str) -> AppResult<Vec<User>> {
        if name == "ElPrimo" {
            Ok(vec![player(USER_ID, "ElPrimo", UserRole::User)])
        } else {
            Err(AppError::field("name", "El jugador no existe"))
        }
    }

    async fn list_players(&self) -> AppResult<Vec<User>> {
        Ok(vec![player(USER_ID, "ElPrimo", UserRole::User)])
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        match id {
            USER_ID => Ok(player(USER_ID, "ElPrimo", UserRole::User)),
            ADMIN_ID => Ok(player(ADMIN_ID, "admin", UserRole::Admin)),
            _ => Err(AppError::NotFound),
        }
    }

    async fn update_name(&self, _id: Uuid, _name: String) -> AppResult<()> {
        Ok(())
    }

    async fn update_email(&self, _id: Uuid, _email: String) -> AppResult<()> {
        Ok(())
    }

    async fn update_account(
        &self,
        _id: Uuid,
        _name: String,
        _email: String,
        _password: String,
    ) -> AppResult<()> {
        Ok(())
    }

    async fn delete_user(&self, _id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

struct StubCartaService;

#[async_trait]
impl CartaService for StubCartaService {
    async fn list(&self) -> AppResult<Vec<Carta>> {
        Ok(vec![])
    }

    async fn get(&self, _id: Uuid) -> AppResult<Carta> {
        Err(AppError::NotFound)
    }

    async fn create(&self, input: CartaInput) -> AppResult<Carta> {
        if input.photo == "caballero.png" {
            return Err(AppError::field(
                "photo",
                "La nueva imagen debe ser diferente a la actual.",
            ));
        }
        Ok(Carta {
            id: Uuid::new_v4(),
            photo: input.photo,
            nombre: input.nombre,
            role: input.role,
            coste_elixir: input.coste_elixir,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    async fn update(&self, _id: Uuid, _input: CartaInput) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: Uuid) -> AppResult<()> {
        Ok(())
    }

    async fn photos(&self) -> AppResult<Vec<String>> {
        Ok(vec!["caballero.png".to_string(), "bruja.png".to_string()])
    }
}

struct StubEventoService;

#[async_trait]
impl EventoService for StubEventoService {
    async fn list(&self) -> AppResult<Vec<Evento>> {
        Ok(vec![Evento {
            id: EVENTO_ID,
            user_id: USER_ID,
            nombre: "Torneo de primavera".to_string(),
            tipo: "torneo".to_string(),
            fecha_inicio: Utc::now().naive_utc(),
            duracion: "2 horas".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }])
    }

    async fn created_by(&self, _user_id: Uuid) -> AppResult<Vec<Evento>> {
        Ok(vec![])
    }

    async fn subscribed(&self, _user_id: Uuid) -> AppResult<Vec<Evento>> {
        Ok(vec![])
    }

    async fn get(&self, _id: Uuid) -> AppResult<Evento> {
        Err(AppError::NotFound)
    }

    async fn create(&self, user_id: Uuid, draft: EventoDraft) -> AppResult<Evento> {
        Ok(Evento {
            id: Uuid::new_v4(),
            user_id,
            nombre: draft.nombre,
            tipo: draft.tipo,
            fecha_inicio: Utc::now().naive_utc(),
            duracion: draft.duracion,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    async fn update(&self, _id: Uuid, _draft: EventoDraft) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: Uuid) -> AppResult<()> {
        Ok(())
    }

    // The test user is already subscribed to the fixed evento
    async fn subscribe(&self, evento_id: Uuid, _user_id: Uuid) -> AppResult<()> {
        if evento_id == EVENTO_ID {
            Err(AppError::failure("Ya estás inscrito en este evento."))
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn unsubscribe(&self, evento_id: Uuid, _user_id: Uuid) -> AppResult<()> {
        if evento_id == EVENTO_ID {
            Ok(())
        } else {
            Err(AppError::failure("No estás inscrito en este evento."))
        }
    }
}

struct StubMemberService;

#[async_trait]
impl MemberService for StubMemberService {
    async fn list(&self) -> AppResult<Vec<Member>> {
        Ok(vec![Member {
            id: Uuid::new_v4(),
            name: "Ana García".to_string(),
            role: "Frontend".to_string(),
            desc: "Interfaz".to_string(),
            photo: "ana.png".to_string(),
            website: "https://ana.example.com".to_string(),
            email: "ana@example.com".to_string(),
            linkedin: None,
            dribbble: None,
        }])
    }

    async fn get(&self, _id: Uuid) -> AppResult<Member> {
        Err(AppError::NotFound)
    }

    async fn update(&self, _id: Uuid, _input: MemberInput) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

fn test_router() -> axum::Router {
    let services = Services {
        auth: Arc::new(StubAuthService),
        users: Arc::new(StubUserService),
        cartas: Arc::new(StubCartaService),
        eventos: Arc::new(StubEventoService),
        members: Arc::new(StubMemberService),
    };
    create_router(AppState::new(services, None))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn send_json(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn welcome_aggregates_cartas_and_miembros() {
    let response = test_router().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["cartas"], json!(["caballero.png", "bruja.png"]));
    assert_eq!(json["data"]["miembros"][0]["name"], "Ana García");
}

#[tokio::test]
async fn health_without_database_reports_not_configured() {
    let response = test_router().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "not configured");
}

#[tokio::test]
async fn rankings_are_public_and_hide_password_hashes() {
    let response = test_router().oneshot(get("/rankings")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    let first = &json["data"][0];
    assert_eq!(first["name"], "ElPrimo");
    assert_eq!(first["partidas_ganadas"], 7);
    assert!(first.get("password_hash").is_none());
}

#[tokio::test]
async fn ranking_search_unknown_name_returns_field_errors() {
    let request = send_json("POST", "/rankings", None, json!({"name": "fantasma"}));
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["errors"]["name"], json!(["El jugador no existe"]));
}

#[tokio::test]
async fn ranking_search_empty_name_is_rejected_before_the_service() {
    let request = send_json("POST", "/rankings", None, json!({"name": ""}));
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(
        json["errors"]["name"],
        json!(["El campo jugador es obligatorio"])
    );
}

#[tokio::test]
async fn eventos_require_authentication() {
    let response = test_router().oneshot(get("/eventos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
}

#[tokio::test]
async fn eventos_list_with_valid_token() {
    let response = test_router()
        .oneshot(get_auth("/eventos", "user-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["message"], "Lista de eventos obtenida correctamente");
    assert_eq!(json["data"][0]["nombre"], "Torneo de primavera");
}

#[tokio::test]
async fn deleted_account_token_is_rejected() {
    // The ghost token decodes fine but its account no longer exists
    let response = test_router()
        .oneshot(get_auth("/eventos", "ghost-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn double_subscribe_returns_failure_envelope_with_200() {
    let request = send_json(
        "POST",
        &format!("/eventos/{}/inscribirse", EVENTO_ID),
        Some("user-token"),
        json!({}),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["message"], "Ya estás inscrito en este evento.");
}

#[tokio::test]
async fn crear_carta_requires_a_token() {
    let request = send_json(
        "POST",
        "/crear_carta",
        None,
        json!({"photo": "nueva.png", "nombre": "Nueva", "role": "tropa", "coste_elixir": 4}),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn crear_carta_requires_the_admin_role() {
    let request = send_json(
        "POST",
        "/crear_carta",
        Some("user-token"),
        json!({"photo": "nueva.png", "nombre": "Nueva", "role": "tropa", "coste_elixir": 4}),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["message"], "El usuario no tiene los roles necesarios");
}

#[tokio::test]
async fn crear_carta_success_has_null_data() {
    let request = send_json(
        "POST",
        "/crear_carta",
        Some("admin-token"),
        json!({"photo": "nueva.png", "nombre": "Nueva", "role": "tropa", "coste_elixir": 4}),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert!(json["data"].is_null());
    assert_eq!(json["message"], "Carta creada correctamente");
}

#[tokio::test]
async fn crear_carta_duplicate_photo_returns_field_errors() {
    let request = send_json(
        "POST",
        "/crear_carta",
        Some("admin-token"),
        json!({"photo": "caballero.png", "nombre": "Otro", "role": "tropa", "coste_elixir": 4}),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(
        json["errors"]["photo"],
        json!(["La nueva imagen debe ser diferente a la actual."])
    );
}

#[tokio::test]
async fn crear_carta_elixir_out_of_range_is_rejected() {
    let request = send_json(
        "POST",
        "/crear_carta",
        Some("admin-token"),
        json!({"photo": "nueva.png", "nombre": "Nueva", "role": "tropa", "coste_elixir": 11}),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert!(json["errors"]["coste_elixir"].is_array());
}

#[tokio::test]
async fn perfil_returns_the_token_owner() {
    let response = test_router()
        .oneshot(get_auth("/auth/perfil", "user-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["name"], "ElPrimo");
}

#[tokio::test]
async fn users_cannot_touch_other_accounts() {
    let request = send_json(
        "PUT",
        &format!("/usuarios/{}/actualizar-nombre", ADMIN_ID),
        Some("user-token"),
        json!({"name": "Nuevo"}),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn users_can_rename_themselves() {
    let request = send_json(
        "PUT",
        &format!("/usuarios/{}/actualizar-nombre", USER_ID),
        Some("user-token"),
        json!({"name": "Nuevo"}),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["message"], "Nombre actualizado correctamente");
}

#[tokio::test]
async fn miembros_listing_is_admin_only() {
    let response = test_router()
        .oneshot(get_auth("/miembros", "user-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = test_router()
        .oneshot(get_auth("/miembros", "admin-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["miembros"][0]["email"], "ana@example.com");
}
