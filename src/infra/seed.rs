//! Development fixture data.
//!
//! Populates an empty database with an admin account, a roster of players
//! with randomized match counters, the card catalog, a batch of eventos with
//! their subscriptions, and the team page profiles.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use uuid::Uuid;

use super::repositories::entities::{carta, evento, evento_user, member, user};
use crate::config::{ROLE_ADMIN, ROLE_USER};
use crate::domain::Password;
use crate::errors::{AppError, AppResult};

const PLAYER_NAMES: &[&str] = &[
    "ElPrimo", "Sultan", "Berto", "Lucia98", "Karma", "Trueno", "Darkness", "Pancho", "MisterX",
    "Reina", "Fenix", "Tornado", "Gambito", "Picante", "Rayo", "Sombra", "Halcon", "Vikingo",
    "Centella", "Nube",
];

// (photo slug, nombre, role, coste_elixir)
const CARTAS: &[(&str, &str, &str, i16)] = &[
    ("caballero.png", "Caballero", "tropa", 3),
    ("arqueras.png", "Arqueras", "tropa", 3),
    ("duendes.png", "Duendes", "tropa", 2),
    ("gigante.png", "Gigante", "tropa", 5),
    ("pekka.png", "P.E.K.K.A", "tropa", 7),
    ("minipekka.png", "Mini P.E.K.K.A", "tropa", 4),
    ("mosquetera.png", "Mosquetera", "tropa", 4),
    ("valquiria.png", "Valquiria", "tropa", 4),
    ("esqueletos.png", "Esqueletos", "tropa", 1),
    ("bruja.png", "Bruja", "tropa", 5),
    ("principe.png", "Príncipe", "tropa", 5),
    ("montapuercos.png", "Montapuercos", "tropa", 4),
    ("globo.png", "Globo Bombástico", "tropa", 5),
    ("dragon_bebe.png", "Dragón Bebé", "tropa", 4),
    ("esbirros.png", "Esbirros", "tropa", 3),
    ("horda_esbirros.png", "Horda de Esbirros", "tropa", 5),
    ("mago.png", "Mago", "tropa", 5),
    ("mago_hielo.png", "Mago de Hielo", "tropa", 3),
    ("mago_electrico.png", "Mago Eléctrico", "tropa", 4),
    ("verdugo.png", "Verdugo", "tropa", 5),
    ("lenador.png", "Leñador", "tropa", 4),
    ("bandida.png", "Bandida", "tropa", 3),
    ("bola_fuego.png", "Bola de Fuego", "hechizo", 4),
    ("flechas.png", "Flechas", "hechizo", 3),
    ("descarga.png", "Descarga", "hechizo", 2),
    ("veneno.png", "Veneno", "hechizo", 4),
    ("cohete.png", "Cohete", "hechizo", 6),
    ("canon.png", "Cañón", "estructura", 3),
    ("tesla.png", "Torre Tesla", "estructura", 4),
];

const EVENTO_NOMBRES: &[&str] = &[
    "Torneo de primavera",
    "Torneo de verano",
    "Torneo de otoño",
    "Torneo de invierno",
    "Copa del clan",
    "Desafío triple elixir",
    "Desafío espejo",
    "Batalla de aniversario",
    "Liga nocturna",
    "Guerra de clanes",
    "Torneo relámpago",
    "Copa de la arena",
    "Desafío clásico",
    "Desafío gran reto",
    "Batalla amistosa",
    "Torneo benéfico",
    "Liga de leyendas",
    "Copa del rey",
    "Desafío sin elixir",
    "Batalla final de temporada",
];

const TIPOS: &[&str] = &["torneo", "amistoso", "clan"];
const DURACIONES: &[&str] = &["1 hora", "2 horas", "3 horas", "1 día"];

/// Seed the database. Refuses to run twice: any existing account means
/// fixtures are already in place.
pub async fn run(db: &DatabaseConnection) -> AppResult<()> {
    let existing = user::Entity::find().count(db).await.map_err(AppError::from)?;
    if existing > 0 {
        return Err(AppError::failure(
            "La base de datos ya contiene usuarios, no se ejecuta el seeder",
        ));
    }

    let mut rng = rand::thread_rng();
    let now = chrono::Utc::now();

    // Hash once and share: seeding 20 accounts through Argon2 individually
    // takes noticeable time and fixtures share a known password anyway.
    let password_hash = Password::new("password123")?.into_string();

    let admin_id = Uuid::new_v4();
    user::ActiveModel {
        id: Set(admin_id),
        name: Set("admin".to_string()),
        email: Set("admin@example.com".to_string()),
        password_hash: Set(password_hash.clone()),
        role: Set(ROLE_ADMIN.to_string()),
        partidas_jugadas: Set(0),
        partidas_ganadas: Set(0),
        partidas_empatadas: Set(0),
        partidas_perdidas: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .map_err(AppError::from)?;

    let mut player_ids = Vec::with_capacity(PLAYER_NAMES.len());
    let mut players = Vec::with_capacity(PLAYER_NAMES.len());
    for name in PLAYER_NAMES {
        let ganadas = rng.gen_range(0..60);
        let empatadas = rng.gen_range(0..10);
        let perdidas = rng.gen_range(0..60);
        let id = Uuid::new_v4();
        player_ids.push(id);
        players.push(user::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            email: Set(format!("{}@example.com", name.to_lowercase())),
            password_hash: Set(password_hash.clone()),
            role: Set(ROLE_USER.to_string()),
            partidas_jugadas: Set(ganadas + empatadas + perdidas),
            partidas_ganadas: Set(ganadas),
            partidas_empatadas: Set(empatadas),
            partidas_perdidas: Set(perdidas),
            created_at: Set(now),
            updated_at: Set(now),
        });
    }
    user::Entity::insert_many(players)
        .exec(db)
        .await
        .map_err(AppError::from)?;

    let cartas: Vec<carta::ActiveModel> = CARTAS
        .iter()
        .map(|(photo, nombre, role, coste)| carta::ActiveModel {
            id: Set(Uuid::new_v4()),
            photo: Set(photo.to_string()),
            nombre: Set(nombre.to_string()),
            role: Set(role.to_string()),
            coste_elixir: Set(*coste),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect();
    carta::Entity::insert_many(cartas)
        .exec(db)
        .await
        .map_err(AppError::from)?;

    let mut evento_ids = Vec::with_capacity(EVENTO_NOMBRES.len());
    let mut eventos = Vec::with_capacity(EVENTO_NOMBRES.len());
    for (i, nombre) in EVENTO_NOMBRES.iter().enumerate() {
        let creator = *player_ids.choose(&mut rng).unwrap_or(&admin_id);
        let id = Uuid::new_v4();
        evento_ids.push((id, creator));
        eventos.push(evento::ActiveModel {
            id: Set(id),
            user_id: Set(creator),
            nombre: Set(nombre.to_string()),
            tipo: Set(TIPOS[i % TIPOS.len()].to_string()),
            fecha_inicio: Set(now.naive_utc() + chrono::Duration::days(i as i64 + 1)),
            duracion: Set(DURACIONES[i % DURACIONES.len()].to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        });
    }
    evento::Entity::insert_many(eventos)
        .exec(db)
        .await
        .map_err(AppError::from)?;

    // Creators are subscribed to their own eventos, plus a spread of
    // random subscriptions on top (duplicates filtered out).
    let mut pivot: HashSet<(Uuid, Uuid)> = evento_ids
        .iter()
        .map(|(evento_id, creator)| (*evento_id, *creator))
        .collect();
    for _ in 0..50 {
        let (evento_id, _) = evento_ids[rng.gen_range(0..evento_ids.len())];
        let user_id = player_ids[rng.gen_range(0..player_ids.len())];
        pivot.insert((evento_id, user_id));
    }
    let subscriptions: Vec<evento_user::ActiveModel> = pivot
        .into_iter()
        .map(|(evento_id, user_id)| evento_user::ActiveModel {
            evento_id: Set(evento_id),
            user_id: Set(user_id),
        })
        .collect();
    evento_user::Entity::insert_many(subscriptions)
        .exec(db)
        .await
        .map_err(AppError::from)?;

    let members = vec![
        member::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("Ana García".to_string()),
            role: Set("Frontend".to_string()),
            desc: Set("Diseña y construye la interfaz de la comunidad.".to_string()),
            photo: Set("ana.png".to_string()),
            website: Set("https://ana.example.com".to_string()),
            email: Set("ana@example.com".to_string()),
            linkedin: Set(Some("https://linkedin.com/in/ana".to_string())),
            dribbble: Set(Some("https://dribbble.com/ana".to_string())),
        },
        member::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("Marcos Ruiz".to_string()),
            role: Set("Backend".to_string()),
            desc: Set("Mantiene la API y la base de datos.".to_string()),
            photo: Set("marcos.png".to_string()),
            website: Set("https://marcos.example.com".to_string()),
            email: Set("marcos@example.com".to_string()),
            linkedin: Set(Some("https://linkedin.com/in/marcos".to_string())),
            dribbble: Set(None),
        },
        member::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("Sara López".to_string()),
            role: Set("Community".to_string()),
            desc: Set("Organiza los torneos y la comunicación con los jugadores.".to_string()),
            photo: Set("sara.png".to_string()),
            website: Set("https://sara.example.com".to_string()),
            email: Set("sara@example.com".to_string()),
            linkedin: Set(None),
            dribbble: Set(None),
        },
    ];
    member::Entity::insert_many(members)
        .exec(db)
        .await
        .map_err(AppError::from)?;

    tracing::info!("Seed data inserted");
    Ok(())
}
