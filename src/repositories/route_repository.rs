//! Repositorio de tarifas de ruta
//!
//! CRUD completo detrás de un trait inyectable. El borrado es idempotente:
//! borrar un id inexistente no es un error.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{RoutePrice, RoutePriceData};
use crate::utils::errors::AppResult;

/// Colaborador de almacenamiento para tarifas de ruta
#[async_trait]
pub trait RouteRepository: Send + Sync {
    /// Todas las tarifas ordenadas por destino.
    async fn find_all(&self) -> AppResult<Vec<RoutePrice>>;

    async fn insert(&self, data: RoutePriceData) -> AppResult<RoutePrice>;

    /// `None` si el id no existe.
    async fn update(&self, id: Uuid, data: RoutePriceData) -> AppResult<Option<RoutePrice>>;

    /// Idempotente: siempre Ok, exista o no el id.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

pub struct PgRouteRepository {
    pool: PgPool,
}

impl PgRouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RouteRepository for PgRouteRepository {
    async fn find_all(&self) -> AppResult<Vec<RoutePrice>> {
        let routes = sqlx::query_as::<_, RoutePrice>(
            "SELECT * FROM routes ORDER BY destination",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    async fn insert(&self, data: RoutePriceData) -> AppResult<RoutePrice> {
        let route = sqlx::query_as::<_, RoutePrice>(
            r#"
            INSERT INTO routes (id, destination, time, distance, sedan, ertiga, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.destination)
        .bind(data.time)
        .bind(data.distance)
        .bind(data.sedan)
        .bind(data.ertiga)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    async fn update(&self, id: Uuid, data: RoutePriceData) -> AppResult<Option<RoutePrice>> {
        let route = sqlx::query_as::<_, RoutePrice>(
            r#"
            UPDATE routes
            SET destination = $2, time = $3, distance = $4, sedan = $5, ertiga = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.destination)
        .bind(data.time)
        .bind(data.distance)
        .bind(data.sedan)
        .bind(data.ertiga)
        .fetch_optional(&self.pool)
        .await?;

        Ok(route)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// En memoria
// ---------------------------------------------------------------------------

/// Revisión en memoria con el catálogo por defecto del negocio
#[derive(Default)]
pub struct InMemoryRouteRepository {
    routes: RwLock<Vec<RoutePrice>>,
}

impl InMemoryRouteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catálogo inicial de destinos desde Bokaro
    pub fn with_defaults() -> Self {
        let defaults = [
            ("Kolkata", "6h 19m", "317 km", 6500.0, 7500.0),
            ("Durgapur", "3h 10m", "148 km", 2599.0, 3499.0),
            ("Asansol", "2h 30m", "108 km", 2499.0, 2999.0),
            ("Ranchi", "3h 0m", "112 km", 1699.0, 2499.0),
            ("Jamshedpur", "2h 18m", "135 km", 2499.0, 2999.0),
            ("Dhanbad", "1h 10m", "38.1 km", 999.0, 1299.0),
            ("Hazaribagh", "2h 34m", "129 km", 2799.0, 3299.0),
            ("Ramgarh", "2h 3m", "85.3 km", 1999.0, 2599.0),
        ];

        let routes = defaults
            .into_iter()
            .map(|(destination, time, distance, sedan, ertiga)| RoutePrice {
                id: Uuid::new_v4(),
                destination: destination.to_string(),
                time: time.to_string(),
                distance: distance.to_string(),
                sedan,
                ertiga,
                created_at: Utc::now(),
            })
            .collect();

        Self {
            routes: RwLock::new(routes),
        }
    }
}

#[async_trait]
impl RouteRepository for InMemoryRouteRepository {
    async fn find_all(&self) -> AppResult<Vec<RoutePrice>> {
        let routes = self.routes.read().await;
        let mut routes: Vec<RoutePrice> = routes.clone();
        routes.sort_by(|a, b| a.destination.cmp(&b.destination));
        Ok(routes)
    }

    async fn insert(&self, data: RoutePriceData) -> AppResult<RoutePrice> {
        let route = RoutePrice {
            id: Uuid::new_v4(),
            destination: data.destination,
            time: data.time,
            distance: data.distance,
            sedan: data.sedan,
            ertiga: data.ertiga,
            created_at: Utc::now(),
        };

        let mut routes = self.routes.write().await;
        routes.push(route.clone());

        Ok(route)
    }

    async fn update(&self, id: Uuid, data: RoutePriceData) -> AppResult<Option<RoutePrice>> {
        let mut routes = self.routes.write().await;

        match routes.iter_mut().find(|r| r.id == id) {
            Some(route) => {
                route.destination = data.destination;
                route.time = data.time;
                route.distance = data.distance;
                route.sedan = data.sedan;
                route.ertiga = data.ertiga;
                Ok(Some(route.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut routes = self.routes.write().await;
        routes.retain(|r| r.id != id);
        Ok(())
    }
}
