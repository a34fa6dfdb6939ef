//! Repositorio de vehículos de la flota
//!
//! Mismo patrón CRUD que las tarifas de ruta: lectura pública,
//! escritura desde el panel, borrado idempotente.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Car, CarData};
use crate::utils::errors::AppResult;

/// Colaborador de almacenamiento para la flota
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Todos los vehículos ordenados por nombre.
    async fn find_all(&self) -> AppResult<Vec<Car>>;

    async fn insert(&self, data: CarData) -> AppResult<Car>;

    /// `None` si el id no existe.
    async fn update(&self, id: Uuid, data: CarData) -> AppResult<Option<Car>>;

    /// Idempotente: siempre Ok, exista o no el id.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn find_all(&self) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(cars)
    }

    async fn insert(&self, data: CarData) -> AppResult<Car> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (id, name, models, capacity, type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.name)
        .bind(data.models)
        .bind(data.capacity)
        .bind(data.car_type)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    async fn update(&self, id: Uuid, data: CarData) -> AppResult<Option<Car>> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET name = $2, models = $3, capacity = $4, type = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.models)
        .bind(data.capacity)
        .bind(data.car_type)
        .fetch_optional(&self.pool)
        .await?;

        Ok(car)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// En memoria
// ---------------------------------------------------------------------------

/// Revisión en memoria con la flota por defecto
#[derive(Default)]
pub struct InMemoryCarRepository {
    cars: RwLock<Vec<Car>>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flota inicial del negocio
    pub fn with_defaults() -> Self {
        let defaults = [
            ("Sedan", "Dzire / Aura", "4+1", "Sedan"),
            ("SUV", "Ertiga / Carens", "6+1", "SUV"),
        ];

        let cars = defaults
            .into_iter()
            .map(|(name, models, capacity, car_type)| Car {
                id: Uuid::new_v4(),
                name: name.to_string(),
                models: models.to_string(),
                capacity: capacity.to_string(),
                car_type: car_type.to_string(),
                created_at: Utc::now(),
            })
            .collect();

        Self {
            cars: RwLock::new(cars),
        }
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn find_all(&self) -> AppResult<Vec<Car>> {
        let cars = self.cars.read().await;
        let mut cars: Vec<Car> = cars.clone();
        cars.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cars)
    }

    async fn insert(&self, data: CarData) -> AppResult<Car> {
        let car = Car {
            id: Uuid::new_v4(),
            name: data.name,
            models: data.models,
            capacity: data.capacity,
            car_type: data.car_type,
            created_at: Utc::now(),
        };

        let mut cars = self.cars.write().await;
        cars.push(car.clone());

        Ok(car)
    }

    async fn update(&self, id: Uuid, data: CarData) -> AppResult<Option<Car>> {
        let mut cars = self.cars.write().await;

        match cars.iter_mut().find(|c| c.id == id) {
            Some(car) => {
                car.name = data.name;
                car.models = data.models;
                car.capacity = data.capacity;
                car.car_type = data.car_type;
                Ok(Some(car.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut cars = self.cars.write().await;
        cars.retain(|c| c.id != id);
        Ok(())
    }
}
