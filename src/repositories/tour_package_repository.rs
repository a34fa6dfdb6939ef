//! Repositorio de paquetes turísticos
//!
//! Igual que rutas y flota, más una consulta por id para la página de
//! detalle pública.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{TourPackage, TourPackageData};
use crate::utils::errors::AppResult;

/// Colaborador de almacenamiento para paquetes turísticos
#[async_trait]
pub trait TourPackageRepository: Send + Sync {
    /// Todos los paquetes, del más reciente al más antiguo.
    async fn find_all(&self) -> AppResult<Vec<TourPackage>>;

    /// `None` si el id no existe.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TourPackage>>;

    async fn insert(&self, data: TourPackageData) -> AppResult<TourPackage>;

    /// `None` si el id no existe.
    async fn update(&self, id: Uuid, data: TourPackageData) -> AppResult<Option<TourPackage>>;

    /// Idempotente: siempre Ok, exista o no el id.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

pub struct PgTourPackageRepository {
    pool: PgPool,
}

impl PgTourPackageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TourPackageRepository for PgTourPackageRepository {
    async fn find_all(&self) -> AppResult<Vec<TourPackage>> {
        let packages = sqlx::query_as::<_, TourPackage>(
            "SELECT * FROM tour_packages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(packages)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TourPackage>> {
        let package = sqlx::query_as::<_, TourPackage>(
            "SELECT * FROM tour_packages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(package)
    }

    async fn insert(&self, data: TourPackageData) -> AppResult<TourPackage> {
        let package = sqlx::query_as::<_, TourPackage>(
            r#"
            INSERT INTO tour_packages (id, title, description, price, duration, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.title)
        .bind(data.description)
        .bind(data.price)
        .bind(data.duration)
        .bind(data.image_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(package)
    }

    async fn update(&self, id: Uuid, data: TourPackageData) -> AppResult<Option<TourPackage>> {
        let package = sqlx::query_as::<_, TourPackage>(
            r#"
            UPDATE tour_packages
            SET title = $2, description = $3, price = $4, duration = $5, image_url = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.price)
        .bind(data.duration)
        .bind(data.image_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(package)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM tour_packages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// En memoria
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryTourPackageRepository {
    packages: RwLock<Vec<TourPackage>>,
}

impl InMemoryTourPackageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TourPackageRepository for InMemoryTourPackageRepository {
    async fn find_all(&self) -> AppResult<Vec<TourPackage>> {
        let packages = self.packages.read().await;
        Ok(packages.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TourPackage>> {
        let packages = self.packages.read().await;
        Ok(packages.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, data: TourPackageData) -> AppResult<TourPackage> {
        let package = TourPackage {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            price: data.price,
            duration: data.duration,
            image_url: data.image_url,
            created_at: Utc::now(),
        };

        let mut packages = self.packages.write().await;
        packages.push(package.clone());

        Ok(package)
    }

    async fn update(&self, id: Uuid, data: TourPackageData) -> AppResult<Option<TourPackage>> {
        let mut packages = self.packages.write().await;

        match packages.iter_mut().find(|p| p.id == id) {
            Some(package) => {
                package.title = data.title;
                package.description = data.description;
                package.price = data.price;
                package.duration = data.duration;
                package.image_url = data.image_url;
                Ok(Some(package.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut packages = self.packages.write().await;
        packages.retain(|p| p.id != id);
        Ok(())
    }
}
