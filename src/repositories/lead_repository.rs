//! Repositorio de leads
//!
//! El trait `LeadRepository` es el colaborador de almacenamiento inyectado:
//! la lógica de captura y moderación no sabe si detrás hay PostgreSQL o el
//! almacenamiento en memoria de la primera revisión del sistema.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{BookingDetails, Lead, LeadStatus, NewLead};
use crate::utils::errors::{AppError, AppResult};

/// Colaborador de almacenamiento para leads.
///
/// Los leads nunca se borran: solo se crean desde el endpoint público y
/// se les actualiza el estado desde el panel.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Persistir un lead nuevo con id, timestamp y estado inicial `new`
    /// asignados por el servidor.
    async fn insert(&self, new_lead: NewLead) -> AppResult<Lead>;

    /// Todos los leads, del más reciente al más antiguo.
    async fn find_all(&self) -> AppResult<Vec<Lead>>;

    /// Sobrescribir solo el estado. `None` si el id no existe.
    async fn update_status(&self, id: Uuid, status: LeadStatus) -> AppResult<Option<Lead>>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

// Fila de la tabla leads; booking_details viaja como JSONB
#[derive(Debug, sqlx::FromRow)]
struct LeadRow {
    id: Uuid,
    name: String,
    phone: String,
    address: String,
    vehicle_type: String,
    booking_details: Json<BookingDetails>,
    status: String,
    created_at: chrono::DateTime<Utc>,
}

impl LeadRow {
    fn into_lead(self) -> AppResult<Lead> {
        let status = self.status.parse::<LeadStatus>().map_err(AppError::Internal)?;

        Ok(Lead {
            id: self.id,
            name: self.name,
            phone: self.phone,
            address: self.address,
            vehicle_type: self.vehicle_type,
            booking_details: self.booking_details.0,
            status,
            created_at: self.created_at,
        })
    }
}

pub struct PgLeadRepository {
    pool: PgPool,
}

impl PgLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadRepository for PgLeadRepository {
    async fn insert(&self, new_lead: NewLead) -> AppResult<Lead> {
        let row = sqlx::query_as::<_, LeadRow>(
            r#"
            INSERT INTO leads (id, name, phone, address, vehicle_type, booking_details, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_lead.name)
        .bind(new_lead.phone)
        .bind(new_lead.address)
        .bind(new_lead.vehicle_type)
        .bind(Json(new_lead.booking_details))
        .bind(LeadStatus::New.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        row.into_lead()
    }

    async fn find_all(&self) -> AppResult<Vec<Lead>> {
        let rows = sqlx::query_as::<_, LeadRow>(
            "SELECT * FROM leads ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(LeadRow::into_lead).collect()
    }

    async fn update_status(&self, id: Uuid, status: LeadStatus) -> AppResult<Option<Lead>> {
        let row = sqlx::query_as::<_, LeadRow>(
            "UPDATE leads SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(LeadRow::into_lead).transpose()
    }
}

// ---------------------------------------------------------------------------
// En memoria
// ---------------------------------------------------------------------------

/// Revisión en memoria del almacenamiento de leads.
///
/// Reproduce el array global de la primera versión del servidor detrás
/// del mismo trait, y es el backend que usan los tests.
#[derive(Default)]
pub struct InMemoryLeadRepository {
    leads: RwLock<Vec<Lead>>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn insert(&self, new_lead: NewLead) -> AppResult<Lead> {
        let lead = Lead {
            id: Uuid::new_v4(),
            name: new_lead.name,
            phone: new_lead.phone,
            address: new_lead.address,
            vehicle_type: new_lead.vehicle_type,
            booking_details: new_lead.booking_details,
            status: LeadStatus::New,
            created_at: Utc::now(),
        };

        let mut leads = self.leads.write().await;
        leads.push(lead.clone());

        Ok(lead)
    }

    async fn find_all(&self) -> AppResult<Vec<Lead>> {
        let leads = self.leads.read().await;
        // El Vec crece por el final: recorrerlo al revés da el orden
        // más-reciente-primero sin depender de timestamps iguales
        Ok(leads.iter().rev().cloned().collect())
    }

    async fn update_status(&self, id: Uuid, status: LeadStatus) -> AppResult<Option<Lead>> {
        let mut leads = self.leads.write().await;

        match leads.iter_mut().find(|l| l.id == id) {
            Some(lead) => {
                lead.status = status;
                Ok(Some(lead.clone()))
            }
            None => Ok(None),
        }
    }
}
