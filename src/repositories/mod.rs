//! Repositorios de almacenamiento
//!
//! Cada entidad expone un trait de colaborador de almacenamiento con una
//! implementación PostgreSQL (sqlx) y otra en memoria (también el backend
//! de los tests).

pub mod car_repository;
pub mod lead_repository;
pub mod route_repository;
pub mod tour_package_repository;

pub use car_repository::{CarRepository, InMemoryCarRepository, PgCarRepository};
pub use lead_repository::{InMemoryLeadRepository, LeadRepository, PgLeadRepository};
pub use route_repository::{InMemoryRouteRepository, PgRouteRepository, RouteRepository};
pub use tour_package_repository::{
    InMemoryTourPackageRepository, PgTourPackageRepository, TourPackageRepository,
};
