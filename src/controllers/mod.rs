//! Controllers de la API
//!
//! Lógica de negocio por entidad, construida por request a partir de los
//! colaboradores inyectados en el estado.

pub mod auth_controller;
pub mod car_controller;
pub mod lead_controller;
pub mod route_controller;
pub mod tour_package_controller;

pub use auth_controller::AuthController;
pub use car_controller::CarController;
pub use lead_controller::LeadController;
pub use route_controller::RouteController;
pub use tour_package_controller::TourPackageController;
