//! Modelos de dominio
//!
//! Structs de dominio compartidos entre repositorios, controllers y DTOs.

pub mod car;
pub mod lead;
pub mod route;
pub mod tour_package;

pub use car::{Car, CarData};
pub use lead::{BookingDetails, Lead, LeadStatus, NewLead};
pub use route::{RoutePrice, RoutePriceData};
pub use tour_package::{TourPackage, TourPackageData};
