//! Middleware de CORS
//!
//! El panel de administración y la web pública se sirven desde otros
//! orígenes durante el desarrollo.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS configurado para desarrollo
/// NOTA: Permite cualquier origen - solo para desarrollo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
