/// Middleware modules for the API server
///
/// - Security headers

pub mod security;
