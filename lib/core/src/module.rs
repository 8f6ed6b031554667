use axum::Router;

/// A service module that contributes HTTP routes.
///
/// Each business module (sales, ...) implements this trait to register
/// its API endpoints. The server binary collects all modules and merges
/// their routers into a single Router.
pub trait Module: Send + Sync {
    /// Module name, used for logging.
    fn name(&self) -> &str;

    /// Return the module's routes, already mounted under the module's
    /// own URL prefix.
    fn routes(&self) -> Router;
}
