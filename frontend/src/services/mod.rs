pub mod auth_backend;
pub mod navigation;
pub mod remote_auth;

pub use auth_backend::AuthBackend;
pub use navigation::PageNavigator;
pub use remote_auth::RemoteAuthProvider;
