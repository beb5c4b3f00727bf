pub mod access;
pub mod auth;
pub mod config;
pub mod constants;
pub mod content;
pub mod page;
pub mod storage;
pub mod theme;
pub mod validation;

pub use access::{AccessDecision, AccessPolicy, DashboardSection};
pub use auth::{AuthError, AuthProvider, AuthUser, DemoAuthProvider, Plan, SessionStore};
pub use config::{AuthMode, SiteConfig};
pub use page::PageId;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use theme::{ThemeName, ThemeStore};
