//! Configuration layer.
//!
//! All environment access lives here; the rest of the code reads structured
//! config instead of calling `std::env::var` directly.
//!
//! - `loader`: `env_or`, `env_optional`, `env_bool`, `env_parse`, `.env` loading
//! - `schema`: `AnalyzerConfig`, `InputConfig`, `ObservabilityConfig`
//! - `env_keys`: key constants and legacy aliases

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, env_parse, load_dotenv, load_dotenv_from_dir};
pub use schema::{AnalyzerConfig, InputConfig, ObservabilityConfig};
