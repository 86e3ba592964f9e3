//! Runtime settings for the booking validator.
//!
//! Three settings exist: the conflict `lookup` strategy, the lock wait in
//! seconds, and whether a missing database may be created on first use.
//! [`ConfigBuilder`] layers them, later layers winning field by field:
//!
//! | layer | source |
//! |---|---|
//! | file | `config.yaml` in the data directory |
//! | environment | `STAYBOOK_LOOKUP`, `STAYBOOK_MAXIMUM_LOCK_WAIT_SECONDS`, `STAYBOOK_DISABLE_AUTOINIT` |
//! | overrides | [`ConfigBuilder::with_config`], fed from CLI flags |
//!
//! Unset fields fall back to the accessors' defaults on [`Config`].
//!
//! ```
//! use staybook::config::{Config, ConfigBuilder, LookupStrategy};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = ConfigBuilder::new()
//!     .with_data_dir(dir.path())
//!     .skip_env()
//!     .with_config(Config {
//!         lookup: Some(LookupStrategy::AllMatches),
//!         ..Config::default()
//!     })
//!     .build()
//!     .unwrap();
//! assert_eq!(config.lookup_strategy(), LookupStrategy::AllMatches);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, LookupStrategy};
pub use validator::ConfigValidator;
