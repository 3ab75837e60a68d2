//! intervue-db — Persistence layer.
//!
//! Users, the in-progress interview of each user and the completed
//! interview history, stored in SQLite through sqlx.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use intervue_db::{Database, UserRepository};
//!
//! # async fn run() -> intervue_db::Result<()> {
//! let db = Database::connect("sqlite://data/intervue.db", 5).await?;
//! db.initialize().await?;
//! let users = UserRepository::new(Arc::new(db));
//! println!("{} users", users.count().await?);
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod error;
pub mod schema;
pub mod users;
pub mod interviews;

pub use database::Database;
pub use error::{DbError, Result};
pub use interviews::InterviewRepository;
pub use users::UserRepository;
