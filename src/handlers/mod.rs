//! Stub operations, one module per provider namespace.

pub mod apps;
pub mod checks;
pub mod issues;
pub mod repos;
pub mod users;

pub use apps::Apps;
pub use checks::Checks;
pub use issues::Issues;
pub use repos::Repos;
pub use users::Users;
