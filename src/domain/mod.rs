pub mod models;
pub mod events;
pub mod services;
pub mod errors;

pub use models::*;
pub use events::*;
pub use services::*;
pub use errors::*;
