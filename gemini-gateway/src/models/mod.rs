pub mod ask;
pub mod health;

pub use ask::{AskRequest, AskResponse};
pub use health::HealthResponse;
