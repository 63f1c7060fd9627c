pub mod mirror_store;
pub mod resource_api;

pub use mirror_store::{MirrorError, MirrorStore};
pub use resource_api::{HealthStatus, ResourceApi, ResourceApiError};
