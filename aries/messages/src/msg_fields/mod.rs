pub mod protocols;
pub mod traits;
