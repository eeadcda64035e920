pub mod exchange;
pub mod kinds;
