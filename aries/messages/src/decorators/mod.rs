pub mod thread;
pub mod timing;
