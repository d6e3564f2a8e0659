pub mod handlers;
pub mod relay;
