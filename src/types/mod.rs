pub mod port;
pub mod protocol;
pub mod resource;
