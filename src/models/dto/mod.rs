pub mod generation;
pub mod request;
pub mod response;
