pub mod hf_api;
pub mod responder;
