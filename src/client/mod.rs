pub mod api;

pub use api::WebClient;
