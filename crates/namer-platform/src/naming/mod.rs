pub mod http;

pub use http::HttpNamingService;
