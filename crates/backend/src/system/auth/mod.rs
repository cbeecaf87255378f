pub mod credentials;
pub mod extractor;
pub mod jwt;
pub mod middleware;
