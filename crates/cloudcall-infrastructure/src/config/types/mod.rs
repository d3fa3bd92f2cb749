//! Configuration types module

pub mod app;
pub mod logging;
pub mod request;
pub mod transport;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use request::RequestConfig;
pub use transport::TransportConfig;
