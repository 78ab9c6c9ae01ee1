pub mod config;
pub(crate) mod health;
pub mod ocr;

pub use config::get_config;
pub use health::health_check;
pub use ocr::recognize;
