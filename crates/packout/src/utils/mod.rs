pub mod normalize_config;
pub mod validate_config;
