pub mod build_product;
pub mod output;
pub mod str_or_bytes;
