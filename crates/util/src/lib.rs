pub mod http_path_resolution;
pub mod query;
pub mod text_processing;

pub use http_path_resolution::*;
pub use query::*;
pub use text_processing::*;
