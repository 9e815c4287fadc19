mod config;
mod degree;
mod error;
mod tonic;
mod tuning;

mod utils;

pub use config::*;
pub use degree::*;
pub use error::*;
pub use tonic::*;
pub use tuning::*;
