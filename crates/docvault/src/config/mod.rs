pub mod paths;

pub use paths::Paths;
