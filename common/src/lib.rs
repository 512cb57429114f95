pub mod array_demo;
pub mod config;
pub mod estimate;
pub mod estimator;
pub mod format;
pub mod sequence;
