pub mod app;
pub mod assemble;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod lines;
pub mod names;
pub mod writer;
