pub mod app;
pub mod cli;
pub mod display;
pub mod model;
pub mod storage;
pub mod store;
pub mod util;
pub mod view;

pub use app::run;
