pub mod config;
pub mod inject;
pub mod logging;
pub mod site;

pub use config::Config;
pub use site::{BuildError, BuildReport, build_site};
