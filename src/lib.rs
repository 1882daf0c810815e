pub mod bootstrap;
pub mod config;
pub mod error;
pub mod fetch;
pub mod name;
pub mod rewrite;
pub mod scaffold;
pub mod templates;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use name::ProjectName;
pub use scaffold::{Scaffold, Stage};
