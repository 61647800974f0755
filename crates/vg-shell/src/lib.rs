//! Interactive command shell for the Vigenère lab.
//!
//! The shell owns a [`Session`] (current key, texts and key period) and passes
//! it explicitly into every engine call; the engine itself keeps no state.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod session;
pub mod shell;
pub mod table;

pub use cli::{init_logging, Args};
pub use command::Command;
pub use config::load_config;
pub use error::{ShellError, ShellResult};
pub use session::Session;
pub use shell::{Reply, Shell};
pub use table::Table;
