pub mod cli;
pub mod color;
pub mod completions;
pub mod config;
pub mod discovery;
pub mod error;
pub mod init;
pub mod output;
pub mod registry;
pub mod resolve;
pub mod secret;
pub mod validate;

pub use cli::{CheckArgs, Cli, Command, InitArgs, NetworksArgs, OutputFormat};
pub use color::ColorMode;
pub use config::{AccountEntry, CompilerProfile, Config, NetworkProfile};
pub use error::{Error, ExitCode, Result};
pub use resolve::{ResolvedNetwork, Signer};
pub use secret::PrivateKey;
pub use validate::{Finding, Report, Severity};
