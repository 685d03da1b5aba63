//! Host editor boundary
//!
//! The editor's tab, document and prompt APIs are reached only through the
//! [`TabHost`] and [`Prompter`] traits. Host payloads are converted into
//! [`HostTab`] once, at the edge, and into `TabReference` right after.

mod error;
mod host;
mod resolver;
mod tab;
mod uri;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::HostError;
pub use host::{InputBoxOptions, MessageLevel, Prompter, QuickPickItem, ShowOptions, TabHost};
pub use resolver::TabResolver;
pub use tab::{HostTab, TabInput};
pub use uri::compact_uri;

pub type Result<T> = std::result::Result<T, HostError>;
