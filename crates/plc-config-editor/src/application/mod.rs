//! Application layer for the editor.
//!
//! Use cases in this layer depend on abstractions (traits) rather than on
//! reqwest, the terminal or a real page:
//!
//! - **`config_list`**   – The two record lists: add, render, load, save.
//! - **`theme_applier`** – Load and apply the nav bar / theme settings.
//! - **`transport`**     – The [`ConfigTransport`] trait both use cases share,
//!   and the [`ClientError`] every network operation returns.

pub mod config_list;
pub mod theme_applier;
pub mod transport;

pub use config_list::{ConfigListManager, Notice, Renderer};
pub use theme_applier::{Presentation, ThemeApplier};
pub use transport::{ClientError, ConfigTransport};
