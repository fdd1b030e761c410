#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
#[cfg(feature = "std")]
pub mod client;
mod config;
#[cfg(feature = "std")]
pub mod controller;
pub mod domain;
mod heading;
#[cfg(feature = "std")]
mod logging;
pub mod surface;
#[cfg(feature = "std")]
pub mod transport;
mod ui;
mod view;

#[cfg(feature = "std")]
pub use client::{Action, CommandApi, CommandClient, CommandError};
pub use config::*;
#[cfg(feature = "std")]
pub use controller::{Controller, Notifier, StderrNotifier};
pub use domain::*;
pub use heading::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LogFilter};
pub use surface::{CellNode, MemorySurface, Readout, RenderSurface};
#[cfg(feature = "std")]
pub use transport::{http::HttpTransport, in_memory::InMemoryTransport};
pub use ui::*;
pub use view::ViewSync;
