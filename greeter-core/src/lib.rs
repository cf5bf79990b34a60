//! Greeting cards and a click counter, rendered through the opcode DOM protocol.
//!
//! Components render to flat [`Opcode`] lists with the `html!` macro. A
//! [`Host`] turns those into a document tree on a named surface and routes
//! click events back to the component that bound them.
//!
//! ```
//! use greeter_core::{App, Host};
//!
//! let mut host = Host::page("root");
//! host.mount("root", App::default()).unwrap();
//! host.click("root", "on_increment").unwrap();
//! assert!(host.html("root").unwrap().contains("<b>1</b>"));
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod host;
mod opcode;

pub use components::{App, Component, Counter, CounterEvent, CounterState};
pub use config::GreeterConfig;
pub use error::{ConfigError, HostError};
pub use host::{ComponentRegistry, Host, InstanceId, Node};
pub use opcode::Opcode;

/// Mounts the page described by `config` into a fresh host.
pub fn mount_page(config: &GreeterConfig) -> Result<Host, HostError> {
    let mut host = Host::page(&config.surface_id);
    host.mount(&config.surface_id, App::from_config(config))?;
    Ok(host)
}
