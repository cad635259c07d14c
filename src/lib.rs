pub mod config;
pub mod error;
pub mod order;
pub mod style;
pub mod types;

pub use config::{ColorChoice, DisplayConfig, DisplayConfigBuilder};
pub use error::{Error, Result};
pub use order::{ResourceOrder, SortMode};
pub use style::{AnsiStyler, PlainStyler, Styler, Tone};
pub use types::{
    port::{FromPort, ToPort},
    protocol::ProtocolCode,
    resource::{ResourceFormat, ResourceRef, ResourceRefBuilder},
};
