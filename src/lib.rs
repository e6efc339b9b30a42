pub mod config;
pub mod error;
pub mod glossary;
pub mod http;

pub use config::Config;
pub use error::{GlossmapError, Result};
pub use glossary::{AnchorPolicy, Edge, GlossaryStore, GraphResponse, Term};
