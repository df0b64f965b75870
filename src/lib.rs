// Library root
// -----------
// The binary (`main.rs`) is a thin wrapper over `runner::run`; everything
// that touches the network or the environment lives here so it can be
// tested without spawning the process.
//
// Module responsibilities:
// - `config`: reads the account handle and app password from the
//   environment (optionally seeded from `.env`).
// - `api`: blocking XRPC client for `createSession` and `createRecord`.
// - `scream`: builds the post text.
// - `runner`: wires the three together.
// - `error`: the typed error every fallible call returns.
pub mod api;
pub mod config;
pub mod error;
pub mod runner;
pub mod scream;

pub use api::{ApiClient, Session};
pub use config::Credentials;
pub use error::{Error, Result};
pub use runner::run;
