//! govform: GOV.UK Design System form fields rendered on the server, plus
//! the client core of the autocomplete field.
//!
//! Components render model-bound fields to escaped [`html::Markup`]. The
//! [`autocomplete`] module holds the request-token fetcher, the selection
//! binder and the per-field state machine that both the browser script and
//! the terminal [`playground`] drive.

pub mod autocomplete;
pub mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod html;
pub mod model;
pub mod playground;
