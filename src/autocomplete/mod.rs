//! Client-side autocomplete core
//!
//! A keystroke goes through the [`SuggestionFetcher`] (token-based
//! last-request-wins), the lookup runs on the [`LookupWorker`], the response is
//! rendered through a [`FieldView`], and a confirmation is bound into the
//! hidden submission field by the [`SelectionBinder`].
//! [`AutocompleteField`] ties these together for one input.

mod binder;
mod binding;
mod fetcher;
mod field;
mod lookup;
mod script;
mod suggestion;
mod view;
mod worker;

pub use binder::SelectionBinder;
pub use binding::FieldBinding;
pub use fetcher::{FetchDecision, RequestToken, ResponseOutcome, SuggestionFetcher};
pub use field::{AutocompleteField, FieldPhase, Resolution};
pub use lookup::{HttpLookup, Lookup, LookupError, StaticLookup};
pub use script::{AUTOCOMPLETE_SCRIPT, asset_tag, init_script};
pub use suggestion::{Suggestion, highlight, match_ranges, parse_suggestions};
pub use view::{FieldView, Menu, MenuItem};
pub use worker::{LookupRequest, LookupResponse, LookupWorker};
