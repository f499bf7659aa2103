mod expr;
mod model_state;
mod option;

pub use expr::{ModelExpr, ModelValue, Record, Scalar};
pub use model_state::{ModelState, ModelStateEntry, ValidationMessage, error_span};
pub use option::{GdsOption, HiddenField, ItemProjection, is_selected, option_id, project};
