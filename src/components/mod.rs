//! GOV.UK form components
//!
//! Each component is a typed description of one control bound to a model
//! value. Rendering reads validation state from the [`RenderContext`] and
//! produces escaped [`Markup`]; missing required inputs are reported as
//! [`FormError`] instead of half-rendered HTML.

mod autocomplete;
mod checkbox_group;
mod date_input;
mod field;
mod input;
mod radio_group;
mod select;
mod textarea;

pub use autocomplete::{Autocomplete, AutocompleteAttrs};
pub use checkbox_group::{CheckboxGroup, CheckboxGroupAttrs, CheckboxItems};
pub use date_input::{DateInput, DateInputAttrs};
pub use field::FieldAttrs;
pub use input::{Input, InputAttrs};
pub use radio_group::{RadioGroup, RadioGroupAttrs};
pub use select::{Select, SelectAttrs};
pub use textarea::{CharacterCount, CharacterCountAttrs, Textarea, TextareaAttrs};

use crate::config::Config;
use crate::error::FormError;
use crate::html::Markup;
use crate::model::ModelState;

/// Everything a component reads besides its own attributes
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub model_state: &'a ModelState,
    pub config: &'a Config,
}

impl<'a> RenderContext<'a> {
    pub fn new(model_state: &'a ModelState, config: &'a Config) -> Self {
        Self {
            model_state,
            config,
        }
    }
}

/// A renderable form control
pub trait Component {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup, FormError>;
}

impl<T: Component + ?Sized> Component for Box<T> {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup, FormError> {
        (**self).render(ctx)
    }
}
