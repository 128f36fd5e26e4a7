mod model;

use proc_macro::TokenStream;

/// Creates a new struct `XDraft` for the model, holding the fields a caller
/// supplies when creating one.
/// Fields with #[serde(skip_deserializing)] or #[serde(skip)] are skipped, and all
/// other fields are included verbatim (including attributes).
#[proc_macro_attribute]
pub fn model(_args: TokenStream, input: TokenStream) -> TokenStream {
	model::from_input(input)
}
