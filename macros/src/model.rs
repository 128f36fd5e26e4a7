use darling::{ast, FromDeriveInput, FromField};
use proc_macro2::TokenTree;
use quote::{format_ident, quote, ToTokens};
use syn::Meta;

#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_named), forward_attrs)]
struct ModelInputReceiver {
	ident: syn::Ident,

	generics: syn::Generics,

	data: ast::Data<(), ModelFieldReceiver>,

	attrs: Vec<syn::Attribute>,
}

#[derive(Debug, FromField)]
#[darling(forward_attrs)]
struct ModelFieldReceiver {
	ident: Option<syn::Ident>,

	ty: syn::Type,
	vis: syn::Visibility,

	attrs: Vec<syn::Attribute>,
}

/// Returns `true` for `#[serde(skip_deserializing)]` and `#[serde(skip)]`.
fn is_skipped(attr: &syn::Attribute) -> bool {
	let Meta::List(ref list) = attr.meta else {
		return false;
	};

	if !list.path.is_ident("serde") {
		return false;
	}

	list.tokens.to_token_stream().into_iter().any(|token| {
		matches!(token, TokenTree::Ident(ref ident) if ident == "skip_deserializing" || ident == "skip")
	})
}

pub fn from_input(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = syn::parse_macro_input!(input as syn::DeriveInput);
	let receiver = match ModelInputReceiver::from_derive_input(&input) {
		Ok(x) => x,
		Err(e) => return e.write_errors().into(),
	};

	let ident = &receiver.ident;
	let vis = &input.vis;
	let generics = &receiver.generics;
	let draft_ident = format_ident!("{}Draft", ident);
	let draft_doc = format!("The fields supplied when creating a [`{ident}`].");

	// The model's own docs describe the model, not the draft
	let attrs = receiver
		.attrs
		.iter()
		.filter(|attr| !attr.path().is_ident("doc"))
		.collect::<Vec<_>>();

	let Some(fields) = receiver.data.take_struct() else {
		return syn::Error::new_spanned(ident, "#[model] only supports structs with named fields")
			.to_compile_error()
			.into();
	};

	let draft_fields = fields.iter().filter_map(|field| {
		let ident = field.ident.as_ref()?;
		let ty = &field.ty;
		let attrs = &field.attrs;
		let vis = &field.vis;

		if attrs.iter().any(is_skipped) {
			return None;
		}

		Some(quote! {
			#(#attrs)*
			#vis #ident: #ty,
		})
	});

	quote! {
		#input

		#[doc = #draft_doc]
		#(#attrs)*
		#vis struct #draft_ident #generics {
			#(
				#draft_fields
			)*
		}
	}
	.into()
}
