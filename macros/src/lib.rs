use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam, Generics};

/// Derives `From<T> for outcomes_core::Failure`.
///
/// A single-field tuple struct uses its field's `Display` as the failure
/// message; any other type uses its own `Display`.
///
/// ```ignore
/// #[derive(IntoFailure)]
/// struct OutOfStock(String);
///
/// let outcome: RichOutcome<u32> = Failure::from(OutOfStock("socks".into())).into();
/// ```
#[proc_macro_derive(IntoFailure)]
pub fn into_failure(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Used in the quasi-quotation below as `#name`.
    let name = input.ident.clone();

    let message = match failure_message(&input) {
        Ok(message) => message,
        Err(err) => return err.to_compile_error().into(),
    };

    // Add a bound `T: Display` to every type parameter T.
    let generics = add_trait_bounds(input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        // The generated impl.
        impl #impl_generics ::std::convert::From<#name #ty_generics> for ::outcomes_core::Failure #where_clause {
            fn from(value: #name #ty_generics) -> Self {
                ::outcomes_core::Failure::new(#message)
            }
        }
    };

    // Hand the output tokens back to the compiler.
    proc_macro::TokenStream::from(expanded)
}

// Add a bound `T: Display` to every type parameter T.
fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(ref mut type_param) = *param {
            type_param
                .bounds
                .push(parse_quote!(::std::fmt::Display));
        }
    }
    generics
}

/// Builds the expression producing the failure message out of `value`.
fn failure_message(input: &DeriveInput) -> syn::Result<TokenStream> {
    match input.data {
        Data::Struct(ref data) => match data.fields {
            Fields::Unnamed(ref fields) => {
                // Only single field newtypes delegate to their field:
                //
                // value.0.to_string()
                if fields.unnamed.len() != 1 {
                    return Err(syn::Error::new(
                        fields.span(),
                        "IntoFailure supports tuple structs with a single field only",
                    ));
                }

                let field = &fields.unnamed[0];
                Ok(quote_spanned!(field.span() =>
                    ::std::string::ToString::to_string(&value.0)
                ))
            }
            Fields::Named(_) | Fields::Unit => {
                Ok(quote!(::std::string::ToString::to_string(&value)))
            }
        },
        Data::Enum(_) => Ok(quote!(::std::string::ToString::to_string(&value))),
        Data::Union(ref data) => Err(syn::Error::new(
            data.union_token.span(),
            "IntoFailure cannot be derived for unions",
        )),
    }
}
