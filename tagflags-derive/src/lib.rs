mod flags;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{Data, DeriveInput, spanned::Spanned as _};

fn derive_flags_result(item: TokenStream2) -> syn::Result<TokenStream2> {
    let input: DeriveInput = syn::parse2(item)?;

    match input.data {
        Data::Struct(ref data) => flags::derive_flags_struct(&input.ident, data, &input.generics),
        Data::Enum(ref data) => Err(syn::Error::new(
            data.enum_token.span(),
            "can't derive Flags on an enum; options are bound to struct fields",
        )),
        Data::Union(ref data) => Err(syn::Error::new(
            data.union_token.span(),
            "can't derive Flags on a union",
        )),
    }
}

/**
Derive `tagflags::Flags` for a struct. Each field carrying a
`#[flags("...")]` attribute becomes an option; the string is the option's
annotation, such as `"-n, --num=NUMBER  specify number"`. Fields without the
attribute are ignored.

Annotated fields must be `bool`, an integer type, or `String`.
 */
#[proc_macro_derive(Flags, attributes(flags))]
pub fn derive_flags(item: TokenStream) -> TokenStream {
    match derive_flags_result(item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
