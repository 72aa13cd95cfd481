use itertools::Itertools as _;
use lazy_format::lazy_format;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::{quote, quote_spanned};
use syn::{
    Attribute, DataStruct, Field, Generics, Ident, LitStr, Member, Type, ext::IdentExt as _,
    spanned::Spanned as _,
};

/// A field with a `#[flags("...")]` attribute
struct AnnotatedField<'a> {
    member: Member,
    name: String,
    ty: &'a Type,
    annotation: LitStr,
}

/// Find the `#[flags("...")]` attribute among a field's attributes, if any.
/// More than one is an error.
fn find_annotation(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("flags"))
        .at_most_one()
        .map_err(|mut attrs| {
            let span = attrs.nth(1).map(|attr| attr.span());
            syn::Error::new(
                span.unwrap_or_else(proc_macro2::Span::call_site),
                "a field can have at most one #[flags] attribute",
            )
        })?
        .map(|attr| {
            attr.parse_args::<LitStr>().map_err(|err| {
                syn::Error::new(
                    err.span(),
                    lazy_format!(
                        r#"expected an option annotation, like #[flags("-n, --num=NUMBER  help")]: {err}"#
                    ),
                )
            })
        })
        .transpose()
}

impl<'a> AnnotatedField<'a> {
    fn from_field(index: usize, field: &'a Field) -> syn::Result<Option<Self>> {
        let Some(annotation) = find_annotation(&field.attrs)? else {
            return Ok(None);
        };

        let (member, name) = match field.ident {
            Some(ref ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
            None => (Member::Unnamed(index.into()), index.to_string()),
        };

        Ok(Some(Self {
            member,
            name,
            ty: &field.ty,
            annotation,
        }))
    }
}

pub fn derive_flags_struct(
    name: &Ident,
    data: &DataStruct,
    generics: &Generics,
) -> syn::Result<TokenStream2> {
    let fields: Vec<AnnotatedField<'_>> = data
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| AnnotatedField::from_field(index, field))
        .filter_map(Result::transpose)
        .try_collect()?;

    let decls = fields.iter().map(|field| {
        let AnnotatedField {
            ref name,
            ty,
            ref annotation,
            ..
        } = *field;

        let kind = quote_spanned! {ty.span()=>
            <#ty as ::tagflags::FlagValue>::KIND
        };

        quote! {
            ::tagflags::FieldDecl::new(#name, #annotation, #kind)
        }
    });

    let arms = fields.iter().enumerate().map(|(index, field)| {
        let index = Literal::usize_unsuffixed(index);
        let member = &field.member;

        quote! {
            #index => ::tagflags::Slot::new(&mut self.#member),
        }
    });

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::tagflags::Flags for #name #ty_generics #where_clause {
            const FIELDS: &'static [::tagflags::FieldDecl] = &[
                #(#decls,)*
            ];

            fn slot_mut(&mut self, field: usize) -> ::tagflags::Slot<'_> {
                match field {
                    #(#arms)*
                    _ => ::core::panic!(
                        "{} has no annotated field at index {}",
                        ::core::stringify!(#name),
                        field,
                    ),
                }
            }
        }
    })
}
