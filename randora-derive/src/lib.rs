//! Derive macros for Randora fixture generation.
//!
//! This crate provides `#[derive(Generate)]`, which implements
//! `randora::Generate` for structs and enums by generating every field
//! with its own `Generate` implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam};

/// Derive macro for `randora::Generate`.
///
/// Structs get every field generated in declaration order. Enums pick a
/// variant uniformly and then generate that variant's fields, so a
/// fieldless enum yields each of its values with equal probability.
///
/// # Example
///
/// ```rust,ignore
/// use randora::*;
///
/// #[derive(Generate, Debug)]
/// struct User {
///     name: String,
///     age: u8,
///     tags: HashSet<String>,
/// }
///
/// let mut rng = SplitMix::from_u64(7);
/// let user = User::generate(&mut rng);
/// ```
#[proc_macro_derive(Generate)]
pub fn derive_generate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_impl(mut input: DeriveInput) -> Result<TokenStream2, syn::Error> {
    let body = match &input.data {
        Data::Struct(data) => construct(quote! { Self }, &data.fields),
        Data::Enum(data) => generate_enum_body(&input, data)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "Generate derive macro does not support unions",
            ));
        }
    };

    // Every type parameter must itself be generatable.
    for param in input.generics.params.iter_mut() {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::randora::Generate));
        }
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::randora::Generate for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn generate<__R: ::randora::rand::Rng + ?Sized>(rng: &mut __R) -> Self {
                #body
            }
        }
    })
}

fn generate_enum_body(
    input: &DeriveInput,
    data: &syn::DataEnum,
) -> Result<TokenStream2, syn::Error> {
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "Generate cannot be derived for an enum with no variants",
        ));
    }

    let count = data.variants.len();
    let arms = data.variants.iter().enumerate().map(|(index, variant)| {
        let variant_name = &variant.ident;
        let value = construct(quote! { Self::#variant_name }, &variant.fields);
        if index + 1 == count {
            quote! { _ => #value }
        } else {
            quote! { #index => #value }
        }
    });

    Ok(quote! {
        match ::randora::rand::Rng::gen_range(rng, 0..#count) {
            #(#arms,)*
        }
    })
}

/// Build `path { .. }`, `path(..)` or `path` with every field generated.
fn construct(path: TokenStream2, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let assignments = fields.named.iter().map(|field| {
                let name = &field.ident;
                let ty = &field.ty;
                quote! { #name: <#ty as ::randora::Generate>::generate(rng) }
            });
            quote! { #path { #(#assignments),* } }
        }
        Fields::Unnamed(fields) => {
            let bindings: Vec<_> = (0..fields.unnamed.len())
                .map(|i| format_ident!("field_{}", i))
                .collect();
            let lets = fields.unnamed.iter().zip(&bindings).map(|(field, var)| {
                let ty = &field.ty;
                quote! { let #var = <#ty as ::randora::Generate>::generate(rng); }
            });
            quote! {{
                #(#lets)*
                #path(#(#bindings),*)
            }}
        }
        Fields::Unit => path,
    }
}
