//! Derive support for `cx_reflect`.
//!
//! See [`Reflect`] for the full attribute reference.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, LitStr, parse_macro_input, parse_quote};

static PROPERTY_ATTRIBUTE_NAME: &str = "property";

/// # Property List Derivation
///
/// `#[derive(Reflect)]` implements `Reflect` and `Field` for a struct with
/// named fields, building its property list from the fields in declaration
/// order. Every field type must itself implement `Field`.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
/// ```
///
/// ## Field Attributes
///
/// ### `#[property(rename = "...")]`
///
/// Overrides the document key for one field. The default key is the field's
/// own name.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// struct Marker {
///     #[property(rename = "isRoot")]
///     is_root: bool,
/// }
/// ```
///
/// ### `#[property(skip)]`
///
/// Leaves a field out of the property list entirely. Skipped fields are never
/// written to a document and keep their value across deserialization.
///
/// ## Rejected Declarations
///
/// Two properties resolving to the same document key are a compile error, as
/// is deriving on enums, unions, or tuple structs.
#[proc_macro_derive(Reflect, attributes(property))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

// -----------------------------------------------------------------------------
// Expansion

struct FieldAttributes {
    rename: Option<String>,
    skip: bool,
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "`#[derive(Reflect)]` only supports structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(Error::new_spanned(
            &input.ident,
            "`#[derive(Reflect)]` requires named fields",
        ));
    };

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    let generic = !input.generics.params.is_empty();

    let mut names: Vec<String> = Vec::new();
    let mut properties = Vec::new();

    for field in &fields.named {
        let attributes = parse_field_attributes(field)?;
        if attributes.skip {
            continue;
        }

        // Named fields always carry an ident.
        let field_ident = field.ident.as_ref().unwrap();
        let name = attributes
            .rename
            .unwrap_or_else(|| field_ident.to_string());
        if names.contains(&name) {
            return Err(Error::new_spanned(
                field_ident,
                format!("duplicate property name `{name}`"),
            ));
        }
        names.push(name.clone());

        // Concrete field types surface any missing `Field` impl at the
        // `Property::new` call; generic ones need the bound spelled out.
        if generic {
            let field_ty = &field.ty;
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#field_ty: cx_reflect::Field + 'static));
        }

        let name_lit = LitStr::new(&name, field_ident.span());
        properties.push(quote! {
            cx_reflect::Property::new(
                #name_lit,
                |object: &Self| &object.#field_ident,
                |object: &mut Self| &mut object.#field_ident,
            )
        });
    }

    if generic {
        let ty_generics = input.generics.split_for_impl().1;
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#ident #ty_generics: 'static));
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let list = if properties.is_empty() {
        quote!(cx_reflect::PropertyList::new(::core::iter::empty()))
    } else {
        quote!(cx_reflect::PropertyList::new([ #(#properties),* ]))
    };

    Ok(quote! {
        impl #impl_generics cx_reflect::Reflect for #ident #ty_generics #where_clause {
            fn property_list<CXF: cx_reflect::Format>() -> cx_reflect::PropertyList<Self, CXF> {
                #list
            }
        }

        impl #impl_generics cx_reflect::Field for #ident #ty_generics #where_clause {
            const KIND: cx_reflect::FieldKind = cx_reflect::FieldKind::Reflectable;

            fn emit<CXF: cx_reflect::Format>(
                &self,
            ) -> ::core::result::Result<::core::option::Option<CXF>, cx_reflect::FormatError> {
                cx_reflect::serialize_object(self).map(::core::option::Option::Some)
            }

            fn absorb<CXF: cx_reflect::Format>(
                &mut self,
                fragment: &CXF,
            ) -> ::core::result::Result<(), cx_reflect::FieldError> {
                // Nested objects merge best-effort: per-field failures inside
                // the fragment stay inside the fragment's own report.
                let _ = cx_reflect::deserialize_into(fragment, self);
                ::core::result::Result::Ok(())
            }
        }
    })
}

// -----------------------------------------------------------------------------
// Attribute parsing

fn parse_field_attributes(field: &syn::Field) -> syn::Result<FieldAttributes> {
    let mut attributes = FieldAttributes {
        rename: None,
        skip: false,
    };

    for attr in &field.attrs {
        if !attr.path().is_ident(PROPERTY_ATTRIBUTE_NAME) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("property name must not be empty"));
                }
                attributes.rename = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                attributes.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"` or `skip`"))
            }
        })?;
    }

    Ok(attributes)
}
