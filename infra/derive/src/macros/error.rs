use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, Ident, Type, Variant};

/// What the expansion needs to know about one variant.
struct VariantInfo<'a> {
    ident: &'a Ident,
    cfg: Vec<Attribute>,
    has_context: bool,
    /// `(field, type)` of the wrapped upstream error, if any.
    source: Option<(&'a Ident, &'a Type)>,
    /// Only `source` + `context`: eligible for a `From<Source>` impl.
    plain_wrapper: bool,
    /// `Internal { message, context }`: eligible for `From<&str>` / `From<String>`.
    internal: bool,
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "rupture_error can only be applied to enums")
            .to_compile_error();
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        match inspect(variant) {
            Ok(info) => variants.push(info),
            Err(err) => return err.to_compile_error(),
        }
    }

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let derives = missing_derives(&input.attrs);
    let ext_trait = ext_trait(name, &ext, &variants);
    let source_impls = variants.iter().filter(|v| v.plain_wrapper).map(|v| source_impl(name, &ext, v));
    let internal_impls = variants.iter().find(|v| v.internal).map(|v| internal_impl(name, v));

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #ext_trait
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code, clippy::ref_option)]
        fn format_context(
            context: &Option<std::borrow::Cow<'static, str>>,
        ) -> std::borrow::Cow<'static, str> {
            match context {
                Some(c) => std::borrow::Cow::Owned(format!(" ({c})")),
                None => std::borrow::Cow::Borrowed(""),
            }
        }
    }
}

fn inspect(variant: &Variant) -> syn::Result<VariantInfo<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "rupture_error requires named fields (add `context: Option<Cow<'static, str>>`)",
        ));
    };

    let context = context_field(fields)?;
    let source = fields
        .named
        .iter()
        .find(|f| is_source(f))
        .and_then(|f| f.ident.as_ref().map(|ident| (ident, &f.ty)));

    if source.is_some() && context.is_none() {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "rupture_error requires `context: Option<Cow<'static, str>>` next to a source error",
        ));
    }

    let names: FxHashSet<String> =
        fields.named.iter().filter_map(|f| f.ident.as_ref().map(ToString::to_string)).collect();

    Ok(VariantInfo {
        ident: &variant.ident,
        cfg: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).cloned().collect(),
        has_context: context.is_some(),
        plain_wrapper: source.is_some() && names.len() == 2,
        internal: variant.ident == "Internal"
            && names.len() == 2
            && names.contains("message")
            && names.contains("context"),
        source,
    })
}

fn context_field(fields: &FieldsNamed) -> syn::Result<Option<&Field>> {
    let Some(field) = fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == "context"))
    else {
        return Ok(None);
    };
    if is_optional_cow_str(&field.ty) {
        Ok(Some(field))
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn is_source(field: &Field) -> bool {
    field.ident.as_ref().is_some_and(|i| i == "source")
        || field.attrs.iter().any(|a| a.path().is_ident("source"))
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let present = derived_names(attrs);
    let mut wanted = Vec::new();
    if !present.contains("Debug") {
        wanted.push(quote!(Debug));
    }
    if !present.contains("Error") {
        wanted.push(quote!(::thiserror::Error));
    }
    if wanted.is_empty() { quote!() } else { quote!(#[derive(#(#wanted),*)]) }
}

fn ext_trait(name: &Ident, ext: &Ident, variants: &[VariantInfo<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfg = &v.cfg;
        quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        /// Attaches a human-readable context to a failed result.
        pub trait #ext<T> {
            /// Replaces the error context with `context`.
            ///
            /// # Errors
            /// Returns the original error, now carrying `context`.
            fn context(
                self,
                context: impl Into<std::borrow::Cow<'static, str>>,
            ) -> std::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for std::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    #[allow(unreachable_patterns)]
                    match &mut err {
                        #(#arms)*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_impl(name: &Ident, ext: &Ident, v: &VariantInfo<'_>) -> TokenStream {
    let Some((field, ty)) = v.source else { return quote!() };
    let ident = v.ident;
    let cfg = &v.cfg;

    quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self {
                Self::#ident { #field, context: None }
            }
        }

        #(#cfg)*
        #[automatically_derived]
        impl<T> #ext<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                context: impl Into<std::borrow::Cow<'static, str>>,
            ) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    }
}

fn internal_impl(name: &Ident, v: &VariantInfo<'_>) -> TokenStream {
    let cfg = &v.cfg;
    quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #(#cfg)*
        #[automatically_derived]
        impl From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}

pub(crate) fn derived_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut names = FxHashSet::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                names.insert(last.ident.to_string());
            }
            Ok(())
        });
    }
    names
}

/// Matches `Option<Cow<'static, str>>` (any path prefix on `Option`/`Cow`).
fn is_optional_cow_str(ty: &Type) -> bool {
    let Some(inner) = single_type_arg(ty, "Option") else { return false };
    let Type::Path(path) = inner else { return false };
    let Some(cow) = path.path.segments.last() else { return false };
    if cow.ident != "Cow" {
        return false;
    }
    let syn::PathArguments::AngleBracketed(args) = &cow.arguments else { return false };
    let mut args = args.args.iter();
    let static_lifetime =
        matches!(args.next(), Some(syn::GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let str_type = matches!(
        args.next(),
        Some(syn::GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|s| s.ident == "str")
    );
    static_lifetime && str_type && args.next().is_none()
}

fn single_type_arg<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else { return None };
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else { return None };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
