use crate::macros::error::derived_names;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Fields, ItemStruct};

pub fn expand(input: ItemStruct) -> TokenStream {
    let Fields::Named(fields) = &input.fields else {
        return syn::Error::new_spanned(
            &input.ident,
            "component requires a struct with named fields, including `family: Family`",
        )
        .to_compile_error();
    };

    if !fields.named.iter().any(|f| f.ident.as_ref().is_some_and(|i| i == "family")) {
        return syn::Error::new_spanned(
            &input.ident,
            "component requires a `family: Family` field to report its bundle identity",
        )
        .to_compile_error();
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let debug = if derived_names(&input.attrs).contains("Debug") {
        quote!()
    } else {
        quote!(#[derive(Debug)])
    };

    quote! {
        #debug
        #input

        #[automatically_derived]
        impl #impl_generics ::rupture_kernel::component::FamilyBound for #ident #ty_generics #where_clause {
            #[inline]
            fn family(&self) -> ::rupture_kernel::domain::Family {
                self.family
            }
        }
    }
}
