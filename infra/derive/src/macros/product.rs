use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{DeriveInput, LitStr, Path, Token, Type};

/// A single `#[product(...)]` argument.
enum ProductArg {
    Base(Box<Type>),
    Crate(Path),
}

impl Parse for ProductArg {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        if input.peek(Token![crate]) && input.peek2(Token![=]) {
            input.parse::<Token![crate]>()?;
            input.parse::<Token![=]>()?;
            let lit: LitStr = input.parse()?;
            return lit.parse::<Path>().map(ProductArg::Crate);
        }
        input.parse::<Type>().map(|ty| ProductArg::Base(Box::new(ty)))
    }
}

struct ProductArgs {
    bases: Vec<Type>,
    krate: Option<Path>,
}

/// Expands `#[derive(Product)]` into one `Product<Base>` impl per listed base.
pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let ProductArgs { bases, krate } = match parse_product_args(&input) {
        Ok(args) => args,
        Err(err) => return err,
    };
    let krate = krate.map_or_else(|| quote! { ::fabrik_factory }, |path| quote! { #path });

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let impls = bases.iter().map(|base| {
        quote! {
            #[automatically_derived]
            impl #impl_generics #krate::Product<#base> for #ident #ty_generics #where_clause {
                #[inline]
                fn into_unique(self) -> ::std::boxed::Box<#base> {
                    ::std::boxed::Box::new(self)
                }

                #[inline]
                fn into_shared(self) -> ::std::sync::Arc<#base> {
                    ::std::sync::Arc::new(self)
                }
            }
        }
    });

    quote! { #(#impls)* }
}

fn parse_product_args(input: &DeriveInput) -> Result<ProductArgs, TokenStream> {
    let mut bases = Vec::new();
    let mut seen = FxHashSet::default();
    let mut krate = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("product") {
            continue;
        }

        let args = attr
            .parse_args_with(Punctuated::<ProductArg, Token![,]>::parse_terminated)
            .map_err(|err| err.to_compile_error())?;

        for arg in args {
            match arg {
                ProductArg::Base(ty) => {
                    if !seen.insert(quote! { #ty }.to_string()) {
                        return Err(syn::Error::new_spanned(ty, "Duplicate product base")
                            .to_compile_error());
                    }
                    bases.push(*ty);
                },
                ProductArg::Crate(path) => {
                    if krate.is_some() {
                        return Err(syn::Error::new_spanned(path, "Duplicate `crate` argument")
                            .to_compile_error());
                    }
                    krate = Some(path);
                },
            }
        }
    }

    if bases.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Product derive requires at least one base, e.g. #[product(dyn Trait)]",
        )
        .to_compile_error());
    }

    Ok(ProductArgs { bases, krate })
}
