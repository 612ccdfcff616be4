use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, Ident, Type, Variant};

const CONTEXT_FIELD: &str = "context";
const INTERNAL_VARIANT: &str = "Internal";

/// A wrapped upstream error inside a variant.
struct SourceField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
}

/// Everything the expansion needs to know about one enum variant.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<SourceField<'a>>,
    has_context: bool,
    /// Fields other than `source`/`context`; conversions cannot fill them in.
    has_extra_fields: bool,
    cfg_attrs: Vec<&'a Attribute>,
}

impl ErrorVariant<'_> {
    /// `From<Source>` and `Source`-side `.context()` need exactly `{ source, context }`.
    const fn is_plain_wrapper(&self) -> bool {
        self.source.is_some() && self.has_context && !self.has_extra_fields
    }
}

pub fn expand(input: DeriveInput) -> TokenStream {
    expand_enum(&input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand_enum(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "shutter_error only supports enums"));
    };

    let variants = data.variants.iter().map(inspect_variant).collect::<syn::Result<Vec<_>>>()?;

    if let Some(orphan) = variants.iter().find(|v| v.source.is_some() && !v.has_context) {
        return Err(syn::Error::new_spanned(
            orphan.ident,
            "shutter_error variants with a source need `context: Option<Cow<'static, str>>`",
        ));
    }

    let name = &input.ident;
    let vis = &input.vis;
    let ext = format_ident!("{}Ext", name);

    let derives = missing_derives(&input.attrs);
    let context_arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfg_attrs = &v.cfg_attrs;
        quote! {
            #(#cfg_attrs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()),
        }
    });
    let source_impls = variants.iter().filter(|v| v.is_plain_wrapper()).map(|v| {
        source_conversions(name, &ext, v)
    });
    let internal_impls = variants
        .iter()
        .find(|v| v.ident == INTERNAL_VARIANT && v.has_context && v.source.is_none())
        .map(|v| internal_conversions(name, v));

    Ok(quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #vis trait #ext<T> {
            /// Attaches a human readable context to the error branch.
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #name> {
            #[inline]
            #[allow(unused_variables)]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut error| {
                    match &mut error {
                        #(#context_arms)*
                        #[allow(unreachable_patterns)]
                        _ => {}
                    }
                    error
                })
            }
        }

        #(#source_impls)*
        #internal_impls

        #[allow(dead_code, clippy::ref_option)]
        fn format_context(
            context: &::std::option::Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    })
}

fn inspect_variant(variant: &Variant) -> syn::Result<ErrorVariant<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "shutter_error requires named fields so source/context can be wired",
        ));
    };

    let has_context = context_field(fields)?.is_some();
    let source = source_field(fields);
    let has_extra_fields = fields.named.iter().any(|field| {
        let Some(ident) = &field.ident else { return true };
        ident != CONTEXT_FIELD && source.as_ref().is_none_or(|s| s.ident != ident)
    });

    Ok(ErrorVariant {
        ident: &variant.ident,
        source,
        has_context,
        has_extra_fields,
        cfg_attrs: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
    })
}

fn context_field(fields: &FieldsNamed) -> syn::Result<Option<&Field>> {
    let Some(field) =
        fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == CONTEXT_FIELD))
    else {
        return Ok(None);
    };

    if is_context_type(&field.ty) {
        Ok(Some(field))
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn source_field(fields: &FieldsNamed) -> Option<SourceField<'_>> {
    fields.named.iter().find_map(|field| {
        let ident = field.ident.as_ref()?;
        let marked =
            field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"));
        (ident == "source" || marked).then_some(SourceField { ident, ty: &field.ty })
    })
}

fn source_conversions(name: &Ident, ext: &Ident, variant: &ErrorVariant<'_>) -> TokenStream {
    let Some(SourceField { ident: field, ty }) = &variant.source else {
        return TokenStream::new();
    };
    let ident = variant.ident;
    let cfg_attrs = &variant.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl ::core::convert::From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self {
                Self::#ident { #field, context: None }
            }
        }

        #(#cfg_attrs)*
        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    }
}

fn internal_conversions(name: &Ident, variant: &ErrorVariant<'_>) -> TokenStream {
    let cfg_attrs = &variant.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl ::core::convert::From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #(#cfg_attrs)*
        #[automatically_derived]
        impl ::core::convert::From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}

/// Emits `#[derive(Debug, thiserror::Error)]` for whichever of the two is not already derived.
fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let mut present = FxHashSet::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                present.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Error") {
        derives.push(quote! { ::thiserror::Error });
    }

    if derives.is_empty() { TokenStream::new() } else { quote! { #[derive(#(#derives),*)] } }
}

/// Accepts `Option<Cow<'static, str>>` with or without `std::`/`core::` path prefixes.
fn is_context_type(ty: &Type) -> bool {
    let rendered: String =
        ty.to_token_stream().to_string().chars().filter(|c| !c.is_whitespace()).collect();
    let rendered = rendered.trim_start_matches("::");
    let option = ["Option<", "std::option::Option<", "core::option::Option<"]
        .iter()
        .find_map(|prefix| rendered.strip_prefix(prefix));

    option.and_then(|inner| inner.strip_suffix('>')).is_some_and(|inner| {
        let inner = inner.trim_start_matches("::");
        inner == "Cow<'static,str>"
            || inner == "std::borrow::Cow<'static,str>"
            || inner == "alloc::borrow::Cow<'static,str>"
    })
}
