//! Adapter generators for host types exposed to the introspect runtime.
//!
//! The runtime has no reflection over arbitrary Rust types, so every host type that should answer `dir` and
//! `doc` carries a generated adapter:
//! - `HostType`: derive on a struct or enum. Named-field structs report their record shape (field host names
//!   and source type spellings, in declaration order); everything else reports no record shape.
//! - `host_methods`: attribute on an inherent `impl` block. Records every method that takes a receiver
//!   together with its function-type signature.
//!
//! ## Host names
//!
//! Host-visible names follow the runtime's spelling convention (an identifier is exported when it starts
//! with an uppercase letter). `pub` items are respelled into PascalCase (`pub first_name` → `FirstName`),
//! everything else keeps its Rust spelling and therefore stays unexported. Use `#[host(rename = "...")]`
//! to pick a name explicitly and `#[host(skip)]` to hide an item entirely.
//!
//! # Example
//! ```ignore
//! #[derive(Debug, HostType)]
//! #[host(methods)]
//! struct User {
//!     pub name: String,
//!     secret: String,
//! }
//!
//! #[host_methods]
//! impl User {
//!     pub fn greet(&self, greeting: &str) -> String { format!("{greeting}, {}", self.name) }
//! }
//!
//! // dir(&Value::host(User { .. })) == ["Name", "Greet"]
//! ```

mod render;

use introspect_core::exported_spelling;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Fields, FnArg, Ident, ImplItem, ItemImpl, LitStr, ReturnType, Visibility,
    parse_macro_input, spanned::Spanned,
};

use render::{render_receiver, render_type};

/// Generates the `introspect::HostType` adapter for a struct or enum.
///
/// Container attribute `#[host(methods)]` links in the method table generated by `#[host_methods]` on the
/// type's inherent impl. Field attributes: `#[host(rename = "Name")]`, `#[host(skip)]`.
#[proc_macro_derive(HostType, attributes(host))]
pub fn derive_host_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_host_type(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Records the methods of an inherent impl block as `introspect::HostMethods`.
///
/// Only methods with a receiver are recorded; associated functions are not part of a value's method set.
/// Method attributes: `#[host(rename = "Name")]`, `#[host(skip)]`.
#[proc_macro_attribute]
pub fn host_methods(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    if !args.is_empty() {
        return syn::Error::new(args.span(), "#[host_methods] takes no arguments")
            .into_compile_error()
            .into();
    }
    let item = parse_macro_input!(input as ItemImpl);
    expand_host_methods(item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Parsed `#[host(...)]` options.
#[derive(Default)]
struct HostAttrs {
    rename: Option<String>,
    skip: bool,
    methods: bool,
}

/// Where a `#[host(...)]` attribute was found; each site accepts a different set of options.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Site {
    Container,
    Member,
}

fn parse_host_attrs(attrs: &[Attribute], site: Site) -> syn::Result<HostAttrs> {
    let mut out = HostAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("host")) {
        attr.parse_nested_meta(|meta| {
            if site == Site::Member && meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                out.rename = Some(lit.value());
                Ok(())
            } else if site == Site::Member && meta.path.is_ident("skip") {
                out.skip = true;
                Ok(())
            } else if site == Site::Container && meta.path.is_ident("methods") {
                out.methods = true;
                Ok(())
            } else {
                Err(meta.error(match site {
                    Site::Container => "expected `methods`",
                    Site::Member => "expected `rename = \"...\"` or `skip`",
                }))
            }
        })?;
    }
    Ok(out)
}

/// Pick the host-visible name for a field or method.
fn host_name(ident: &Ident, vis: &Visibility, rename: Option<String>) -> String {
    if let Some(name) = rename {
        return name;
    }
    let ident = ident.to_string();
    match vis {
        Visibility::Public(_) => exported_spelling(&ident),
        _ => ident.strip_prefix("r#").unwrap_or(&ident).to_string(),
    }
}

fn expand_host_type(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "HostType cannot be derived for generic types; write the adapter by hand",
        ));
    }
    let name = &input.ident;
    let name_str = name.to_string();
    let container = parse_host_attrs(&input.attrs, Site::Container)?;

    let fields_body = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => {
                let mut entries = Vec::new();
                for field in &fields.named {
                    let attrs = parse_host_attrs(&field.attrs, Site::Member)?;
                    if attrs.skip {
                        continue;
                    }
                    let Some(ident) = field.ident.as_ref() else {
                        continue;
                    };
                    let field_name = host_name(ident, &field.vis, attrs.rename);
                    let field_type = render_type(&field.ty, &name_str);
                    entries.push(quote! {
                        ::introspect::FieldInfo { name: #field_name, type_name: #field_type }
                    });
                }
                quote! {
                    const FIELDS: &[::introspect::FieldInfo] = &[#(#entries),*];
                    ::std::option::Option::Some(FIELDS)
                }
            }
            // Tuple and unit structs have no named fields, so they are not records.
            Fields::Unnamed(_) | Fields::Unit => quote! { ::std::option::Option::None },
        },
        Data::Enum(_) => quote! { ::std::option::Option::None },
        Data::Union(_) => {
            return Err(syn::Error::new(name.span(), "HostType cannot be derived for unions"));
        }
    };

    let methods_body = if container.methods {
        quote! { <Self as ::introspect::HostMethods>::host_methods() }
    } else {
        quote! { &[] }
    };

    Ok(quote! {
        impl ::introspect::HostType for #name {
            fn type_name(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#name_str)
            }

            fn fields(&self) -> ::std::option::Option<&'static [::introspect::FieldInfo]> {
                #fields_body
            }

            fn methods(&self) -> &'static [::introspect::MethodInfo] {
                #methods_body
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    })
}

fn expand_host_methods(mut item: ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new(
            path.span(),
            "#[host_methods] applies to inherent impl blocks only",
        ));
    }
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new(
            item.generics.span(),
            "#[host_methods] cannot be used on generic impl blocks",
        ));
    }
    let self_ty = item.self_ty.clone();
    let self_name = render_type(&self_ty, "Self");

    let mut entries = Vec::new();
    for impl_item in &mut item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        let attrs = parse_host_attrs(&method.attrs, Site::Member)?;
        // `host` is not a registered attribute on impl items, so it must not survive expansion.
        method.attrs.retain(|a| !a.path().is_ident("host"));
        if attrs.skip {
            continue;
        }
        let sig = &method.sig;
        let mut params = Vec::new();
        let mut has_receiver = false;
        for input in &sig.inputs {
            match input {
                FnArg::Receiver(receiver) => {
                    has_receiver = true;
                    params.push(render_receiver(receiver, &self_name));
                }
                FnArg::Typed(arg) => params.push(render_type(&arg.ty, &self_name)),
            }
        }
        if !has_receiver {
            continue;
        }
        let ret = match &sig.output {
            ReturnType::Default => String::new(),
            ReturnType::Type(_, ty) => format!(" -> {}", render_type(ty, &self_name)),
        };
        let signature = format!("fn({}){}", params.join(", "), ret);
        let method_name = host_name(&sig.ident, &method.vis, attrs.rename);
        entries.push(quote! {
            ::introspect::MethodInfo { name: #method_name, signature: #signature }
        });
    }

    Ok(quote! {
        #item

        impl ::introspect::HostMethods for #self_ty {
            fn host_methods() -> &'static [::introspect::MethodInfo] {
                const METHODS: &[::introspect::MethodInfo] = &[#(#entries),*];
                METHODS
            }
        }
    })
}
