use crate::derive_utils::{BoolFlags, apply_derives};
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, parse_macro_input};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Clone, (Debug 可控), Serialize, Deserialize, PartialEq, Eq, Hash
/// - `default = true` 时追加 Default（默认关闭：多数值对象没有合法的零值）
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let flags = parse_macro_input!(attr as BoolFlags);
    if let Err(err) = flags.check(&["debug", "default"]) {
        return err.to_compile_error().into();
    }

    let mut input = parse_macro_input!(item as Item);

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
    ];
    if flags.get("debug").unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }
    if flags.get("default").unwrap_or(false) {
        required.push(syn::parse_quote!(Default));
    }

    match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);
            TokenStream::from(quote! { #st })
        }
        Item::Enum(en) => {
            apply_derives(&mut en.attrs, required);
            TokenStream::from(quote! { #en })
        }
        other => syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
            .to_compile_error()
            .into(),
    }
}
