use quote::ToTokens;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, Result, Token};

// 提取非 derive 属性与已有 derive 列表
pub(crate) fn split_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.iter() {
        if attr.path().is_ident("derive") {
            if let Ok(list) =
                attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
            {
                existing.extend(list);
            }
        } else {
            retained.push(attr.clone());
        }
    }
    (retained, existing)
}

// 合并默认与已有 derive（去重，required 在前）
fn merge_derives(existing: Vec<syn::Path>, required: Vec<syn::Path>) -> Attribute {
    let mut seen = std::collections::HashSet::<String>::new();
    let final_list: Vec<syn::Path> = required
        .into_iter()
        .chain(existing)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();
    syn::parse_quote!(#[derive(#(#final_list),*)])
}

// 归一化 derive 的 key，避免 Serialize/serde::Serialize 重复
fn derive_key(p: &syn::Path) -> String {
    match p.segments.last() {
        Some(last) => {
            let ident = last.ident.to_string();
            match ident.as_str() {
                "Serialize" | "Deserialize" => format!("serde::{ident}"),
                _ => ident,
            }
        }
        None => p.to_token_stream().to_string(),
    }
}

/// 在 attrs 上合并派生，derive 属性始终位于最前，保证 `#[serde(..)]` 等辅助属性可见。
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let (retained, existing) = split_derives(attrs);
    let merged = merge_derives(existing, required);
    *attrs = std::iter::once(merged).chain(retained).collect();
}

/// 若尚无 `#[serde(...)]` 属性则追加给定属性
pub(crate) fn ensure_serde_attr(attrs: &mut Vec<Attribute>, attr: Attribute) {
    if !attrs.iter().any(|a| a.path().is_ident("serde")) {
        attrs.push(attr);
    }
}

/// 宏参数：仅支持 `key = true|false` 形式的布尔开关
pub(crate) struct BoolFlags {
    entries: Vec<(Ident, bool)>,
}

impl BoolFlags {
    /// 校验键名合法且不重复
    pub(crate) fn check(&self, allowed: &[&str]) -> Result<()> {
        for (i, (key, _)) in self.entries.iter().enumerate() {
            if !allowed.iter().any(|a| key == a) {
                let expected = allowed
                    .iter()
                    .map(|a| format!("'{a}'"))
                    .collect::<Vec<_>>()
                    .join(" | ");
                return Err(syn::Error::new(
                    key.span(),
                    format!("unknown key; expected {expected}"),
                ));
            }
            if self.entries[..i].iter().any(|(k, _)| k == key) {
                return Err(syn::Error::new(
                    key.span(),
                    format!("duplicate key '{key}' in attribute"),
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn get(&self, key: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| *value)
    }
}

impl Parse for BoolFlags {
    fn parse(input: ParseStream) -> Result<Self> {
        let pairs = Punctuated::<BoolFlag, Token![,]>::parse_terminated(input)?;
        Ok(Self {
            entries: pairs.into_iter().map(|f| (f.key, f.value)).collect(),
        })
    }
}

struct BoolFlag {
    key: Ident,
    value: bool,
}

impl Parse for BoolFlag {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        let expr: syn::Expr = input.parse()?;
        match expr {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Bool(b),
                ..
            }) => Ok(Self {
                key,
                value: b.value(),
            }),
            other => Err(syn::Error::new(
                other.span(),
                format!("expected boolean literal for '{key}'"),
            )),
        }
    }
}
