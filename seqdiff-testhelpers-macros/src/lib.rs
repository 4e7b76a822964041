//! The `#[seqdiff_testhelpers::test]` attribute.

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    // attributes, visibility and qualifiers before `fn`
    struct Prelude {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    // generics, arguments and return type
    struct Signature {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        prelude: Prelude,
        _fn: KFn,
        name: Ident,
        signature: Signature,
        body: BraceGroup,
    }
}

impl quote::ToTokens for Prelude {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Signature {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.items.to_tokens(tokens)
    }
}

/// Marks a test and runs `seqdiff_testhelpers::setup()` before its body.
///
/// ```ignore
/// use seqdiff_testhelpers::test;
///
/// #[test]
/// fn aligns() {
///     // subscriber is installed
/// }
/// ```
///
/// Another test attribute can be passed as argument, e.g.
/// `#[seqdiff_testhelpers::test(some_runtime::test)]`.
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut iter = item.to_token_iter();
    let TestFn {
        prelude,
        _fn,
        name,
        signature,
        body,
    } = match iter.parse::<TestFn>() {
        Ok(decl) => decl,
        Err(_) => {
            return quote::quote! {
                ::core::compile_error!("#[seqdiff_testhelpers::test] expects a function");
            }
            .into();
        }
    };
    let body = body.0.stream();

    let test_attr = if attr.is_empty() {
        quote::quote! { #[::core::prelude::rust_2024::test] }
    } else {
        let attr = TokenStream::from(attr);
        quote::quote! { #[#attr] }
    };

    quote::quote! {
        #test_attr
        #prelude fn #name #signature {
            ::seqdiff_testhelpers::setup();

            #body
        }
    }
    .into()
}
