use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, parse_macro_input, spanned::Spanned};

/// Variant attribute: #[dice("<notation>")]
#[proc_macro_derive(DicePreset, attributes(dice))]
pub fn derive_dice_preset(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(
            input.ident.span(),
            "DicePreset can only be derived for enums",
        )
        .to_compile_error()
        .into();
    };

    let mut entries = Vec::new();
    let mut arms = Vec::new();

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(variant.span(), "DicePreset only supports fieldless variants")
                .to_compile_error()
                .into();
        }

        let mut notation: Option<LitStr> = None;
        for Attribute { meta, .. } in &variant.attrs {
            if !meta.path().is_ident("dice") {
                continue;
            }
            match meta {
                syn::Meta::List(list) => match syn::parse2::<LitStr>(list.tokens.clone()) {
                    Ok(lit) if lit.value().trim().is_empty() => {
                        return syn::Error::new(lit.span(), "dice notation is empty")
                            .to_compile_error()
                            .into();
                    }
                    Ok(lit) => notation = Some(lit),
                    Err(e) => {
                        return syn::Error::new(
                            list.span(),
                            format!("expected a notation string like \"3d6\": {e}"),
                        )
                        .to_compile_error()
                        .into();
                    }
                },
                _ => {
                    return syn::Error::new(meta.span(), "use #[dice(\"<notation>\")]")
                        .to_compile_error()
                        .into();
                }
            }
        }

        let Some(notation) = notation else {
            return syn::Error::new(variant.span(), "missing #[dice(...)] on variant")
                .to_compile_error()
                .into();
        };

        let ident = &variant.ident;
        entries.push(quote! { (Self::#ident, #notation) });
        arms.push(quote! { Self::#ident => #notation });
    }

    let expanded = quote! {
        impl ::dicedist::DicePreset for #enum_ident {
            const ENTRIES: &'static [(Self, &'static str)] = &[
                #(#entries),*
            ];

            fn notation(&self) -> &'static str {
                match *self {
                    #(#arms),*
                }
            }
        }
    };

    expanded.into()
}
