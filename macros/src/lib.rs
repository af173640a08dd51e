use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Expand a struct with three component fields into a keyed channel record.
///
/// The channel key of each field is the upper cased first letter of its name,
/// so `red` maps to `Keys::R` and `lightness` to `Keys::L`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each channel of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    if field_names.len() != 3 {
        return quote! {
            compile_error!("Model fields must be named.")
        }
        .into();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    let keys = field_names
        .iter()
        .map(|name| {
            let key = name
                .to_string()
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase().to_string())
                .unwrap_or_default();
            syn::Ident::new(key.as_str(), Span::call_site())
        })
        .collect::<Vec<_>>();
    let key1 = &keys[0];
    let key2 = &keys[1];
    let key3 = &keys[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    if let syn::Fields::Named(ref mut named) = input.fields {
        match syn::Field::parse_named.parse2(syn::parse_quote! {
            /// The alpha channel of the color, if one was specified.
            pub alpha: Option<crate::color::Component>
        }) {
            Ok(field) => named.named.push(field),
            Err(err) => return err.to_compile_error().into(),
        }
    }

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new record without an alpha channel.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    alpha: None,
                }
            }

            /// Return the record with its alpha channel set.
            pub fn with_alpha(self, alpha: crate::color::Component) -> Self {
                Self {
                    alpha: Some(alpha),
                    ..self
                }
            }

            /// Convert this record into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl crate::models::Model for #struct_name {
            fn to_channels(&self) -> crate::channel::ChannelMap {
                let channels = crate::channel::ChannelMap::new()
                    .with(crate::channel::Keys::#key1, self.#field1)
                    .with(crate::channel::Keys::#key2, self.#field2)
                    .with(crate::channel::Keys::#key3, self.#field3);
                match self.alpha {
                    Some(alpha) => channels.with(crate::channel::Keys::A, alpha),
                    None => channels,
                }
            }
        }

        impl<'a> From<#struct_name> for crate::color::ColorInput<'a> {
            fn from(value: #struct_name) -> Self {
                crate::color::ColorInput::Channels(crate::models::Model::to_channels(&value))
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
