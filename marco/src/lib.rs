use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

// scalars handed out by value, everything else by reference
const COPY_SCALARS: [&str; 16] = [
    "bool", "char", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64",
    "i128", "isize", "f32", "f64",
];

/// Accessors for every named field: `get_<field>()` returns a copy of a
/// scalar field, `get_<field>_ref()` borrows any other field.
#[proc_macro_derive(Getter)]
pub fn derive_getter(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return error("Getter needs named fields"),
        },
        _ => return error("Getter can only be derived for structs"),
    };

    let getters = fields.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let ty = &field.ty;
        if is_copy_scalar(ty) {
            let getter = format_ident!("get_{}", ident);
            Some(quote! {
                pub fn #getter(&self) -> #ty {
                    self.#ident
                }
            })
        } else {
            let getter = format_ident!("get_{}_ref", ident);
            Some(quote! {
                pub fn #getter(&self) -> &#ty {
                    &self.#ident
                }
            })
        }
    });

    TokenStream::from(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#getters)*
        }
    })
}

fn is_copy_scalar(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => match path.path.get_ident() {
            Some(ident) => COPY_SCALARS.contains(&ident.to_string().as_str()),
            None => false,
        },
        _ => false,
    }
}

fn error(message: &str) -> TokenStream {
    TokenStream::from(syn::Error::new(Span::call_site(), message).to_compile_error())
}
