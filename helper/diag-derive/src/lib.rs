use quote::quote;
use syn::{Attribute, DeriveInput, parse_macro_input};

fn is_primary_label(attr: &Attribute) -> bool {
    attr.meta
        .require_list()
        .is_ok_and(|list| list.path.is_ident("label") && list.tokens.to_string() == "primary")
}

fn find_field_satisfy_attr(
    input: &DeriveInput,
    attr_f: impl Fn(&Attribute) -> bool,
) -> Option<syn::Ident> {
    let syn::Data::Struct(data_struct) = &input.data else {
        return None;
    };
    let syn::Fields::Named(fields_named) = &data_struct.fields else {
        return None;
    };
    fields_named
        .named
        .iter()
        .find(|field| field.attrs.iter().any(&attr_f))
        .and_then(|field| field.ident.clone())
}

enum DiagnosticExt {
    Struct {
        name: syn::Ident,
        primary_field_name: syn::Ident,
        related_field_name: Option<syn::Ident>,
    },
    Enum {
        name: syn::Ident,
        variant_names: Vec<syn::Ident>,
    },
}

impl DiagnosticExt {
    fn from_derive_input(input: DeriveInput) -> syn::Result<Self> {
        match &input.data {
            syn::Data::Struct(_) => {
                let Some(primary_field_name) = find_field_satisfy_attr(&input, is_primary_label)
                else {
                    return Err(syn::Error::new_spanned(
                        &input.ident,
                        "`#[label(primary)]` not found.",
                    ));
                };
                let related_field_name =
                    find_field_satisfy_attr(&input, |attr| attr.path().is_ident("related"));
                Ok(Self::Struct {
                    name: input.ident,
                    primary_field_name,
                    related_field_name,
                })
            }
            syn::Data::Enum(syn::DataEnum { variants, .. }) => {
                let variant_names = variants
                    .iter()
                    .map(|variant| variant.ident.clone())
                    .collect();
                Ok(Self::Enum {
                    name: input.ident,
                    variant_names,
                })
            }
            syn::Data::Union(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "`DiagnosticExt` cannot be derived for unions.",
            )),
        }
    }

    fn r#gen(self) -> proc_macro2::TokenStream {
        match self {
            Self::Struct {
                name,
                primary_field_name,
                related_field_name,
            } => {
                let steal_related = match related_field_name {
                    Some(related_name) => quote! {
                        let old = std::mem::take(&mut self.#related_name);
                        Some(
                            old.into_iter()
                                .map(|x| Box::new(x) as Box<dyn diag_ext::DiagnosticExt + Send + Sync + 'static>)
                                .collect(),
                        )
                    },
                    None => quote! { None },
                };
                quote! {
                    impl diag_ext::DiagnosticExt for #name {
                        fn module_id(&self) -> monolit_span::ModuleID {
                            self.#primary_field_name.module
                        }

                        fn steal_related(&mut self) -> Option<Vec<Box<dyn diag_ext::DiagnosticExt + Send + Sync + 'static>>> {
                            #steal_related
                        }
                    }
                }
            }
            Self::Enum {
                name,
                variant_names,
            } => {
                let module_id_arms = variant_names.iter().map(|name| {
                    quote! {
                        Self::#name(x) => diag_ext::DiagnosticExt::module_id(x),
                    }
                });
                let steal_related_arms = variant_names.iter().map(|name| {
                    quote! {
                        Self::#name(x) => diag_ext::DiagnosticExt::steal_related(x),
                    }
                });

                quote! {
                    impl diag_ext::DiagnosticExt for #name {
                        fn module_id(&self) -> monolit_span::ModuleID {
                            match self {
                                #(#module_id_arms)*
                            }
                        }
                        fn steal_related(&mut self) -> Option<Vec<Box<dyn diag_ext::DiagnosticExt + Send + Sync + 'static>>> {
                            match self {
                                #(#steal_related_arms)*
                            }
                        }
                    }
                }
            }
        }
    }
}

#[proc_macro_derive(DiagnosticExt, attributes(label, related))]
pub fn derive_diagnostic_ext(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let stream = match DiagnosticExt::from_derive_input(input) {
        Ok(diag) => diag.r#gen(),
        Err(err) => err.to_compile_error(),
    };
    proc_macro::TokenStream::from(stream)
}
