//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span};
use quote::quote;
use syn::parse::Parse;
use syn::{Attribute, Data, DeriveInput, Fields, LitInt, LitStr, parse_macro_input};

/// Derive macro generating the [`Solver`] impl from per-part `PartSolver<N>`
/// impls.
///
/// # Attributes
///
/// - `parts`: Required. Number of parts (`1..=25`)
///
/// Part `k` in `1..=parts` is forwarded to `<Self as PartSolver<k>>::solve`,
/// anything else returns `SolveError::PartNotImplemented`. A missing
/// `PartSolver<k>` impl is a compile error.
///
/// # Example
///
/// ```ignore
/// #[derive(PuzzleSolver)]
/// #[solver(parts = 2)]
/// struct Day1;
///
/// impl PuzzleParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
///
/// [`Solver`]: ../advent_solver/trait.Solver.html
#[proc_macro_derive(PuzzleSolver, attributes(solver))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_puzzle_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_puzzle_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = find_attr(&input.attrs, "solver", name.span())?;

    let mut parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new(lit.span(), "parts must be within 1..=25"));
            }
            parts = Some(value);
            Ok(())
        } else {
            Err(meta.error("unsupported solver attribute, expected `parts`"))
        }
    })?;
    let parts = parts.ok_or_else(|| {
        syn::Error::new_spanned(attr, "missing required `parts` in #[solver(...)]")
    })?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let parts_lit = Literal::u8_unsuffixed(parts);
    let arms = (1..=parts).map(|k| {
        let k = Literal::u8_unsuffixed(k);
        quote! { #k => <Self as ::advent_solver::PartSolver<#k>>::solve(input), }
    });

    Ok(quote! {
        impl #impl_generics ::advent_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts_lit;

            fn solve_part(
                input: &mut <Self as ::advent_solver::PuzzleParser>::Input<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(
                        ::advent_solver::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    })
}

/// Derive macro submitting a solver to the plugin collection so
/// `RegistryBuilder::register_all_plugins` can find it.
///
/// # Attributes
///
/// - `year`: Required. Puzzle year (e.g. `2023`)
/// - `day`: Required. Day number (`1..=25`)
/// - `tags`: Optional. Array of string literals used for filtering
///
/// The type must be a unit struct implementing `Solver`; otherwise the
/// generated code fails to compile with an error pointing at the type.
///
/// # Example
///
/// ```ignore
/// #[derive(PuzzleSolver, AutoRegister)]
/// #[solver(parts = 2)]
/// #[puzzle(year = 2023, day = 1, tags = ["2023", "parsing"])]
/// struct Day1;
/// ```
#[proc_macro_derive(AutoRegister, attributes(puzzle))]
pub fn derive_auto_register(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => {}
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "AutoRegister can only be derived for unit structs",
            ));
        }
    }
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "AutoRegister cannot be derived for generic types",
        ));
    }

    let attr = find_attr(&input.attrs, "puzzle", name.span())?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new(lit.span(), "day must be within 1..=25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("tags") {
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            let list = content.parse_terminated(<LitStr as Parse>::parse, syn::Token![,])?;
            tags.extend(list);
        } else {
            return Err(meta.error("unsupported puzzle attribute, expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `day`"))?;
    let year = Literal::u16_unsuffixed(year);
    let day = Literal::u8_unsuffixed(day);

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}

fn find_attr<'a>(attrs: &'a [Attribute], ident: &str, span: Span) -> syn::Result<&'a Attribute> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident(ident))
        .ok_or_else(|| syn::Error::new(span, format!("missing #[{ident}(...)] attribute")))
}
