//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for registering solvers with the plugin system
///
/// Generates an `inventory` submission so that
/// `RegistryBuilder::register_all_plugins` picks the solver up. The puzzle identifier is
/// written out in the attribute; the type name plays no part in it.
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2024)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "parallel"])
///
/// # Requirements
///
/// The type must implement `Solver` and `Default`. A missing `Solver` impl is reported as:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{SolveError, Solver};
/// use aoc_solver_macros::AutoRegisterSolver;
///
/// #[derive(Default, AutoRegisterSolver)]
/// #[aoc(year = 2024, day = 6, tags = ["grid"])]
/// struct GuardGallivant;
///
/// impl Solver for GuardGallivant {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    // Extract the struct name
    let name = &input.ident;

    // Find the #[aoc(...)] attribute
    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "AutoRegisterSolver derive macro requires #[aoc(year = .., day = ..)] attribute",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            match meta.value()?.parse::<Lit>()? {
                Lit::Int(lit_int) => year = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "year must be an integer")),
            }
        } else if meta.path.is_ident("day") {
            match meta.value()?.parse::<Lit>()? {
                Lit::Int(lit_int) => day = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "day must be an integer")),
            }
        } else if meta.path.is_ident("tags") {
            // Parse array of string literals: tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit_str) => tags.push(lit_str.value()),
                    other => return Err(syn::Error::new_spanned(other, "tags must be strings")),
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unknown aoc attribute; expected year, day or tags"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `day`"))?;
    if !(1..=25).contains(&day) {
        return Err(syn::Error::new_spanned(aoc_attr, "`day` must be within 1..=25"));
    }

    let tag_strs = tags.iter().map(String::as_str);

    Ok(quote! {
        // Compile-time check that the type implements Solver trait
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver + ::core::default::Default {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                constructor: ::aoc_solver::construct::<#name>,
                tags: &[#(#tag_strs),*],
            }
        }
    })
}
