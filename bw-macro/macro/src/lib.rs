#[macro_use]
extern crate quote;

use proc_macro::TokenStream;
use regex::Regex;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, ItemEnum, Meta, NestedMeta};

fn normalized(ident: &syn::Ident) -> String {
	ident
		.to_string()
		.chars()
		.filter(|c| *c != '_')
		.flat_map(char::to_lowercase)
		.collect()
}

fn has_option(attrs: &[Attribute], option: &str) -> bool {
	attrs.iter().any(|a| {
		if !a.path.is_ident("enum_from_str") {
			return false;
		}
		match a.parse_meta() {
			Ok(Meta::List(list)) => list.nested.iter().any(|n| {
				if let NestedMeta::Meta(Meta::Path(path)) = n {
					path.is_ident(option)
				} else {
					false
				}
			}),
			_ => panic!("Expected options list in attribute `enum_from_str`"),
		}
	})
}

/// Derives `FromStr` for a fieldless enum.
///
/// Names are matched case-insensitively with `_`, `-` and spaces ignored, so
/// BWAPI spellings like `Terran_Marine` parse into `TerranMarine`.
/// With `#[enum_from_str(use_primitives)]` numeric strings are also accepted
/// and resolved through `num_traits::FromPrimitive`.
#[proc_macro_derive(FromStr, attributes(enum_from_str))]
pub fn enum_from_str_derive(input: TokenStream) -> TokenStream {
	let item = parse_macro_input!(input as DeriveInput);
	let data = match item.data {
		Data::Enum(data) => data,
		_ => panic!("Can only derive FromStr for enums"),
	};
	let name = item.ident;
	let variants = data.variants.iter().map(|v| &v.ident).collect::<Vec<_>>();
	let keys = variants.iter().map(|v| normalized(v));

	let fallback = if has_option(&item.attrs, "use_primitives") {
		quote! {
			_ => s
				.trim()
				.parse::<i64>()
				.ok()
				.and_then(num_traits::FromPrimitive::from_i64)
				.ok_or_else(|| bw_macro::ParseEnumError { input: s.to_string() }),
		}
	} else {
		quote! {
			_ => Err(bw_macro::ParseEnumError { input: s.to_string() }),
		}
	};

	TokenStream::from(quote! {
		impl std::str::FromStr for #name {
			type Err = bw_macro::ParseEnumError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match bw_macro::normalize_variant_name(s).as_str() {
					#(
						#keys => Ok(Self::#variants),
					)*
					#fallback
				}
			}
		}
	})
}

/// Adds an `is_<snake_case_variant>` method for every variant of a fieldless enum.
#[proc_macro_attribute]
pub fn variant_checkers(_attr: TokenStream, item: TokenStream) -> TokenStream {
	let item = parse_macro_input!(item as ItemEnum);

	let name = &item.ident;
	let variants = item.variants.iter().map(|v| &v.ident);
	let re = Regex::new(r"[A-Z0-9]{1}[a-z0-9]*").unwrap();
	let checkers = variants.clone().map(|v| {
		format_ident!(
			"is_{}",
			re.find_iter(&v.to_string())
				.map(|m| m.as_str().to_ascii_lowercase())
				.collect::<Vec<String>>()
				.join("_")
		)
	});

	TokenStream::from(quote! {
		#item
		impl #name {
			#(
				#[inline]
				pub fn #checkers(self) -> bool {
					matches!(self, Self::#variants)
				}
			)*
		}
	})
}
