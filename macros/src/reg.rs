use inflector::Inflector;
use mmreg_macros_core::{lit_u64, parse_ident, unkeywordize, NewMod};
use proc_macro::TokenStream;
use proc_macro2::{Literal, Span, TokenStream as TokenStream2};
use quote::{quote, ToTokens};
use std::collections::HashSet;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, token, Attribute, Error, Ident, LitInt, Path, PathSegment, Token};

const REG_TRAITS: &[&str] = &["RReg", "WReg", "RoReg", "WoReg"];
const FIELD_TRAITS: &[&str] = &["RRegField", "WRegField", "RoRegField", "WoRegField"];

struct Input {
    block: NewMod,
    address: LitInt,
    size: LitInt,
    reset: LitInt,
    traits: Vec<Ident>,
    memory: Option<Path>,
    bit_band: Option<(LitInt, LitInt)>,
    fields: Vec<Field>,
}

struct Field {
    attrs: Vec<Attribute>,
    ident: Ident,
    offset: LitInt,
    width: LitInt,
    traits: Vec<Ident>,
}

impl Parse for Input {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let block = input.parse()?;
        let address = input.parse()?;
        let size = input.parse()?;
        let reset = input.parse()?;
        let mut traits = Vec::new();
        while !input.peek(Token![;]) {
            traits.push(input.parse()?);
        }
        input.parse::<Token![;]>()?;
        let mut memory = None;
        let mut bit_band = None;
        while input.peek(Ident) && !input.peek2(token::Brace) {
            let option = input.fork().parse::<Ident>()?;
            if option == "memory" {
                parse_ident!(input, "memory");
                if memory.is_some() {
                    return Err(Error::new(option.span(), "duplicate `memory` option"));
                }
                memory = Some(input.parse()?);
            } else if option == "bit_band" {
                parse_ident!(input, "bit_band");
                if bit_band.is_some() {
                    return Err(Error::new(option.span(), "duplicate `bit_band` option"));
                }
                bit_band = Some((input.parse()?, input.parse()?));
            } else {
                return Err(Error::new(
                    option.span(),
                    format!("unknown option `{option}`, expected `memory` or `bit_band`"),
                ));
            }
            input.parse::<Token![;]>()?;
        }
        let mut fields = Vec::new();
        while !input.is_empty() {
            fields.push(input.parse()?);
        }
        Ok(Self { block, address, size, reset, traits, memory, bit_band, fields })
    }
}

impl Parse for Field {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse()?;
        let content;
        syn::braced!(content in input);
        let offset = content.parse()?;
        let width = content.parse()?;
        let mut traits = Vec::new();
        while !content.is_empty() {
            traits.push(content.parse()?);
        }
        Ok(Self { attrs, ident, offset, width, traits })
    }
}

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as Input);
    expand(&input).unwrap_or_else(Error::into_compile_error).into()
}

fn has(traits: &[Ident], name: &str) -> bool {
    traits.iter().any(|ident| ident == name)
}

fn check_traits(traits: &[Ident], known: &[&str]) -> Result<()> {
    let mut seen = HashSet::new();
    for ident in traits {
        if !known.iter().any(|name| ident == name) {
            return Err(Error::new(
                ident.span(),
                format!("unknown trait `{ident}`, expected one of: {}", known.join(", ")),
            ));
        }
        if !seen.insert(ident.to_string()) {
            return Err(Error::new(ident.span(), format!("duplicate trait `{ident}`")));
        }
    }
    Ok(())
}

fn bits_type(size: &LitInt) -> Result<(Ident, u32)> {
    let width = match lit_u64(size)? {
        8 => 8,
        16 => 16,
        32 => 32,
        _ => {
            return Err(Error::new(size.span(), "register size must be one of 0x08, 0x10, 0x20"));
        }
    };
    Ok((Ident::new(&format!("u{width}"), Span::call_site()), width))
}

fn check_reg(input: &Input, width: u32) -> Result<()> {
    let Input { traits, reset, bit_band, .. } = input;
    check_traits(traits, REG_TRAITS)?;
    let readable = has(traits, "RReg");
    let writable = has(traits, "WReg");
    for ident in traits {
        if ident == "RoReg" && (!readable || writable) {
            return Err(Error::new(ident.span(), "`RoReg` requires `RReg` and excludes `WReg`"));
        }
        if ident == "WoReg" && (!writable || readable) {
            return Err(Error::new(ident.span(), "`WoReg` requires `WReg` and excludes `RReg`"));
        }
    }
    if lit_u64(reset)? > low_mask(width) {
        return Err(Error::new(reset.span(), "reset value doesn't fit the register"));
    }
    if let Some((peripheral_base, alias_base)) = bit_band {
        lit_u64(peripheral_base)?;
        lit_u64(alias_base)?;
        if !readable || !writable {
            return Err(Error::new(
                peripheral_base.span(),
                "bit-banding requires a read-write register",
            ));
        }
    }
    lit_u64(&input.address)?;
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn check_field(field: &Field, reg_traits: &[Ident], reg_width: u32) -> Result<(u32, u32)> {
    let Field { ident, offset, width, traits, .. } = field;
    check_traits(traits, FIELD_TRAITS)?;
    let readable = has(traits, "RRegField");
    let writable = has(traits, "WRegField");
    for trait_ident in traits {
        let error = if trait_ident == "RRegField" && !has(reg_traits, "RReg") {
            Some("`RRegField` requires the register to be `RReg`")
        } else if trait_ident == "WRegField" && !has(reg_traits, "WReg") {
            Some("`WRegField` requires the register to be `WReg`")
        } else if trait_ident == "RoRegField" && (!readable || writable) {
            Some("`RoRegField` requires `RRegField` and excludes `WRegField`")
        } else if trait_ident == "WoRegField" && (!writable || readable) {
            Some("`WoRegField` requires `WRegField` and excludes `RRegField`")
        } else {
            None
        };
        if let Some(error) = error {
            return Err(Error::new(trait_ident.span(), error));
        }
    }
    let offset_value = lit_u64(offset)?;
    let width_value = lit_u64(width)?;
    if width_value == 0 {
        return Err(Error::new(width.span(), "field width must be positive"));
    }
    if offset_value.saturating_add(width_value) > u64::from(reg_width) {
        return Err(Error::new(
            ident.span(),
            format!(
                "field `{ident}` at offset {offset_value} of width {width_value} overruns the \
                 {reg_width}-bit register"
            ),
        ));
    }
    Ok((offset_value as u32, width_value as u32))
}

fn low_mask(width: u32) -> u64 {
    if width >= 64 { u64::MAX } else { (1 << width) - 1 }
}

fn memory_path(memory: Option<&Path>) -> TokenStream2 {
    let Some(path) = memory else {
        return quote!(::mmreg::mem::Mmio);
    };
    let relative = path.leading_colon.is_none()
        && path.segments.first().map_or(false, |segment| {
            !["crate", "self", "super", "Self"].iter().any(|kw| segment.ident == kw)
        });
    if relative {
        let mut path = path.clone();
        let segments = std::mem::take(&mut path.segments);
        path.segments.push(PathSegment::from(Ident::new("super", Span::call_site())));
        path.segments.extend(segments);
        path.into_token_stream()
    } else {
        path.into_token_stream()
    }
}

fn expand(input: &Input) -> Result<TokenStream2> {
    let Input { block, address, size, reset, traits, memory, bit_band, fields } = input;
    let NewMod { attrs, vis, .. } = block;
    let (bits, reg_width) = bits_type(size)?;
    check_reg(input, reg_width)?;
    let mod_ident = Ident::new(&unkeywordize(block.joined().to_snake_case()), Span::call_site());
    let memory = memory_path(memory.as_ref());
    let bit_band = bit_band.as_ref().map(|(peripheral_base, alias_base)| {
        quote! {
            const BIT_BAND: ::core::option::Option<::mmreg::mem::BitBand> =
                ::core::option::Option::Some(
                    ::mmreg::mem::BitBand::new(#peripheral_base, #alias_base),
                );
        }
    });
    let store_masked = if has(traits, "RReg") && has(traits, "WReg") {
        Some(quote! {
            impl ::mmreg::reg::StoreMasked for Reg {
                #[inline]
                fn store_masked(&self, set: #bits, clear: #bits) {
                    ::mmreg::reg::RwReg::set_clear_bits(self, set, clear);
                }

                #[inline]
                fn atomic_store_masked(&self, set: #bits, clear: #bits) {
                    ::mmreg::reg::RwReg::atomic_set_clear_bits(self, set, clear);
                }
            }
        })
    } else if has(traits, "WReg") {
        let field_structs = fields.iter().map(|field| {
            Ident::new(&field.ident.to_string().to_pascal_case(), field.ident.span())
        });
        Some(quote! {
            impl ::mmreg::reg::StoreMasked for Reg {
                const FIELDS_MASK: u64 = 0 #(| <#field_structs as ::mmreg::reg::RegField>::MASK)*;

                #[inline]
                fn store_masked(&self, set: #bits, _clear: #bits) {
                    ::mmreg::reg::WReg::write(self, set);
                }

                #[inline]
                fn atomic_store_masked(&self, set: #bits, _clear: #bits) {
                    ::mmreg::reg::WReg::write(self, set);
                }
            }
        })
    } else {
        None
    };

    let mut names = HashSet::new();
    let mut members = Vec::new();
    let mut field_tokens = Vec::new();
    for field in fields {
        let (offset, width) = check_field(field, traits, reg_width)?;
        let Field { attrs: field_attrs, ident, traits: field_traits, .. } = field;
        let name = ident.to_string();
        let member = Ident::new(&unkeywordize(name.to_snake_case()), ident.span());
        let field_struct = Ident::new(&name.to_pascal_case(), ident.span());
        if field_struct == "Reg" || !names.insert(field_struct.to_string()) {
            return Err(Error::new(ident.span(), format!("field name `{ident}` is already taken")));
        }
        let (offset, width) = (Literal::u32_unsuffixed(offset), Literal::u32_unsuffixed(width));
        let reg_width = Literal::u32_unsuffixed(reg_width);
        members.push(quote! {
            #(#field_attrs)*
            pub #member: #field_struct
        });
        field_tokens.push(quote! {
            #(#field_attrs)*
            #[derive(Clone, Copy, Debug)]
            pub struct #field_struct;

            impl ::mmreg::token::Token for #field_struct {
                #[inline]
                unsafe fn take() -> Self {
                    Self
                }
            }

            impl ::mmreg::reg::RegField for #field_struct {
                type Reg = Reg;

                const OFFSET: u32 = #offset;
                const WIDTH: u32 = #width;
            }

            #(
                impl ::mmreg::reg::#field_traits for #field_struct {}
            )*

            const _: () = assert!(#offset + #width <= #reg_width, "field doesn't fit the register");
        });
    }
    let constructors = fields.iter().map(|field| {
        let name = field.ident.to_string();
        let member = Ident::new(&unkeywordize(name.to_snake_case()), field.ident.span());
        let field_struct = Ident::new(&name.to_pascal_case(), field.ident.span());
        quote!(#member: #field_struct)
    });

    Ok(quote! {
        #(#attrs)*
        #vis mod #mod_ident {
            #(#attrs)*
            #[derive(Clone, Copy, Debug)]
            pub struct Reg {
                #(#members,)*
            }

            impl ::mmreg::token::Token for Reg {
                #[inline]
                unsafe fn take() -> Self {
                    Self { #(#constructors,)* }
                }
            }

            impl ::mmreg::reg::Reg for Reg {
                type Bits = #bits;
                type Memory = #memory;

                const ADDRESS: usize = #address;
                const RESET: #bits = #reset;
                #bit_band
            }

            #(
                impl ::mmreg::reg::#traits for Reg {}
            )*

            #store_masked

            #(#field_tokens)*
        }
    })
}
