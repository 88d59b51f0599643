//! Parsing of `#[env(...)]` field attributes.
//!
//! ```rust,ignore
//! #[env(required)]
//! #[env(required = false)]
//! #[env(default = "localhost")]
//! #[env(default = 8080)]
//! #[env(skip)]
//! ```

use proc_macro2::Span;
use syn::{Field, Lit, LitBool};

/// Options collected from every `#[env(...)]` attribute on a field.
#[derive(Debug, Default)]
pub struct EnvAttr {
    /// Missing value is an error.
    pub required: bool,

    /// Default value, as the string the runtime will parse.
    pub default: Option<String>,

    /// Field is left out of binding.
    pub skip: bool,
}

impl EnvAttr {
    /// Parses all `env` attributes of `field`.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attr = EnvAttr::default();

        let mut required_span: Option<Span> = None;
        let mut default_span: Option<Span> = None;
        let mut skip_span: Option<Span> = None;

        for a in field.attrs.iter().filter(|a| a.path().is_ident("env")) {
            a.parse_nested_meta(|meta| {
                let span = meta.path.get_ident().map_or_else(Span::call_site, |i| i.span());

                if meta.path.is_ident("required") {
                    check_duplicate(&mut required_span, span, "required")?;

                    attr.required = if meta.input.peek(syn::Token![=]) {
                        meta.value()?.parse::<LitBool>()?.value
                    } else {
                        true
                    };

                    Ok(())
                } else if meta.path.is_ident("default") {
                    check_duplicate(&mut default_span, span, "default")?;

                    let lit: Lit = meta.value()?.parse()?;
                    attr.default = Some(literal_to_string(lit)?);

                    Ok(())
                } else if meta.path.is_ident("skip") {
                    check_duplicate(&mut skip_span, span, "skip")?;

                    attr.skip = true;

                    Ok(())
                } else {
                    Err(meta.error("unknown env option; expected `required`, `default` or `skip`"))
                }
            })?;
        }

        if let Some(span) = skip_span
            && (required_span.is_some() || default_span.is_some())
        {
            return Err(syn::Error::new(
                span,
                "`skip` cannot be combined with `required` or `default`",
            ));
        }

        Ok(attr)
    }
}

fn check_duplicate(seen: &mut Option<Span>, span: Span, name: &str) -> syn::Result<()> {
    if seen.is_some() {
        return Err(syn::Error::new(span, format!("duplicate env option `{name}`")));
    }

    *seen = Some(span);

    Ok(())
}

fn literal_to_string(lit: Lit) -> syn::Result<String> {
    match lit {
        Lit::Str(s) => Ok(s.value()),
        Lit::Int(i) => Ok(i.base10_digits().to_string()),
        Lit::Float(f) => Ok(f.base10_digits().to_string()),
        Lit::Bool(b) => Ok(b.value.to_string()),
        Lit::Char(c) => Ok(c.value().to_string()),
        other => Err(syn::Error::new_spanned(
            other,
            "default must be a string, integer, float, bool or char literal",
        )),
    }
}
