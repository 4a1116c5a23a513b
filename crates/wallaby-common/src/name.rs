//! CSS property name conversion between hyphenated and camelCase forms.
//!
//! [CSSOM § 6.2](https://drafts.csswg.org/cssom/#css-property-to-idl-attribute)
//!
//! "The CSS property to IDL attribute algorithm for property... replaces each
//! U+002D (-) followed by a lowercase ASCII letter with that letter in
//! uppercase."
//!
//! Native style storage is keyed by the camelCase IDL attribute form
//! (`borderLeftWidth`), while stylesheet-facing queries use the hyphenated
//! CSS form (`border-left-width`). These helpers convert between the two.

/// Convert a hyphenated CSS property name to its camelCase IDL attribute form.
///
/// [CSSOM § 6.2](https://drafts.csswg.org/cssom/#css-property-to-idl-attribute)
///
/// Names that are already camelCase pass through unchanged, so the conversion
/// is idempotent.
pub fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper_next = false;
    for ch in property.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert a camelCase IDL attribute name to its hyphenated CSS form.
///
/// [CSSOM § 6.2](https://drafts.csswg.org/cssom/#idl-attribute-to-css-property)
///
/// "The IDL attribute to CSS property algorithm... inserts a U+002D (-)
/// before each uppercase ASCII letter and replaces the letter with its
/// lowercase form."
pub fn hyphenate(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
