//! Identifier normalization: schema names → TypeScript identifiers.
//!
//! Schema names are lower camel case with optional `.` delimiters
//! (`updateNewMessage`, `update.new.message`). Type names become PascalCase,
//! member names lower camel case, and documentation slugs snake_case.
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a property name TypeScript accepts without quotes.
static BARE_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static regex")
});

const DELIMITER: char = '.';

/// Which flavor of camel case to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `UpdateNewMessage`
    Class,
    /// `getChat`
    Member,
}

/// Join the `.`-delimited parts of `input`, capitalizing every part after the
/// first, then force the first character to upper (class) or lower (member).
pub fn to_camel_case(input: &str, case: Case) -> String {
    let mut joined = String::with_capacity(input.len());
    for (i, part) in input.split(DELIMITER).enumerate() {
        if i == 0 {
            joined.push_str(part);
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            joined.extend(first.to_uppercase());
            joined.push_str(chars.as_str());
        }
    }

    let mut chars = joined.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(joined.len());
            match case {
                Case::Class => out.extend(first.to_uppercase()),
                Case::Member => out.extend(first.to_lowercase()),
            }
            out.push_str(chars.as_str());
            out
        }
    }
}

/// `UpdateNewMessage` → `update_new_message`. Only used for documentation
/// URLs, never for identifiers that end up in code.
pub fn to_snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    for (i, ch) in input.chars().enumerate() {
        if ch.is_uppercase() && i != 0 {
            out.push('_');
        }
        out.extend(ch.to_lowercase());
    }
    out
}

/// Object-literal key for `name`, single-quoted when it is not a bare identifier.
pub fn property_key(name: &str) -> String {
    if BARE_IDENTIFIER.is_match(name) {
        name.to_string()
    } else {
        format!("'{name}'")
    }
}

/// Fill the `{}` placeholder of a documentation URL template with the
/// snake_case form of `name`.
pub fn docs_url(template: &str, name: &str) -> String {
    template.replacen("{}", &to_snake_case(name), 1)
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_names_become_pascal_and_camel() {
        assert_eq!(to_camel_case("update.new.message", Case::Class), "UpdateNewMessage");
        assert_eq!(to_camel_case("get.chat", Case::Member), "getChat");
    }

    #[test]
    fn undotted_schema_names_only_touch_first_char() {
        assert_eq!(to_camel_case("updateNewMessage", Case::Class), "UpdateNewMessage");
        assert_eq!(to_camel_case("GetChat", Case::Member), "getChat");
        assert_eq!(to_camel_case("user", Case::Class), "User");
    }

    #[test]
    fn empty_input_and_empty_parts() {
        assert_eq!(to_camel_case("", Case::Class), "");
        assert_eq!(to_camel_case("", Case::Member), "");
        // a doubled delimiter contributes nothing instead of panicking
        assert_eq!(to_camel_case("a..b", Case::Class), "AB");
        assert_eq!(to_camel_case(".x", Case::Member), "x");
    }

    #[test]
    fn snake_case_for_docs() {
        assert_eq!(to_snake_case("UpdateNewMessage"), "update_new_message");
        assert_eq!(to_snake_case("updateNewMessage"), "update_new_message");
        assert_eq!(to_snake_case("user"), "user");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn property_keys_quote_only_when_needed() {
        assert_eq!(property_key("getChat"), "getChat");
        assert_eq!(property_key("_private1"), "_private1");
        assert_eq!(property_key("get.chat"), "'get.chat'");
        assert_eq!(property_key("1st"), "'1st'");
    }

    #[test]
    fn docs_url_substitutes_snake_slug() {
        let url = docs_url(
            "https://core.telegram.org/tdlib/docs/classtd_1_1td__api_1_1{}.html",
            "updateNewMessage",
        );
        assert_eq!(
            url,
            "https://core.telegram.org/tdlib/docs/classtd_1_1td__api_1_1update_new_message.html"
        );
    }
}
