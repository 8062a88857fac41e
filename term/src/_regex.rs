// this module is transparently re-exported by the crate root
//
// Lexical checks shared by the term constructors and the prefix map.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A modified production of Turtle's BLANK_NODE_LABEL according to the
    /// [Turtle spec](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL),
    /// without the leading `_:`.
    ///
    /// # Rule
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    static ref BNODE_ID: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e} [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();

    /// Production of SPARQL's VARNAME according to the
    /// [SPARQL spec](https://www.w3.org/TR/sparql11-query/#rVARNAME).
    static ref VARNAME: Regex = Regex::new(r#"(?x)
      ^
      [_A-Za-z0-9\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{10000}-\U{EFFFF}]
      [_A-Za-z0-9\u{B7}\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\u{300}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\U{10000}-\U{EFFFF}]*
      $
    "#).unwrap();

    /// Turtle's [LANGTAG](https://www.w3.org/TR/turtle/#grammar-production-LANGTAG), without the leading `@`.
    static ref LANGTAG: Regex = Regex::new(r"^[A-Za-z]+(-[A-Za-z0-9]+)*$").unwrap();

    /// Turtle's PN_PREFIX.
    static ref PN_PREFIX: Regex = Regex::new(r"(?x)^
        # PN_CHAR_BASE
        [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}]
        (
            # [ PN_CHARS | '.' ]*
            [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}.-]*
            # PN_CHARS
            [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}-]
        )?
    $").unwrap();
}

/// Check whether a `str` is a valid absolute IRI.
pub fn is_absolute_iri(txt: &str) -> bool {
    oxiri::Iri::parse(txt).is_ok()
}

/// Check whether a `str` is a valid blank node identifier (without the leading `_:`).
pub fn is_valid_bnode_id(txt: &str) -> bool {
    BNODE_ID.is_match(txt)
}

/// Check whether a `str` is a valid SPARQL variable name (without the leading `?`).
pub fn is_valid_variable_name(txt: &str) -> bool {
    VARNAME.is_match(txt)
}

/// Check whether a `str` is a valid language tag.
pub fn is_valid_language_tag(txt: &str) -> bool {
    LANGTAG.is_match(txt)
}

/// Check whether a `str` is a valid Turtle/SPARQL prefix (matches `PN_PREFIX?`).
pub fn is_valid_prefix(txt: &str) -> bool {
    txt.is_empty() || PN_PREFIX.is_match(txt)
}

#[cfg(test)]
#[allow(clippy::unused_unit)] // test_case! generated warnings
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("x")]
    #[test_case("_"; "underscore")]
    #[test_case("foo_bar_baz")]
    #[test_case("hé_hé")]
    #[test_case("1")]
    #[test_case("a.b"; "with dot")]
    fn valid_bnode_id(id: &str) {
        assert!(is_valid_bnode_id(id));
    }

    #[test_case(""; "empty")]
    #[test_case("a."; "trailing dot")]
    #[test_case(".b"; "leading dot")]
    #[test_case("a:b"; "with colon")]
    #[test_case("a b"; "with space")]
    fn invalid_bnode_id(id: &str) {
        assert!(!is_valid_bnode_id(id));
    }

    #[test_case("en")]
    #[test_case("en-US")]
    #[test_case("de-CH-1996")]
    fn valid_language_tag(tag: &str) {
        assert!(is_valid_language_tag(tag));
    }

    #[test_case(""; "empty")]
    #[test_case("en-"; "trailing dash")]
    #[test_case("e n"; "with space")]
    #[test_case("-en"; "leading dash")]
    fn invalid_language_tag(tag: &str) {
        assert!(!is_valid_language_tag(tag));
    }

    #[test_case(""; "empty")]
    #[test_case("a")]
    #[test_case("foo")]
    #[test_case("é.hê"; "with dot and accents")]
    fn valid_prefix(p: &str) {
        assert!(is_valid_prefix(p));
    }

    #[test_case(" "; "space")]
    #[test_case("1a")]
    #[test_case("a."; "ending with dot")]
    fn invalid_prefix(p: &str) {
        assert!(!is_valid_prefix(p));
    }

    #[test_case("http://example.org/")]
    #[test_case("urn:isbn:0451450523")]
    #[test_case("http://example.org/hé/\u{10000}/")]
    fn valid_iri(iri: &str) {
        assert!(is_absolute_iri(iri));
    }

    #[test_case(""; "empty")]
    #[test_case("foo/bar"; "relative")]
    #[test_case("http://example.org/a b"; "with space")]
    #[test_case("http://example.org/<a>"; "with angle brackets")]
    fn invalid_iri(iri: &str) {
        assert!(!is_absolute_iri(iri));
    }
}
