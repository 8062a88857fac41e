// this module is transparently re-exported by the crate root
//
// Implement the Display trait for terms and quads, using the N-Triples / N-Quads syntax.

use std::fmt;

use crate::ns::xsd;
use crate::*;

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(id) => write!(f, "_:{id}"),
            Term::Literal(lit) => fmt::Display::fmt(lit, f),
            Term::Variable(name) => write!(f, "?{name}"),
            Term::DefaultGraph => Ok(()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        fmt_quoted_string(f, self.lexical_form())?;
        f.write_str("\"")?;
        match self.language_tag() {
            Some(tag) => write!(f, "@{tag}"),
            None if self.datatype() == xsd::string => Ok(()),
            None => write!(f, "^^<{}>", self.datatype()),
        }
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.s(), self.p(), self.o())?;
        if !self.g().is_default_graph() {
            write!(f, " {}", self.g())?;
        }
        f.write_str(" .")
    }
}

fn fmt_quoted_string<W: fmt::Write>(w: &mut W, txt: &str) -> fmt::Result {
    let mut cut = txt.len();
    let mut cutchar = '\0';
    for (pos, chr) in txt.char_indices() {
        if chr <= '\\' && (chr == '\n' || chr == '\r' || chr == '\\' || chr == '"') {
            cut = pos;
            cutchar = chr;
            break;
        }
    }
    w.write_str(&txt[..cut])?;
    if cut < txt.len() {
        w.write_str(match cutchar {
            '\n' => "\\n",
            '\r' => "\\r",
            '"' => "\\\"",
            _ => "\\\\",
        })?;
    };
    if cut + 1 >= txt.len() {
        Ok(())
    } else {
        fmt_quoted_string(w, &txt[cut + 1..])
    }
}

#[cfg(test)]
#[allow(clippy::unused_unit)] // test_case! generated warnings
mod test {
    use crate::ns::xsd;
    use crate::*;
    use test_case::test_case;

    #[test_case(Term::named_node("http://example.org/foo/bar"), "<http://example.org/foo/bar>"; "iri")]
    #[test_case(Term::named_node("http://example.org/hé/\u{10000}/"), "<http://example.org/hé/\u{10000}/>"; "non ascii iri")]
    #[test_case(Term::blank_node("foo_bar.baz"), "_:foo_bar.baz"; "bnode")]
    #[test_case(Term::literal_lang("chat", "fr"), "\"chat\"@fr"; "language string")]
    #[test_case(Term::literal_dt("42", xsd::integer), "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"; "typed literal")]
    #[test_case(Term::literal_dt("hello", xsd::string), "\"hello\""; "explicit xsd string")]
    #[test_case(Ok(Term::simple_literal("a\nb\r\"c\"\\")), r#""a\nb\r\"c\"\\""#; "escapes")]
    #[test_case(Term::variable("x"), "?x"; "variable")]
    fn display_term(term: Result<Term>, expected: &str) -> std::result::Result<(), Box<dyn std::error::Error>> {
        assert_eq!(term?.to_string(), expected);
        Ok(())
    }

    #[test]
    fn display_quads() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let s = Term::named_node("http://example.org/s")?;
        let p = Term::named_node("http://example.org/p")?;
        let o = Term::simple_literal("o");
        let g = Term::blank_node("g")?;
        let t = Quad::triple(s.clone(), p.clone(), o.clone())?;
        assert_eq!(
            t.to_string(),
            r#"<http://example.org/s> <http://example.org/p> "o" ."#
        );
        let q = Quad::new(s, p, o, g)?;
        assert_eq!(
            q.to_string(),
            r#"<http://example.org/s> <http://example.org/p> "o" _:g ."#
        );
        Ok(())
    }
}
