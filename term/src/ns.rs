//! Standard namespaces.
//!
//! This module provides a macro for defining namespace modules,
//! and uses it to define the namespaces that the rest of the crate relies on.
//! Each term of a namespace is a `&'static str` holding the full IRI,
//! which can be passed directly to [`Term::named_node`](crate::Term::named_node)
//! or compared with [`Term::iri`](crate::Term::iri).

/// Create a "namespace module"
/// defining a set of IRIs within a given IRI space.
///
/// # Tests
/// This macro also creates a test module checking that all created IRIs are valid.
///
/// This allows to skip those checks at runtime.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            $crate::ns_iri!($iri_prefix, $suffix);
        )*
        $(
            $crate::ns_iri!($iri_prefix, $r_id, $r_sf);
        )*

    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        $crate::namespace!($iri_prefix, $($suffix),*;);
    };
}

/// Create an IRI in a "namespace module".
/// In general, you should use the [`namespace!`](macro.namespace.html) macro instead.
#[macro_export]
macro_rules! ns_iri {
    ($prefix:literal, $ident:ident) => {
        /// Generated IRI.
        #[allow(non_upper_case_globals)]
        pub const $ident: &str = concat!($prefix, stringify!($ident));
    };
    ($prefix:literal, $ident:ident, $suffix:literal) => {
        /// Generated IRI.
        #[allow(non_upper_case_globals)]
        pub const $ident: &str = concat!($prefix, $suffix);
    };
}

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        List,
        Property,
        Statement,
        // datatypes
        HTML,
        langString,
        XMLLiteral,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil;
        type_, "type"
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        Class,
        Datatype,
        Literal,
        Resource,
        comment,
        domain,
        label,
        range,
        seeAlso,
        subClassOf,
        subPropertyOf
    );
}

/// The standard `xsd:` namespace.
#[rustfmt::skip]
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyURI,
        boolean,
        date,
        dateTime,
        decimal,
            integer,
                long,
                int,
                nonNegativeInteger,
        double,
        duration,
        float,
        string,
        time
    );
}

/// The standard `owl:` namespace.
pub mod owl {
    namespace!(
        "http://www.w3.org/2002/07/owl#",
        Class,
        DatatypeProperty,
        ObjectProperty,
        Thing,
        sameAs
    );
}
