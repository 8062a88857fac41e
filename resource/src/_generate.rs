// this module is transparently re-exported by the crate root

use log::debug;
use quadmesh_inmem::dataset::GenericDataset;
use quadmesh_inmem::index::TermIndex;
use quadmesh_inmem::QuadStore;
use quadmesh_term::ns::rdf;
use quadmesh_term::prefix::PrefixMap;
use quadmesh_term::{Literal, Quad, Term};

use crate::compactor::PrefixCompactor;
use crate::graph::{Graph, LiteralValue, NodeId, Value};
use crate::list::ListReconstructor;
use crate::options::{GraphOptions, Prefixes};
use crate::Result;

/// Materialize `dataset` into a resource [`Graph`].
///
/// When [`prefixes`](GraphOptions::prefixes) is [`Prefixes::Context`],
/// the prefix context of the dataset's factory is used.
///
/// Graph names are ignored: all quads contribute to the same resources.
pub fn generate_graph<TI: TermIndex>(
    dataset: &GenericDataset<TI>,
    options: &GraphOptions,
) -> Result<Graph> {
    materialize(dataset, dataset.factory().context(), options)
}

/// Materialize any [`QuadStore`] into a resource [`Graph`],
/// using `context` as the registered prefix map.
///
/// See also [`generate_graph`].
pub fn materialize<D>(store: &D, context: &PrefixMap, options: &GraphOptions) -> Result<Graph>
where
    D: QuadStore + ?Sized,
{
    options.validate()?;
    let compactor = match options.prefixes() {
        Prefixes::Context => PrefixCompactor::new(context),
        Prefixes::Disabled => PrefixCompactor::disabled(),
        Prefixes::Custom(map) => PrefixCompactor::new(map),
    };
    let mut engine = Engine {
        options,
        compactor,
        graph: Graph::new(),
    };
    let mut count = 0;
    for q in store.quads() {
        engine.add_quad(&q);
        count += 1;
    }
    if options.lists() {
        engine.collapse_lists();
    }
    debug!(
        "materialized {} quads into {} top-level resources ({} records, {} compacted IRIs)",
        count,
        engine.graph.len(),
        engine.graph.record_count(),
        engine.compactor.cached(),
    );
    Ok(engine.graph)
}

/// The state of one materialization run.
struct Engine<'a> {
    options: &'a GraphOptions,
    compactor: PrefixCompactor<'a>,
    graph: Graph,
}

impl<'a> Engine<'a> {
    fn id_of(&mut self, term: &Term) -> String {
        match term {
            Term::NamedNode(iri) => self.compactor.compact(iri),
            Term::BlankNode(id) => format!("_:{id}"),
            _ => term.to_string(),
        }
    }

    fn add_quad(&mut self, quad: &Quad) {
        let subject = self.subject(quad.s());
        let key = self.predicate_key(quad.p());
        let bare_type = key == "@type" && !self.options.types();
        let value = if bare_type && !quad.o().is_literal() && !self.is_hidden(quad.o()) {
            Value::Id(self.id_of(quad.o()))
        } else {
            self.object(quad.o())
        };
        let compact = self.options.compact();
        self.graph.node_mut(subject).extend(key, value, compact);
    }

    /// Whether `term` is a blank node that is not a top-level entry,
    /// hence only reachable through the references to it.
    fn is_hidden(&self, term: &Term) -> bool {
        term.is_blank_node() && !self.options.blanks()
    }

    /// The record of a subject, promoted to the top level unless it is a hidden blank node.
    fn subject(&mut self, term: &Term) -> NodeId {
        let id = self.id_of(term);
        let (h, created) = self.graph.ensure_record(&id);
        if !self.is_hidden(term) && self.graph.promote(h) && !created {
            debug!("promoted {id}");
        }
        h
    }

    fn predicate_key(&mut self, term: &Term) -> String {
        if term.iri() == Some(rdf::type_) {
            "@type".to_string()
        } else {
            self.id_of(term)
        }
    }

    fn object(&mut self, term: &Term) -> Value {
        match term {
            Term::Literal(lit) => self.literal(lit),
            _ => self.reference(term),
        }
    }

    fn reference(&mut self, term: &Term) -> Value {
        let id = self.id_of(term);
        let (h, _) = self.graph.ensure_record(&id);
        if self.options.meshed() || self.is_hidden(term) {
            Value::Node(h)
        } else {
            Value::Stub(id)
        }
    }

    fn literal(&mut self, lit: &Literal) -> Value {
        if self.options.strings() && lit.is_string() {
            return Value::String(lit.lexical_form().to_string());
        }
        let datatype = match lit.language_tag() {
            Some(_) => None,
            None if self.options.types() => {
                let dt = Term::NamedNode(lit.datatype().into());
                Some(Box::new(self.reference(&dt)))
            }
            None => Some(Box::new(Value::Id(self.compactor.compact(lit.datatype())))),
        };
        Value::Literal(LiteralValue {
            value: lit.lexical_form().to_string(),
            language: lit.language_tag().map(str::to_string),
            datatype,
        })
    }

    fn collapse_lists(&mut self) {
        let first = self.compactor.compact(rdf::first);
        let rest = self.compactor.compact(rdf::rest);
        let nil = self.compactor.compact(rdf::nil);

        let mut replacements = vec![];
        let mut chains = vec![];
        let lists = ListReconstructor::new(&self.graph, &first, &rest, &nil);
        for h in self.graph.handles() {
            let node = self.graph.node(h);
            if node.get(&first).is_some() {
                // ladder nodes are handled from their head
                continue;
            }
            for (fi, (key, field)) in node.fields.iter().enumerate() {
                if key.starts_with('@') {
                    continue;
                }
                for (vi, value) in field.values().iter().enumerate() {
                    if !lists.is_list_head(value) {
                        continue;
                    }
                    if let Some((list, chain)) = lists.collapse(value) {
                        replacements.push((h, fi, vi, list));
                        chains.extend(chain);
                    }
                }
            }
        }

        debug!(
            "collapsed {} lists made of {} ladder nodes",
            replacements.len(),
            chains.len()
        );
        for (h, fi, vi, list) in replacements {
            self.graph.node_mut(h).fields[fi].1.values_mut()[vi] = list;
        }
        for h in chains {
            self.graph.demote(h);
        }
    }
}
