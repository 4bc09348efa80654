#![allow(dead_code)]

use std::sync::{Arc, Mutex, OnceLock};
use v2fhir_datatypes::{DatatypeConverter, V2Tag, V2Type};
use v2fhir_models::Coding;
use v2fhir_terminology::{Lookup, StaticLookup};

static CONVERTER: OnceLock<DatatypeConverter> = OnceLock::new();

pub fn converter() -> &'static DatatypeConverter {
    CONVERTER.get_or_init(DatatypeConverter::default)
}

pub fn st(value: &str) -> V2Type {
    V2Type::primitive(V2Tag::ST, value)
}

pub fn nm(value: &str) -> V2Type {
    V2Type::primitive(V2Tag::NM, value)
}

pub fn dtm(value: &str) -> V2Type {
    V2Type::primitive(V2Tag::DTM, value)
}

pub fn empty() -> V2Type {
    V2Type::empty(V2Tag::ST)
}

/// Composite of `tag` whose components are `ST` primitives; `""` leaves a slot empty.
pub fn composite(tag: V2Tag, parts: &[&str]) -> V2Type {
    V2Type::composite(tag, parts.iter().map(|p| st(p)))
}

pub fn cwe(parts: &[&str]) -> V2Type {
    composite(V2Tag::CWE, parts)
}

pub fn hd(namespace: &str, universal: &str, universal_type: &str) -> V2Type {
    composite(V2Tag::HD, &[namespace, universal, universal_type])
}

pub fn xad(parts: &[&str]) -> V2Type {
    composite(V2Tag::XAD, parts)
}

/// `CX` with value, check digit and assigning authority; the rest left empty.
pub fn cx(value: &str, check_digit: &str, authority: V2Type, id_type: &str) -> V2Type {
    V2Type::composite(
        V2Tag::CX,
        [st(value), st(check_digit), empty(), authority, st(id_type)],
    )
}

/// Lookup that records every system hint it is asked to resolve.
pub struct RecordingLookup {
    inner: Arc<StaticLookup>,
    pub asked: Mutex<Vec<String>>,
}

impl RecordingLookup {
    pub fn new() -> Self {
        Self {
            inner: StaticLookup::shared(),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().expect("lookup log poisoned").clone()
    }
}

impl Lookup for RecordingLookup {
    fn resolve_system(&self, hint: &str) -> Option<String> {
        self.asked
            .lock()
            .expect("lookup log poisoned")
            .push(hint.to_string());
        self.inner.resolve_system(hint)
    }

    fn display_for(&self, code: &str, table: &str) -> Option<String> {
        self.inner.display_for(code, table)
    }

    fn unit_for(&self, token: &str) -> Option<Coding> {
        self.inner.unit_for(token)
    }
}
