//! Deterministic traversal of mappings and struct field tables.
//!
//! Mapping entries are ordered by the canonical text of their keys (keys
//! without a text form sort as `""`). The sort is stable, so entries whose
//! keys share a text keep insertion order.
//!
//! Struct traversal promotes the members of embedded structs, seen through
//! any number of pointers. A nil embedded pointer contributes nothing;
//! unexported fields are never visited.

use std::collections::BTreeMap;

use cvt_core::{Field, Mapping, Struct, Value, indirect};

use crate::string::canonical_text;

pub(crate) fn sorted_entries(m: &Mapping) -> Vec<(&Value, &Value)> {
    let mut keyed: Vec<(String, &Value, &Value)> = m
        .iter()
        .map(|(k, v)| (canonical_text(k).unwrap_or_default(), k, v))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, k, v)| (k, v)).collect()
}

pub(crate) fn sorted_values(m: &Mapping) -> impl Iterator<Item = &Value> {
    sorted_entries(m).into_iter().map(|(_, v)| v)
}

enum Member<'a> {
    Promoted(&'a Struct),
    Skip,
    Plain(&'a Field),
}

fn member(field: &Field) -> Member<'_> {
    if field.embedded {
        match indirect(&field.value).0 {
            Value::Struct(inner) => return Member::Promoted(inner),
            Value::Null => return Member::Skip,
            _ => {}
        }
    }
    if field.exported {
        Member::Plain(field)
    } else {
        Member::Skip
    }
}

/// Exported values in declaration order, embedded members spliced in place.
pub(crate) fn deep_values(s: &Struct) -> Vec<Value> {
    let mut out = Vec::new();
    push_values(s, &mut out);
    out
}

fn push_values(s: &Struct, out: &mut Vec<Value>) {
    for field in s.fields() {
        match member(field) {
            Member::Promoted(inner) => push_values(inner, out),
            Member::Skip => {}
            Member::Plain(f) => out.push(f.value.clone()),
        }
    }
}

/// Exported names in declaration order, embedded members spliced in place.
///
/// A name is listed once, in the slot where it first appears. A shallower
/// occurrence shadows a deeper one, so the listed name always denotes the
/// shallowest field.
pub(crate) fn field_names(s: &Struct) -> Vec<String> {
    let mut out = Vec::new();
    push_names(s, &mut out);
    out
}

fn push_names(s: &Struct, out: &mut Vec<String>) {
    for field in s.fields() {
        match member(field) {
            Member::Promoted(inner) => push_names(inner, out),
            Member::Skip => {}
            Member::Plain(f) => {
                if !out.contains(&f.name) {
                    out.push(f.name.clone());
                }
            }
        }
    }
}

/// Field lookup by name, searching embedded members breadth-first.
///
/// The shallowest depth with a match decides; two matches at that depth are
/// ambiguous and find nothing.
pub(crate) fn lookup<'a>(s: &'a Struct, name: &str) -> Option<&'a Value> {
    let mut level = vec![s];
    while !level.is_empty() {
        let mut found = None;
        let mut matches = 0;
        let mut next = Vec::new();

        for &st in &level {
            for field in st.fields() {
                if field.exported && field.name == name {
                    found.get_or_insert(&field.value);
                    matches += 1;
                }
                if let Member::Promoted(inner) = member(field) {
                    next.push(inner);
                }
            }
        }

        match matches {
            0 => level = next,
            1 => return found,
            _ => return None,
        }
    }
    None
}

/// Name-to-value table of exported fields.
///
/// Direct fields take precedence over promoted ones; between promoted
/// members, the first declared wins.
pub(crate) fn field_map(s: &Struct) -> BTreeMap<String, Value> {
    let mut direct = BTreeMap::new();
    let mut promoted = Vec::new();

    for field in s.fields() {
        match member(field) {
            Member::Promoted(inner) => promoted.push(field_map(inner)),
            Member::Skip => {}
            Member::Plain(f) => {
                direct.insert(f.name.clone(), f.value.clone());
            }
        }
    }

    for table in promoted {
        for (name, value) in table {
            direct.entry(name).or_insert(value);
        }
    }
    direct
}
