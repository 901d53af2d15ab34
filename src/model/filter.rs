//! Attribute inclusion/exclusion filtering for response serialization.
//!
//! `attributes` and `excludedAttributes` request parameters are lists of dotted
//! or URN-qualified attribute paths (RFC 7644 §3.9). They are canonicalized
//! against the target shape and merged into one tree; an ancestor path
//! implicitly covers all of its descendants, and contradictory leaf values for
//! the same path are rejected as a schema conflict.

use crate::error::{ScimError, ScimResult};
use crate::model::shape::{ModelShape, normalize_attr_name};
use crate::urn::{extract_schema_and_attribute_base, validate_attribute_urn};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
struct FilterNode {
    /// `Some(true)` = explicitly included, `Some(false)` = explicitly excluded
    value: Option<bool>,
    children: BTreeMap<String, FilterNode>,
}

/// A merged attribute-inclusion tree, keyed by lowercase schema URN and
/// normalized attribute path segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeFilter {
    roots: BTreeMap<String, FilterNode>,
    inclusions: usize,
}

impl AttributeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from `attributes` and `excludedAttributes` lists,
    /// canonicalizing each entry against the default shape and candidates.
    pub fn from_lists<S: AsRef<str>>(
        attributes: Option<&[S]>,
        excluded_attributes: Option<&[S]>,
        default_shape: Option<&ModelShape>,
        candidates: &[&ModelShape],
    ) -> ScimResult<Self> {
        let mut filter = Self::new();
        if let Some(paths) = attributes {
            for path in paths {
                let canonical = validate_attribute_urn(path.as_ref(), default_shape, candidates)?;
                filter.insert(&canonical, true)?;
            }
        }
        if let Some(paths) = excluded_attributes {
            for path in paths {
                let canonical = validate_attribute_urn(path.as_ref(), default_shape, candidates)?;
                filter.insert(&canonical, false)?;
            }
        }
        Ok(filter)
    }

    /// Record one canonical `schema:attr.sub` path as included or excluded.
    pub fn insert(&mut self, canonical_urn: &str, include: bool) -> ScimResult<()> {
        let (schema, segments) = split_path(canonical_urn);
        let mut node = self.roots.entry(schema).or_default();
        for segment in &segments {
            node = node.children.entry(segment.clone()).or_default();
        }
        match node.value {
            Some(existing) if existing != include => {
                return Err(ScimError::SchemaConflict {
                    path: canonical_urn.to_string(),
                });
            }
            _ => node.value = Some(include),
        }
        if include {
            self.inclusions += 1;
        }
        Ok(())
    }

    /// Fold another filter tree into this one, failing on contradictory leaves.
    pub fn merge(&mut self, other: &AttributeFilter) -> ScimResult<()> {
        for (schema, node) in &other.roots {
            let mut path = Vec::new();
            Self::merge_node(self.roots.entry(schema.clone()).or_default(), node, schema, &mut path)?;
        }
        self.inclusions += other.inclusions;
        Ok(())
    }

    fn merge_node(
        target: &mut FilterNode,
        source: &FilterNode,
        schema: &str,
        path: &mut Vec<String>,
    ) -> ScimResult<()> {
        if let Some(value) = source.value {
            match target.value {
                Some(existing) if existing != value => {
                    return Err(ScimError::SchemaConflict {
                        path: format!("{}:{}", schema, path.join(".")),
                    });
                }
                _ => target.value = Some(value),
            }
        }
        for (segment, child) in &source.children {
            path.push(segment.clone());
            Self::merge_node(
                target.children.entry(segment.clone()).or_default(),
                child,
                schema,
                path,
            )?;
            path.pop();
        }
        Ok(())
    }

    /// True when at least one path was explicitly included, which switches
    /// `Returned::Default` fields to opt-in.
    pub fn has_inclusions(&self) -> bool {
        self.inclusions > 0
    }

    /// True when the path or one of its ancestors is explicitly excluded.
    pub fn is_excluded(&self, canonical_urn: &str) -> bool {
        self.walk(canonical_urn, |node| node.value == Some(false))
            .unwrap_or(false)
    }

    /// True when the path, an ancestor, or any descendant is explicitly
    /// included. A descendant inclusion keeps the ancestor in the output so the
    /// included leaf remains reachable.
    pub fn is_included(&self, canonical_urn: &str) -> bool {
        let (schema, segments) = split_path(canonical_urn);
        let Some(root) = self.roots.get(&schema) else {
            return false;
        };
        let mut node = root;
        for segment in &segments {
            if node.value == Some(true) {
                return true;
            }
            match node.children.get(segment) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.value == Some(true) || subtree_has_inclusion(node)
    }

    /// Walk to the node for `canonical_urn`, returning the first ancestor (or
    /// the node itself) for which the predicate holds.
    fn walk(&self, canonical_urn: &str, predicate: impl Fn(&FilterNode) -> bool) -> Option<bool> {
        let (schema, segments) = split_path(canonical_urn);
        let mut node = self.roots.get(&schema)?;
        for segment in &segments {
            if predicate(node) {
                return Some(true);
            }
            node = node.children.get(segment)?;
        }
        Some(predicate(node))
    }
}

fn subtree_has_inclusion(node: &FilterNode) -> bool {
    node.value == Some(true) || node.children.values().any(subtree_has_inclusion)
}

fn split_path(canonical_urn: &str) -> (String, Vec<String>) {
    let (schema, base) = extract_schema_and_attribute_base(canonical_urn);
    let schema = schema.unwrap_or_default().to_ascii_lowercase();
    let segments = base
        .split('.')
        .filter(|s| !s.is_empty())
        .map(normalize_attr_name)
        .collect();
    (schema, segments)
}
