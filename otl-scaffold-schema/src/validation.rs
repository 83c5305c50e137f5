//! Schema validation utilities.
//!
//! Field descriptors are trusted input, so nothing here rejects a schema.
//! The checks report conditions that produce questionable output, such as
//! two group fields whose synthesized interface names coincide.

use crate::field::FieldDescriptor;
use crate::ir::to_pascal_case;
use std::collections::HashMap;

/// A synthesized interface name produced by more than one field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollision {
    /// The colliding interface name.
    pub name: String,
    /// Dotted field-id paths that produce the name. The root declaration
    /// is listed as an empty path.
    pub paths: Vec<String>,
}

/// Finds interface names that would be generated more than once.
///
/// Nested group declarations are named `parent + PascalCase(id)`, so
/// `a-b` at the root and `b` nested in `a` both yield `<root>AB`.
///
/// # Arguments
/// * `root_name` - Name of the root interface
/// * `fields` - Root field descriptors
///
/// # Returns
/// Collisions in first-seen order; empty when every name is unique.
#[must_use]
pub fn find_name_collisions(root_name: &str, fields: &[FieldDescriptor]) -> Vec<NameCollision> {
    let mut seen: Vec<(String, Vec<String>)> = vec![(root_name.to_string(), vec![String::new()])];
    let mut index: HashMap<String, usize> = HashMap::from([(root_name.to_string(), 0)]);

    collect_names(root_name, "", fields, &mut seen, &mut index);

    seen.into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(name, paths)| NameCollision { name, paths })
        .collect()
}

fn collect_names(
    parent_name: &str,
    parent_path: &str,
    fields: &[FieldDescriptor],
    seen: &mut Vec<(String, Vec<String>)>,
    index: &mut HashMap<String, usize>,
) {
    for field in fields {
        let children = field.children();
        if children.is_empty() {
            continue;
        }

        let name = format!("{}{}", parent_name, to_pascal_case(&field.id));
        let path = if parent_path.is_empty() {
            field.id.clone()
        } else {
            format!("{}.{}", parent_path, field.id)
        };

        // Nested names are recorded before recursing so paths stay in
        // traversal order.
        match index.get(&name) {
            Some(&idx) => seen[idx].1.push(path.clone()),
            None => {
                index.insert(name.clone(), seen.len());
                seen.push((name.clone(), vec![path.clone()]));
            }
        }

        collect_names(&name, &path, children, seen, index);
    }
}
