//! Grouping flat rows under their parent key.
//!
//! Query results often arrive as one row per child with the parent repeated
//! on every row. These helpers fold such rows into one entry per parent,
//! keeping parents in the order they first appear.

use serde::Serialize;
use serde_json::{Map, Value};

/// Child field kept by [`group_records`] when no projection is requested.
pub const DEFAULT_CHILD_FIELD: &str = "id";

/// Children sharing one parent key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentGroup<K, T> {
    /// Key shared by every child in the group.
    pub parent: K,
    /// Children in input order.
    pub children: Vec<T>,
}

/// Group `rows` by the key `parent_of` extracts.
///
/// Rows with equal keys land in the same group even when they are not
/// adjacent. Groups are ordered by the first row carrying their key.
///
/// # Examples
///
/// ```
/// use helper_kit::group_by_parent;
///
/// let rows = [("Hardware", "CPU"), ("Software", "OS"), ("Hardware", "Monitor")];
/// let groups = group_by_parent(rows, |(category, _)| *category);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].parent, "Hardware");
/// assert_eq!(groups[0].children, [("Hardware", "CPU"), ("Hardware", "Monitor")]);
/// ```
#[must_use]
pub fn group_by_parent<T, K, F>(
    rows: impl IntoIterator<Item = T>,
    mut parent_of: F,
) -> Vec<ParentGroup<K, T>>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut groups: Vec<ParentGroup<K, T>> = Vec::new();
    for row in rows {
        let parent = parent_of(&row);
        match groups.iter_mut().find(|group| group.parent == parent) {
            Some(group) => group.children.push(row),
            None => groups.push(ParentGroup {
                parent,
                children: vec![row],
            }),
        }
    }
    groups
}

/// Group JSON records by `parent_field`, keeping only `child_fields` of
/// each child.
///
/// Without `child_fields` each child keeps just [`DEFAULT_CHILD_FIELD`].
/// Requested fields a record lacks are filled with an empty string; a record
/// without `parent_field` is grouped under `null`.
///
/// # Examples
///
/// ```
/// use helper_kit::group_records;
/// use serde_json::{Map, Value, json};
///
/// let rows: Vec<Map<String, Value>> = serde_json::from_value(json!([
///     { "id": 1, "category": "Hardware", "name": "CPU" },
///     { "id": 2, "category": "Software", "name": "OS" },
/// ]))
/// .expect("rows are objects");
///
/// let groups = group_records(&rows, "category", Some(&["name"]));
/// assert_eq!(groups[1].parent, json!("Software"));
/// assert_eq!(Value::Object(groups[1].children[0].clone()), json!({ "name": "OS" }));
/// ```
#[must_use]
pub fn group_records(
    rows: &[Map<String, Value>],
    parent_field: &str,
    child_fields: Option<&[&str]>,
) -> Vec<ParentGroup<Value, Map<String, Value>>> {
    let fields = child_fields.unwrap_or(&[DEFAULT_CHILD_FIELD]);
    group_by_parent(rows, |row| {
        row.get(parent_field).cloned().unwrap_or(Value::Null)
    })
    .into_iter()
    .map(|group| ParentGroup {
        parent: group.parent,
        children: group
            .children
            .into_iter()
            .map(|row| project(row, fields))
            .collect(),
    })
    .collect()
}

fn project(row: &Map<String, Value>, fields: &[&str]) -> Map<String, Value> {
    fields
        .iter()
        .map(|field| {
            let value = row
                .get(*field)
                .cloned()
                .unwrap_or_else(|| Value::String(String::new()));
            ((*field).to_owned(), value)
        })
        .collect()
}
