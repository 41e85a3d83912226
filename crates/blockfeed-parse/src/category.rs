//! Category extraction from parsed payload trees.

use blockfeed_types::{Block, BlockKind};
use serde_json::Value;
use thiserror::Error;

/// Index descent from the grouped payload root to the group list.
///
/// The grouped endpoint returns a deeply nested positional structure;
/// this chain is fixed by the provider, not keyed.
const GROUP_LIST_PATH: [usize; 5] = [1, 0, 1, 2, 1];

/// Payload decoded but did not match the expected structural shape.
///
/// Carries the failing location so that skipped units can be diagnosed
/// from logs. An extractor hitting this produces zero blocks for the
/// affected source rather than a partial set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unexpected payload shape at {path}: {message}")]
pub struct ShapeError {
    /// Location within the payload tree, e.g. `[1][0][1]` or a key.
    pub path: String,
    /// What was expected there.
    pub message: String,
}

impl ShapeError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Descends a fixed index chain, failing with the offending prefix.
fn descend<'a>(root: &'a Value, path: &[usize]) -> Result<&'a Value, ShapeError> {
    let mut current = root;
    for (depth, &index) in path.iter().enumerate() {
        current = current.get(index).ok_or_else(|| {
            ShapeError::new(
                render_path(&path[..=depth]),
                format!("missing index {index}"),
            )
        })?;
    }
    Ok(current)
}

fn render_path(indices: &[usize]) -> String {
    indices.iter().map(|i| format!("[{i}]")).collect()
}

fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, ShapeError> {
    value
        .as_array()
        .ok_or_else(|| ShapeError::new(path, "expected an array"))
}

fn as_str<'a>(value: &'a Value, path: &str) -> Result<&'a str, ShapeError> {
    value
        .as_str()
        .ok_or_else(|| ShapeError::new(path, "expected a string"))
}

/// Extracts blocks from the grouped (hierarchical) category payload.
///
/// The group list sits behind a fixed index descent; each entry is
/// `(group_name, [sub_entries])` and each sub-entry is positional with
/// the display name first and the provider code last. One block is
/// produced per sub-entry, named `{group}_{sub}`.
///
/// # Errors
///
/// Returns [`ShapeError`] if the descent or any entry does not match;
/// no partial block list is produced.
pub fn parse_grouped_blocks(
    root: &Value,
    exchange: &str,
    kind: BlockKind,
) -> Result<Vec<Block>, ShapeError> {
    let groups = descend(root, &GROUP_LIST_PATH)?;
    let group_path = render_path(&GROUP_LIST_PATH);
    let groups = as_array(groups, &group_path)?;

    let mut blocks = Vec::new();
    for (i, entry) in groups.iter().enumerate() {
        let entry_path = format!("{group_path}[{i}]");
        let entry = as_array(entry, &entry_path)?;
        let group_name = as_str(
            entry
                .first()
                .ok_or_else(|| ShapeError::new(&entry_path, "empty group entry"))?,
            &entry_path,
        )?;
        let subs = as_array(
            entry
                .get(1)
                .ok_or_else(|| ShapeError::new(&entry_path, "missing sub-entry list"))?,
            &entry_path,
        )?;

        for (j, sub) in subs.iter().enumerate() {
            let sub_path = format!("{entry_path}[1][{j}]");
            let sub = as_array(sub, &sub_path)?;
            let sub_name = as_str(
                sub.first()
                    .ok_or_else(|| ShapeError::new(&sub_path, "empty sub-entry"))?,
                &sub_path,
            )?;
            // Positional schema: the provider code is the last element.
            let code = as_str(
                sub.last()
                    .ok_or_else(|| ShapeError::new(&sub_path, "empty sub-entry"))?,
                &sub_path,
            )?;
            blocks.push(Block::new(
                exchange,
                code,
                format!("{group_name}_{sub_name}"),
                kind,
            ));
        }
    }
    Ok(blocks)
}

/// Extracts blocks from the keyed (flat) category payload.
///
/// The payload is an object mapping provider code to a comma-joined
/// string whose second field is the display name.
///
/// # Errors
///
/// Returns [`ShapeError`] if the root is not an object or any value is
/// missing its name field.
pub fn parse_keyed_blocks(
    root: &Value,
    exchange: &str,
    kind: BlockKind,
) -> Result<Vec<Block>, ShapeError> {
    let map = root
        .as_object()
        .ok_or_else(|| ShapeError::new("$", "expected an object"))?;

    let mut blocks = Vec::with_capacity(map.len());
    for (code, value) in map {
        let joined = as_str(value, code)?;
        let name = joined
            .split(',')
            .nth(1)
            .ok_or_else(|| ShapeError::new(code, "missing name field in joined value"))?;
        blocks.push(Block::new(exchange, code.clone(), name, kind));
    }
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Builds a grouped payload with the group list at the fixed descent.
    fn grouped_payload(groups: Value) -> Value {
        json!([
            "ignored",
            [["ignored", ["a", "b", ["x", groups]]]],
        ])
    }

    #[test]
    fn test_grouped_name_composition() {
        let root = grouped_payload(json!([
            ["Electronics", [["A", "extra", "001"], ["B", "002"]]],
        ]));
        let blocks = parse_grouped_blocks(&root, "cn", BlockKind::Industry).unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].name, "Electronics_A");
        assert_eq!(blocks[0].code, "001");
        assert_eq!(blocks[0].id, "block_cn_001");
        assert_eq!(blocks[1].name, "Electronics_B");
        assert_eq!(blocks[1].code, "002");
    }

    #[test]
    fn test_grouped_multiple_groups() {
        let root = grouped_payload(json!([
            ["钢铁", [["普钢", "sw2_750"]]],
            ["采掘", [["煤炭开采", "sw2_710"], ["其他采掘", "sw2_730"]]],
        ]));
        let blocks = parse_grouped_blocks(&root, "cn", BlockKind::Industry).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].name, "采掘_煤炭开采");
    }

    #[test]
    fn test_grouped_descent_failure_reports_path() {
        let err = parse_grouped_blocks(&json!(["too", "shallow"]), "cn", BlockKind::Industry)
            .unwrap_err();
        assert_eq!(err.path, "[1][0]");
    }

    #[test]
    fn test_grouped_bad_sub_entry_yields_no_blocks() {
        let root = grouped_payload(json!([["G", [42]]]));
        assert!(parse_grouped_blocks(&root, "cn", BlockKind::Industry).is_err());
    }

    #[test]
    fn test_keyed_blocks() {
        let root = json!({
            "new_dzxx": "1,电子信息,2,3",
            "new_jrhy": "1,金融行业,2,3",
        });
        let mut blocks = parse_keyed_blocks(&root, "cn", BlockKind::Concept).unwrap();
        blocks.sort_by(|a, b| a.code.cmp(&b.code));

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].code, "new_dzxx");
        assert_eq!(blocks[0].name, "电子信息");
        assert_eq!(blocks[0].id, "block_cn_new_dzxx");
        assert_eq!(blocks[0].kind, BlockKind::Concept);
    }

    #[test]
    fn test_keyed_missing_name_field() {
        let root = json!({"new_dzxx": "no-commas-here"});
        let err = parse_keyed_blocks(&root, "cn", BlockKind::Concept).unwrap_err();
        assert_eq!(err.path, "new_dzxx");
    }

    #[test]
    fn test_keyed_non_object_root() {
        assert!(parse_keyed_blocks(&json!([1, 2]), "cn", BlockKind::Area).is_err());
    }
}
