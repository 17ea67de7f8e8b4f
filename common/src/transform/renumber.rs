use serde_json::Value;

/// New list in which the entry at position `i` carries `idx == i + 1`,
/// regardless of any previous `idx` value. Order and all other fields are
/// preserved; non-object entries pass through unchanged.
pub fn renumber_source_references(references: &[Value]) -> Vec<Value> {
    references
        .iter()
        .enumerate()
        .map(|(i, reference)| match reference {
            Value::Object(map) => {
                let mut out = map.clone();
                out.insert("idx".to_string(), Value::from(i as u64 + 1));
                Value::Object(out)
            }
            other => other.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assigns_one_based_positions() {
        let input = vec![
            json!({ "idx": 9, "name": "a" }),
            json!({ "name": "b" }),
            json!({ "idx": 1, "name": "c" }),
        ];
        let renumbered = renumber_source_references(&input);
        for (i, reference) in renumbered.iter().enumerate() {
            assert_eq!(reference["idx"], json!(i + 1));
        }
        assert_eq!(renumbered[0]["name"], json!("a"));
        assert_eq!(renumbered[2]["name"], json!("c"));
    }

    #[test]
    fn empty_list_stays_empty() {
        assert!(renumber_source_references(&[]).is_empty());
    }

    #[test]
    fn preserves_other_fields_and_order() {
        let input = vec![json!({ "name": "a", "location": "p", "extra": [1] })];
        let renumbered = renumber_source_references(&input);
        assert_eq!(renumbered[0]["location"], json!("p"));
        assert_eq!(renumbered[0]["extra"], json!([1]));
    }
}
