//! JSON output formatting

use crate::engine::{ExecutionResult, ResultData};
use serde_json::{json, Value};

pub fn format_json(result: &ExecutionResult) -> String {
    let mut data: Value = match &result.data {
        ResultData::Room(snapshot) => serde_json::to_value(snapshot).unwrap_or(json!(null)),
        ResultData::Added(report) => serde_json::to_value(report).unwrap_or(json!(null)),
        ResultData::Zombies(zombies) => json!({ "zombies": zombies }),
        ResultData::Count(count) => json!({ "count": count }),
        ResultData::SpaceLeft(space) => json!({ "space_left": space }),
        ResultData::Full(full) => json!({ "is_full": full }),
        ResultData::Explanation(s) => json!({ "explanation": s }),
    };

    if let (Some(message), Value::Object(map)) = (&result.message, &mut data) {
        map.entry("message").or_insert_with(|| json!(message));
    }

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}
