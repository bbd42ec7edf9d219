use serde_json::Value;
use std::cmp::Ordering;

/// Resolves a dot-separated field path against a nested row value.
///
/// Segments index into objects by key and into arrays by numeric position. Any missing
/// segment resolves the whole path to `None`.
pub fn lookup<'a>(row: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = row;
    for segment in path.split('.') {
        current = match segment.parse::<usize>() {
            Ok(index) if current.is_array() => current.get(index)?,
            _ => current.get(segment)?,
        };
    }
    Some(current)
}

/// Ascending ordering over rows by the value at `path`, for front-end sorting.
///
/// Missing values and nulls sort last; across types the order is numbers, strings, bools.
pub fn json_comparator(path: &str) -> impl Fn(&Value, &Value) -> Ordering + '_ {
    move |a, b| compare_values(lookup(a, path), lookup(b, path))
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let (ra, rb) = (rank(a), rank(b));
    if ra != rb {
        return ra.cmp(&rb);
    }
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

fn rank(v: Option<&Value>) -> u8 {
    match v {
        Some(Value::Number(_)) => 0,
        Some(Value::String(_)) => 1,
        Some(Value::Bool(_)) => 2,
        Some(Value::Array(_)) | Some(Value::Object(_)) => 3,
        Some(Value::Null) | None => 4,
    }
}
