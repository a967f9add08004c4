use sqlx::{postgres::PgRow, types::Json, Row};
use serde_json::{Map, Value};
use std::error::Error;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves an optional JSON object column from a row.
pub fn get_optional_json_object(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<Map<String, Value>>, Box<dyn Error + Send + Sync>> {
    let value: Option<Json<Value>> = row.try_get(col_name)?;
    match value {
        None | Some(Json(Value::Null)) => Ok(None),
        Some(Json(Value::Object(map))) => Ok(Some(map)),
        Some(Json(other)) => Err(format!(
            "Value for column '{col_name}' is not a JSON object: {other}"
        )
        .into()),
    }
}

/// Renders a name as a double-quoted SQL identifier, so case and reserved words survive.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Renders a string as a single-quoted SQL literal.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
