//! Request field bag shared by the JSON and form surfaces: presence and type coercion only.

use crate::error::AppError;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct Fields(HashMap<String, Value>);

impl Fields {
    /// Body must be a JSON object.
    pub fn from_json(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Object(m) => Ok(Self(m.into_iter().collect())),
            _ => Err(AppError::BadRequest("body must be a JSON object".into())),
        }
    }

    /// Form values arrive as text; numeric accessors parse them.
    pub fn from_form<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
    }

    fn get(&self, key: &str) -> Result<&Value, AppError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Err(AppError::MissingField(key.to_string())),
            Some(v) => Ok(v),
        }
    }

    pub fn text(&self, key: &str) -> Result<String, AppError> {
        match self.get(key)? {
            Value::String(s) => Ok(s.clone()),
            _ => Err(coercion(key, "text")),
        }
    }

    pub fn float(&self, key: &str) -> Result<f64, AppError> {
        let parsed = match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|f| f.is_finite()).ok_or_else(|| coercion(key, "number"))
    }

    pub fn integer(&self, key: &str) -> Result<i32, AppError> {
        let parsed = match self.get(key)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .and_then(|i| i32::try_from(i).ok()),
            Value::String(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| coercion(key, "integer"))
    }
}

fn coercion(field: &str, expected: &'static str) -> AppError {
    AppError::TypeCoercion {
        field: field.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_body_is_bad_request() {
        assert!(matches!(Fields::from_json(json!([1, 2])), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn null_counts_as_missing() {
        let f = Fields::from_json(json!({"nombre": null})).unwrap();
        assert!(matches!(f.text("nombre"), Err(AppError::MissingField(k)) if k == "nombre"));
    }

    #[test]
    fn numbers_accept_numeric_strings() {
        let f = Fields::from_json(json!({"precio": " 2.5 ", "stock": "7"})).unwrap();
        assert_eq!(f.float("precio").unwrap(), 2.5);
        assert_eq!(f.integer("stock").unwrap(), 7);
    }

    #[test]
    fn integer_rejects_fraction_and_overflow() {
        let f = Fields::from_json(json!({"a": 10.5, "b": 4_000_000_000i64, "c": "1e3", "d": 3.0e12})).unwrap();
        for key in ["a", "b", "c", "d"] {
            assert!(matches!(f.integer(key), Err(AppError::TypeCoercion { expected: "integer", .. })));
        }
    }

    #[test]
    fn integer_accepts_whole_floats() {
        let f = Fields::from_json(json!({"stock": 10.0, "cliente_id": 3.0, "cero": -0.0})).unwrap();
        assert_eq!(f.integer("stock").unwrap(), 10);
        assert_eq!(f.integer("cliente_id").unwrap(), 3);
        assert_eq!(f.integer("cero").unwrap(), 0);
    }

    #[test]
    fn float_rejects_words_and_non_finite() {
        let f = Fields::from_form([
            ("precio".to_string(), "barato".to_string()),
            ("otro".to_string(), "NaN".to_string()),
        ]);
        assert!(matches!(f.float("precio"), Err(AppError::TypeCoercion { .. })));
        assert!(matches!(f.float("otro"), Err(AppError::TypeCoercion { .. })));
    }

    #[test]
    fn integer_json_number_is_accepted_as_float() {
        let f = Fields::from_json(json!({"precio": 3})).unwrap();
        assert_eq!(f.float("precio").unwrap(), 3.0);
    }
}
