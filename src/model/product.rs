use crate::error::AppError;
use crate::input::Fields;
use serde::Serialize;

/// Row of table `producto`.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "precio")]
    pub price: f64,
    pub stock: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductRecord {
    pub id: i32,
    pub nombre: String,
    pub precio: f64,
    pub stock: i32,
}

impl Product {
    pub fn to_record(&self) -> ProductRecord {
        ProductRecord {
            id: self.id,
            nombre: self.name.clone(),
            precio: self.price,
            stock: self.stock,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

impl NewProduct {
    pub fn from_fields(fields: &Fields) -> Result<Self, AppError> {
        Ok(Self {
            name: fields.text("nombre")?,
            price: fields.float("precio")?,
            stock: fields.integer("stock")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_uses_wire_names() {
        let p = Product {
            id: 3,
            name: "Widget".into(),
            price: 9.99,
            stock: 10,
        };
        let v = serde_json::to_value(p.to_record()).unwrap();
        assert_eq!(v, json!({"id": 3, "nombre": "Widget", "precio": 9.99, "stock": 10}));
    }

    #[test]
    fn input_requires_every_field() {
        let fields = Fields::from_json(json!({"nombre": "Widget", "precio": 9.99})).unwrap();
        let err = NewProduct::from_fields(&fields).unwrap_err();
        assert!(matches!(err, AppError::MissingField(f) if f == "stock"));
    }

    #[test]
    fn input_coerces_form_strings() {
        let fields = Fields::from_form([
            ("nombre".to_string(), "Widget".to_string()),
            ("precio".to_string(), "9.99".to_string()),
            ("stock".to_string(), "10".to_string()),
        ]);
        let input = NewProduct::from_fields(&fields).unwrap();
        assert_eq!(
            input,
            NewProduct {
                name: "Widget".into(),
                price: 9.99,
                stock: 10
            }
        );
    }
}
