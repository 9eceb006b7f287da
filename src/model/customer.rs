use crate::error::AppError;
use crate::input::Fields;
use serde::Serialize;

/// Row of table `cliente`. `email` is unique across customers.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Customer {
    pub id: i32,
    #[sqlx(rename = "nombre")]
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CustomerRecord {
    pub id: i32,
    pub nombre: String,
    pub email: String,
}

impl Customer {
    pub fn to_record(&self) -> CustomerRecord {
        CustomerRecord {
            id: self.id,
            nombre: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

impl NewCustomer {
    pub fn from_fields(fields: &Fields) -> Result<Self, AppError> {
        Ok(Self {
            name: fields.text("nombre")?,
            email: fields.text("email")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_uses_wire_names() {
        let c = Customer {
            id: 1,
            name: "Ana".into(),
            email: "ana@example.com".into(),
        };
        let v = serde_json::to_value(c.to_record()).unwrap();
        assert_eq!(v, json!({"id": 1, "nombre": "Ana", "email": "ana@example.com"}));
    }

    #[test]
    fn email_must_be_text() {
        let fields = Fields::from_json(json!({"nombre": "Ana", "email": 42})).unwrap();
        let err = NewCustomer::from_fields(&fields).unwrap_err();
        assert!(matches!(err, AppError::TypeCoercion { ref field, .. } if field == "email"));
    }
}
