use super::{escape, layout};
use crate::model::Customer;

fn form(action: &str, fields: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
{fields}
<button type="submit">Guardar</button>
</form>"#
    )
}

pub fn product_form_page() -> String {
    let fields = r#"<label>Nombre <input type="text" name="nombre" maxlength="100" required></label>
<label>Precio <input type="number" name="precio" step="0.01" min="0" required></label>
<label>Stock <input type="number" name="stock" step="1" min="0" required></label>"#;
    layout("Nuevo producto", &form("/formulario_producto", fields))
}

pub fn customer_form_page() -> String {
    let fields = r#"<label>Nombre <input type="text" name="nombre" maxlength="100" required></label>
<label>Email <input type="email" name="email" maxlength="100" required></label>"#;
    layout("Nuevo cliente", &form("/formulario_cliente", fields))
}

/// Order form; the customer is picked from the existing customers.
pub fn order_form_page(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return layout(
            "Nuevo pedido",
            r#"<p>No hay clientes. <a href="/formulario_cliente">Crea uno primero.</a></p>"#,
        );
    }
    let options: String = customers
        .iter()
        .map(|c| format!(r#"<option value="{}">{} ({})</option>"#, c.id, escape(&c.name), escape(&c.email)))
        .collect();
    let fields = format!(r#"<label>Cliente <select name="cliente_id" required>{options}</select></label>"#);
    layout("Nuevo pedido", &form("/formulario_pedido", &fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_form_posts_every_field() {
        let html = product_form_page();
        assert!(html.contains(r#"action="/formulario_producto""#));
        for name in ["nombre", "precio", "stock"] {
            assert!(html.contains(&format!(r#"name="{name}""#)));
        }
    }

    #[test]
    fn order_form_lists_customers() {
        let html = order_form_page(&[Customer {
            id: 7,
            name: "O'Neil".into(),
            email: "o@example.com".into(),
        }]);
        assert!(html.contains(r#"<option value="7">O&#x27;Neil (o@example.com)</option>"#));
        assert!(html.contains(r#"name="cliente_id""#));
    }

    #[test]
    fn order_form_without_customers_points_to_customer_form() {
        let html = order_form_page(&[]);
        assert!(html.contains("/formulario_cliente"));
        assert!(!html.contains("<select"));
    }
}
