use super::{escape, layout};
use crate::model::{iso_timestamp, Customer, OrderWithCustomer, Product};

fn delete_button(resource: &str, id: i32) -> String {
    format!(
        r#"<form method="post" action="/{resource}/delete/{id}" style="display:inline"><button type="submit">Eliminar</button></form>"#
    )
}

fn table(headers: &[&str], rows: Vec<String>, empty: &str) -> String {
    if rows.is_empty() {
        return format!("<p>{}</p>", escape(empty));
    }
    let head: String = headers.iter().map(|h| format!("<th>{}</th>", escape(h))).collect();
    format!("<table>\n<tr>{head}</tr>\n{}\n</table>", rows.join("\n"))
}

fn product_table(products: &[Product], with_actions: bool) -> String {
    let rows = products
        .iter()
        .map(|p| {
            let action = if with_actions {
                format!("<td>{}</td>", delete_button("producto", p.id))
            } else {
                String::new()
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td>{action}</tr>",
                p.id,
                escape(&p.name),
                p.price,
                p.stock
            )
        })
        .collect();
    let mut headers = vec!["ID", "Nombre", "Precio", "Stock"];
    if with_actions {
        headers.push("");
    }
    table(&headers, rows, "No hay productos.")
}

fn order_table(orders: &[OrderWithCustomer], with_actions: bool) -> String {
    let rows = orders
        .iter()
        .map(|o| {
            let action = if with_actions {
                format!("<td>{}</td>", delete_button("pedido", o.order.id))
            } else {
                String::new()
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td>{} &lt;{}&gt;</td>{action}</tr>",
                o.order.id,
                iso_timestamp(&o.order.placed_at),
                escape(&o.customer_name),
                escape(&o.customer_email)
            )
        })
        .collect();
    let mut headers = vec!["ID", "Fecha", "Cliente"];
    if with_actions {
        headers.push("");
    }
    table(&headers, rows, "No hay pedidos.")
}

pub fn products_page(products: &[Product]) -> String {
    let body = format!(
        r#"{}<p><a href="/formulario_producto">Nuevo producto</a></p>"#,
        product_table(products, true)
    );
    layout("Productos", &body)
}

pub fn customers_page(customers: &[Customer]) -> String {
    let rows = customers
        .iter()
        .map(|c| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                c.id,
                escape(&c.name),
                escape(&c.email),
                delete_button("cliente", c.id)
            )
        })
        .collect();
    let body = format!(
        r#"{}<p><a href="/formulario_cliente">Nuevo cliente</a></p>"#,
        table(&["ID", "Nombre", "Email", ""], rows, "No hay clientes.")
    );
    layout("Clientes", &body)
}

pub fn orders_page(orders: &[OrderWithCustomer]) -> String {
    let body = format!(
        r#"{}<p><a href="/formulario_pedido">Nuevo pedido</a></p>"#,
        order_table(orders, true)
    );
    layout("Pedidos", &body)
}

/// Every table on one page; each customer is listed with how many orders it owns.
pub fn overview_page(products: &[Product], customers: &[Customer], orders: &[OrderWithCustomer]) -> String {
    let customer_rows = customers
        .iter()
        .map(|c| {
            let owned = orders.iter().filter(|o| o.order.customer_id == c.id).count();
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                c.id,
                escape(&c.name),
                escape(&c.email),
                owned
            )
        })
        .collect();
    let body = format!(
        "<h2>Productos</h2>\n{}\n<h2>Clientes</h2>\n{}\n<h2>Pedidos</h2>\n{}",
        product_table(products, false),
        table(&["ID", "Nombre", "Email", "Pedidos"], customer_rows, "No hay clientes."),
        order_table(orders, false)
    );
    layout("Listado general", &body)
}
