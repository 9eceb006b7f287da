//! Server-rendered HTML for the admin surface. Plain functions returning markup; all text is escaped.

mod forms;
mod lists;
pub use forms::*;
pub use lists::*;

use crate::error::AppError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const WELCOME: &str = "Bienvenido a la Tienda en Línea";

const NAV: &[(&str, &str)] = &[
    ("/", "Inicio"),
    ("/productos", "Productos"),
    ("/clientes", "Clientes"),
    ("/pedidos", "Pedidos"),
    ("/listado_general", "Listado general"),
];

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `body` (already-escaped markup) in the shared page shell.
pub fn layout(title: &str, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join(" | ");
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<nav>{nav}</nav>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
        nav = nav,
        body = body,
    )
}

pub fn index_page() -> String {
    let links: String = NAV[1..]
        .iter()
        .map(|(href, label)| format!(r#"<li><a href="{href}">{label}</a></li>"#))
        .collect();
    let forms = r#"<li><a href="/formulario_producto">Nuevo producto</a></li><li><a href="/formulario_cliente">Nuevo cliente</a></li><li><a href="/formulario_pedido">Nuevo pedido</a></li>"#;
    layout(WELCOME, &format!("<ul>{links}{forms}</ul>"))
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    layout(
        &format!("Error {}", status.as_u16()),
        &format!(r#"<p class="error">{}</p><p><a href="/">Volver al inicio</a></p>"#, escape(message)),
    )
}

/// Error rendered as an HTML page, for handlers on the form surface.
#[derive(Debug)]
pub struct HtmlError(pub AppError);

impl From<AppError> for HtmlError {
    fn from(e: AppError) -> Self {
        HtmlError(e)
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        self.0.log();
        (status, Html(error_page(status, &self.0.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn index_greets_and_links_every_view() {
        let html = index_page();
        assert!(html.contains(WELCOME));
        for href in ["/productos", "/clientes", "/pedidos", "/listado_general", "/formulario_pedido"] {
            assert!(html.contains(&format!(r#"href="{href}""#)), "missing link {href}");
        }
    }

    #[tokio::test]
    async fn html_error_keeps_status() {
        let response = HtmlError(AppError::NotFound { resource: "producto", id: 5 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Error 404"));
        assert!(html.contains("producto 5 not found"));
    }
}
