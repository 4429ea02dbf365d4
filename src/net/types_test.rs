use super::*;

#[test]
fn get_has_no_body_or_headers() {
    let req = RequestSpec::get("/carrito/panel");
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "/carrito/panel");
    assert!(req.form.is_none());
    assert!(req.headers.is_empty());
}

#[test]
fn add_to_cart_request_carries_form_and_marker_header() {
    let req = RequestSpec::post("/carrito/add/7")
        .with_form(vec![("qty".to_owned(), "1".to_owned())])
        .from_fetch();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.form.as_deref(), Some(&[("qty".to_owned(), "1".to_owned())][..]));
    assert_eq!(req.headers, vec![("X-Requested-With", "fetch".to_owned())]);
}

#[test]
fn check_status_accepts_2xx() {
    assert!(NetworkError::check_status("/x", 200, "OK").is_ok());
    assert!(NetworkError::check_status("/x", 204, "No Content").is_ok());
}

#[test]
fn check_status_rejects_others() {
    let err = NetworkError::check_status("/carrito/clear", 500, "Internal Server Error").unwrap_err();
    assert_eq!(
        err,
        NetworkError::Status { url: "/carrito/clear".to_owned(), status: 500, status_text: "Internal Server Error".to_owned() }
    );
    assert!(NetworkError::check_status("/x", 302, "Found").is_err());
    assert!(NetworkError::check_status("/x", 404, "Not Found").is_err());
}

#[test]
fn error_messages_name_the_url() {
    let err = NetworkError::transport("/carrito/qty", "connection refused");
    assert_eq!(err.to_string(), "request to /carrito/qty failed: connection refused");
}

#[test]
fn error_report_defaults_to_toast() {
    assert_eq!(ErrorReport::default(), ErrorReport::Toast);
}
