use actix_cors::Cors;

/// Cross-origin layer: any origin, method and header. There is no allow-list.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .send_wildcard()
        .max_age(3600)
}
