use std::path::PathBuf;
use storefront_router::{Destination, RoutingError};
use storefront_shell::{load_routes, storefront_router, ConfigError, RoutesFile, View};

fn route_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("routes")
        .join(name)
}

#[test]
fn test_shipped_file_matches_builtin_table() {
    let from_file = load_routes(&route_file("storefront.toml")).unwrap();
    let builtin = storefront_router().unwrap();

    let requests = [
        "/", "/login", "/products", "/my-orders", "/cart", "/admin", "/register", "/payment",
        "/chat", "/nonexistent", "/CART/", "/?next=/payment",
    ];
    for path in requests {
        assert_eq!(from_file.resolve(path), builtin.resolve(path), "path {path}");
    }
}

#[test]
fn test_dump_reloads_to_same_table() {
    let builtin = storefront_router().unwrap();
    let dumped = RoutesFile::from_router(&builtin);
    let text = dumped.to_toml().unwrap();

    let reparsed = RoutesFile::parse(&text).unwrap();
    assert_eq!(reparsed, dumped);

    let shipped = std::fs::read_to_string(route_file("storefront.toml")).unwrap();
    assert_eq!(RoutesFile::parse(&shipped).unwrap(), dumped);
}

#[test]
fn test_cycle_file_loads_but_fails_navigation() {
    let router = load_routes(&route_file("cycle.toml")).unwrap();

    let err = router.navigate("/a").unwrap_err();
    assert_eq!(
        err,
        RoutingError::RedirectCycle {
            chain: vec!["/a".into(), "/b".into(), "/a".into()],
        }
    );

    let nav = router.navigate("/login").unwrap();
    assert!(matches!(
        nav.destination,
        Destination::Resolved(r) if *r.view == View::Login
    ));
}

#[test]
fn test_missing_file() {
    let err = load_routes(&route_file("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
