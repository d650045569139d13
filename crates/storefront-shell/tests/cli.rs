use clap::Parser;
use std::path::PathBuf;
use storefront_shell::cli::{run, Cli};

fn route_file(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("routes")
        .join(name)
        .display()
        .to_string()
}

/// Parse `args` as the command line and run it, returning (success, stdout)
fn invoke(args: &[&str]) -> (Result<bool, String>, String) {
    let cli = Cli::try_parse_from(std::iter::once("storefront-routes").chain(args.iter().copied()))
        .unwrap();
    let mut out = Vec::new();
    let result = run(cli.command, &mut out).map_err(|e| e.to_string());
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_check_builtin_table() {
    let (result, out) = invoke(&["check"]);
    assert_eq!(result, Ok(true));
    assert!(out.lines().next().unwrap().starts_with("/ "));
    assert!(out.contains("-> /login"));
    assert!(out.contains("LoginView"));
    assert!(out.ends_with("ok: 9 routes\n"));
}

#[test]
fn test_check_invalid_file_fails() {
    let file = route_file("duplicate.toml");
    let (result, out) = invoke(&["check", "--routes", &file]);
    let err = result.unwrap_err();
    assert!(err.contains("Duplicate route name `cart`"), "{err}");
    assert!(out.is_empty());
}

#[test]
fn test_check_missing_file_fails() {
    let file = route_file("absent.toml");
    let (result, _) = invoke(&["check", "--routes", &file]);
    assert!(result.unwrap_err().starts_with("IO error"));
}

#[test]
fn test_resolve_single_step() {
    let (result, out) = invoke(&["resolve", "/", "/cart", "/nonexistent"]);
    assert_eq!(result, Ok(true));
    assert_eq!(
        out,
        "/: redirect /login\n/cart: resolved cart CartView\n/nonexistent: not-found\n"
    );
}

#[test]
fn test_resolve_follow() {
    let (result, out) = invoke(&["resolve", "--follow", "/?next=cart", "/nonexistent"]);
    assert_eq!(result, Ok(true));
    assert_eq!(
        out,
        "/?next=cart: resolved login LoginView (via /?next=cart)\n\
         /nonexistent: not-found /nonexistent\n"
    );
}

#[test]
fn test_resolve_follow_cycle_reports_failure() {
    let file = route_file("cycle.toml");
    let (result, out) = invoke(&["resolve", "--routes", &file, "--follow", "/a", "/login"]);
    assert_eq!(result, Ok(false));
    assert_eq!(
        out,
        "/a: error Redirect cycle: /a -> /b -> /a\n/login: resolved login LoginView\n"
    );
}

#[test]
fn test_resolve_requires_paths() {
    assert!(Cli::try_parse_from(["storefront-routes", "resolve"]).is_err());
}

#[test]
fn test_dump_is_a_route_file() {
    let (result, out) = invoke(&["dump"]);
    assert_eq!(result, Ok(true));
    let file = storefront_shell::RoutesFile::parse(&out).unwrap();
    assert_eq!(file.routes.len(), 9);
    assert_eq!(file.routes[0].redirect.as_deref(), Some("/login"));
}
