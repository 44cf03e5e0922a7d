use super::*;

// =============================================================
// Cookie header parsing
// =============================================================

#[test]
fn find_cookie_picks_named_entry() {
    let header = "theme=dark; jwt_authorization=abc123; lang=en";
    assert_eq!(find_cookie(header, "jwt_authorization").as_deref(), Some("abc123"));
}

#[test]
fn find_cookie_missing_is_none() {
    assert_eq!(find_cookie("theme=dark", "jwt_authorization"), None);
    assert_eq!(find_cookie("", "jwt_authorization"), None);
}

#[test]
fn find_cookie_does_not_match_name_prefix() {
    assert_eq!(find_cookie("jwt_authorization_old=x", "jwt_authorization"), None);
}

#[test]
fn find_cookie_decodes_percent_escapes() {
    assert_eq!(find_cookie("t=a%3Db%3Bc", "t").as_deref(), Some("a=b;c"));
}

#[test]
fn find_cookie_keeps_empty_value() {
    assert_eq!(find_cookie("t=", "t").as_deref(), Some(""));
}

// =============================================================
// Cookie write strings
// =============================================================

#[test]
fn set_cookie_value_encodes_and_scopes_to_root() {
    assert_eq!(set_cookie_value("t", "a b;c"), "t=a%20b%3Bc; path=/; SameSite=Strict");
}

#[test]
fn expire_cookie_value_uses_epoch() {
    let value = expire_cookie_value("t");
    assert!(value.starts_with("t=;"));
    assert!(value.contains("expires=Thu, 01 Jan 1970 00:00:00 GMT"));
}

// =============================================================
// Non-browser build
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_stores_are_inert_outside_the_browser() {
    let local = LocalStorage;
    local.set("k", "v");
    assert_eq!(local.get("k"), None);

    let cookies = CookieJar;
    cookies.set("k", "v");
    cookies.remove("k");
    assert_eq!(cookies.get("k"), None);
}
