// Cookie string helpers. Pure functions; the browser access lives in
// `services::token_store`.

/// Value of cookie `name` from a `document.cookie` string
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie`-style assignment for `document.cookie`, site-wide
pub fn format_cookie(name: &str, value: &str) -> Result<String, String> {
    if !is_cookie_value(value) {
        return Err(format!("Value for cookie {} contains forbidden characters", name));
    }
    Ok(format!("{}={}; path=/; SameSite=Lax", name, value))
}

/// Assignment that makes the browser drop cookie `name`
pub fn expire_cookie(name: &str) -> String {
    format!(
        "{}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT; max-age=0",
        name
    )
}

/// RFC 6265 cookie-octet
fn is_cookie_value(value: &str) -> bool {
    value.bytes().all(|b| {
        b == 0x21 || (0x23..=0x2B).contains(&b) || (0x2D..=0x3A).contains(&b)
            || (0x3C..=0x5B).contains(&b) || (0x5D..=0x7E).contains(&b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_named_cookie_among_others() {
        let jar = "theme=dark; accessToken=eyJh.eyJz.sig; lang=en";
        assert_eq!(parse_cookie(jar, "accessToken").as_deref(), Some("eyJh.eyJz.sig"));
        assert_eq!(parse_cookie(jar, "lang").as_deref(), Some("en"));
    }

    #[test]
    fn prefix_names_do_not_match() {
        let jar = "accessTokenOld=x; myaccessToken=y";
        assert_eq!(parse_cookie(jar, "accessToken"), None);
    }

    #[test]
    fn empty_value_is_absent() {
        assert_eq!(parse_cookie("accessToken=", "accessToken"), None);
        assert_eq!(parse_cookie("", "accessToken"), None);
    }

    #[test]
    fn jwt_values_are_accepted() {
        let cookie = format_cookie("accessToken", "eyJhbGciOiJIUzI1NiJ9.e30.a-b_c").unwrap();
        assert_eq!(cookie, "accessToken=eyJhbGciOiJIUzI1NiJ9.e30.a-b_c; path=/; SameSite=Lax");
    }

    #[test]
    fn separators_are_rejected() {
        assert!(format_cookie("accessToken", "a;b").is_err());
        assert!(format_cookie("accessToken", "a b").is_err());
        assert!(format_cookie("accessToken", "a,b").is_err());
    }

    #[test]
    fn expiry_targets_same_path() {
        let cookie = expire_cookie("accessToken");
        assert!(cookie.starts_with("accessToken=;"));
        assert!(cookie.contains("path=/"));
        assert!(cookie.contains("max-age=0"));
    }
}
