//! Builders for the administrative statements sent to the backend.
//!
//! Building is pure and total: handlers validate the request before
//! anything reaches this module. Values interpolated into quoted
//! literals are escaped, never concatenated raw.

pub fn create_user(user: &str, host: &str, password: &str) -> String {
    format!(
        "GRANT SELECT ON *.* TO '{}'@'{}' IDENTIFIED BY '{}'",
        escape(user),
        escape(host),
        escape(password)
    )
}

pub fn alter_user(user: &str, host: &str, password: &str) -> String {
    format!(
        "ALTER USER '{}'@'{}' IDENTIFIED BY '{}'",
        escape(user),
        escape(host),
        escape(password)
    )
}

pub fn drop_user(user: &str, host: &str) -> String {
    format!("DROP USER '{}'@'{}'", escape(user), escape(host))
}

pub fn list_users() -> &'static str {
    "SELECT User, Host FROM mysql.user"
}

// MySQL string-literal escaping for the two characters that can break
// out of a single-quoted literal.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        if ch == '\'' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }

    escaped
}
