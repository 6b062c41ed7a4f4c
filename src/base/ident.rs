//! Identifier validation for names that end up in class files.

use unicode_ident::{is_xid_continue, is_xid_start};

/// Returns true if `name` is a valid Java identifier.
///
/// Follows Unicode XID rules, additionally accepting `_` and `$` anywhere.
pub fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(is_xid_start(first) || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| is_xid_continue(c) || c == '$')
}

/// Returns true if `name` is a dotted package name (`com.example.app`).
pub fn is_package_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_java_identifier)
}
