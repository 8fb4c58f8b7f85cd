//! Derivation of accessor and local-variable names from field and class
//! names. All functions are total over non-empty identifiers.

/// Returns the name with its first character upper-cased, used to build the
/// `get<Suffix>`/`set<Suffix>` accessor names.
pub fn accessor_suffix(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the name with its first character lower-cased, used as a
/// synthesized local or loop variable when iterating a collection of the
/// named class.
pub fn local_var(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn getter_name(field: &str) -> String {
    format!("get{}", accessor_suffix(field))
}

pub fn setter_name(field: &str) -> String {
    format!("set{}", accessor_suffix(field))
}
