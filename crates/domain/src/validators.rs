/// Syntactic sanity check for domain names.
///
/// Only rejects the cheapest class of bad input: empty strings and names
/// without a label separator. No RFC 1035 label rules, punycode or TLD checks.
pub fn validate_domain_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Domain name cannot be empty".to_string());
    }
    if !name.contains('.') {
        return Err(format!(
            "Domain name '{name}' must contain at least one '.' (e.g., example.com)"
        ));
    }
    Ok(())
}

pub fn is_valid_domain_name(name: &str) -> bool {
    validate_domain_name(name).is_ok()
}
