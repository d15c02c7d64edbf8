//! Argument list construction
//!
//! The ordering here is a contract: the parser decides its strategy from the
//! presence of `+short`, and dig itself is positional about `@server`.
//!
//! dig @1.1.1.1 example.com A +short

use crate::types::{OutputMode, QueryType};

pub fn build_args(
    executable: &str,
    domain: &str,
    query_type: QueryType,
    nameserver: Option<&str>,
    mode: OutputMode,
    extra_args: &[String],
) -> Vec<String> {
    let mut args = Vec::with_capacity(5 + extra_args.len());
    args.push(executable.to_string());

    if let Some(ns) = nameserver {
        args.push(format!("@{}", ns));
    }

    // Domain is expected to be lowercased by the caller already
    args.push(domain.to_string());
    args.push(query_type.name().to_string());

    // In query-time mode we rely on dig's default full report
    if mode == OutputMode::Short {
        args.push("+short".to_string());
    }

    args.extend(extra_args.iter().cloned());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_mode_with_nameserver() {
        let args = build_args(
            "dig", "example.com", QueryType::A,
            Some("1.1.1.1"), OutputMode::Short, &[],
        );
        assert_eq!(args, vec!["dig", "@1.1.1.1", "example.com", "A", "+short"]);
    }

    #[test]
    fn no_nameserver_token_without_selection() {
        let args = build_args(
            "dig", "example.com", QueryType::NS,
            None, OutputMode::Short, &[],
        );
        assert_eq!(args, vec!["dig", "example.com", "NS", "+short"]);
    }

    #[test]
    fn query_time_mode_omits_short_flag() {
        let args = build_args(
            "dig", "example.com", QueryType::A,
            Some("8.8.8.8"), OutputMode::QueryTime, &[],
        );
        assert_eq!(args, vec!["dig", "@8.8.8.8", "example.com", "A"]);
        assert!(!args.iter().any(|a| a == "+short"));
    }

    #[test]
    fn extra_args_pass_through_in_order_at_the_end() {
        let extra = vec!["+tcp".to_string(), "+timeout=3".to_string()];
        let args = build_args(
            "/usr/bin/dig", "example.com", QueryType::TXT,
            None, OutputMode::Short, &extra,
        );
        assert_eq!(
            args,
            vec!["/usr/bin/dig", "example.com", "TXT", "+short", "+tcp", "+timeout=3"]
        );
    }

    #[test]
    fn ordering_invariants() {
        let args = build_args(
            "dig", "example.com", QueryType::MX,
            Some("9.9.9.9"), OutputMode::Short, &["+tcp".to_string()],
        );
        assert_eq!(args[0], "dig");
        let domain_pos = args.iter().position(|a| a == "example.com").unwrap();
        assert_eq!(args[domain_pos + 1], "MX");
        assert!(args.iter().filter(|a| a.starts_with('@')).all(|a| a == &"@9.9.9.9"));
    }
}
