//! Configuration parsing for dig-rust

use crate::types::{Encoding, OutputMode};
use anyhow::Result;

/// Everything a resolver needs to know about how to invoke dig. Built once,
/// immutable afterwards.
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    pub executable: String,
    pub nameservers: Vec<String>,
    pub extra_args: Vec<String>,
    pub encoding: Encoding,
    pub mode: OutputMode,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            executable: "dig".to_string(),
            nameservers: Vec::new(),
            extra_args: Vec::new(),
            encoding: Encoding::default(),
            mode: OutputMode::default(),
        }
    }
}

#[derive(Debug, PartialEq)]
enum Token { Text(String), Newline }

impl ResolverConfig {
    /// Load configuration from a Digfile path
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path, e))?;
        Self::parse(&content)
    }

    /// Parse Digfile content: one `directive arg...` per line, `#` comments,
    /// double quotes for args containing whitespace.
    pub fn parse(content: &str) -> Result<Self> {
        let tokens = Self::lex(content);
        let mut config = ResolverConfig::default();

        for line in tokens.split(|t| *t == Token::Newline) {
            let mut words = line.iter().filter_map(|t| match t {
                Token::Text(s) => Some(s.as_str()),
                Token::Newline => None,
            });
            let Some(directive) = words.next() else { continue };
            let args: Vec<&str> = words.collect();

            match directive {
                "executable" => {
                    let Some(path) = args.first() else {
                        anyhow::bail!("'executable' requires a path");
                    };
                    config.executable = path.to_string();
                }
                "nameservers" => {
                    config.nameservers.extend(args.iter().map(|s| s.to_string()));
                }
                "args" => {
                    config.extra_args.extend(args.iter().map(|s| s.to_string()));
                }
                "encoding" => {
                    let Some(label) = args.first() else {
                        anyhow::bail!("'encoding' requires a label");
                    };
                    config.encoding = Encoding::from_label(label)
                        .ok_or_else(|| anyhow::anyhow!("Unsupported encoding: {}", label))?;
                }
                "option" => {
                    config.mode = match args.first() {
                        Some(&"short") | None => OutputMode::Short,
                        Some(&"query_time") => OutputMode::QueryTime,
                        Some(other) => anyhow::bail!("Unknown option: {}", other),
                    };
                }
                other => anyhow::bail!("Unknown directive: {}", other),
            }
        }
        Ok(config)
    }

    fn lex(input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = input.chars().peekable();
        while let Some(&c) = chars.peek() {
            if c == '\n' { tokens.push(Token::Newline); chars.next(); }
            else if c.is_whitespace() { chars.next(); }
            else if c == '#' { while let Some(&c) = chars.peek() { if c == '\n' { break; } chars.next(); } }
            else if c == '"' {
                chars.next();
                let mut s = String::new();
                while let Some(&c) = chars.peek() { if c == '"' { chars.next(); break; } s.push(c); chars.next(); }
                tokens.push(Token::Text(s));
            } else {
                let mut s = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || c == '#' || c == '"' { break; }
                    s.push(c); chars.next();
                }
                tokens.push(Token::Text(s));
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dig_short_mode() {
        let config = ResolverConfig::default();
        assert_eq!(config.executable, "dig");
        assert!(config.nameservers.is_empty());
        assert!(config.extra_args.is_empty());
        assert_eq!(config.encoding, Encoding::Utf8);
        assert_eq!(config.mode, OutputMode::Short);
    }

    #[test]
    fn parses_full_digfile() {
        let config = ResolverConfig::parse(
            "# resolver setup\n\
             executable /usr/bin/dig\n\
             nameservers 1.1.1.1 8.8.8.8  # cloudflare, google\n\
             args +tcp +timeout=3\n\
             encoding latin-1\n\
             option query_time\n",
        )
        .unwrap();
        assert_eq!(config.executable, "/usr/bin/dig");
        assert_eq!(config.nameservers, vec!["1.1.1.1", "8.8.8.8"]);
        assert_eq!(config.extra_args, vec!["+tcp", "+timeout=3"]);
        assert_eq!(config.encoding, Encoding::Latin1);
        assert_eq!(config.mode, OutputMode::QueryTime);
    }

    #[test]
    fn quoted_args_keep_whitespace() {
        let config = ResolverConfig::parse("executable \"/opt/my tools/dig\"\n").unwrap();
        assert_eq!(config.executable, "/opt/my tools/dig");
    }

    #[test]
    fn empty_content_is_all_defaults() {
        let config = ResolverConfig::parse("").unwrap();
        assert_eq!(config.executable, "dig");
        assert_eq!(config.mode, OutputMode::Short);
    }

    #[test]
    fn unknown_directive_is_rejected() {
        assert!(ResolverConfig::parse("upstream 1.1.1.1\n").is_err());
        assert!(ResolverConfig::parse("encoding ebcdic\n").is_err());
        assert!(ResolverConfig::parse("option verbose\n").is_err());
    }
}
