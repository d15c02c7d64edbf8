//! Basic types for dig-rust

use crate::errors::ResolveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType { A, NS, CNAME, SOA, PTR, MX, TXT, AAAA, SRV, ANY }

impl QueryType {
    pub const ALL: [QueryType; 10] = [
        QueryType::A, QueryType::NS, QueryType::CNAME, QueryType::SOA,
        QueryType::PTR, QueryType::MX, QueryType::TXT, QueryType::AAAA,
        QueryType::SRV, QueryType::ANY,
    ];

    /// The canonical record type name as dig expects it on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            QueryType::A => "A", QueryType::NS => "NS", QueryType::CNAME => "CNAME",
            QueryType::SOA => "SOA", QueryType::PTR => "PTR", QueryType::MX => "MX",
            QueryType::TXT => "TXT", QueryType::AAAA => "AAAA",
            QueryType::SRV => "SRV", QueryType::ANY => "ANY",
        }
    }

    /// The RR type code assigned to this record type.
    pub fn code(&self) -> u16 {
        match self {
            QueryType::A => 1, QueryType::NS => 2, QueryType::CNAME => 5,
            QueryType::SOA => 6, QueryType::PTR => 12, QueryType::MX => 15,
            QueryType::TXT => 16, QueryType::AAAA => 28,
            QueryType::SRV => 33, QueryType::ANY => 255,
        }
    }

    /// Resolve a user-supplied identifier, either a type name in any case
    /// or a decimal RR type code, to its canonical variant.
    pub fn resolve(identifier: &str) -> Result<QueryType, ResolveError> {
        let ident = identifier.trim();
        if let Ok(code) = ident.parse::<u16>() {
            return Self::ALL.iter().copied().find(|t| t.code() == code)
                .ok_or_else(|| ResolveError::UnknownQueryType(identifier.to_string()));
        }
        let upper = ident.to_uppercase();
        Self::ALL.iter().copied().find(|t| t.name() == upper)
            .ok_or_else(|| ResolveError::UnknownQueryType(identifier.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
}

impl Encoding {
    pub fn from_label(label: &str) -> Option<Encoding> {
        match label.to_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Encoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Some(Encoding::Latin1),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin-1",
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String, ResolveError> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|_| ResolveError::DecodeError { encoding: self.label() }),
            // Every byte is a valid Latin-1 code point
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `dig +short`: one record per output line, nothing else.
    #[default]
    Short,
    /// Full dig report, including the `Query time:` line.
    QueryTime,
}

/// The outcome of one query: answer values in output order, plus the
/// query time dig reported when the full report was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub records: Vec<String>,
    pub query_time_ms: Option<u64>,
}
