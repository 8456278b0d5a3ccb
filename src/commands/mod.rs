//! CLI commands for graphwalk
//!
//! - `graphwalk nodes <file>` - list node names
//! - `graphwalk show <file>` - adjacency listing
//! - `graphwalk neighbors <file> <name>` - one-hop neighbors
//! - `graphwalk reach <file> <from> <to>` - connectivity test
//! - `graphwalk path <file> <from> <to>` - reconstructed path
//! - `graphwalk component <file> <start>` - connected component

pub mod component;
pub mod dispatch;
pub mod neighbors;
pub mod nodes;
pub mod path;
pub mod reach;
pub mod show;

use graphwalk_core::format::escape_quotes;

/// Records header line: `H graphwalk=1 records=1 mode=<mode> <fields>`
pub fn records_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut header = format!("H graphwalk=1 records=1 mode={}", mode);
    for (key, value) in fields {
        header.push_str(&format!(" {}={}", key, value));
    }
    header
}

/// Records node line
pub fn records_node(name: &str) -> String {
    format!("N \"{}\"", escape_quotes(name))
}

/// Records edge line
pub fn records_edge(from: &str, to: &str) -> String {
    format!("E \"{}\" \"{}\"", escape_quotes(from), escape_quotes(to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_header() {
        let header = records_header(
            "path",
            &[("from", "A".to_string()), ("found", "true".to_string())],
        );
        assert_eq!(header, "H graphwalk=1 records=1 mode=path from=A found=true");
    }

    #[test]
    fn test_records_lines_escape_quotes() {
        assert_eq!(records_node("a\"b"), "N \"a\\\"b\"");
        assert_eq!(records_edge("A", "B"), "E \"A\" \"B\"");
    }
}
