//! Frontmatter block scanning and key upsert.
//!
//! The frontmatter anchor never searches body lines: it operates directly on
//! the YAML-like block delimited by a leading `---` line and the next `---`
//! line. Keys are located by simple prefix scanning (`key:` at the start of
//! a line); no YAML schema validation is performed.

/// The delimiter bounds of a frontmatter block, as 1-based line numbers of
/// the opening and closing `---` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterBlock {
    pub open: usize,
    pub close: usize,
}

/// Locate the frontmatter block, if any.
///
/// The block must start at the very first line with `---` and is closed by
/// the next line that is exactly `---`. An unclosed opening delimiter is not
/// treated as frontmatter.
pub fn find_frontmatter_block(lines: &[String]) -> Option<FrontmatterBlock> {
    if lines.first().map(|l| l.trim_end()) != Some("---") {
        return None;
    }

    lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim_end() == "---")
        .map(|(idx, _)| FrontmatterBlock {
            open: 1,
            close: idx + 1,
        })
}

/// Find the 1-based line number of `key:` inside the frontmatter block.
pub fn find_frontmatter_key(lines: &[String], block: FrontmatterBlock, key: &str) -> Option<usize> {
    let prefix = format!("{}:", key);
    lines[block.open..block.close - 1]
        .iter()
        .position(|line| line.starts_with(&prefix))
        .map(|offset| block.open + offset + 1)
}

/// Set `key: value` in the frontmatter, creating whatever is missing.
///
/// - If the key exists, its line is replaced.
/// - If the block exists but the key does not, the key is inserted just
///   before the closing `---`.
/// - If there is no frontmatter block at all, one is created at the top of
///   the document containing only the new key.
///
/// Returns the 1-based line number now holding `key: value`.
pub fn set_frontmatter_key(lines: &mut Vec<String>, key: &str, value: &str) -> usize {
    let entry = format!("{}: {}", key, value);

    match find_frontmatter_block(lines) {
        Some(block) => match find_frontmatter_key(lines, block, key) {
            Some(line) => {
                lines[line - 1] = entry;
                line
            }
            None => {
                lines.insert(block.close - 1, entry);
                block.close
            }
        },
        None => {
            lines.insert(0, "---".to_string());
            lines.insert(1, entry);
            lines.insert(2, "---".to_string());
            2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{join_lines, split_lines};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_block() {
        let lines = split_lines("---\ntitle: Test\n---\n\nBody");
        let block = find_frontmatter_block(&lines).unwrap();
        assert_eq!(block.open, 1);
        assert_eq!(block.close, 3);
    }

    #[test]
    fn test_find_block_absent() {
        let lines = split_lines("Just body text");
        assert!(find_frontmatter_block(&lines).is_none());
    }

    #[test]
    fn test_find_block_unclosed() {
        let lines = split_lines("---\ntitle: Test\n\nno closing delimiter");
        assert!(find_frontmatter_block(&lines).is_none());
    }

    #[test]
    fn test_find_block_not_at_top() {
        let lines = split_lines("intro\n---\ntitle: Test\n---");
        assert!(find_frontmatter_block(&lines).is_none());
    }

    #[test]
    fn test_find_key() {
        let lines = split_lines("---\ntitle: Test\nstatus: draft\n---\nBody");
        let block = find_frontmatter_block(&lines).unwrap();
        assert_eq!(find_frontmatter_key(&lines, block, "status"), Some(3));
        assert_eq!(find_frontmatter_key(&lines, block, "missing"), None);
    }

    #[test]
    fn test_key_in_body_not_matched() {
        let lines = split_lines("---\ntitle: Test\n---\nstatus: not frontmatter");
        let block = find_frontmatter_block(&lines).unwrap();
        assert_eq!(find_frontmatter_key(&lines, block, "status"), None);
    }

    #[test]
    fn test_set_existing_key() {
        let mut lines = split_lines("---\ntitle: Test\nstatus: draft\n---\nBody");
        let line = set_frontmatter_key(&mut lines, "status", "done");
        assert_eq!(line, 3);
        assert_eq!(
            join_lines(&lines),
            "---\ntitle: Test\nstatus: done\n---\nBody"
        );
    }

    #[test]
    fn test_insert_new_key() {
        let mut lines = split_lines("---\ntitle: Test\n---\nBody");
        let line = set_frontmatter_key(&mut lines, "status", "in-progress");
        assert_eq!(line, 3);
        assert_eq!(
            join_lines(&lines),
            "---\ntitle: Test\nstatus: in-progress\n---\nBody"
        );
    }

    #[test]
    fn test_create_block_when_missing() {
        let mut lines = split_lines("Body only");
        let line = set_frontmatter_key(&mut lines, "status", "in-progress");
        assert_eq!(line, 2);
        assert_eq!(
            join_lines(&lines),
            "---\nstatus: in-progress\n---\nBody only"
        );
    }
}
