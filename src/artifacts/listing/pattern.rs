//! `--format` pattern interpolation
//!
//! A pattern is literal text with `%(fieldname)` placeholders drawn from
//! a fixed vocabulary. Every `%` in the pattern must start a known
//! placeholder; there are no `%%` or `%xx` escapes.

use crate::artifacts::index::index_entry::IndexEntry;
use anyhow::anyhow;

/// Field names a pattern may interpolate.
const PLACEHOLDERS: phf::Set<&'static str> = phf::phf_set! {
    "objectmode",
    "objecttype",
    "objectname",
    "objectsize",
    "stage",
    "path",
};

const PLACEHOLDER_REGEX: &str = r"%\(([a-z]+)\)";

/// A validated format pattern, compiled once per listing run.
#[derive(Debug, Clone)]
pub struct Pattern {
    pattern: String,
    placeholder: regex::Regex,
}

impl Pattern {
    /// Validate and compile a pattern.
    ///
    /// Rejected when any `%` does not start a `%(fieldname)` group, or
    /// when a group names an unknown field.
    pub fn compile(pattern: &str) -> anyhow::Result<Self> {
        let placeholder = regex::Regex::new(PLACEHOLDER_REGEX)?;

        let mut covered = vec![false; pattern.len()];
        for group in placeholder.find_iter(pattern) {
            let name = &group.as_str()[2..group.as_str().len() - 1];
            if !PLACEHOLDERS.contains(name) {
                return Err(anyhow!("bad ls-files format: {pattern}"));
            }
            covered[group.start()] = true;
        }

        for (position, byte) in pattern.bytes().enumerate() {
            if byte == b'%' && !covered[position] {
                return Err(anyhow!("bad ls-files format: {pattern}"));
            }
        }

        Ok(Pattern {
            pattern: pattern.to_string(),
            placeholder,
        })
    }

    /// Render one entry through the pattern.
    pub fn apply_to(&self, entry: &IndexEntry) -> String {
        self.placeholder
            .replace_all(&self.pattern, |captures: &regex::Captures| {
                match &captures[1] {
                    "objectmode" => entry.mode.to_string(),
                    "objecttype" => entry.mode.object_type_name().to_string(),
                    "objectname" => entry.object_name.to_string(),
                    "objectsize" => entry.file_size.to_string(),
                    "stage" => entry.flags.stage_number().to_string(),
                    "path" => entry.pathname.display().to_string(),
                    // unreachable for compiled patterns, kept total
                    _ => captures[0].to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::index::flags::Flags;
    use crate::artifacts::index::mode::Mode;
    use crate::artifacts::objects::object_id::ObjectId;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::path::PathBuf;

    #[fixture]
    fn entry() -> IndexEntry {
        IndexEntry {
            ctime_seconds: 0,
            ctime_nanoseconds: 0,
            mtime_seconds: 0,
            mtime_nanoseconds: 0,
            dev: 0,
            ino: 0,
            mode: Mode::try_parse(0o100644).unwrap(),
            uid: 0,
            gid: 0,
            file_size: 6,
            object_name: ObjectId::try_parse(
                "ce013625030ba8dba906f756967f9e9ca394464a".to_string(),
            )
            .unwrap(),
            flags: Flags::from(9),
            pathname: PathBuf::from("hello.txt"),
        }
    }

    #[rstest]
    fn interpolates_every_field(entry: IndexEntry) {
        let pattern =
            Pattern::compile("%(objectmode) %(objecttype) %(objectname) %(objectsize) %(stage) %(path)")
                .unwrap();

        assert_eq!(
            pattern.apply_to(&entry),
            "100644 blob ce013625030ba8dba906f756967f9e9ca394464a 6 0 hello.txt"
        );
    }

    #[rstest]
    fn keeps_literal_text_around_placeholders(entry: IndexEntry) {
        let pattern = Pattern::compile("path=[%(path)] stage=[%(stage)]").unwrap();

        assert_eq!(pattern.apply_to(&entry), "path=[hello.txt] stage=[0]");
    }

    #[rstest]
    fn replaces_repeated_placeholders(entry: IndexEntry) {
        let pattern = Pattern::compile("%(path) %(path)").unwrap();

        assert_eq!(pattern.apply_to(&entry), "hello.txt hello.txt");
    }

    #[rstest]
    #[case::unknown_field("%(objectcolor)")]
    #[case::bare_percent("100% done")]
    #[case::unclosed_group("%(path")]
    #[case::doubled_percent("%%(path)")]
    #[case::empty_group("%()")]
    fn rejects_stray_percents_and_unknown_fields(#[case] pattern: &str) {
        let error = Pattern::compile(pattern).unwrap_err();
        assert!(error.to_string().contains("bad ls-files format"));
    }

    #[rstest]
    fn plain_text_needs_no_placeholders(entry: IndexEntry) {
        let pattern = Pattern::compile("no fields here").unwrap();

        assert_eq!(pattern.apply_to(&entry), "no fields here");
    }
}
