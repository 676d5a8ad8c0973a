use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Show a stored object, named by full digest or unique prefix.
    ///
    /// Prints the payload verbatim by default, the kind tag with
    /// `kind_only`, or the size declared in the frame header with
    /// `size_only`.
    pub fn cat_file(&self, object: &str, kind_only: bool, size_only: bool) -> anyhow::Result<()> {
        let raw = self.database().load_prefix(object)?;

        if kind_only {
            writeln!(self.writer(), "{}", raw.kind)?;
        } else if size_only {
            writeln!(self.writer(), "{}", raw.size)?;
        } else {
            self.writer().write_all(&raw.payload)?;
        }

        Ok(())
    }
}
