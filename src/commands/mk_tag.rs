use crate::areas::repository::Repository;
use crate::artifacts::objects::object_kind::ObjectKind;
use std::io::{Read, Write};

impl Repository {
    /// Store a tag object read from standard input and print its digest.
    ///
    /// The payload is framed and hashed like any other object; its
    /// contents are not validated against the tag format. Storing the
    /// same payload twice yields the same digest and leaves the first
    /// write untouched.
    pub fn mk_tag(&self) -> anyhow::Result<()> {
        let mut payload = Vec::new();
        std::io::stdin().read_to_end(&mut payload)?;

        let object_id = self.database().store(&ObjectKind::new("tag"), &payload)?;
        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
