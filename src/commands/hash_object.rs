use crate::areas::database::Database;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_kind::ObjectKind;
use bytes::Bytes;
use std::io::{Read, Write};

impl Repository {
    /// Hash one `(kind, payload)` per input and print the digests, one
    /// per line.
    ///
    /// With `use_stdin`, standard input is hashed before the named
    /// files. With `write`, each object is also stored. The kind is
    /// taken as given; nothing checks it against a known set.
    pub fn hash_object(
        &self,
        kind: &str,
        write: bool,
        use_stdin: bool,
        files: &[String],
    ) -> anyhow::Result<()> {
        let kind = ObjectKind::new(kind);

        if use_stdin {
            let mut payload = Vec::new();
            std::io::stdin().read_to_end(&mut payload)?;
            self.hash_one(&kind, payload.into(), write)?;
        }

        for file in files {
            let payload = self.workspace().read_file(file.as_ref())?;
            self.hash_one(&kind, payload, write)?;
        }

        Ok(())
    }

    fn hash_one(&self, kind: &ObjectKind, payload: Bytes, write: bool) -> anyhow::Result<()> {
        let object_id = if write {
            self.database().store(kind, &payload)?
        } else {
            Database::hash(kind, &payload)?
        };

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
