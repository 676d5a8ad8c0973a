//! Loose-object database
//!
//! Objects are zlib-compressed files under a two-character shard
//! directory named by the first two digest characters, the remaining 38
//! naming the file. The stored bytes are the frame
//! `<kind> <payload length>\0<payload>`, and the SHA-1 of that frame is
//! the object's identity: content addressing makes every write
//! idempotent.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use crate::artifacts::stream::ByteStream;
use anyhow::{Context, anyhow};
use bytes::Bytes;
use derive_new::new;
use fake::rand;
use sha1::{Digest, Sha1};
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// A loaded object: the kind tag and size exactly as the frame header
/// declares them, plus the payload. The declared size is not reconciled
/// against the payload length; `cat-file -s` reports the declaration.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RawObject {
    pub kind: ObjectKind,
    pub size: u64,
    pub payload: Bytes,
}

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Frame bytes hashed and stored for `(kind, payload)`.
    fn frame(kind: &ObjectKind, payload: &[u8]) -> Bytes {
        let mut frame = Vec::with_capacity(payload.len() + 16);
        frame.extend_from_slice(kind.as_str().as_bytes());
        frame.push(b' ');
        frame.extend_from_slice(payload.len().to_string().as_bytes());
        frame.push(b'\0');
        frame.extend_from_slice(payload);

        frame.into()
    }

    /// Digest identifying `(kind, payload)`: the SHA-1 of the framed
    /// bytes. Pure; nothing touches the disk.
    pub fn hash(kind: &ObjectKind, payload: &[u8]) -> anyhow::Result<ObjectId> {
        let mut hasher = Sha1::new();
        hasher.update(Self::frame(kind, payload));

        ObjectId::try_parse(format!("{:x}", hasher.finalize()))
    }

    /// Persist an object and return its digest.
    ///
    /// An object that already exists on disk is left exactly as it is;
    /// repeated stores of the same content are no-ops.
    pub fn store(&self, kind: &ObjectKind, payload: &[u8]) -> anyhow::Result<ObjectId> {
        let frame = Self::frame(kind, payload);

        let mut hasher = Sha1::new();
        hasher.update(&frame);
        let object_id = ObjectId::try_parse(format!("{:x}", hasher.finalize()))?;

        let object_path = self.path.join(object_id.to_path());
        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            self.write_object(object_path, frame)?;
        }

        Ok(object_id)
    }

    /// Load an object by its full digest.
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<RawObject> {
        let object_path = self.path.join(object_id.to_path());

        self.read_object(object_path)
    }

    /// Resolve a digest or digest prefix, then load the object it names.
    pub fn load_prefix(&self, candidate: &str) -> anyhow::Result<RawObject> {
        let object_id = self.resolve_prefix(candidate)?;

        self.load(&object_id)
    }

    /// Match a digest prefix against the stored objects of its shard.
    ///
    /// The first two characters pick the shard directory; the rest must
    /// prefix exactly one filename inside it. Zero matches, a missing
    /// shard, and more than one match are all fatal. Lookups never span
    /// shards, so at least two characters are required.
    pub fn resolve_prefix(&self, candidate: &str) -> anyhow::Result<ObjectId> {
        if candidate.len() < 2 || !candidate.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow!("Not a valid object name {candidate}"));
        }

        let (shard, file_prefix) = candidate.split_at(2);
        let shard_path = self.path.join(shard);

        if !shard_path.is_dir() {
            return Err(anyhow!("Not a valid object name {candidate}"));
        }

        let mut matches = Vec::new();
        for dir_entry in std::fs::read_dir(&shard_path).context(format!(
            "Unable to read object directory {}",
            shard_path.display()
        ))? {
            let file_name = dir_entry?.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.starts_with(file_prefix) {
                matches.push(format!("{shard}{file_name}"));
            }
        }

        match matches.as_slice() {
            [] => Err(anyhow!("Not a valid object name {candidate}")),
            [full_name] => ObjectId::try_parse(full_name.clone()),
            _ => Err(anyhow!(
                "Ambiguous object name {candidate}: {} candidates",
                matches.len()
            )),
        }
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<RawObject> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        let object_content = Self::decompress(object_content.into())?;

        Self::parse_frame(object_content)
    }

    /// Split a decompressed frame into its header fields and payload.
    fn parse_frame(frame: Bytes) -> anyhow::Result<RawObject> {
        let mut stream = ByteStream::new(Cursor::new(frame));

        let kind_bytes = stream.read_terminated(b' ')?;
        let kind = ObjectKind::new(
            String::from_utf8(kind_bytes.to_vec())
                .map_err(|_| anyhow!("invalid kind in object header"))?,
        );

        let size_bytes = stream.read_terminated(b'\0')?;
        let size = std::str::from_utf8(&size_bytes)
            .ok()
            .and_then(|size| size.parse().ok())
            .ok_or_else(|| anyhow!("invalid size in object header"))?;

        let payload = stream.remaining()?;

        Ok(RawObject::new(kind, size, payload))
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        // compress the object content
        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
