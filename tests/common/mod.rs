#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;

const TMPDIR: &str = "target/playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

/// Lay down the bare `.git` skeleton the commands expect.
pub fn scaffold_repo(dir: &TempDir) {
    std::fs::create_dir_all(dir.path().join(".git").join("objects"))
        .expect("Failed to create .git/objects");
}

pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex fixture"))
        .collect()
}

/// Store an object through the binary itself and hand back its digest.
pub fn store_object(dir: &TempDir, kind: &str, payload: &[u8]) -> String {
    run_hash_object(dir, kind, payload, true)
}

/// Digest of a payload without storing it.
pub fn object_id_for(dir: &TempDir, kind: &str, payload: &[u8]) -> String {
    run_hash_object(dir, kind, payload, false)
}

fn run_hash_object(dir: &TempDir, kind: &str, payload: &[u8], write: bool) -> String {
    let mut cmd = Command::cargo_bin("dirc").expect("binary under test");
    cmd.current_dir(dir.path()).arg("hash-object");
    if write {
        cmd.arg("-w");
    }
    let output = cmd
        .args(["-t", kind, "--stdin"])
        .write_stdin(payload.to_vec())
        .output()
        .expect("hash-object run");

    assert!(output.status.success(), "hash-object failed: {output:?}");
    String::from_utf8(output.stdout)
        .expect("digest is ASCII")
        .trim()
        .to_string()
}

/// One serialized index entry: the 62-byte fixed prefix, the pathname,
/// its NUL, and the alignment padding.
pub fn index_entry(mode: u32, oid_hex: &str, file_size: u32, stage: u8, pathname: &str) -> Vec<u8> {
    let mut bytes = Vec::new();

    for stat in [1_700_000_000u32, 0, 1_700_000_000, 0, 2049, 4242] {
        bytes.extend_from_slice(&stat.to_be_bytes());
    }
    bytes.extend_from_slice(&mode.to_be_bytes());
    bytes.extend_from_slice(&1000u32.to_be_bytes()); // uid
    bytes.extend_from_slice(&1000u32.to_be_bytes()); // gid
    bytes.extend_from_slice(&file_size.to_be_bytes());
    bytes.extend(hex_to_bytes(oid_hex));
    let flags = (u16::from(stage) << 12) | pathname.len() as u16;
    bytes.extend_from_slice(&flags.to_be_bytes());
    bytes.extend_from_slice(pathname.as_bytes());
    bytes.push(0);
    let padding = (8 - (62 + pathname.len() + 1) % 8) % 8;
    bytes.resize(bytes.len() + padding, 0);

    bytes
}

/// Write `.git/index` from pre-serialized entries, with a version 2
/// header and a placeholder trailing checksum (the parser never reads
/// it).
pub fn write_index(dir: &TempDir, entries: &[Vec<u8>]) {
    write_index_with_trailer(dir, entries, &[0; 20]);
}

pub fn write_index_with_trailer(dir: &TempDir, entries: &[Vec<u8>], trailer: &[u8]) {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"DIRC");
    bytes.extend_from_slice(&2u32.to_be_bytes());
    bytes.extend_from_slice(&(entries.len() as u32).to_be_bytes());
    for entry in entries {
        bytes.extend_from_slice(entry);
    }
    bytes.extend_from_slice(trailer);

    std::fs::create_dir_all(dir.path().join(".git")).expect("Failed to create .git");
    std::fs::write(dir.path().join(".git").join("index"), bytes).expect("Failed to write index");
}

/// One serialized tree entry: `<mode text> <name>\0` plus the binary
/// object name.
pub fn tree_entry(mode_text: &str, name: &str, oid_hex: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(mode_text.as_bytes());
    bytes.push(b' ');
    bytes.extend_from_slice(name.as_bytes());
    bytes.push(b'\0');
    bytes.extend(hex_to_bytes(oid_hex));

    bytes
}
