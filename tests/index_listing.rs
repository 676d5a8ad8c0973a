use assert_cmd::Command;
use assert_fs::fixture::{FileWriteStr, PathChild};
use predicates::prelude::predicate;

mod common;

const HELLO_OID: &str = "ce013625030ba8dba906f756967f9e9ca394464a";
const EMPTY_OID: &str = "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391";

#[test]
fn ls_files_lists_pathnames_in_stored_order() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);
    common::write_index(
        &dir,
        &[
            common::index_entry(0o100644, HELLO_OID, 6, 0, "b.txt"),
            common::index_entry(0o100644, EMPTY_OID, 0, 0, "a.txt"),
            common::index_entry(0o100644, HELLO_OID, 6, 0, "dir/c.txt"),
        ],
    );

    for args in [vec!["ls-files"], vec!["ls-files", "--cached"]] {
        let mut cmd = Command::cargo_bin("dirc")?;
        cmd.current_dir(dir.path())
            .args(&args)
            .assert()
            .success()
            .stdout("b.txt\na.txt\ndir/c.txt\n");
    }

    Ok(())
}

#[test]
fn ls_files_without_an_index_lists_nothing() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);

    let mut cmd = Command::cargo_bin("dirc")?;
    cmd.current_dir(dir.path())
        .arg("ls-files")
        .assert()
        .success()
        .stdout("");

    Ok(())
}

#[test]
fn ls_files_stage_prints_mode_object_name_and_stage() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);
    common::write_index(
        &dir,
        &[
            common::index_entry(0o100755, HELLO_OID, 6, 0, "run.sh"),
            common::index_entry(0o100644, EMPTY_OID, 0, 2, "conflicted.txt"),
        ],
    );

    let mut cmd = Command::cargo_bin("dirc")?;
    cmd.current_dir(dir.path())
        .args(["ls-files", "--stage"])
        .assert()
        .success()
        .stdout(format!(
            "100755 {HELLO_OID} 0\trun.sh\n100644 {EMPTY_OID} 2\tconflicted.txt\n"
        ));

    Ok(())
}

#[test]
fn ls_files_stage_abbreviates_object_names() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);
    common::write_index(
        &dir,
        &[common::index_entry(0o100644, HELLO_OID, 6, 0, "hello.txt")],
    );

    let mut cmd = Command::cargo_bin("dirc")?;
    cmd.current_dir(dir.path())
        .args(["ls-files", "--stage", "--abbrev", "7"])
        .assert()
        .success()
        .stdout(format!("100644 {} 0\thello.txt\n", &HELLO_OID[..7]));

    // zero or negative keeps the full name
    for abbrev in ["--abbrev=0", "--abbrev=-1"] {
        let mut cmd = Command::cargo_bin("dirc")?;
        cmd.current_dir(dir.path())
            .args(["ls-files", "--stage", abbrev])
            .assert()
            .success()
            .stdout(format!("100644 {HELLO_OID} 0\thello.txt\n"));
    }

    Ok(())
}

#[test]
fn ls_files_deleted_lists_entries_missing_from_the_workspace()
-> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);
    dir.child("here.txt").write_str("hello\n")?;
    common::write_index(
        &dir,
        &[
            common::index_entry(0o100644, HELLO_OID, 6, 0, "gone.txt"),
            common::index_entry(0o100644, HELLO_OID, 6, 0, "here.txt"),
        ],
    );

    let mut cmd = Command::cargo_bin("dirc")?;
    cmd.current_dir(dir.path())
        .args(["ls-files", "--deleted"])
        .assert()
        .success()
        .stdout("gone.txt\n");

    Ok(())
}

#[test]
fn ls_files_modified_compares_entries_against_the_workspace()
-> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);
    dir.child("clean.txt").write_str("hello\n")?;
    dir.child("resized.txt").write_str("hello there\n")?;
    dir.child("rewritten.txt").write_str("world\n")?;
    common::write_index(
        &dir,
        &[
            common::index_entry(0o100644, HELLO_OID, 6, 0, "gone.txt"),
            common::index_entry(0o100644, HELLO_OID, 6, 0, "clean.txt"),
            common::index_entry(0o100644, HELLO_OID, 6, 0, "resized.txt"),
            common::index_entry(0o100644, HELLO_OID, 6, 0, "rewritten.txt"),
        ],
    );

    let mut cmd = Command::cargo_bin("dirc")?;
    cmd.current_dir(dir.path())
        .args(["ls-files", "--modified"])
        .assert()
        .success()
        .stdout("gone.txt\nresized.txt\nrewritten.txt\n");

    Ok(())
}

#[cfg(unix)]
#[test]
fn ls_files_modified_catches_an_executable_bit_flip() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);
    dir.child("script.sh").write_str("hello\n")?;
    std::fs::set_permissions(
        dir.child("script.sh").path(),
        std::fs::Permissions::from_mode(0o644),
    )?;
    common::write_index(
        &dir,
        &[common::index_entry(0o100644, HELLO_OID, 6, 0, "script.sh")],
    );

    let mut before = Command::cargo_bin("dirc")?;
    before
        .current_dir(dir.path())
        .args(["ls-files", "--modified"])
        .assert()
        .success()
        .stdout("");

    std::fs::set_permissions(
        dir.child("script.sh").path(),
        std::fs::Permissions::from_mode(0o755),
    )?;

    let mut after = Command::cargo_bin("dirc")?;
    after
        .current_dir(dir.path())
        .args(["ls-files", "--modified"])
        .assert()
        .success()
        .stdout("script.sh\n");

    Ok(())
}

#[test]
fn ls_files_others_lists_untracked_workspace_files() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);
    dir.child("tracked.txt").write_str("hello\n")?;
    dir.child("new.txt").write_str("untracked\n")?;
    dir.child("sub/inner.txt").write_str("also untracked\n")?;
    common::write_index(
        &dir,
        &[common::index_entry(0o100644, HELLO_OID, 6, 0, "tracked.txt")],
    );

    let mut cmd = Command::cargo_bin("dirc")?;
    cmd.current_dir(dir.path())
        .args(["ls-files", "--others"])
        .assert()
        .success()
        .stdout("new.txt\nsub/inner.txt\n");

    Ok(())
}

#[test]
fn ls_files_format_interpolates_entry_fields() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);
    common::write_index(
        &dir,
        &[
            common::index_entry(0o100644, HELLO_OID, 6, 0, "hello.txt"),
            common::index_entry(0o160000, EMPTY_OID, 0, 0, "vendored"),
        ],
    );

    let mut cmd = Command::cargo_bin("dirc")?;
    cmd.current_dir(dir.path())
        .args([
            "ls-files",
            "--format",
            "%(objectmode) %(objecttype) %(objectname) %(objectsize) %(stage) %(path)",
        ])
        .assert()
        .success()
        .stdout(format!(
            "100644 blob {HELLO_OID} 6 0 hello.txt\n160000 commit {EMPTY_OID} 0 0 vendored\n"
        ));

    Ok(())
}

#[test]
fn ls_files_format_rejects_malformed_patterns() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);
    common::write_index(
        &dir,
        &[common::index_entry(0o100644, HELLO_OID, 6, 0, "hello.txt")],
    );

    for pattern in ["%(objectcolor)", "100% done", "%%(path)"] {
        let mut cmd = Command::cargo_bin("dirc")?;
        cmd.current_dir(dir.path())
            .args(["ls-files", "--format", pattern])
            .assert()
            .failure()
            .stderr(predicate::str::contains("bad ls-files format"));
    }

    Ok(())
}

#[test]
fn ls_files_format_conflicts_with_stage_and_others() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);
    common::write_index(
        &dir,
        &[common::index_entry(0o100644, HELLO_OID, 6, 0, "hello.txt")],
    );

    for conflicting in ["--stage", "--others"] {
        let mut cmd = Command::cargo_bin("dirc")?;
        cmd.current_dir(dir.path())
            .args(["ls-files", "--format", "%(path)", conflicting])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "--format cannot be used with --stage or --others",
            ));
    }

    Ok(())
}

#[test]
fn ls_files_debug_appends_cache_metadata() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);
    common::write_index(
        &dir,
        &[common::index_entry(0o100644, HELLO_OID, 6, 0, "hello.txt")],
    );

    let mut cmd = Command::cargo_bin("dirc")?;
    cmd.current_dir(dir.path())
        .args(["ls-files", "--debug"])
        .assert()
        .success()
        .stdout(
            "hello.txt\n\
             \x20 ctime: 1700000000:0\n\
             \x20 mtime: 1700000000:0\n\
             \x20 dev: 2049\tino: 4242\n\
             \x20 uid: 1000\tgid: 1000\n\
             \x20 size: 6\tflags: 9\n",
        );

    Ok(())
}

#[test]
fn ls_files_ignores_bytes_after_the_counted_entries() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::scaffold_repo(&dir);

    // a fake TREE extension plus the checksum, both past the entry count
    let mut trailer = Vec::new();
    trailer.extend_from_slice(b"TREE");
    trailer.extend_from_slice(&9u32.to_be_bytes());
    trailer.extend_from_slice(b"\x001 0\ntotal");
    trailer.extend_from_slice(&[0; 20]);
    common::write_index_with_trailer(
        &dir,
        &[common::index_entry(0o100644, HELLO_OID, 6, 0, "hello.txt")],
        &trailer,
    );

    let mut cmd = Command::cargo_bin("dirc")?;
    cmd.current_dir(dir.path())
        .arg("ls-files")
        .assert()
        .success()
        .stdout("hello.txt\n");

    Ok(())
}

#[test]
fn ls_files_rejects_entries_with_reserved_mode_bits() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();

    for (mode, range) in [(0o101644, "9-11"), (0o300644, "16-31")] {
        let dir = assert_fs::TempDir::new()?;
        common::scaffold_repo(&dir);
        common::write_index(&dir, &[common::index_entry(mode, HELLO_OID, 6, 0, "bad.txt")]);

        let mut cmd = Command::cargo_bin("dirc")?;
        cmd.current_dir(dir.path())
            .arg("ls-files")
            .assert()
            .failure()
            .stderr(predicate::str::contains(format!(
                "nonzero reserved bits {range}"
            )));
    }

    Ok(())
}
