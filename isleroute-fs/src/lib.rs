//! UTF-8 filesystem helpers for isleroute built on `cap-std` and `camino`.
//!
//! Place datasets, plan requests and rendered routes all arrive as UTF-8
//! paths from the command line or configuration layers. These helpers open
//! them through ambient authority so callers never juggle `std::path`.
#![forbid(unsafe_code)]

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open an existing file for reading.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether `path` exists and is a regular file.
///
/// A missing file or parent directory yields an error of kind
/// [`io::ErrorKind::NotFound`]; directories and other entries yield
/// `Ok(false)`.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Create (or truncate) a file for writing, creating missing parent
/// directories first.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let name = file_name(path)?;
    create_parent_dirs(path)?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent_of(path), ambient_authority())?;
    dir.create(name)
}

fn parent_of(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}

fn file_name(path: &Utf8Path) -> io::Result<&str> {
    path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} does not name a file"),
        )
    })
}

fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = file_name(path)?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent_of(path), ambient_authority())?;
    Ok((dir, name))
}

fn create_parent_dirs(path: &Utf8Path) -> io::Result<()> {
    let (anchor, relative) = split_anchor(parent_of(path))?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    anchor.create_dir_all(&relative)
}

/// Split `dir` into an openable anchor (root, drive prefix or the current
/// directory) and the remaining relative components.
fn split_anchor(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut base = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in dir.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => base.push(component),
            Utf8Component::CurDir => {}
            other => relative.push(other),
        }
    }
    if base.as_str().is_empty() {
        base.push(".");
    }
    let anchor = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((anchor, relative))
}

#[cfg(test)]
mod tests {
    //! Tests for the UTF-8 filesystem helpers.

    use super::*;
    use rstest::{fixture, rstest};
    use std::io::{Read, Write};
    use tempfile::TempDir;

    struct Workspace {
        _tmp: TempDir,
        root: Utf8PathBuf,
    }

    #[fixture]
    fn workspace() -> Workspace {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
        Workspace { _tmp: tmp, root }
    }

    #[rstest]
    fn reports_regular_files(workspace: Workspace) {
        let path = workspace.root.join("places.json");
        std::fs::write(&path, b"[]").expect("write file");

        assert!(file_is_file(&path).expect("inspect file"));
        assert!(!file_is_file(&workspace.root).expect("inspect directory"));
    }

    #[rstest]
    fn missing_file_is_not_found(workspace: Workspace) {
        let err = file_is_file(&workspace.root.join("absent.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn creates_missing_parent_directories(workspace: Workspace) {
        let path = workspace.root.join("out/routes/route.json");
        let mut file = create_utf8_file(&path).expect("create file");
        file.write_all(b"{}").expect("write file");
        drop(file);

        let mut contents = String::new();
        open_utf8_file(&path)
            .expect("open file")
            .read_to_string(&mut contents)
            .expect("read file");
        assert_eq!(contents, "{}");
    }

    #[rstest]
    fn create_truncates_existing_file(workspace: Workspace) {
        let path = workspace.root.join("route.txt");
        std::fs::write(&path, b"an older and longer route").expect("seed file");

        create_utf8_file(&path)
            .expect("create file")
            .write_all(b"new")
            .expect("write file");

        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "new");
    }

    #[rstest]
    fn rejects_paths_without_file_name() {
        let err = create_utf8_file(Utf8Path::new("/")).expect_err("root is not a file");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
