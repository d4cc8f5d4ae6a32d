use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Reads a whole text file into a `String`.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	fs::read_to_string(filename)
}

/// Where the binary cache of a token file lives: `names.json` → `names.bin`.
pub(crate) fn cache_path(source: &Path) -> io::Result<PathBuf> {
	match source.file_stem() {
		Some(_) => Ok(source.with_extension("bin")),
		None => Err(io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("{} does not name a file", source.display()),
		)),
	}
}

/// Identity of a file's content as seen by the filesystem.
///
/// A cache records the stamp of its source and is only trusted while the
/// source still carries exactly that stamp.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FileStamp {
	modified: SystemTime,
	len: u64,
}

pub(crate) fn file_stamp(path: &Path) -> io::Result<FileStamp> {
	let metadata = fs::metadata(path)?;
	Ok(FileStamp {
		modified: metadata.modified()?,
		len: metadata.len(),
	})
}

/// Token set name of a file: its stem, `data/titles.json` → `titles`.
pub(crate) fn set_name(path: &Path) -> io::Result<String> {
	path.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("{} has no stem", path.display())))
}

/// Regular files of `dir` ending in `.extension`, sorted by path.
pub(crate) fn files_with_extension(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(OsStr::new(extension)) {
			files.push(path);
		}
	}
	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cache_sits_next_to_source() {
		assert_eq!(cache_path(Path::new("data/fantasy.json")).unwrap(), PathBuf::from("data/fantasy.bin"));
		assert!(cache_path(Path::new("..")).is_err());
	}

	#[test]
	fn set_name_is_the_stem() {
		assert_eq!(set_name(Path::new("./data/titles.json")).unwrap(), "titles");
		assert_eq!(set_name(Path::new("titles.json")).unwrap(), "titles");
	}

	#[test]
	fn stamp_follows_content() {
		let dir = tempfile::tempdir().unwrap();
		let source = dir.path().join("a.json");
		fs::write(&source, "{}").unwrap();
		let before = file_stamp(&source).unwrap();
		assert_eq!(file_stamp(&source).unwrap(), before);

		// Same tick is possible, so a length change must be enough.
		fs::write(&source, r#"{"a": ["b"]}"#).unwrap();
		assert_ne!(file_stamp(&source).unwrap(), before);

		assert!(file_stamp(&dir.path().join("missing.json")).is_err());
	}

	#[test]
	fn lists_only_matching_files() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.json"), "{}").unwrap();
		fs::write(dir.path().join("a.json"), "{}").unwrap();
		fs::write(dir.path().join("a.bin"), "").unwrap();
		fs::create_dir(dir.path().join("nested.json")).unwrap();
		let files = files_with_extension(dir.path(), "json").unwrap();
		assert_eq!(files, vec![dir.path().join("a.json"), dir.path().join("b.json")]);
	}
}
