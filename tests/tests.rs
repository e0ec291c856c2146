use scoped_tempfile::{
    Builder, Error, NamespaceLock, PlatformProfile, ScopedTempDir, ScopedTempFile, TempDir,
    TempFile,
};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use std::thread;

fn assert_generated_name(path: &Path, prefix: &str) {
    let name = path.file_name().unwrap().to_str().unwrap();
    let suffix = name.strip_prefix(prefix).expect("name starts with prefix");
    assert_eq!(suffix.len(), 8, "unexpected name {name}");
    assert!(suffix
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'));
}

#[test]
fn created_directory_is_new_and_empty() {
    let mut dir = TempDir::new();
    dir.create().unwrap();

    assert!(dir.good());
    assert!(dir.path().is_dir());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn directory_is_deleted_when_dropping() {
    let path = {
        let dir = ScopedTempDir::new();
        assert!(dir.good());
        assert!(dir.path().is_dir());
        assert_generated_name(dir.path(), "tmp");
        dir.path().to_path_buf()
    };

    assert!(!path.exists());
}

#[test]
fn nested_file_is_deleted_with_directory() {
    let (dir_path, file_path) = {
        let dir = ScopedTempDir::new();
        let file_path = dir.path().join("inner.txt");
        std::fs::write(&file_path, b"data").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("deep.txt"), b"data").unwrap();
        (dir.path().to_path_buf(), file_path)
    };

    assert!(!file_path.exists());
    assert!(!dir_path.exists());
}

#[test]
fn file_is_deleted_when_dropping() {
    let path = {
        let file = ScopedTempFile::with_prefix("file_");
        assert!(file.path().is_file());
        assert_generated_name(file.path(), "file_");
        file.path().to_path_buf()
    };

    assert!(!path.exists());
}

#[test]
fn remove_twice_reports_nothing_the_second_time() {
    let mut dir = TempDir::new();
    dir.create().unwrap();
    let path = dir.path().to_path_buf();

    assert!(dir.remove().is_ok());
    assert!(!dir.good());
    assert!(!path.exists());
    assert!(matches!(dir.remove(), Err(Error::NothingToRemove)));
}

#[test]
fn create_twice_keeps_first_path() {
    let mut dir = TempDir::new();
    dir.create().unwrap();
    let first = dir.path().to_path_buf();

    match dir.create() {
        Err(Error::AlreadyValid(path)) => assert_eq!(path, first),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(dir.path(), first);
    assert!(first.is_dir());
}

#[test]
fn handle_can_be_reused_after_removal() {
    let mut file = TempFile::new();
    file.create().unwrap();
    let first = file.path().to_path_buf();
    file.remove().unwrap();

    file.create().unwrap();
    assert!(file.path().is_file());
    assert_ne!(file.path(), first);
}

#[test]
fn oversized_prefix_fails_without_creating_anything() {
    let prefix = "x".repeat(PlatformProfile::current().max_path_length);
    let mut dir = TempDir::with_prefix(prefix.clone());

    assert!(matches!(dir.create(), Err(Error::PathTooLong)));
    assert!(!dir.good());
    assert_eq!(dir.path(), Path::new(""));

    let file = ScopedTempFile::with_prefix(prefix);
    assert!(!file.good());
}

#[test]
fn path_limit_below_base_fails_without_creating_anything() {
    let base = ScopedTempDir::with_prefix("limit_");
    // One byte short of base + separator + "tmp" + 8 characters + NUL.
    let needed = base.path().as_os_str().len() + 1 + 3 + 8 + 1;
    let profile = PlatformProfile {
        max_path_length: needed - 1,
        ..PlatformProfile::current()
    };
    let mut dir = Builder::new()
        .base_dir(base.path())
        .profile(profile)
        .tempdir();

    assert!(matches!(dir.create(), Err(Error::PathTooLong)));
    assert!(!dir.good());
    assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);

    let profile = PlatformProfile {
        max_path_length: needed,
        ..PlatformProfile::current()
    };
    let dir = Builder::new()
        .base_dir(base.path())
        .profile(profile)
        .scoped_tempdir();
    assert!(dir.good());
    assert_eq!(dir.path().as_os_str().len(), needed - 1);
}

#[test]
fn prefix_cannot_leave_base_dir() {
    let base = ScopedTempDir::with_prefix("base_");
    let elsewhere = ScopedTempDir::with_prefix("elsewhere_");

    let absolute = format!("{}/escaped_", elsewhere.path().display());
    let dir = Builder::new()
        .prefix(absolute)
        .base_dir(base.path())
        .scoped_tempdir();
    assert!(!dir.good() || dir.path().starts_with(base.path()));
    assert_eq!(std::fs::read_dir(elsewhere.path()).unwrap().count(), 0);

    std::fs::create_dir(base.path().join("sub")).unwrap();
    let nested = Builder::new()
        .prefix(format!("sub{}", std::path::MAIN_SEPARATOR))
        .base_dir(base.path())
        .scoped_tempfile();
    assert!(nested.good());
    assert_eq!(nested.path().parent(), Some(base.path().join("sub").as_path()));
}

#[test]
fn concurrent_handles_get_distinct_paths() {
    let handles: Vec<_> = (0..50)
        .map(|_| {
            thread::spawn(|| {
                let mut dir = TempDir::with_prefix("race_");
                dir.create().unwrap();
                dir
            })
        })
        .collect();

    let dirs: Vec<TempDir> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let paths: HashSet<_> = dirs.iter().map(|d| d.path().to_path_buf()).collect();
    assert_eq!(paths.len(), 50);
    assert!(paths.iter().all(|p| p.is_dir()));
}

#[test]
fn explicit_base_dir_is_used() {
    let base = ScopedTempDir::with_prefix("base_");
    let file = Builder::new()
        .prefix("inner_")
        .base_dir(base.path())
        .lock(NamespaceLock::new())
        .scoped_tempfile();

    assert!(file.good());
    assert_eq!(file.path().parent(), Some(base.path()));
    assert_generated_name(file.path(), "inner_");
}

#[test]
fn environment_drives_base_selection() {
    let base = ScopedTempDir::with_prefix("env_");
    let env: HashMap<String, String> = [(
        "TMPDIR".to_owned(),
        base.path().to_string_lossy().into_owned(),
    )]
    .into_iter()
    .collect();

    let dir = Builder::new()
        .environment(Arc::new(env))
        .scoped_tempdir();

    assert!(dir.good());
    assert_eq!(dir.path().parent(), Some(base.path()));
}

#[test]
fn empty_candidate_list_fails_cleanly() {
    let profile = PlatformProfile {
        fixed_roots: &[],
        ..PlatformProfile::current()
    };
    let mut dir = Builder::new()
        .environment(Arc::new(HashMap::<String, String>::new()))
        .profile(profile)
        .tempdir();

    assert!(matches!(
        dir.create(),
        Err(Error::NameSpaceExhausted { candidates: 0 })
    ));
    assert!(!dir.good());
}

#[cfg(feature = "tokio")]
#[tokio::test]
async fn async_handles_see_the_same_file() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let file = ScopedTempFile::new();
    let mut writer = file.open_rw_async().await.unwrap();
    writer.write_all(b"shared").await.unwrap();
    writer.flush().await.unwrap();

    let mut contents = String::new();
    file.open_ro_async()
        .await
        .unwrap()
        .read_to_string(&mut contents)
        .await
        .unwrap();
    assert_eq!(contents, "shared");
}
