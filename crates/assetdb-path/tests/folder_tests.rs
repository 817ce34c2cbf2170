//! Strict and assumed folder resolution against a backing store.

use assetdb_path::{AssetPath, BackingStore, Error, FsStore, MemoryStore, ProjectRoots};
use assetdb_test_utils::TestProject;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

fn path(s: &str) -> AssetPath {
    AssetPath::parse(s).unwrap()
}

fn populated_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.add_file(&path("Assets/sub/data.txt"));
    store.add_directory(&path("Assets/dir.v2"));
    store.add_file(&path("Packages/com.x/package.json"));
    store.add_file(&path("Packages/manifest.json"));
    store
}

#[fixture]
fn store() -> MemoryStore {
    populated_store()
}

#[rstest]
#[case("Assets", "Assets")]
#[case("Assets/sub", "Assets/sub")]
#[case("Assets/sub/data.txt", "Assets/sub")]
#[case("Assets/dir.v2", "Assets/dir.v2")]
#[case("Packages/com.x/package.json", "Packages/com.x")]
fn test_strict_folder_of_existing_entry(
    store: MemoryStore,
    #[case] input: &str,
    #[case] expected: &str,
) {
    let folder = path(input).folder_path(&store).unwrap();
    assert_eq!(folder.as_str(), expected);
}

#[rstest]
#[case("Assets/missing")]
#[case("Assets/missing.txt")]
fn test_strict_folder_of_missing_entry_fails(store: MemoryStore, #[case] input: &str) {
    let err = path(input).folder_path(&store).unwrap_err();
    assert!(err.is_invalid_operation());
    match err {
        Error::InvalidOperation { path, .. } => assert_eq!(path, input),
        other => panic!("expected InvalidOperation, got {other:?}"),
    }
}

#[rstest]
#[case("Assets/sub/data.txt", "Assets/sub")]
#[case("Assets/dir.v2", "Assets/dir.v2")]
#[case("Assets/new/file.txt", "Assets/new")]
#[case("Assets/new/folder", "Assets/new/folder")]
// A missing folder with a dot in its name is taken for a file
#[case("Assets/new/folder.v3", "Assets/new")]
fn test_assumed_folder(store: MemoryStore, #[case] input: &str, #[case] expected: &str) {
    let folder = path(input).folder_path_assumed(&store).unwrap();
    assert_eq!(folder.as_str(), expected);
}

#[rstest]
#[case("Packages/manifest.json")]
#[case("Packages/missing.json")]
fn test_file_directly_under_packages_has_no_folder(store: MemoryStore, #[case] input: &str) {
    let file = path(input);
    let assumed = file.folder_path_assumed(&store).unwrap_err();
    assert!(assumed.is_invalid_operation());
    if file.is_file(&store) {
        assert!(file.folder_path(&store).unwrap_err().is_invalid_operation());
    }
}

#[rstest]
fn test_existence_helpers(store: MemoryStore) {
    let file = path("Assets/sub/data.txt");
    let dir = path("Assets/sub");
    let missing = path("Assets/nope");

    assert!(file.exists(&store) && file.is_file(&store) && !file.is_folder(&store));
    assert!(dir.exists(&store) && dir.is_folder(&store) && !dir.is_file(&store));
    assert!(!missing.exists(&store));
}

#[test]
fn test_store_as_trait_object() {
    let memory = populated_store();
    let dyn_store: &dyn BackingStore = &memory;
    let folder = path("Assets/sub/data.txt").folder_path(dyn_store).unwrap();
    assert_eq!(folder.as_str(), "Assets/sub");
}

#[test]
fn test_fs_store_resolution() {
    let project = TestProject::new();
    project.write_file("Assets/sub/data.txt", "hello");
    project.create_dir("Assets/dir.v2");
    project.write_file("Packages/com.x/package.json", "{}");
    project.write_file("Packages/manifest.json", "{}");
    project.assert_file_exists("Assets/sub/data.txt");
    assert!(project.packages_dir().join("manifest.json").is_file());

    let store = FsStore::new(ProjectRoots::from_project_dir(project.root()));

    assert_eq!(path("Assets").folder_path(&store).unwrap(), "Assets");
    assert_eq!(path("Assets/sub/data.txt").folder_path(&store).unwrap(), "Assets/sub");
    assert_eq!(path("Assets/dir.v2").folder_path(&store).unwrap(), "Assets/dir.v2");
    assert_eq!(
        path("Packages/com.x/package.json").folder_path(&store).unwrap(),
        "Packages/com.x"
    );
    assert!(path("Assets/missing").folder_path(&store).is_err());
    let manifest = path("Packages/manifest.json").folder_path(&store).unwrap_err();
    assert!(manifest.is_invalid_operation());
    assert_eq!(path("Assets/missing.v1").folder_path_assumed(&store).unwrap(), "Assets");

    project.assert_file_not_exists("Assets/missing.v1");
}

#[test]
fn test_fs_store_with_assert_fs() {
    use assert_fs::prelude::*;

    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Assets/Textures/hero.png").write_str("png").unwrap();
    temp.child("Packages").create_dir_all().unwrap();

    let store = FsStore::new(ProjectRoots::from_project_dir(temp.path()));
    let hero = path("Assets/Textures/hero.png");

    assert!(hero.is_file(&store));
    assert!(path("Assets/Textures").is_folder(&store));
    let expected_assets = format!("{}/Assets", temp.path().to_string_lossy().replace('\\', "/"));
    assert_eq!(store.roots().assets_root(), expected_assets);
    temp.child("Assets/Textures/hero.png")
        .assert(predicates::path::is_file());
}
