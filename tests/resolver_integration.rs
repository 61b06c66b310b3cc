//! Integration tests for resolution and loading against a real tree.
//!
//! The fixture mirrors a small application laid out by PSR-0 rules under a
//! temporary directory, registered as the `TestApp` namespace.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use nsloader::core::resolver::Resolver;
use nsloader::hook::{HookChain, SymbolResolutionHook};
use nsloader::loader::{FsLoader, LoadError, SourceLoader};

// =============================================================================
// Test Fixtures
// =============================================================================

/// Temporary source tree with a handful of classes.
struct TestTree {
    dir: TempDir,
}

impl TestTree {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let tree = Self { dir };

        tree.write("TestApp/Controller/TestController.php", "class TestController {}");
        tree.write("TestApp/Controller/Controller.php", "class TestApp_Controller_Controller {}");
        tree.write("TestApp/Model/TestModel.php", "class TestModel {}");
        tree.write(
            "TestApp/With_Underscore/Subnamespace/Controller.php",
            "class Subnamespace_Controller {}",
        );
        tree.write("TestApp/Bootstrap.php", "class Bootstrap {}");
        tree
    }

    fn write(&self, relative: &str, contents: &str) {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn root_str(&self) -> &str {
        self.root().to_str().expect("temp dir is valid UTF-8")
    }

    fn resolver(&self, loader: Arc<FsLoader>) -> Resolver {
        let resolver = Resolver::new(loader);
        resolver.register("TestApp", self.root_str());
        resolver
    }
}

fn loaded_paths(loader: &FsLoader) -> Vec<PathBuf> {
    loader.loaded().into_iter().map(|s| s.path).collect()
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn namespaced_class_loads() {
    let tree = TestTree::new();
    let loader = Arc::new(FsLoader::new());
    let resolver = tree.resolver(loader.clone());

    assert!(resolver
        .load_if_present("\\TestApp\\Controller\\TestController")
        .unwrap());

    let loaded = loader.loaded();
    assert_eq!(loaded.len(), 1);
    assert_eq!(
        loaded[0].path,
        PathBuf::from(format!(
            "{}/TestApp/Controller/TestController.php",
            tree.root_str()
        ))
    );
    assert_eq!(loaded[0].source, "class TestController {}");
}

#[test]
fn no_namespace_does_not_load() {
    let tree = TestTree::new();
    tree.write("NoNamespace.php", "class NoNamespace {}");
    let loader = Arc::new(FsLoader::new());
    let resolver = tree.resolver(loader.clone());

    assert!(!resolver.load_if_present("NoNamespace").unwrap());
    assert!(loader.loaded().is_empty());
}

#[test]
fn missing_class_does_not_load() {
    let tree = TestTree::new();
    let loader = Arc::new(FsLoader::new());
    let resolver = Resolver::new(loader.clone());
    resolver.register("SprayFire", tree.root_str());

    assert!(!resolver.load_if_present("\\SprayFire\\Core\\NoExist").unwrap());
    assert!(loader.loaded().is_empty());
}

#[test]
fn old_style_class_loads() {
    let tree = TestTree::new();
    let loader = Arc::new(FsLoader::new());
    let resolver = tree.resolver(loader.clone());

    assert!(resolver
        .load_if_present("TestApp_Controller_Controller")
        .unwrap());
    assert_eq!(
        loaded_paths(&loader),
        vec![tree.root().join("TestApp/Controller/Controller.php")]
    );
}

#[test]
fn old_and_new_style_intermingled() {
    let tree = TestTree::new();
    let loader = Arc::new(FsLoader::new());
    let resolver = tree.resolver(loader.clone());

    assert!(resolver
        .load_if_present("\\TestApp\\With_Underscore\\Subnamespace_Controller")
        .unwrap());
    assert_eq!(
        loaded_paths(&loader),
        vec![tree
            .root()
            .join("TestApp/With_Underscore/Subnamespace/Controller.php")]
    );
}

#[test]
fn one_sublevel_under_top_namespace() {
    let tree = TestTree::new();
    let loader = Arc::new(FsLoader::new());
    let resolver = tree.resolver(loader.clone());

    assert!(resolver.load_if_present("\\TestApp\\Bootstrap").unwrap());
}

#[cfg(unix)]
#[test]
fn unreadable_file_propagates_error() {
    use std::os::unix::fs::PermissionsExt;

    let tree = TestTree::new();
    let path = tree.root().join("TestApp/Model/TestModel.php");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read regardless of mode bits.
    if fs::read(&path).is_ok() {
        return;
    }

    let loader = Arc::new(FsLoader::new());
    let resolver = tree.resolver(loader.clone());
    let err = resolver
        .load_if_present("TestApp\\Model\\TestModel")
        .unwrap_err();

    assert!(matches!(err, LoadError::PermissionDenied(_)));
    assert!(loader.loaded().is_empty());
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn registered_namespaces_in_order() {
    let tree = TestTree::new();
    let root = tree.root_str();
    let resolver = Resolver::new(Arc::new(FsLoader::new()));

    resolver.register("SprayFire", root);
    resolver.register("SomethingElse", &format!("{}/something_else", root));
    resolver.register("Again", &format!("{}/again", root));

    assert_eq!(
        resolver.namespaces(),
        vec![
            ("SprayFire".to_string(), root.to_string()),
            ("SomethingElse".to_string(), format!("{}/something_else", root)),
            ("Again".to_string(), format!("{}/again", root)),
        ]
    );
}

#[test]
fn reregistering_moves_resolution() {
    let first = TestTree::new();
    let second = TestTree::new();
    second.write("TestApp/Only/InSecond.php", "class InSecond {}");

    let loader = Arc::new(FsLoader::new());
    let resolver = first.resolver(loader.clone());
    assert!(!resolver.load_if_present("TestApp\\Only\\InSecond").unwrap());

    resolver.register("TestApp", second.root_str());
    assert!(resolver.load_if_present("TestApp\\Only\\InSecond").unwrap());
    assert_eq!(resolver.namespaces().len(), 1);
}

// =============================================================================
// Runtime hook
// =============================================================================

#[test]
fn attached_resolver_serves_unknown_symbols() {
    let tree = TestTree::new();
    let loader = Arc::new(FsLoader::new());
    let resolver = Arc::new(tree.resolver(loader.clone()));
    let runtime = HookChain::new();

    assert!(resolver.attach_to_runtime(&runtime));
    assert!(runtime.dispatch("\\TestApp\\Model\\TestModel").unwrap());
    assert!(!runtime.dispatch("\\Unknown\\Model\\TestModel").unwrap());
    assert_eq!(loader.loaded().len(), 1);

    assert!(resolver.detach_from_runtime(&runtime));
    assert!(runtime.is_empty());
}

#[test]
fn non_utf8_source_does_not_stop_dispatch() {
    let tree = TestTree::new();
    let latin1 = tree.root().join("TestApp/Model/Legacy.php");
    fs::write(&latin1, b"class Legacy { /* caf\xe9 */ }").unwrap();

    let loader = Arc::new(FsLoader::new());
    let resolver = Arc::new(tree.resolver(loader.clone()));
    let runtime = HookChain::new();
    resolver.attach_to_runtime(&runtime);

    assert!(runtime.dispatch("TestApp\\Model\\Legacy").unwrap());
    assert!(runtime.dispatch("TestApp\\Model\\TestModel").unwrap());
    assert_eq!(loaded_paths(&loader).len(), 2);
    assert!(loader.loaded()[0].source.contains('\u{FFFD}'));
}

#[test]
fn custom_hook_implementation() {
    use nsloader::hook::SymbolHandler;
    use std::sync::Mutex;

    /// Runtime that keeps a single handler slot.
    #[derive(Default)]
    struct SingleSlot {
        slot: Mutex<Option<Arc<dyn SymbolHandler>>>,
    }

    impl SymbolResolutionHook for SingleSlot {
        fn attach(&self, handler: Arc<dyn SymbolHandler>) -> bool {
            let mut slot = self.slot.lock().unwrap();
            if slot.is_some() {
                return false;
            }
            *slot = Some(handler);
            true
        }

        fn detach(&self, _handler: &Arc<dyn SymbolHandler>) -> bool {
            self.slot.lock().unwrap().take().is_some()
        }
    }

    let tree = TestTree::new();
    let loader = Arc::new(FsLoader::new());
    let resolver = Arc::new(tree.resolver(loader.clone()));
    let runtime = SingleSlot::default();

    assert!(resolver.attach_to_runtime(&runtime));
    let handler = runtime.slot.lock().unwrap().clone().unwrap();
    assert!(handler.handle("TestApp\\Bootstrap").unwrap());
    assert!(loader.exists(&tree.root().join("TestApp/Bootstrap.php")));
    assert!(resolver.detach_from_runtime(&runtime));
}
