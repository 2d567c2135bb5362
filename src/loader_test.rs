use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use super::*;

/// Loader whose results are released by the test, one name at a time.
struct GatedLoader {
    pending: RefCell<HashMap<String, oneshot::Receiver<Result<String, InitError>>>>,
    started: RefCell<Vec<String>>,
}

impl GatedLoader {
    fn new(names: &[&str]) -> (Rc<Self>, HashMap<String, oneshot::Sender<Result<String, InitError>>>) {
        let mut pending = HashMap::new();
        let mut senders = HashMap::new();
        for name in names {
            let (tx, rx) = oneshot::channel();
            pending.insert((*name).to_owned(), rx);
            senders.insert((*name).to_owned(), tx);
        }
        (Rc::new(Self { pending: RefCell::new(pending), started: RefCell::new(Vec::new()) }), senders)
    }
}

impl ShaderLoader for GatedLoader {
    async fn load(&self, name: &str) -> Result<String, InitError> {
        self.started.borrow_mut().push(name.to_owned());
        let rx = self.pending.borrow_mut().remove(name);
        match rx {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(InitError::shader_load(name, "cancelled"))),
            None => Err(InitError::shader_load(name, "unknown")),
        }
    }
}

// =============================================================
// load_sources
// =============================================================

#[test]
fn loads_both_stages_by_name() {
    let loader = StaticShaderLoader::new().with("main.vert", "void v(){}").with("main.frag", "void f(){}");
    let sources = block_on(load_sources(&loader, &ShaderNames::default())).unwrap();
    assert_eq!(sources.vertex, "void v(){}");
    assert_eq!(sources.fragment, "void f(){}");
}

#[test]
fn missing_stage_fails_with_its_name() {
    let loader = StaticShaderLoader::new().with("main.vert", "void v(){}");
    let err = block_on(load_sources(&loader, &ShaderNames::default())).unwrap_err();
    assert_eq!(err, InitError::shader_load("main.frag", "not found"));
}

#[test]
fn both_loads_start_before_either_completes() {
    let (loader, _senders) = GatedLoader::new(&["main.vert", "main.frag"]);
    let mut pool = LocalPool::new();
    let loader_in = Rc::clone(&loader);
    pool.spawner()
        .spawn_local(async move {
            let names = ShaderNames::default();
            drop(load_sources(&*loader_in, &names).await);
        })
        .unwrap();

    pool.run_until_stalled();

    assert_eq!(*loader.started.borrow(), vec!["main.vert".to_owned(), "main.frag".to_owned()]);
}

#[test]
fn join_waits_for_both_in_either_order() {
    let (loader, mut senders) = GatedLoader::new(&["main.vert", "main.frag"]);
    let result = Rc::new(RefCell::new(None));
    let mut pool = LocalPool::new();
    let loader_in = Rc::clone(&loader);
    let result_in = Rc::clone(&result);
    pool.spawner()
        .spawn_local(async move {
            let names = ShaderNames::default();
            *result_in.borrow_mut() = Some(load_sources(&*loader_in, &names).await);
        })
        .unwrap();

    pool.run_until_stalled();
    senders.remove("main.frag").unwrap().send(Ok("frag".into())).unwrap();
    pool.run_until_stalled();
    assert!(result.borrow().is_none(), "must not resolve on first completion");

    senders.remove("main.vert").unwrap().send(Ok("vert".into())).unwrap();
    pool.run_until_stalled();

    let sources = result.borrow_mut().take().unwrap().unwrap();
    assert_eq!(sources, ShaderSources { vertex: "vert".into(), fragment: "frag".into() });
}

#[test]
fn first_failure_aborts_without_waiting_for_the_other() {
    let (loader, mut senders) = GatedLoader::new(&["main.vert", "main.frag"]);
    let result = Rc::new(RefCell::new(None));
    let mut pool = LocalPool::new();
    let loader_in = Rc::clone(&loader);
    let result_in = Rc::clone(&result);
    pool.spawner()
        .spawn_local(async move {
            let names = ShaderNames::default();
            *result_in.borrow_mut() = Some(load_sources(&*loader_in, &names).await);
        })
        .unwrap();

    pool.run_until_stalled();
    senders
        .remove("main.vert")
        .unwrap()
        .send(Err(InitError::shader_load("main.vert", "HTTP 404")))
        .unwrap();
    pool.run_until_stalled();

    let err = result.borrow_mut().take().unwrap().unwrap_err();
    assert_eq!(err, InitError::shader_load("main.vert", "HTTP 404"));
    // The fragment load was dropped, so its channel is closed.
    assert!(senders.remove("main.frag").unwrap().is_canceled());
}

// =============================================================
// HttpShaderLoader
// =============================================================

#[test]
fn empty_base_is_page_relative() {
    assert_eq!(HttpShaderLoader::new("").url_for("main.vert"), "main.vert");
}

#[test]
fn base_and_name_are_joined_with_one_slash() {
    let loader = HttpShaderLoader::new("https://cdn.example.com/shaders/");
    assert_eq!(loader.url_for("/main.frag"), "https://cdn.example.com/shaders/main.frag");
    assert_eq!(loader.url_for("main.frag"), "https://cdn.example.com/shaders/main.frag");
}

#[test]
fn relative_base_is_kept() {
    assert_eq!(HttpShaderLoader::new("assets").url_for("main.vert"), "assets/main.vert");
}

#[test]
fn default_names_match_original_assets() {
    let names = ShaderNames::default();
    assert_eq!(names.vertex, "main.vert");
    assert_eq!(names.fragment, "main.frag");
}
