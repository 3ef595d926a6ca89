use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::ignore::IgnoreMatcher;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the repository metadata directory
pub const RIFT_DIR: &str = ".rift";

/// High-level repository coordinator
///
/// Owns repository-relative paths and composes the database, index, refs,
/// workspace and ignore matcher. A fresh instance per invocation is
/// sufficient: all repository state lives in explicit files, read and
/// written by each operation. Concurrent invocations against the same
/// repository may race on the index file and head pointer and are not
/// supported.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    ignores: IgnoreMatcher,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;

        let index = Index::new(path.join(RIFT_DIR).join("index").into_boxed_path());
        let database = Database::new(path.join(RIFT_DIR).join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(path.join(RIFT_DIR).into_boxed_path());
        let ignores = IgnoreMatcher::load(&path)?;

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
            ignores,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub(crate) fn index(&self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub(crate) fn database(&self) -> &Database {
        &self.database
    }

    pub(crate) fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub(crate) fn refs(&self) -> &Refs {
        &self.refs
    }

    pub(crate) fn ignores(&self) -> &IgnoreMatcher {
        &self.ignores
    }
}
