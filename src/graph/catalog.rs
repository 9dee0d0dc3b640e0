//! Graph catalog for named flat-file persistence
//!
//! Responsible for saving, loading, dropping and listing graphs under a
//! base data directory. One flat file per graph; a catalog.json keeps the
//! registered names. Single-threaded: the caller owns the catalog
//! exclusively, so there is no locking.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::storage::flatfile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const CATALOG_FILE: &str = "catalog.json";

#[derive(Debug, Serialize, Deserialize, Default)]
struct CatalogMeta {
    graphs: Vec<String>,
}

/// GraphCatalog maintains a registry of saved graphs under a base data directory.
pub struct GraphCatalog {
    base_dir: PathBuf,
    graphs: Vec<String>,
}

impl GraphCatalog {
    /// Open catalog at base_dir, creating the directory if missing.
    pub fn open<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)
            .map_err(|e| Error::StorageError(format!("无法创建数据目录 {:?}: {}", base_dir, e)))?;

        let mut catalog = Self {
            base_dir,
            graphs: Vec::new(),
        };
        if let Some(meta) = catalog.load_meta()? {
            catalog.graphs = meta.graphs;
        } else {
            catalog.save_meta()?;
        }
        Ok(catalog)
    }

    fn meta_path(&self) -> PathBuf {
        self.base_dir.join(CATALOG_FILE)
    }

    fn graph_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(flatfile::graph_file_name(name))
    }

    fn load_meta(&self) -> Result<Option<CatalogMeta>> {
        let path = self.meta_path();
        if !path.exists() {
            return Ok(None);
        }
        let data =
            fs::read(&path).map_err(|e| Error::StorageError(format!("读取 catalog 失败: {}", e)))?;
        let meta: CatalogMeta = serde_json::from_slice(&data)
            .map_err(|e| Error::StorageError(format!("解析 catalog 失败: {}", e)))?;
        Ok(Some(meta))
    }

    fn save_meta(&self) -> Result<()> {
        let meta = CatalogMeta {
            graphs: self.graphs.clone(),
        };
        let data = serde_json::to_vec_pretty(&meta)
            .map_err(|e| Error::StorageError(format!("序列化 catalog 失败: {}", e)))?;
        fs::write(self.meta_path(), data)
            .map_err(|e| Error::StorageError(format!("写入 catalog 失败: {}", e)))?;
        Ok(())
    }

    /// Save a graph to its flat file and register the name.
    /// Saving under an existing name overwrites the previous file.
    pub fn save_graph(&mut self, graph: &Graph) -> Result<()> {
        flatfile::save_to(graph, self.graph_path(graph.name()))?;
        if !self.graphs.iter().any(|n| n == graph.name()) {
            self.graphs.push(graph.name().to_string());
            self.graphs.sort();
            self.save_meta()?;
        }
        info!(graph = graph.name(), "图已保存");
        Ok(())
    }

    /// Load a graph by name. Unregistered names are tried against the
    /// directory anyway and registered on success (lazy discovery).
    pub fn load_graph(&mut self, name: &str) -> Result<Graph> {
        let path = self.graph_path(name);
        if !path.exists() {
            return Err(Error::GraphNotFound(name.to_string()));
        }
        let graph = flatfile::load_from(name, &path)?;
        if !self.graphs.iter().any(|n| n == name) {
            self.graphs.push(name.to_string());
            self.graphs.sort();
            self.save_meta()?;
        }
        info!(graph = name, "图已加载");
        Ok(graph)
    }

    /// Drop a graph: remove its file and unregister the name.
    pub fn drop_graph(&mut self, name: &str) -> Result<()> {
        let registered = self.graphs.iter().any(|n| n == name);
        let path = self.graph_path(name);
        if !registered && !path.exists() {
            return Err(Error::GraphNotFound(name.to_string()));
        }
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| Error::StorageError(format!("删除图文件失败: {}", e)))?;
        }
        self.graphs.retain(|n| n != name);
        self.save_meta()?;
        info!(graph = name, "图已删除");
        Ok(())
    }

    /// List registered graph names, ascending.
    pub fn list_graphs(&self) -> Vec<String> {
        self.graphs.clone()
    }

    /// Whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.graphs.iter().any(|n| n == name)
    }
}
