//! 存储模块
//!
//! 平面文件格式的编码、解码与读写

pub mod flatfile;

pub use flatfile::{decode, encode, graph_file_name, load_from, save_to, GRAPH_FILE_EXT};
