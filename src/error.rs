//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("图不存在: {0}")]
    GraphNotFound(String),

    #[error("文件格式错误: {0}")]
    FormatError(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("存储错误: {0}")]
    StorageError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
