//! 通用类型定义

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID (64位整数，文件格式中以十进制文本存储)
pub type VertexId = u64;

/// 边权重
pub type Weight = i64;

/// 图模式（加权 + 有向两个标志位，构造时固定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphMode {
    /// 是否加权
    pub weighted: bool,
    /// 是否有向
    pub directed: bool,
}

impl GraphMode {
    pub fn new(weighted: bool, directed: bool) -> Self {
        Self { weighted, directed }
    }

    /// 编码为文件头部（两个 '0'/'1' 字符）
    pub fn to_header(&self) -> String {
        format!(
            "{}{}",
            if self.weighted { '1' } else { '0' },
            if self.directed { '1' } else { '0' }
        )
    }

    /// 从文件头部解码
    pub fn from_header(line: &str) -> Result<Self> {
        let mut chars = line.chars();
        let (weighted, directed) = match (chars.next(), chars.next(), chars.next()) {
            (Some(w), Some(d), None) => (parse_flag(w)?, parse_flag(d)?),
            _ => {
                return Err(Error::FormatError(format!(
                    "头部应为两个标志位, 实际为 {:?}",
                    line
                )))
            }
        };
        Ok(Self { weighted, directed })
    }
}

fn parse_flag(c: char) -> Result<bool> {
    match c {
        '0' => Ok(false),
        '1' => Ok(true),
        _ => Err(Error::FormatError(format!("无效的标志位: {:?}", c))),
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            if self.weighted { "加权" } else { "无权" },
            if self.directed { "有向" } else { "无向" }
        )
    }
}
