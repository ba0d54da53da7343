//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

use std::path::PathBuf;

/// 图标生成统一错误类型。
///
/// 该类型会在进程边界被上转为 `AppError`，最终决定退出码。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("源图片不存在：{}", .0.display())]
    MissingSource(PathBuf),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("不支持的格式：{0}（请确认 image crate 已启用 png / ico 特性）")]
    Unsupported(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),
}

impl IconError {
    /// 稳定错误码，用于日志检索。
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSource(_) => "E_MISSING_SOURCE",
            Self::Decode(_) => "E_DECODE",
            Self::Resize(_) => "E_RESIZE",
            Self::Encode(_) => "E_ENCODE",
            Self::FileSystem(_) => "E_FILESYSTEM",
            Self::Unsupported(_) => "E_UNSUPPORTED",
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
        }
    }

    /// 出错所在阶段。
    pub fn stage(&self) -> &'static str {
        match self {
            Self::MissingSource(_) | Self::InvalidConfig(_) => "validate",
            Self::Decode(_) | Self::Unsupported(_) => "load",
            Self::Resize(_) => "resize",
            Self::Encode(_) | Self::FileSystem(_) => "write",
        }
    }

    /// 将 `image` crate 的错误映射为解码阶段错误。
    ///
    /// 编解码器缺失（`Unsupported`）单独归类，其余视为数据损坏。
    /// 解码在内存中进行，此处的 I/O 错误只可能是数据截断。
    pub(crate) fn from_decode(error: image::ImageError) -> Self {
        match error {
            image::ImageError::Unsupported(e) => Self::Unsupported(e.to_string()),
            image::ImageError::IoError(e) => Self::Decode(format!("源图片数据被截断：{}", e)),
            other => Self::Decode(other.to_string()),
        }
    }

    /// 将 `image` crate 的错误映射为编码阶段错误。
    pub(crate) fn from_encode(error: image::ImageError) -> Self {
        match error {
            image::ImageError::Unsupported(e) => Self::Unsupported(e.to_string()),
            image::ImageError::IoError(e) => Self::FileSystem(format!("写入图标失败：{}", e)),
            other => Self::Encode(other.to_string()),
        }
    }
}
