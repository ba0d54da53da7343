//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义进程边界的 `AppError`，`main` 只与它打交道，
//! 由它决定错误输出与退出码。所有错误对本次运行都是终止性的。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` / `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::icon_generator::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标生成流水线错误（校验 / 解码 / 编码）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 控制台或文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 进程退出码，所有失败统一为 1。
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// 稳定错误码，透传 `IconError::code`。
    pub fn code(&self) -> &'static str {
        match self {
            Self::Icon(e) => e.code(),
            Self::Io(_) => "E_IO",
        }
    }

    /// 出错所在阶段，透传 `IconError::stage`。
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Icon(e) => e.stage(),
            Self::Io(_) => "io",
        }
    }

    /// 面向用户的单行英文错误描述（stderr）。
    ///
    /// 详细的诊断信息走日志，不在这里重复。
    pub fn user_message(&self) -> String {
        match self {
            Self::Icon(IconError::MissingSource(path)) => {
                format!("Source image not found: {}", path.display())
            }
            Self::Icon(IconError::Decode(_)) => "Failed to decode source image".to_string(),
            Self::Icon(IconError::Resize(_)) => "Failed to resize source image".to_string(),
            Self::Icon(IconError::Encode(_)) => "Failed to encode icon".to_string(),
            Self::Icon(IconError::FileSystem(_)) | Self::Io(_) => {
                "Failed to read or write icon files".to_string()
            }
            Self::Icon(IconError::Unsupported(_)) => "Unsupported image format".to_string(),
            Self::Icon(IconError::InvalidConfig(_)) => "Invalid icon configuration".to_string(),
        }
    }

    /// 面向用户的补救提示。
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::Icon(IconError::MissingSource(_)) => {
                Some("Place a square PNG (at least 256x256) at the path above and re-run.")
            }
            Self::Icon(IconError::Unsupported(_)) => Some(
                "Rebuild with the `png` and `ico` features of the `image` crate enabled.",
            ),
            _ => None,
        }
    }
}
