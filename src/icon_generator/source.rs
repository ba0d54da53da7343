//! # 数据源与中间模型
//!
//! 将“输入源图”“缩放结果”“输出记录”解耦：
//! - `SourceImage` 表示已解码且统一为 RGBA 的源图（只读）
//! - `DerivedImage` 表示某一目标尺寸的缩放副本
//! - `GeneratedIcon` / `GenerationReport` 表示写盘结果

use std::path::PathBuf;

use image::{ColorType, RgbaImage};

/// 单个 PNG 输出目标。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngTarget {
    pub width: u32,
    pub height: u32,
    pub file_name: String,
}

impl PngTarget {
    pub fn new(width: u32, height: u32, file_name: impl Into<String>) -> Self {
        Self {
            width,
            height,
            file_name: file_name.into(),
        }
    }
}

/// 解码后的源图。
///
/// 构造时已转换为 RGBA8，之后不再修改。
pub struct SourceImage {
    pub(crate) rgba: RgbaImage,
    /// 解码时的原始颜色类型（仅用于诊断）。
    pub(crate) original_color: ColorType,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.rgba.dimensions()
    }

    pub fn original_color(&self) -> ColorType {
        self.original_color
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.rgba
    }
}

/// 某一目标尺寸的缩放结果。
pub(crate) struct DerivedImage {
    pub(crate) rgba: RgbaImage,
}

impl DerivedImage {
    pub(crate) fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub(crate) fn height(&self) -> u32 {
        self.rgba.height()
    }
}

/// 输出文件种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Png,
    Ico,
}

/// 已写入的单个图标文件。
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    pub kind: IconKind,
    pub path: PathBuf,
    pub file_name: String,
    /// 该文件包含的全部分辨率（PNG 只有一个）。
    pub sizes: Vec<(u32, u32)>,
    pub bytes_written: u64,
}

/// 一次完整运行的产物清单，按写入顺序排列。
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub source_dimensions: (u32, u32),
    pub icons: Vec<GeneratedIcon>,
}

impl GenerationReport {
    pub fn pngs(&self) -> impl Iterator<Item = &GeneratedIcon> {
        self.icons.iter().filter(|i| i.kind == IconKind::Png)
    }

    pub fn ico(&self) -> Option<&GeneratedIcon> {
        self.icons.iter().find(|i| i.kind == IconKind::Ico)
    }

    pub fn total_bytes(&self) -> u64 {
        self.icons.iter().map(|i| i.bytes_written).sum()
    }
}
