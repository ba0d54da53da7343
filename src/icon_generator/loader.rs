//! # 源图加载模块
//!
//! ## 设计思路
//!
//! 在做任何缩放或写盘之前完成全部前置校验（fail-fast）：
//! 源文件缺失时立即返回，不触碰任何输出文件。
//!
//! ## 实现思路
//!
//! 1. 校验源路径存在且为普通文件
//! 2. 读入字节并猜测格式
//! 3. 先读 header 尺寸，拒绝 0 尺寸
//! 4. 完整解码
//! 5. 统一转换为 RGBA8（只做一次）

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};

use super::source::SourceImage;
use super::{IconConfig, IconError, IconGenerator};

impl IconGenerator {
    /// 定位并校验源图路径。
    ///
    /// 路径不存在或不是普通文件时返回 `MissingSource`。
    pub fn locate_source(config: &IconConfig) -> Result<PathBuf, IconError> {
        let path = config.source_path();
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(path),
            Ok(_) => {
                log::warn!("⚠️ 源路径不是普通文件：{}", path.display());
                Err(IconError::MissingSource(path))
            }
            Err(_) => Err(IconError::MissingSource(path)),
        }
    }

    /// 读取并解码源图，返回已统一为 RGBA 的只读图像。
    pub(crate) fn decode_source(path: &Path) -> Result<SourceImage, IconError> {
        let bytes = fs::read(path).map_err(|e| {
            IconError::FileSystem(format!("读取源图片 '{}' 失败：{}", path.display(), e))
        })?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&bytes)?;
        if header_width == 0 || header_height == 0 {
            return Err(IconError::Decode(format!(
                "源图片尺寸无效：{}x{}",
                header_width, header_height
            )));
        }

        let decoded = ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()
            .map_err(|e| IconError::Decode(format!("无法识别图片格式：{}", e)))?
            .decode()
            .map_err(IconError::from_decode)?;

        let source = Self::normalize_rgba(decoded);

        log::info!(
            "✅ 源图片解码成功 - 路径: {} 尺寸: {}x{} 原始颜色: {:?}",
            path.display(),
            source.width(),
            source.height(),
            source.original_color()
        );

        Ok(source)
    }

    /// 统一转换为 4 通道 RGBA8。
    ///
    /// 已是 RGBA8 时不复制像素。
    pub(crate) fn normalize_rgba(image: DynamicImage) -> SourceImage {
        let original_color = image.color();
        let rgba = match image {
            DynamicImage::ImageRgba8(rgba) => rgba,
            other => {
                log::debug!("🎨 颜色模式 {:?} 转换为 RGBA8", original_color);
                other.to_rgba8()
            }
        };

        SourceImage {
            rgba,
            original_color,
        }
    }

    /// 仅通过图片头信息读取宽高。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), IconError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconError::Decode(format!("无法识别图片格式：{}", e)))?;

        if reader.format().is_none() {
            return Err(IconError::Decode("无法识别图片格式".to_string()));
        }

        reader.into_dimensions().map_err(IconError::from_decode)
    }
}
