//! # 编码与写盘模块
//!
//! ## 设计思路
//!
//! PNG 与 ICO 都直接覆盖目标路径，不做临时文件 + 重命名；
//! 写到一半崩溃可能留下截断文件，重新运行即可恢复。
//!
//! ## 实现思路
//!
//! - PNG：`PngEncoder` 无损编码 RGBA8。
//! - ICO：每个尺寸编码为一帧 PNG 压缩的 `IcoFrame`，最小尺寸为首帧。

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::source::DerivedImage;
use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 将缩放结果编码为 PNG 并写入 `path`，返回写入字节数。
    pub(crate) fn write_png(image: &DerivedImage, path: &Path) -> Result<u64, IconError> {
        let mut writer = Self::create_output(path)?;

        PngEncoder::new(&mut writer)
            .write_image(
                image.rgba.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(IconError::from_encode)?;

        Self::finish_output(writer, path)
    }

    /// 将多帧编码为单个 ICO 文件，返回写入字节数。
    ///
    /// `frames` 的顺序即 ICO 目录项顺序。
    pub(crate) fn write_ico(frames: &[DerivedImage], path: &Path) -> Result<u64, IconError> {
        if frames.is_empty() {
            return Err(IconError::Encode("ICO 至少需要一帧".to_string()));
        }

        let ico_frames = frames
            .iter()
            .map(|frame| {
                IcoFrame::as_png(
                    frame.rgba.as_raw(),
                    frame.width(),
                    frame.height(),
                    ExtendedColorType::Rgba8,
                )
                .map_err(IconError::from_encode)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut writer = Self::create_output(path)?;
        IcoEncoder::new(&mut writer)
            .encode_images(&ico_frames)
            .map_err(IconError::from_encode)?;

        Self::finish_output(writer, path)
    }

    fn create_output(path: &Path) -> Result<BufWriter<File>, IconError> {
        let file = File::create(path).map_err(|e| {
            IconError::FileSystem(format!("创建输出文件 '{}' 失败：{}", path.display(), e))
        })?;
        Ok(BufWriter::new(file))
    }

    fn finish_output(mut writer: BufWriter<File>, path: &Path) -> Result<u64, IconError> {
        writer.flush().map_err(|e| {
            IconError::FileSystem(format!("写入输出文件 '{}' 失败：{}", path.display(), e))
        })?;
        drop(writer);

        let written = fs::metadata(path)
            .map(|meta| meta.len())
            .map_err(|e| IconError::FileSystem(format!("读取输出文件信息失败：{}", e)))?;
        Ok(written)
    }
}
