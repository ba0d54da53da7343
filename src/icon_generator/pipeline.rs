//! # 缩放流水线模块
//!
//! ## 设计思路
//!
//! 所有输出尺寸都通过同一个缩放入口生成，保证 PNG 与 ICO 使用一致的滤镜。
//! 目标尺寸严格等于声明尺寸，不做等比约束，非正方形源图会被拉伸。
//!
//! ## 实现思路
//!
//! 1. 优先使用 `fast_image_resize` 的卷积缩放（Lanczos3）
//! 2. 失败时回退 `image::imageops::resize`，保证流程不中断
//! 3. 源图小于目标尺寸时同样按滤镜放大，只记录警告

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::RgbaImage;

use super::source::{DerivedImage, SourceImage};
use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 将源图缩放到精确的 `(width, height)`。
    pub(crate) fn resize_exact(
        source: &SourceImage,
        width: u32,
        height: u32,
        filter: FilterType,
    ) -> Result<DerivedImage, IconError> {
        if width == 0 || height == 0 {
            return Err(IconError::Resize(format!("目标尺寸无效：{}x{}", width, height)));
        }

        if source.dimensions() == (width, height) {
            return Ok(DerivedImage {
                rgba: source.as_rgba().clone(),
            });
        }

        let rgba = match Self::resize_with_fast_image_resize(source.as_rgba(), width, height, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}", err);
                image::imageops::resize(source.as_rgba(), width, height, filter)
            }
        };

        if rgba.dimensions() != (width, height) {
            return Err(IconError::Resize(format!(
                "缩放输出尺寸异常：期望 {}x{}，实际 {}x{}",
                width,
                height,
                rgba.width(),
                rgba.height()
            )));
        }

        Ok(DerivedImage { rgba })
    }

    /// 直接以 `&RgbaImage` 作为源视图缩放，不复制源缓冲。
    fn resize_with_fast_image_resize(
        src: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, IconError> {
        let mut dst = RgbaImage::new(target_width, target_height);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(src, &mut dst, Some(&options))
            .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

        Ok(dst)
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba};

    fn solid_source(width: u32, height: u32, pixel: Rgba<u8>) -> SourceImage {
        IconGenerator::normalize_rgba(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width, height, pixel,
        )))
    }

    #[test]
    fn downscale_produces_exact_dimensions() {
        let source = solid_source(300, 300, Rgba([200, 100, 50, 255]));
        let derived = IconGenerator::resize_exact(&source, 32, 32, FilterType::Lanczos3)
            .expect("resize should succeed");

        assert_eq!((derived.width(), derived.height()), (32, 32));
    }

    #[test]
    fn non_square_source_is_stretched_not_letterboxed() {
        let source = solid_source(300, 200, Rgba([0, 0, 255, 255]));
        let derived = IconGenerator::resize_exact(&source, 128, 128, FilterType::Lanczos3)
            .expect("resize should succeed");

        assert_eq!(derived.rgba.dimensions(), (128, 128));
        // 拉伸后四角仍是源图颜色，说明没有补边
        assert_eq!(derived.rgba.get_pixel(0, 0).0[3], 255);
        assert_eq!(derived.rgba.get_pixel(127, 127).0[3], 255);
    }

    #[test]
    fn small_source_is_upsampled() {
        let source = solid_source(16, 16, Rgba([9, 9, 9, 255]));
        let derived = IconGenerator::resize_exact(&source, 256, 256, FilterType::Lanczos3)
            .expect("upsample should succeed");

        assert_eq!(derived.rgba.dimensions(), (256, 256));
    }

    #[test]
    fn same_size_is_a_copy() {
        let source = solid_source(48, 48, Rgba([1, 2, 3, 4]));
        let derived = IconGenerator::resize_exact(&source, 48, 48, FilterType::Lanczos3)
            .expect("resize should succeed");

        assert_eq!(derived.rgba, *source.as_rgba());
    }

    #[test]
    fn fast_resize_reads_borrowed_source_in_place() {
        let src = RgbaImage::from_pixel(64, 40, Rgba([120, 60, 30, 255]));
        let before = src.clone();

        let resized = IconGenerator::resize_with_fast_image_resize(&src, 16, 16, FilterType::Lanczos3)
            .expect("fast resize should succeed");

        assert_eq!(src, before);
        assert_eq!(resized.dimensions(), (16, 16));
        let pixel = resized.get_pixel(8, 8).0;
        for (got, want) in pixel.iter().zip([120u8, 60, 30, 255]) {
            assert!(got.abs_diff(want) <= 1, "{:?}", pixel);
        }
    }

    #[test]
    fn zero_target_is_rejected() {
        let source = solid_source(8, 8, Rgba([0, 0, 0, 0]));
        let result = IconGenerator::resize_exact(&source, 0, 8, FilterType::Lanczos3);
        assert!(matches!(result, Err(IconError::Resize(_))));
    }

    #[test]
    fn every_filter_has_a_fast_counterpart() {
        for filter in [
            FilterType::Nearest,
            FilterType::Triangle,
            FilterType::CatmullRom,
            FilterType::Gaussian,
            FilterType::Lanczos3,
        ] {
            let source = solid_source(20, 10, Rgba([5, 5, 5, 255]));
            let derived = IconGenerator::resize_exact(&source, 7, 7, filter).expect("resize");
            assert_eq!(derived.rgba.dimensions(), (7, 7));
        }
    }
}
