//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，不直接打印控制台输出。
//! 处理链路固定为：
//! 1. 定位并校验源图（失败则不做任何事）
//! 2. 解码并统一为 RGBA
//! 3. 按声明顺序生成 PNG
//! 4. 生成多尺寸 ICO
//!
//! ## 实现思路
//!
//! - 配置在构造时校验一次，之后只读。
//! - 进度通过回调上报，由调用方决定如何展示。
//! - 记录 `load/png/ico/total` 阶段耗时，便于性能诊断。
//! - 任一阶段失败立即返回，不重试也不清理已写文件。

use std::time::Instant;

use super::instructions;
use super::source::{GeneratedIcon, GenerationReport, IconKind, SourceImage};
use super::{IconConfig, IconError};

/// 生成过程中的进度事件。
#[derive(Debug, Clone, Copy)]
pub enum ProgressEvent<'a> {
    /// 开始加载源图。
    LoadingSource,
    /// 开始生成 PNG。
    GeneratingPngs,
    /// 单个 PNG 写入完成。
    PngCreated(&'a GeneratedIcon),
    /// 开始生成 ICO。
    GeneratingIco,
    /// ICO 写入完成。
    IcoCreated(&'a GeneratedIcon),
}

/// 图标生成器。
pub struct IconGenerator {
    config: IconConfig,
}

impl IconGenerator {
    /// 根据配置创建生成器，配置非法时直接返回错误。
    ///
    /// # 示例
    /// ```rust
    /// use tauri_icon_gen::icon_generator::{IconConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(IconConfig::default())?;
    /// assert_eq!(generator.config().ico_sizes, [16, 32, 48, 256]);
    /// # Ok::<(), tauri_icon_gen::icon_generator::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// 执行完整流程，不上报进度。
    pub fn run(&self) -> Result<GenerationReport, IconError> {
        self.run_with_progress(|_| {})
    }

    /// 执行完整流程：校验 → 加载 → PNG → ICO。
    pub fn run_with_progress<F>(&self, mut on_progress: F) -> Result<GenerationReport, IconError>
    where
        F: FnMut(ProgressEvent<'_>),
    {
        let total_started = Instant::now();

        on_progress(ProgressEvent::LoadingSource);
        let load_started = Instant::now();
        let source = self.load_source()?;
        let load_ms = load_started.elapsed().as_millis();

        let png_started = Instant::now();
        on_progress(ProgressEvent::GeneratingPngs);
        let mut icons = self.generate_png_icons(&source, &mut on_progress)?;
        let png_ms = png_started.elapsed().as_millis();

        let ico_started = Instant::now();
        on_progress(ProgressEvent::GeneratingIco);
        let ico = self.generate_ico(&source)?;
        on_progress(ProgressEvent::IcoCreated(&ico));
        icons.push(ico);
        let ico_ms = ico_started.elapsed().as_millis();

        log::info!(
            "⏱️ 图标生成完成 - load: {}ms png: {}ms ico: {}ms total: {}ms",
            load_ms,
            png_ms,
            ico_ms,
            total_started.elapsed().as_millis()
        );

        Ok(GenerationReport {
            source_dimensions: source.dimensions(),
            icons,
        })
    }

    /// 定位、校验并解码源图。
    pub fn load_source(&self) -> Result<SourceImage, IconError> {
        let path = Self::locate_source(&self.config)?;
        let source = Self::decode_source(&path)?;

        if !source.is_square() {
            log::warn!(
                "⚠️ 源图片不是正方形（{}x{}），输出将被拉伸",
                source.width(),
                source.height()
            );
        }

        let largest = self.config.largest_edge();
        if source.width() < largest || source.height() < largest {
            log::warn!(
                "⚠️ 源图片（{}x{}）小于最大目标尺寸 {}，将进行放大",
                source.width(),
                source.height(),
                largest
            );
        }

        Ok(source)
    }

    /// 按声明顺序生成全部 PNG。
    pub fn generate_png_icons<F>(
        &self,
        source: &SourceImage,
        mut on_progress: F,
    ) -> Result<Vec<GeneratedIcon>, IconError>
    where
        F: FnMut(ProgressEvent<'_>),
    {
        let mut generated = Vec::with_capacity(self.config.png_targets.len());

        for target in &self.config.png_targets {
            let resized = Self::resize_exact(
                source,
                target.width,
                target.height,
                self.config.resize_filter,
            )?;
            let path = self.config.output_path(&target.file_name);
            let bytes_written = Self::write_png(&resized, &path)?;

            log::debug!(
                "🖼️ PNG 已写入：{}（{}x{}，{} 字节）",
                path.display(),
                target.width,
                target.height,
                bytes_written
            );

            let icon = GeneratedIcon {
                kind: IconKind::Png,
                path,
                file_name: target.file_name.clone(),
                sizes: vec![(target.width, target.height)],
                bytes_written,
            };
            on_progress(ProgressEvent::PngCreated(&icon));
            generated.push(icon);
        }

        Ok(generated)
    }

    /// 生成多尺寸 ICO，最小尺寸为首帧。
    pub fn generate_ico(&self, source: &SourceImage) -> Result<GeneratedIcon, IconError> {
        let frames = self
            .config
            .ico_sizes
            .iter()
            .map(|&edge| Self::resize_exact(source, edge, edge, self.config.resize_filter))
            .collect::<Result<Vec<_>, _>>()?;

        let path = self.config.ico_path();
        let bytes_written = Self::write_ico(&frames, &path)?;

        log::debug!(
            "🪟 ICO 已写入：{}（尺寸 {:?}，{} 字节）",
            path.display(),
            self.config.ico_sizes,
            bytes_written
        );

        Ok(GeneratedIcon {
            kind: IconKind::Ico,
            path,
            file_name: self.config.ico_file_name.clone(),
            sizes: self.config.ico_sizes.iter().map(|&s| (s, s)).collect(),
            bytes_written,
        })
    }

    /// ICNS 手动转换说明（纯文本，不做 I/O）。
    pub fn icns_instructions(&self) -> String {
        instructions::icns_instructions(&self.config)
    }

    pub fn next_steps(&self) -> String {
        instructions::next_steps(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_source(config: &IconConfig, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([30, 60, 90, 255]))
            .save(config.source_path())
            .expect("write source");
    }

    #[test]
    fn new_rejects_invalid_config() {
        let mut config = IconConfig::default();
        config.ico_sizes.clear();
        assert!(matches!(IconGenerator::new(config), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn progress_events_follow_declared_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = IconConfig::with_icons_dir(dir.path());
        write_source(&config, 64, 64);

        let generator = IconGenerator::new(config).expect("generator");
        let mut seen = Vec::new();
        generator
            .run_with_progress(|event| {
                seen.push(match event {
                    ProgressEvent::LoadingSource => "load".to_string(),
                    ProgressEvent::GeneratingPngs => "pngs".to_string(),
                    ProgressEvent::PngCreated(icon) => icon.file_name.clone(),
                    ProgressEvent::GeneratingIco => "ico".to_string(),
                    ProgressEvent::IcoCreated(icon) => icon.file_name.clone(),
                });
            })
            .expect("run should succeed");

        assert_eq!(
            seen,
            ["load", "pngs", "32x32.png", "128x128.png", "128x128@2x.png", "ico", "icon.ico"]
        );
    }

    #[test]
    fn missing_source_stops_before_any_progress_past_loading() {
        let dir = tempfile::tempdir().expect("tempdir");
        let generator =
            IconGenerator::new(IconConfig::with_icons_dir(dir.path())).expect("generator");

        let mut events = 0;
        let result = generator.run_with_progress(|_| events += 1);

        assert!(matches!(result, Err(IconError::MissingSource(_))));
        assert_eq!(events, 1);
    }

    #[test]
    fn report_lists_png_then_ico() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = IconConfig::with_icons_dir(dir.path());
        write_source(&config, 40, 40);

        let report = IconGenerator::new(config).expect("generator").run().expect("run");

        assert_eq!(report.source_dimensions, (40, 40));
        assert_eq!(report.pngs().count(), 3);
        let ico = report.ico().expect("ico entry");
        assert_eq!(ico.sizes, [(16, 16), (32, 32), (48, 48), (256, 256)]);
        assert!(report.total_bytes() > 0);
    }
}
