//! # 配置模块
//!
//! ## 设计思路
//!
//! 将固定路径与尺寸列表集中到 `IconConfig`，作为不可变配置显式传入生成器，
//! 而不是散落的全局常量。`Default` 即为 Tauri 工程约定的固定布局，
//! 测试可通过 `with_icons_dir` 注入临时目录。
//!
//! ## 实现思路
//!
//! - `Default` 复现固定布局：`src-tauri/icons` 下的 3 个 PNG 与 1 个 ICO。
//! - `validate` 在任何 I/O 之前拒绝非法尺寸组合。
//! - `icns_source` 从 PNG 目标中挑出 ICNS 转换所需的 256×256 文件。

use std::path::PathBuf;

use image::imageops::FilterType;

use super::IconError;
use super::source::PngTarget;

/// 默认图标目录（相对当前工作目录）。
pub const DEFAULT_ICONS_DIR: &str = "src-tauri/icons";

/// ICO 目录项单边最大尺寸。
pub const MAX_ICO_EDGE: u32 = 256;

/// ICNS 手动转换所需的源图边长。
pub const ICNS_SOURCE_EDGE: u32 = 256;

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 源图与全部输出所在目录。
    pub icons_dir: PathBuf,
    /// 源图文件名。
    pub source_file_name: String,
    /// PNG 输出目标（按声明顺序处理）。
    pub png_targets: Vec<PngTarget>,
    /// ICO 内嵌尺寸，从小到大。
    pub ico_sizes: Vec<u32>,
    /// ICO 输出文件名。
    pub ico_file_name: String,
    /// 仅用于提示信息，本工具不会写入该文件。
    pub icns_file_name: String,
    /// 缩放滤镜。
    pub resize_filter: FilterType,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            icons_dir: PathBuf::from(DEFAULT_ICONS_DIR),
            source_file_name: "source-icon.png".to_string(),
            png_targets: vec![
                PngTarget::new(32, 32, "32x32.png"),
                PngTarget::new(128, 128, "128x128.png"),
                PngTarget::new(256, 256, "128x128@2x.png"),
            ],
            ico_sizes: vec![16, 32, 48, 256],
            ico_file_name: "icon.ico".to_string(),
            icns_file_name: "icon.icns".to_string(),
            resize_filter: FilterType::Lanczos3,
        }
    }
}

impl IconConfig {
    /// 使用默认布局，但替换图标目录。
    ///
    /// # 示例
    /// ```rust
    /// use tauri_icon_gen::icon_generator::IconConfig;
    ///
    /// let config = IconConfig::with_icons_dir("/tmp/icons");
    /// assert!(config.source_path().ends_with("source-icon.png"));
    /// ```
    pub fn with_icons_dir(icons_dir: impl Into<PathBuf>) -> Self {
        Self {
            icons_dir: icons_dir.into(),
            ..Self::default()
        }
    }

    pub fn source_path(&self) -> PathBuf {
        self.icons_dir.join(&self.source_file_name)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.icons_dir.join(file_name)
    }

    pub fn ico_path(&self) -> PathBuf {
        self.output_path(&self.ico_file_name)
    }

    pub fn icns_path(&self) -> PathBuf {
        self.output_path(&self.icns_file_name)
    }

    /// ICNS 转换所需的 PNG 目标（256×256）。
    pub fn icns_source(&self) -> Option<&PngTarget> {
        self.png_targets
            .iter()
            .find(|t| t.width == ICNS_SOURCE_EDGE && t.height == ICNS_SOURCE_EDGE)
    }

    /// 所有请求尺寸中的最大边长，用于判断是否发生放大。
    pub fn largest_edge(&self) -> u32 {
        self.png_targets
            .iter()
            .flat_map(|t| [t.width, t.height])
            .chain(self.ico_sizes.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// 在任何文件操作之前校验配置。
    pub fn validate(&self) -> Result<(), IconError> {
        if self.png_targets.is_empty() {
            return Err(IconError::InvalidConfig("PNG 目标列表不能为空".to_string()));
        }
        if self.ico_sizes.is_empty() {
            return Err(IconError::InvalidConfig("ICO 尺寸列表不能为空".to_string()));
        }

        for target in &self.png_targets {
            if target.width == 0 || target.height == 0 {
                return Err(IconError::InvalidConfig(format!(
                    "PNG 目标 {} 尺寸不能为 0",
                    target.file_name
                )));
            }
            if target.file_name.trim().is_empty() {
                return Err(IconError::InvalidConfig("PNG 文件名不能为空".to_string()));
            }
        }

        if let Some(&size) = self
            .ico_sizes
            .iter()
            .find(|&&s| s == 0 || s > MAX_ICO_EDGE)
        {
            return Err(IconError::InvalidConfig(format!(
                "ICO 尺寸 {} 超出范围（1~{}）",
                size, MAX_ICO_EDGE
            )));
        }

        if !self.ico_sizes.windows(2).all(|w| w[0] < w[1]) {
            return Err(IconError::InvalidConfig(
                "ICO 尺寸必须从小到大且不重复".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_layout_matches_tauri_convention() {
        let config = IconConfig::default();

        assert_eq!(config.source_path(), Path::new("src-tauri/icons/source-icon.png"));
        assert_eq!(config.ico_path(), Path::new("src-tauri/icons/icon.ico"));
        assert_eq!(config.icns_path(), Path::new("src-tauri/icons/icon.icns"));

        let names: Vec<_> = config.png_targets.iter().map(|t| t.file_name.as_str()).collect();
        assert_eq!(names, ["32x32.png", "128x128.png", "128x128@2x.png"]);
        assert_eq!(config.ico_sizes, [16, 32, 48, 256]);
        assert_eq!(config.resize_filter, FilterType::Lanczos3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn icns_source_is_the_retina_png() {
        let config = IconConfig::default();
        let target = config.icns_source().expect("256x256 target should exist");
        assert_eq!(target.file_name, "128x128@2x.png");
        assert_eq!(config.largest_edge(), 256);
    }

    #[test]
    fn validate_rejects_oversized_ico_edge() {
        let mut config = IconConfig::default();
        config.ico_sizes = vec![16, 512];
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_unsorted_ico_sizes() {
        let mut config = IconConfig::default();
        config.ico_sizes = vec![32, 16];
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_zero_png_dimension() {
        let mut config = IconConfig::default();
        config.png_targets.push(PngTarget::new(0, 64, "bad.png"));
        assert!(matches!(config.validate(), Err(IconError::InvalidConfig(_))));
    }
}
