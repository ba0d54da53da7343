//! # 手动步骤提示
//!
//! ICNS（macOS）无法由本工具生成，这里只产出提示文本，不做任何文件 I/O。
//! 文本内容由纯函数生成，便于测试；打印交给调用方。

use std::fmt::Write as _;

use super::IconConfig;

const RULE_WIDTH: usize = 60;
const ONLINE_CONVERTER: &str = "https://cloudconvert.com/png-to-icns";
const ALT_ONLINE_CONVERTER: &str = "https://convertio.co/png-icns/";

/// 生成 ICNS 手动转换说明。
///
/// 说明中引用的源文件取自配置中的 256×256 PNG 目标。
pub fn icns_instructions(config: &IconConfig) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let source = match config.icns_source() {
        Some(target) => format!(
            "{} ({}x{})",
            config.output_path(&target.file_name).display(),
            target.width,
            target.height
        ),
        None => "a 256x256 PNG".to_string(),
    };

    let mut out = String::new();
    // 写入 String 不会失败
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "ICNS file (macOS) generation:");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "ICNS files are macOS-specific and harder to generate on Linux.");
    let _ = writeln!(out);
    let _ = writeln!(out, "Option 1: Use online converter");
    let _ = writeln!(out, "  - Go to: {ONLINE_CONVERTER}");
    let _ = writeln!(out, "  - Upload: {source}");
    let _ = writeln!(out, "  - Download and save as: {}", config.icns_path().display());
    let _ = writeln!(out);
    let _ = writeln!(out, "Option 2: Use macOS (if available)");
    let _ = writeln!(out, "  - Use 'iconutil' command on macOS");
    let _ = writeln!(out, "  - Or use online tools like: {ALT_ONLINE_CONVERTER}");
    let _ = write!(out, "{rule}");
    out
}

/// 成功结束后的后续步骤。
pub fn next_steps(config: &IconConfig) -> String {
    format!(
        "Next steps:\n1. Generate {} using one of the methods above\n2. Rebuild your Tauri app to see the new icons",
        config.icns_file_name
    )
}
