//! # Tauri 图标生成工具 — 应用入口
//!
//! 本文件仅负责日志初始化、控制台输出与退出码。
//! 生成逻辑位于 `icon_generator`，详见 `lib.rs` 架构文档。

use std::process::ExitCode;

use tauri_icon_gen::error::AppError;
use tauri_icon_gen::icon_generator::{GenerationReport, IconConfig, IconGenerator, ProgressEvent};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(report) => {
            log::info!(
                "✅ 共写入 {} 个 PNG、{} 个 ICO，{} 字节",
                report.pngs().count(),
                usize::from(report.ico().is_some()),
                report.total_bytes()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("图标生成失败 [{}/{}]: {err}", err.stage(), err.code());
            eprintln!("Error: {}", err.user_message());
            if let Some(hint) = err.remediation() {
                eprintln!("{hint}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<GenerationReport, AppError> {
    let generator = IconGenerator::new(IconConfig::default())?;
    let config = generator.config();

    // 缺失源图时不打印任何进度，直接退出
    let source_path = IconGenerator::locate_source(config)?;

    println!("Generating Tauri app icons...");
    println!("Source: {}\n", source_path.display());

    let report = generator.run_with_progress(|event| match event {
        ProgressEvent::LoadingSource => println!("Loading source image..."),
        ProgressEvent::GeneratingPngs => println!("Generating PNG icons..."),
        ProgressEvent::PngCreated(icon) => {
            if let Some(&(width, height)) = icon.sizes.first() {
                println!("  ✓ Created {} ({}x{})", icon.file_name, width, height);
            }
        }
        ProgressEvent::GeneratingIco => println!("\nGenerating Windows ICO file..."),
        ProgressEvent::IcoCreated(icon) => {
            let edges: Vec<u32> = icon.sizes.iter().map(|&(edge, _)| edge).collect();
            println!("  ✓ Created {} with sizes: {:?}", icon.file_name, edges);
        }
    })?;

    println!();
    println!("\n{}", generator.icns_instructions());
    println!("\n✓ Icon generation complete!");
    println!("\n{}", generator.next_steps());

    Ok(report)
}
