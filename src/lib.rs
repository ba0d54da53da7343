//! # Tauri 图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   env_logger 初始化 · 控制台进度 · 退出码        │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<GenerationReport, AppError>
//! ┌───────┴──────────────────────────────────────────────────┐
//! │  ┌─ error ────────── AppError (进程边界错误)              │
//! │  │                                                       │
//! │  └─ icon_generator                                       │
//! │      ├─ loader       源图校验 · 解码 · RGBA 归一          │
//! │      ├─ pipeline     Lanczos 缩放                        │
//! │      ├─ writer       PNG / ICO 写盘                       │
//! │      └─ instructions ICNS 手动步骤                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，决定退出码 |
//! | [`icon_generator`] | 从 `source-icon.png` 生成 PNG 与 ICO 图标 |

pub mod error;
pub mod icon_generator;
