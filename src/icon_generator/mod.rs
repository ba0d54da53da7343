//! # 图标生成模块（icon_generator）
//!
//! ## 设计思路
//!
//! 该模块将“源图校验 → 解码归一 → 缩放 → 编码写盘 → 手动步骤提示”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线
//! - `loader`：源图定位、解码与 RGBA 归一
//! - `pipeline`：Lanczos 缩放
//! - `writer`：PNG / ICO 编码与写盘
//! - `instructions`：ICNS 手动转换说明
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs（日志初始化 + 控制台输出 + 退出码）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（存在性校验 + 解码 + RGBA）
//!    ├─ pipeline.rs（fast_image_resize，失败回退 image）
//!    └─ writer.rs（PngEncoder / IcoEncoder）
//!    ↓
//! instructions.rs（ICNS 说明，纯文本）
//! ```

mod config;
mod error;
mod handler;
pub mod instructions;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{DEFAULT_ICONS_DIR, ICNS_SOURCE_EDGE, IconConfig, MAX_ICO_EDGE};
pub use error::IconError;
pub use handler::{IconGenerator, ProgressEvent};
pub use source::{GeneratedIcon, GenerationReport, IconKind, PngTarget, SourceImage};
