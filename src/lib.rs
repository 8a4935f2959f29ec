//! tickerdash - 终端行情仪表盘库
//!
//! 模块结构：
//! - core: 输入事件、事件结果、文本宽度工具
//! - kernel: 组件状态、动作分发、RSI 指标与取数端口/适配器
//! - ui: 几何、样式、绘制命令与渲染后端
//! - app: 仪表盘（布局、命中区域、渲染）与主题
//! - tui: crossterm 事件转换与终端守卫

pub mod app;
pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
