//! 状态模块 - 面向展示层的营业状态
//!
//! 把计算出的营业时间状态与管理端开关 (`is_open` / `is_busy`) 合并，
//! 并处理 "未知" 的分店汇总。

mod branches;
mod effective;

pub use branches::{BranchStatus, BranchStatusList, branch_status, branch_statuses};
pub use effective::{
    StatusSource, StorefrontStatus, compute_status, effective_open, effective_ordering,
};
