//! Motif 计数：穷举 {A,C,G,T}^s 全部 motif，逐行暴力滑窗计数，再按频数与最长重复段选出最佳 motif。

pub mod count;
pub mod enumerate;
pub mod select;

use std::path::PathBuf;

pub use count::{count_motifs, count_motifs_in_reader, count_occurrences, MotifCountTable};
pub use enumerate::{enumerate_motifs, universe_size, MotifIter};
pub use select::{rank_motifs, select_best};

/// 计数参数，`Default` 给出固定默认值。
#[derive(Debug, Clone)]
pub struct CountOpt {
    /// motif 长度 s
    pub motif_len: usize,
    pub corpus: PathBuf,
    /// 额外输出的前 k 个 motif，0 表示不输出
    pub top: usize,
}

impl Default for CountOpt {
    fn default() -> Self {
        Self {
            motif_len: crate::DEFAULT_MOTIF_LEN,
            corpus: PathBuf::from(crate::DEFAULT_CORPUS),
            top: 0,
        }
    }
}
