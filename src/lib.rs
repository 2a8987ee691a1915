//! # nucmotif
//!
//! 核苷酸序列的两个小工具：随机序列库生成与暴力 motif 计数。
//!
//! - **序列生成**：按 A/C/G/T 权重逐位抽样定长序列，只保留 Shannon 熵高于阈值的序列，逐行写入文本文件
//! - **motif 计数**：穷举 {A,C,G,T}^s 的全部 motif，逐行滑窗统计（允许重叠）出现次数
//! - **最佳 motif**：按出现次数、再按最长单字符重复段选出一个 motif
//!
//! ## 快速示例
//!
//! ```rust
//! use nucmotif::motif;
//! use std::io::Cursor;
//!
//! let corpus = "ACGTCGTAGT\nCGTAAACGTT\n";
//! let table = motif::count_motifs_in_reader(Cursor::new(corpus), 3).unwrap();
//! assert_eq!(table.len(), 64);
//! assert_eq!(table.get("CGT"), Some(4));
//! assert_eq!(motif::select_best(&table), Some("CGT"));
//! ```
//!
//! ## 模块说明
//!
//! - [`generate`] — 加权抽样与熵过滤的序列库生成
//! - [`motif`] — motif 枚举、计数与选择
//! - [`io`] — 每行一条序列的文本语料读写
//! - [`util`] — 碱基字母表、最长重复段、Shannon 熵

pub mod generate;
pub mod io;
pub mod motif;
pub mod util;

/// 生成器输出、计数器输入的默认文件名
pub const DEFAULT_CORPUS: &str = "nucleotide_database.txt";
/// 默认 motif 长度
pub const DEFAULT_MOTIF_LEN: usize = 6;
/// 熵严格大于该值（bit）的序列才写入序列库
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 1.5;
/// 计数结果输出前缀
pub const BEST_MOTIF_LABEL: &str = "The best motif is: ";
