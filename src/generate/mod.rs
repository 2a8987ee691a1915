//! 随机序列库生成：按碱基权重逐位抽样，按 Shannon 熵过滤低复杂度序列后逐条写出。

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::path::PathBuf;

use crate::io::corpus::CorpusWriter;
use crate::util::{dna, entropy};

/// 生成参数，`Default` 给出固定默认值。
#[derive(Debug, Clone)]
pub struct GenerateOpt {
    /// 抽样的序列条数（过滤前）
    pub n: usize,
    /// 每条序列长度
    pub m: usize,
    /// A/C/G/T 的抽样权重
    pub probabilities: [f64; dna::SIGMA],
    /// 熵严格大于该值的序列才保留
    pub entropy_threshold: f64,
    /// 固定种子可复现输出；`None` 时取系统熵
    pub seed: Option<u64>,
    pub output: PathBuf,
}

impl Default for GenerateOpt {
    fn default() -> Self {
        Self {
            n: 1_000_000,
            m: 50,
            probabilities: [0.25; dna::SIGMA],
            entropy_threshold: crate::DEFAULT_ENTROPY_THRESHOLD,
            seed: None,
            output: PathBuf::from(crate::DEFAULT_CORPUS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerateStats {
    pub generated: u64,
    pub retained: u64,
}

impl GenerateStats {
    pub fn discarded(&self) -> u64 {
        self.generated - self.retained
    }
}

/// 按累计概率选出碱基：返回第一个累计和 `>= r` 的碱基。
/// 若权重之和不足以覆盖 `r`（浮点误差或权重和小于 1），回退为 `A`。
#[inline]
pub fn weighted_base(probabilities: &[f64; dna::SIGMA], r: f64) -> u8 {
    let mut cumulative = 0.0f64;
    for (i, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if r <= cumulative {
            return dna::BASES[i];
        }
    }
    dna::BASES[0]
}

/// 抽样一条长度为 `m` 的序列，写入 `buf`（会先清空）。
pub fn random_sequence<R: Rng + ?Sized>(
    m: usize,
    probabilities: &[f64; dna::SIGMA],
    rng: &mut R,
    buf: &mut Vec<u8>,
) {
    buf.clear();
    buf.reserve(m);
    for _ in 0..m {
        let r: f64 = rng.gen();
        buf.push(weighted_base(probabilities, r));
    }
}

/// 生成核心：抽样 `opt.n` 条序列，熵过滤后逐条写入 `writer`。
/// `opt.seed` 与 `opt.output` 在此不使用，随机源由调用方提供。
pub fn generate_to_writer<R, W>(opt: &GenerateOpt, rng: &mut R, writer: W) -> Result<GenerateStats>
where
    R: Rng + ?Sized,
    W: Write,
{
    let mut out = CorpusWriter::new(writer);
    let stats = generate_into(opt, rng, &mut out)?;
    out.finish()?;
    Ok(stats)
}

/// 生成序列库并写到 `opt.output`（覆盖已有文件）。
/// 中途写失败时文件可能只写了一部分。
pub fn generate_and_write(opt: &GenerateOpt) -> Result<GenerateStats> {
    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "generating {} sequences (m={}) into '{}'",
        opt.n,
        opt.m,
        opt.output.display()
    );
    let mut out = CorpusWriter::create(&opt.output)?;
    let stats = generate_into(opt, &mut rng, &mut out)?;
    out.finish()
        .with_context(|| format!("cannot flush corpus '{}'", opt.output.display()))?;
    info!(
        "wrote {} of {} sequences to '{}'",
        stats.retained,
        stats.generated,
        opt.output.display()
    );
    Ok(stats)
}

fn generate_into<R, W>(opt: &GenerateOpt, rng: &mut R, out: &mut CorpusWriter<W>) -> Result<GenerateStats>
where
    R: Rng + ?Sized,
    W: Write,
{
    check_distribution(&opt.probabilities);

    let mut stats = GenerateStats::default();
    let mut seq = Vec::with_capacity(opt.m);
    for _ in 0..opt.n {
        random_sequence(opt.m, &opt.probabilities, rng, &mut seq);
        stats.generated += 1;
        if entropy::shannon_entropy(&seq) > opt.entropy_threshold {
            out.write_sequence(&seq)?;
            stats.retained += 1;
        }
    }

    debug!(
        "generated {} sequences of length {}, {} discarded by entropy filter (<= {})",
        stats.generated,
        opt.m,
        stats.discarded(),
        opt.entropy_threshold
    );
    Ok(stats)
}

/// 权重之和是否为 1（容差 1e-6）；含 NaN 时为 false。
pub fn sums_to_one(probabilities: &[f64; dna::SIGMA]) -> bool {
    let sum: f64 = probabilities.iter().sum();
    (sum - 1.0).abs() <= 1e-6
}

// 权重只提示，不拒绝
fn check_distribution(probabilities: &[f64; dna::SIGMA]) {
    if !sums_to_one(probabilities) {
        let sum: f64 = probabilities.iter().sum();
        warn!(
            "base probabilities {:?} sum to {}, draws above the total fall back to 'A'",
            probabilities, sum
        );
    }
    if probabilities.iter().any(|&p| p < 0.0) {
        warn!("base probabilities {:?} contain negative weights", probabilities);
    }
}
