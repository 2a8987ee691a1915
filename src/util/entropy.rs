use super::dna;

/// 单条序列的 Shannon 熵（以 2 为底），基于该序列内部 A/C/G/T 的经验频率。
///
/// 非 ACGT 字节不计入任何碱基，但计入序列长度。空序列返回 0.0。
/// 结果位于 [0, 2.0]。
pub fn shannon_entropy(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let mut counts = [0usize; dna::SIGMA];
    for &b in seq {
        if let Some(i) = dna::to_alphabet(b) {
            counts[i] += 1;
        }
    }

    let len = seq.len() as f64;
    let mut h = 0.0f64;
    for &c in &counts {
        if c > 0 {
            let p = c as f64 / len;
            h -= p * p.log2();
        }
    }
    h
}
