pub const SIGMA: usize = 4; // {0:A, 1:C, 2:G, 3:T}

/// 固定碱基顺序，生成器的概率权重与 motif 枚举都按此顺序。
pub const BASES: [u8; SIGMA] = [b'A', b'C', b'G', b'T'];

#[inline]
pub fn to_alphabet(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

#[inline]
pub fn from_alphabet(a: usize) -> u8 {
    BASES[a % SIGMA]
}

#[inline]
pub fn is_acgt(seq: &[u8]) -> bool {
    seq.iter().all(|&b| to_alphabet(b).is_some())
}

/// 最长相同字符连续段的长度，例如 `AATTTC` -> 3。空串按 1 计。
pub fn longest_run(seq: &[u8]) -> usize {
    if seq.is_empty() {
        return 1;
    }
    let mut best = 0usize;
    let mut run = 0usize;
    let mut prev: Option<u8> = None;
    for &b in seq {
        if prev == Some(b) {
            run += 1;
        } else {
            run = 1;
            prev = Some(b);
        }
        best = best.max(run);
    }
    best
}
