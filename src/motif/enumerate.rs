use crate::util::dna;

/// motif 全集大小 4^s；溢出 usize 时返回 `None`。
pub fn universe_size(s: usize) -> Option<usize> {
    let s = u32::try_from(s).ok()?;
    dna::SIGMA.checked_pow(s)
}

/// 按字典序惰性产生 {A,C,G,T}^s 中的每个 motif。
///
/// 内部为一个以 4 为基的多位计数器：最低位在末尾，每步加一并向前进位，
/// 最高位溢出即结束。`s = 0` 时只产生一个空串。
#[derive(Debug, Clone)]
pub struct MotifIter {
    digits: Vec<usize>,
    done: bool,
}

impl MotifIter {
    pub fn new(s: usize) -> Self {
        Self {
            digits: vec![0; s],
            done: false,
        }
    }

    fn current(&self) -> String {
        self.digits
            .iter()
            .map(|&d| dna::from_alphabet(d) as char)
            .collect()
    }

    fn advance(&mut self) {
        for d in self.digits.iter_mut().rev() {
            *d += 1;
            if *d < dna::SIGMA {
                return;
            }
            *d = 0;
        }
        // 所有位都进位回到 0
        self.done = true;
    }
}

impl Iterator for MotifIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let motif = self.current();
        self.advance();
        Some(motif)
    }
}

/// 穷举全部 4^s 个长度为 `s` 的 motif（字典序）。代价 O(4^s · s)，s 由调用方控制。
pub fn enumerate_motifs(s: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(universe_size(s).unwrap_or(0));
    out.extend(MotifIter::new(s));
    out
}
