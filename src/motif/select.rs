use std::cmp::Reverse;

use super::count::MotifCountTable;
use crate::util::dna;

/// 选出最佳 motif：先比计数，计数相同再比最长重复段，均取严格更大者。
///
/// 只有严格更优才替换当前最佳，因此完全相同的 (计数, 重复段) 由迭代顺序决定，
/// 即字典序最小者胜出。空语料时所有计数为 0，`s = 6` 的结果为 `AAAAAA`。
/// 空表返回 `None`。
pub fn select_best(table: &MotifCountTable) -> Option<&str> {
    let mut best: Option<(&str, u64, usize)> = None;
    for (motif, count) in table.iter() {
        let run = dna::longest_run(motif.as_bytes());
        let better = match best {
            None => true,
            Some((_, best_count, best_run)) => {
                count > best_count || (count == best_count && run > best_run)
            }
        };
        if better {
            best = Some((motif, count, run));
        }
    }
    best.map(|(motif, _, _)| motif)
}

/// 按与 [`select_best`] 相同的规则排序，返回前 `k` 个 (motif, count)。
pub fn rank_motifs(table: &MotifCountTable, k: usize) -> Vec<(&str, u64)> {
    let mut ranked: Vec<(&str, u64)> = table.iter().collect();
    ranked.sort_by_cached_key(|&(motif, count)| {
        (Reverse(count), Reverse(dna::longest_run(motif.as_bytes())), motif)
    });
    ranked.truncate(k);
    ranked
}
