use anyhow::Result;
use log::{debug, info};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use super::enumerate::MotifIter;
use crate::io::corpus::CorpusReader;

/// Motif -> 出现次数。键恒为全部 4^s 个 motif（含计数为 0 者），按字典序迭代。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifCountTable {
    motif_len: usize,
    counts: BTreeMap<String, u64>,
}

impl MotifCountTable {
    /// 全零计数表。
    pub fn new(motif_len: usize) -> Self {
        let counts = MotifIter::new(motif_len).map(|m| (m, 0)).collect();
        Self { motif_len, counts }
    }

    pub fn motif_len(&self) -> usize {
        self.motif_len
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, motif: &str) -> Option<u64> {
        self.counts.get(motif).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(m, &c)| (m.as_str(), c))
    }

    /// 所有 motif 计数之和
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// 把一条序列中每个 motif 的出现次数累加进表。
    /// 每个 motif 都对整条序列滑窗一遍，代价为 4^s × 序列长度。
    pub fn add_sequence(&mut self, seq: &[u8]) {
        for (motif, count) in self.counts.iter_mut() {
            *count += count_occurrences(seq, motif.as_bytes());
        }
    }
}

impl FromIterator<(String, u64)> for MotifCountTable {
    /// 由任意 (motif, count) 构造；`motif_len` 取第一个键的长度。
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let counts: BTreeMap<String, u64> = iter.into_iter().collect();
        let motif_len = counts.keys().next().map_or(0, String::len);
        Self { motif_len, counts }
    }
}

/// 滑窗（步长 1）统计 `motif` 在 `seq` 中的出现次数，允许重叠。
/// 空 motif 与长度为 L 的序列的 L + 1 个空窗口都匹配。
#[inline]
pub fn count_occurrences(seq: &[u8], motif: &[u8]) -> u64 {
    if motif.is_empty() {
        return seq.len() as u64 + 1;
    }
    if motif.len() > seq.len() {
        return 0;
    }
    seq.windows(motif.len()).filter(|w| *w == motif).count() as u64
}

/// 在任意按行读取的序列库上计数。
pub fn count_motifs_in_reader<R: BufRead>(reader: R, s: usize) -> Result<MotifCountTable> {
    let (table, n_seqs) = scan(&mut CorpusReader::new(reader), s)?;
    debug!("scanned {} sequences for {} motifs of length {}", n_seqs, table.len(), s);
    Ok(table)
}

/// 打开 `corpus_path` 并统计全部长度为 `s` 的 motif。文件缺失或读失败时直接返回错误。
pub fn count_motifs<P: AsRef<Path>>(corpus_path: P, s: usize) -> Result<MotifCountTable> {
    let path = corpus_path.as_ref();
    info!("counting motifs of length {} in '{}'", s, path.display());

    let (table, n_seqs) = scan(&mut CorpusReader::open(path)?, s)?;
    info!(
        "scanned {} sequences, {} motif occurrences across {} motifs",
        n_seqs,
        table.total(),
        table.len()
    );
    Ok(table)
}

fn scan<R: BufRead>(corpus: &mut CorpusReader<R>, s: usize) -> Result<(MotifCountTable, u64)> {
    let mut table = MotifCountTable::new(s);
    let mut n_seqs = 0u64;
    while let Some(seq) = corpus.next_sequence()? {
        table.add_sequence(seq);
        n_seqs += 1;
    }
    Ok((table, n_seqs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motif::enumerate::enumerate_motifs;
    use std::io::{Cursor, Write};

    fn corpus_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn occurrences_overlap() {
        assert_eq!(count_occurrences(b"AAA", b"AA"), 2);
        assert_eq!(count_occurrences(b"AAAAAA", b"AAA"), 4);
        assert_eq!(count_occurrences(b"ACGTACGT", b"ACGT"), 2);
        assert_eq!(count_occurrences(b"ACGTACGT", b"GTA"), 1);
        assert_eq!(count_occurrences(b"ACGT", b"TT"), 0);
    }

    #[test]
    fn occurrences_short_or_empty() {
        assert_eq!(count_occurrences(b"AC", b"ACG"), 0);
        assert_eq!(count_occurrences(b"", b"A"), 0);
        assert_eq!(count_occurrences(b"ACGT", b""), 5);
        assert_eq!(count_occurrences(b"", b""), 1);
        assert_eq!(count_occurrences(b"ACG", b"ACG"), 1);
    }

    #[test]
    fn new_table_holds_every_motif_at_zero() {
        let t = MotifCountTable::new(3);
        assert_eq!(t.len(), 64);
        assert_eq!(t.motif_len(), 3);
        assert_eq!(t.total(), 0);
        assert!(t.iter().all(|(_, c)| c == 0));
        assert_eq!(t.get("ACG"), Some(0));
        assert_eq!(t.get("ACGT"), None);
    }

    #[test]
    fn counts_across_lines() {
        let data = "AAAC\nCAAA\nGT\n";
        let t = count_motifs_in_reader(Cursor::new(data), 2).unwrap();
        assert_eq!(t.get("AA"), Some(4));
        assert_eq!(t.get("AC"), Some(1));
        assert_eq!(t.get("CA"), Some(1));
        assert_eq!(t.get("GT"), Some(1));
        // 跨行不拼接
        assert_eq!(t.get("CC"), Some(0));
        assert_eq!(t.total(), 7);
    }

    #[test]
    fn crlf_lines_do_not_leak_terminators() {
        let t = count_motifs_in_reader(Cursor::new("ACGT\r\nACGT\r\n"), 4).unwrap();
        assert_eq!(t.get("ACGT"), Some(2));
        assert_eq!(t.total(), 2);
    }

    #[test]
    fn key_set_is_exactly_the_universe() {
        let data = "ACGTTGCAAC\nNNNACG\n";
        for s in 0..=4 {
            let t = count_motifs_in_reader(Cursor::new(data), s).unwrap();
            let keys: Vec<&str> = t.iter().map(|(m, _)| m).collect();
            let universe = enumerate_motifs(s);
            assert_eq!(keys, universe, "s={}", s);
        }
    }

    #[test]
    fn total_matches_window_count() {
        // 纯 ACGT 行中，每个长度为 s 的窗口恰好命中一个 motif
        let data = "ACGTTGCAAC\nGGGT\nA\n";
        let t = count_motifs_in_reader(Cursor::new(data), 3).unwrap();
        assert_eq!(t.total(), (10 - 2) + (4 - 2));

        // s = 0 时每行有 L + 1 个空窗口
        let t = count_motifs_in_reader(Cursor::new(data), 0).unwrap();
        assert_eq!(t.get(""), Some(11 + 5 + 2));
    }

    #[test]
    fn empty_motif_counts_every_window() {
        let t = count_motifs_in_reader(Cursor::new("ACGT\nAC\n"), 0).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(""), Some(8));
    }

    #[test]
    fn empty_corpus_gives_zero_table() {
        let t = count_motifs_in_reader(Cursor::new(""), 2).unwrap();
        assert_eq!(t, MotifCountTable::new(2));
    }

    #[test]
    fn count_file_is_idempotent() {
        let f = corpus_file("ACGTACGTAA\nTTTTGGGCCA\nACACACACAC\n");
        let a = count_motifs(f.path(), 3).unwrap();
        let b = count_motifs(f.path(), 3).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get("ACA"), Some(4));
        assert_eq!(a.get("CAC"), Some(4));
    }

    #[test]
    fn missing_corpus_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = count_motifs(dir.path().join("nucleotide_database.txt"), 6).unwrap_err();
        let io = err.downcast_ref::<std::io::Error>().expect("io error at the root");
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn table_from_pairs() {
        let t: MotifCountTable = vec![("AAT".to_string(), 5), ("GGC".to_string(), 5)]
            .into_iter()
            .collect();
        assert_eq!(t.motif_len(), 3);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("GGC"), Some(5));
    }
}
