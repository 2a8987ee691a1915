use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// 逐行读取序列库：每行一条序列，去掉行尾 `\n` / `\r\n`。
pub struct CorpusReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
}

impl<R: BufRead> CorpusReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
        }
    }

    /// 返回下一条序列（借用内部缓冲区），文件结束时返回 `None`。
    pub fn next_sequence(&mut self) -> Result<Option<&[u8]>> {
        if self.done {
            return Ok(None);
        }
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        if n == 0 {
            self.done = true;
            return Ok(None);
        }
        let line = self.buf.trim_end_matches(['\n', '\r']);
        Ok(Some(line.as_bytes()))
    }
}

impl CorpusReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let fh = File::open(path)
            .with_context(|| format!("cannot open corpus '{}'", path.display()))?;
        Ok(Self::new(BufReader::new(fh)))
    }
}

/// 序列库写出端，一次写一条，带缓冲。
pub struct CorpusWriter<W: Write> {
    writer: BufWriter<W>,
    written: u64,
}

impl<W: Write> CorpusWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            written: 0,
        }
    }

    pub fn write_sequence(&mut self, seq: &[u8]) -> Result<()> {
        self.writer.write_all(seq)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// 刷新缓冲并交回内部 writer。
    pub fn finish(self) -> Result<W> {
        let inner = self.writer.into_inner().map_err(std::io::IntoInnerError::into_error)?;
        Ok(inner)
    }
}

impl CorpusWriter<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let fh = File::create(path)
            .with_context(|| format!("cannot create corpus '{}'", path.display()))?;
        Ok(Self::new(fh))
    }
}
