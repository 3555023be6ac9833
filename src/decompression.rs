use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Chain, Cursor, Read};
use std::path::Path;

type ChainReader = Chain<Cursor<Vec<u8>>, File>;

const GZIP_MAGIC: [u8; 3] = [0x1F, 0x8B, 0x08];
const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression detected from a file's leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Zstd,
    Plain,
}

impl Compression {
    pub fn detect(head: &[u8]) -> Self {
        if head.starts_with(&GZIP_MAGIC) {
            Compression::Gzip
        } else if head.starts_with(&ZSTD_MAGIC) {
            Compression::Zstd
        } else {
            Compression::Plain
        }
    }
}

/// Buffered reader over a log file that transparently decompresses gzip and
/// zstd content.
pub enum DecompressionReader {
    Gzip(BufReader<MultiGzDecoder<ChainReader>>),
    Zstd(BufReader<zstd::Decoder<'static, BufReader<ChainReader>>>),
    Plain(BufReader<ChainReader>),
}

impl std::fmt::Debug for DecompressionReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DecompressionReader::{:?}", self.compression())
    }
}

impl DecompressionReader {
    /// Open `path` and pick a decoder from its magic bytes.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();

        if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "ZIP archives are not supported; only gzip and zstd files are decompressed",
            ));
        }

        let mut file = File::open(path)?;
        let mut head = [0u8; 4];
        let n = read_head(&mut file, &mut head)?;

        // Put the sniffed bytes back in front of the stream
        let chained = Cursor::new(head[..n].to_vec()).chain(file);

        Ok(match Compression::detect(&head[..n]) {
            Compression::Gzip => {
                DecompressionReader::Gzip(BufReader::new(MultiGzDecoder::new(chained)))
            }
            Compression::Zstd => {
                DecompressionReader::Zstd(BufReader::new(zstd::Decoder::new(chained)?))
            }
            Compression::Plain => DecompressionReader::Plain(BufReader::new(chained)),
        })
    }

    pub fn compression(&self) -> Compression {
        match self {
            DecompressionReader::Gzip(_) => Compression::Gzip,
            DecompressionReader::Zstd(_) => Compression::Zstd,
            DecompressionReader::Plain(_) => Compression::Plain,
        }
    }
}

/// Fill as much of `head` as the file provides; short files are fine.
fn read_head(file: &mut File, head: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < head.len() {
        match file.read(&mut head[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

impl BufRead for DecompressionReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            DecompressionReader::Gzip(reader) => reader.fill_buf(),
            DecompressionReader::Zstd(reader) => reader.fill_buf(),
            DecompressionReader::Plain(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            DecompressionReader::Gzip(reader) => reader.consume(amt),
            DecompressionReader::Zstd(reader) => reader.consume(amt),
            DecompressionReader::Plain(reader) => reader.consume(amt),
        }
    }
}

impl Read for DecompressionReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            DecompressionReader::Gzip(reader) => reader.read(buf),
            DecompressionReader::Zstd(reader) => reader.read(buf),
            DecompressionReader::Plain(reader) => reader.read(buf),
        }
    }
}
