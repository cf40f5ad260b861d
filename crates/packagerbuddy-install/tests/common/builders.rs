//! Archive builders for extraction and install tests
//!
//! Builds archives in memory so tests can serve them from a fake fetcher,
//! a wiremock server, or write them straight into a download directory.

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use super::constants::*;

#[derive(Debug, Clone)]
struct Entry {
    path: String,
    content: Vec<u8>,
    mode: u32,
}

/// Builder for archives with a fixed set of file entries
#[derive(Debug, Clone, Default)]
pub struct ArchiveBuilder {
    entries: Vec<Entry>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular file
    pub fn file(mut self, path: &str, content: &[u8]) -> Self {
        self.entries.push(Entry {
            path: path.to_string(),
            content: content.to_vec(),
            mode: 0o644,
        });
        self
    }

    /// Add an executable file
    pub fn executable(mut self, path: &str, content: &[u8]) -> Self {
        self.entries.push(Entry {
            path: path.to_string(),
            content: content.to_vec(),
            mode: 0o755,
        });
        self
    }

    pub fn tar_bytes(&self) -> Vec<u8> {
        self.write_tar(Vec::new())
    }

    pub fn tar_gz_bytes(&self) -> Vec<u8> {
        let encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        self.write_tar(encoder).finish().unwrap()
    }

    pub fn tar_bz2_bytes(&self) -> Vec<u8> {
        let encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
        self.write_tar(encoder).finish().unwrap()
    }

    pub fn zip_bytes(&self) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for entry in &self.entries {
            let options = zip::write::SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Deflated)
                .unix_permissions(entry.mode);
            writer.start_file(entry.path.as_str(), options).unwrap();
            writer.write_all(&entry.content).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    /// Archive bytes in the format named by the file name suffix
    pub fn bytes_for(&self, file_name: &str) -> Vec<u8> {
        if file_name.ends_with(".zip") {
            self.zip_bytes()
        } else if file_name.ends_with(".tar.gz") || file_name.ends_with(".tgz") {
            self.tar_gz_bytes()
        } else if file_name.ends_with(".tar.bz2") || file_name.ends_with(".tar.bz") {
            self.tar_bz2_bytes()
        } else {
            self.tar_bytes()
        }
    }

    /// Write the archive into `dir` as `file_name`
    pub fn write_to(&self, dir: &Path, file_name: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(file_name);
        fs::write(&path, self.bytes_for(file_name)).unwrap();
        path
    }

    fn write_tar<W: Write>(&self, sink: W) -> W {
        let mut builder = tar::Builder::new(sink);
        for entry in &self.entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(entry.content.len() as u64);
            header.set_mode(entry.mode);
            header.set_cksum();
            builder
                .append_data(&mut header, &entry.path, entry.content.as_slice())
                .unwrap();
        }
        builder.into_inner().unwrap()
    }
}

/// Archive whose single root directory is named after the release
pub fn self_named_archive(software: &str, version: &str) -> ArchiveBuilder {
    let root = format!("{}-{}", software, version);
    ArchiveBuilder::new()
        .executable(&format!("{}/bin/{}", root, software), FOO_BINARY)
        .file(&format!("{}/README", root), README)
}

/// Archive with several top-level entries
pub fn multi_root_archive() -> ArchiveBuilder {
    ArchiveBuilder::new()
        .executable("bin/foo", FOO_BINARY)
        .file("README", README)
}
