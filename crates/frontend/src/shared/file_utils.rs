//! Helpers for browser file handles

use contracts::domain::a001_chat_upload::aggregate::UploadedFile;
use web_sys::{File, FileList};

/// Collect a `FileList` into owned handles, preserving selection order
pub fn collect_files(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Name and size of a file handle as shown in the files list
pub fn describe(file: &File) -> UploadedFile {
    UploadedFile::new(file.name(), file.size() as u64)
}
