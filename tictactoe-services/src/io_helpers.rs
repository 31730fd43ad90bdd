// SPDX-License-Identifier: MIT OR Apache-2.0

//! Async I/O helpers using smol::unblock for non-blocking file operations

use std::io;
use std::path::Path;

/// Read the entire contents of a file into a string asynchronously.
///
/// This function uses `smol::unblock` to execute `std::fs::read_to_string` without blocking
/// the async runtime.
pub async fn read_file_to_string(path: &Path) -> io::Result<String> {
    let path = path.to_path_buf();
    smol::unblock(move || std::fs::read_to_string(path)).await
}

/// Write a string to a file asynchronously, creating missing parent directories.
pub async fn write_file(path: &Path, contents: String) -> io::Result<()> {
    let path = path.to_path_buf();
    smol::unblock(move || {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    })
    .await
}
