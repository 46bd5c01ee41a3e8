use std::path::PathBuf;

/// Resolve the directory downloads are saved into: the explicit flag if
/// given, else the user's download directory, else the current directory.
pub fn resolve_output_dir(output: Option<PathBuf>) -> PathBuf {
    output
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Convert a 1-based result index into a 0-based list position, rejecting
/// out-of-range values with a readable error.
pub fn checked_index(index: usize, len: usize) -> Result<usize, Box<dyn std::error::Error>> {
    if index == 0 || index > len {
        return Err(format!("result index {index} is out of range (valid: 1-{len})").into());
    }
    Ok(index - 1)
}
